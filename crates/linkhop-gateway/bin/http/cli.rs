use clap::{Parser, ValueEnum};
use linkhop_storage::DEFAULT_KEY_PREFIX;
use linkhop_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "LINKHOP_GATEWAY_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "LINKHOP_STORAGE_BACKEND";
pub const REDIS_URL_ENV: &str = "LINKHOP_REDIS_URL";
pub const REDIS_KEY_PREFIX_ENV: &str = "LINKHOP_REDIS_KEY_PREFIX";
pub const LOG_FORMAT_ENV: &str = "LINKHOP_LOG_FORMAT";
pub const OTLP_ENDPOINT_ENV: &str = "LINKHOP_OTLP_ENDPOINT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "redis")]
    Redis,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "linkhop-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    /// Data store connection target, e.g. `redis://127.0.0.1:6379`.
    #[arg(long, env = REDIS_URL_ENV, required_if_eq("storage", "redis"))]
    pub redis_url: Option<String>,

    #[arg(long, env = REDIS_KEY_PREFIX_ENV, default_value = DEFAULT_KEY_PREFIX)]
    pub redis_key_prefix: String,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,

    /// OTLP/gRPC collector endpoint; spans are not exported when unset.
    #[arg(long, env = OTLP_ENDPOINT_ENV)]
    pub otlp_endpoint: Option<String>,
}
