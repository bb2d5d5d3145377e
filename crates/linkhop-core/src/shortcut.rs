use crate::shortcode::ShortCode;
use serde::{Deserialize, Serialize};

/// A persisted mapping from a short code to a destination URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// The short code, also the store's primary key.
    pub code: ShortCode,
    /// The destination URL.
    pub href: String,
}

impl Shortcut {
    pub fn new(code: ShortCode, href: impl Into<String>) -> Self {
        Self {
            code,
            href: href.into(),
        }
    }
}

/// Outcome of resolving a short code for a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The code maps to a usable destination URL.
    Found(String),
    /// No usable mapping exists for the code.
    NotFound,
}
