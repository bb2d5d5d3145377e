//! Core types and traits for the linkhop URL shortener.
//!
//! This crate provides the shortcut model, the storage contract and the
//! data accessor contract shared by the redirector, the GraphQL schema and
//! the HTTP gateway.

pub mod accessor;
pub mod error;
pub mod href;
pub mod repository;
pub mod shortcode;
pub mod shortcut;

pub use accessor::{CreateOutcome, DataAccessor};
pub use error::{ShortenerError, StorageError};
pub use repository::{ReadRepository, Repository};
pub use shortcode::ShortCode;
pub use shortcut::{Resolution, Shortcut};
