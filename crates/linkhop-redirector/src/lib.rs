//! Shortcut resolution for the redirect route.
//!
//! [`ShortcutResolver`] turns a path segment into a [`Resolution`]: either
//! the destination URL to redirect to, or an explicit not-found.
//!
//! # Example
//!
//! ```rust
//! use linkhop_core::{DataAccessor, Resolution, ShortCode};
//! use linkhop_redirector::ShortcutResolver;
//! use linkhop_shortener::ShortcutAccessor;
//! use linkhop_storage::InMemoryRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let accessor = ShortcutAccessor::new(InMemoryRepository::new());
//! accessor
//!     .create(ShortCode::new("abc")?, "https://example.com".to_string())
//!     .await?;
//!
//! let resolver = ShortcutResolver::new(accessor);
//! if let Resolution::Found(href) = resolver.resolve("abc").await? {
//!     println!("Redirect to: {}", href);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod redirector;
pub mod service;

pub use error::{RedirectorError, Result};
pub use linkhop_core::Resolution;
pub use redirector::Redirector;
pub use service::ShortcutResolver;
