//! Parawis - Indonesian tourism destination showcase
//!
//! This library provides an immutable in-memory catalog of tourism
//! destinations, a text/category query service over it, and the read-only
//! HTTP API that exposes both.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod web;

// Re-export core types for public API
pub use catalog::Catalog;
pub use config::ParawisConfig;
pub use error::ParawisError;
pub use models::Destination;
pub use query::{ALL_CATEGORIES, DestinationQuery};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, ParawisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
