//! Error types and handling for the Parawis service

use thiserror::Error;

/// Main error type for the Parawis service
#[derive(Error, Debug)]
pub enum ParawisError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Catalog construction or data-loading errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Requested destination id is absent from the catalog
    #[error("Destination {id} not found")]
    NotFound { id: u32 },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl ParawisError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new not-found error for the given destination id
    pub fn not_found(id: u32) -> Self {
        Self::NotFound { id }
    }

    /// Get a user-facing error message
    ///
    /// The not-found message is the Indonesian phrase the public API
    /// contract promises in its failure envelope.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            ParawisError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            ParawisError::Catalog { message } => {
                format!("Catalog data is invalid: {message}")
            }
            ParawisError::NotFound { .. } => "Destinasi tidak ditemukan".to_string(),
            ParawisError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = ParawisError::config("missing port");
        assert!(matches!(config_err, ParawisError::Config { .. }));

        let catalog_err = ParawisError::catalog("duplicate id");
        assert!(matches!(catalog_err, ParawisError::Catalog { .. }));

        let not_found = ParawisError::not_found(42);
        assert!(matches!(not_found, ParawisError::NotFound { id: 42 }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = ParawisError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let catalog_err = ParawisError::catalog("duplicate id 3");
        assert!(catalog_err.user_message().contains("duplicate id 3"));

        let not_found = ParawisError::not_found(999);
        assert_eq!(not_found.user_message(), "Destinasi tidak ditemukan");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let parawis_err: ParawisError = io_err.into();
        assert!(matches!(parawis_err, ParawisError::Io { .. }));
    }
}
