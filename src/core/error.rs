use thiserror::Error;

/// Core error types for doclib
#[derive(Debug, Error)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Library catalog operation failed
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::core::catalog::CatalogError),

    /// Input validation failed
    #[error("Validation error in {field}: {message}")]
    Validation { field: String, message: String },
}

impl Error {
    /// Short hint printed under the error by the CLI, if one applies.
    pub fn hint(&self) -> Option<&'static str> {
        use crate::core::catalog::CatalogError;
        match self {
            Error::Catalog(CatalogError::NotFound(_)) => {
                Some("Run `doclib list` to see available libraries")
            }
            Error::Catalog(CatalogError::InvalidName(_)) => {
                Some("Library names may contain only a-z, 0-9, _ and -")
            }
            Error::Catalog(CatalogError::TooLarge { .. }) => {
                Some("Split the library into several smaller files")
            }
            Error::Serialization(_) | Error::Catalog(CatalogError::Serialization(_)) => {
                Some("Check the library file is valid JSON with a `sections` array")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
