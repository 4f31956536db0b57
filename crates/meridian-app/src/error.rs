//! Application-level error type.
//!
//! # Design
//!
//! - Centralize bootstrap errors; startup either validates everything or
//!   refuses to serve.
//! - Keep error messages constant while carrying context fields for
//!   debugging.

use thiserror::Error;

use meridian_catalog::CatalogError;
use meridian_content::DictionaryError;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// The catalog tables failed validation.
    #[error("catalog validation failed")]
    Catalog {
        /// Source catalog error.
        #[source]
        source: CatalogError,
    },
    /// A content bundle failed to load beyond recovery.
    #[error("content bundle failed to load")]
    Content {
        /// Source dictionary error.
        #[source]
        source: DictionaryError,
    },
    /// A dictionary's cross-reference lists diverge from the catalog.
    #[error("dictionary content diverges from the catalog")]
    ContentDrift {
        /// Locale whose bundle diverges.
        locale: &'static str,
        /// Industry whose solution list does not match the catalog.
        industry: String,
    },
    /// The configured bind address could not be parsed.
    #[error("invalid bind address")]
    InvalidBindAddr {
        /// The offending value.
        value: String,
        /// Source parse error.
        #[source]
        source: std::net::AddrParseError,
    },
    /// Telemetry initialisation failed.
    #[error("telemetry initialisation failed")]
    Telemetry {
        /// Source telemetry error.
        #[source]
        source: anyhow::Error,
    },
    /// The API server failed to start or terminated unexpectedly.
    #[error("api server failed")]
    Api {
        /// Source server error.
        #[source]
        source: anyhow::Error,
    },
}
