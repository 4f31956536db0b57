//! Error types for manifest generation.

use std::io;
use std::path::PathBuf;

use meridian_content::DictionaryError;
use thiserror::Error;

/// Errors raised while enumerating paths or writing manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// A dictionary failed to load beyond recovery during enumeration.
    #[error("dictionary unavailable during enumeration")]
    Dictionary(#[from] DictionaryError),
    /// Writing a manifest file failed.
    #[error("failed to write manifest")]
    Io {
        /// Target path of the manifest file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// Serializing a manifest failed.
    #[error("failed to serialize manifest")]
    Serialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias for manifest results.
pub type ManifestResult<T> = Result<T, ManifestError>;
