//! Error types for dictionary loading and content resolution.

use meridian_catalog::Locale;
use thiserror::Error;

/// Errors raised while loading a locale's content bundle.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The embedded bundle for a locale failed schema validation.
    #[error("dictionary bundle failed to parse")]
    Parse {
        /// Locale whose bundle is malformed.
        locale: Locale,
        /// Underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },
    /// The default locale's bundle is itself unusable. Fatal: the process
    /// must not serve any page in this state.
    #[error("default locale bundle is unavailable")]
    DefaultUnavailable {
        /// The failure that took the default bundle down.
        #[source]
        source: Box<DictionaryError>,
    },
}

/// Reasons a requested dimension combination does not resolve.
///
/// Every variant except [`ResolveError::Dictionary`] is a routine not-found
/// outcome that maps to a 404; none of them are exceptional.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Requested solution has no entry in the dictionary.
    #[error("unknown solution")]
    UnknownSolution {
        /// Requested solution identifier.
        solution: String,
    },
    /// Requested industry has no entry in the dictionary.
    #[error("unknown industry")]
    UnknownIndustry {
        /// Requested industry identifier.
        industry: String,
    },
    /// Requested market has no entry in the dictionary.
    #[error("unknown market")]
    UnknownMarket {
        /// Requested market identifier.
        market: String,
    },
    /// Both ids exist individually but the compatibility edge is absent.
    #[error("solution and industry are not compatible")]
    IncompatibleCombination {
        /// Requested solution identifier.
        solution: String,
        /// Requested industry identifier.
        industry: String,
    },
    /// Dictionary loading failed beyond recovery.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

impl ResolveError {
    /// Whether the failure is a routine not-found rather than a fault.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        !matches!(self, Self::Dictionary(_))
    }
}
