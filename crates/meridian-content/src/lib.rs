#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Localized content bundles and the request-time content resolver.
//!
//! Layout: `schema.rs` (typed dictionary schema), `loader.rs` (bundle loading
//! with default-locale fallback and process-wide caching), `resolver.rs`
//! (dimension validation and view composition).

pub mod error;
pub mod loader;
pub mod resolver;
pub mod schema;

pub use error::{DictionaryError, ResolveError};
pub use loader::{LoadedDictionary, load, try_load};
pub use resolver::{ContentResolver, DimensionSelection, ResolvedView, Selected};
pub use schema::{
    ContactContent, Dictionary, HomeContent, IndustryContent, MarketContent, SolutionContent,
};
