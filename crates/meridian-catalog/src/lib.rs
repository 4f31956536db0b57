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

//! Static catalog data for the Meridian site: the locale registry and the
//! compatibility graph linking solutions, industries, and markets.
//!
//! Layout: `locale.rs` (locale registry), `tables.rs` (declarative identifier
//! and edge tables), `graph.rs` (validated `CatalogGraph`).

pub mod error;
pub mod graph;
pub mod locale;
mod tables;

pub use error::{CatalogError, CatalogResult};
pub use graph::CatalogGraph;
pub use locale::Locale;
