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

//! Build-time enumeration of every valid static path.
//!
//! Layout: `enumerate.rs` (the path enumerator), `manifest.rs` (serializable
//! manifests and the publish-step writer).

pub mod enumerate;
pub mod error;
pub mod manifest;

pub use enumerate::{IndustryPath, PagePath, PathEnumerator, SolutionPath};
pub use error::{ManifestError, ManifestResult};
pub use manifest::{Manifest, ManifestSummary, write_manifests};
