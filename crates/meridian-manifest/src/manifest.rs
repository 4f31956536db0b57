//! Serializable manifests and the publish-step writer.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use meridian_content::ContentResolver;

use crate::enumerate::PathEnumerator;
use crate::error::{ManifestError, ManifestResult};

/// A dated manifest of one path kind.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest<T> {
    /// Path kind, one of `solutions`, `industries` or `pages`.
    pub kind: &'static str,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// The enumerated entries.
    pub entries: Vec<T>,
}

impl<T: Serialize> Manifest<T> {
    fn new(kind: &'static str, entries: Vec<T>) -> Self {
        Self {
            kind,
            generated_at: Utc::now(),
            entries,
        }
    }

    fn write(&self, dir: &Path) -> ManifestResult<usize> {
        let body = serde_json::to_vec_pretty(self)
            .map_err(|source| ManifestError::Serialize { source })?;
        let path = dir.join(format!("{}.json", self.kind));
        fs::write(&path, body).map_err(|source| ManifestError::Io {
            path: path.clone(),
            source,
        })?;
        info!(kind = self.kind, entries = self.entries.len(), path = %path.display(), "manifest written");
        Ok(self.entries.len())
    }
}

/// Entry counts of one `write_manifests` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ManifestSummary {
    /// Entries in `solutions.json`.
    pub solutions: usize,
    /// Entries in `industries.json`.
    pub industries: usize,
    /// Entries in `pages.json`.
    pub pages: usize,
}

/// Enumerate every path kind and write `solutions.json`, `industries.json`
/// and `pages.json` into `dir`.
///
/// # Errors
///
/// Fails when enumeration hits an unrecoverable dictionary error or when a
/// manifest cannot be serialized or written.
pub fn write_manifests(resolver: &ContentResolver, dir: &Path) -> ManifestResult<ManifestSummary> {
    let enumerator = PathEnumerator::new(resolver);
    let solutions = Manifest::new("solutions", enumerator.solution_paths()?).write(dir)?;
    let industries = Manifest::new("industries", enumerator.industry_paths()?).write(dir)?;
    let pages = Manifest::new("pages", enumerator.page_paths()?).write(dir)?;
    Ok(ManifestSummary {
        solutions,
        industries,
        pages,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use meridian_catalog::{CatalogGraph, Locale};

    use super::*;

    #[test]
    fn writes_all_three_manifests_with_matching_counts() {
        let resolver = ContentResolver::new(Arc::new(CatalogGraph::new().expect("catalog")));
        let dir = tempfile::tempdir().expect("tempdir");

        let summary = write_manifests(&resolver, dir.path()).expect("manifests written");
        assert_eq!(summary.solutions, Locale::ALL.len() * 25);
        assert_eq!(summary.industries, Locale::ALL.len() * 19);

        let enumerator = PathEnumerator::new(&resolver);
        let expected_pages = enumerator.page_paths().expect("page paths").len();
        assert_eq!(summary.pages, expected_pages);

        for kind in ["solutions", "industries", "pages"] {
            let raw = std::fs::read_to_string(dir.path().join(format!("{kind}.json")))
                .expect("manifest file exists");
            let parsed: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
            assert_eq!(parsed["kind"], kind);
            assert!(parsed["entries"].as_array().is_some_and(|e| !e.is_empty()));
        }
    }

    #[test]
    fn missing_directory_surfaces_an_io_error() {
        let resolver = ContentResolver::new(Arc::new(CatalogGraph::new().expect("catalog")));
        let err = write_manifests(&resolver, Path::new("/nonexistent/meridian-manifests"))
            .expect_err("directory does not exist");
        assert!(matches!(err, ManifestError::Io { .. }));
    }
}
