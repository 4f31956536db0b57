//! The path enumerator: derives every publishable path from the catalog.
//!
//! # Design
//!
//! - Candidate tuples come from the catalog tables; acceptance is decided by
//!   running each candidate through the content resolver, the same predicate
//!   the request path uses. Enumeration and validation agreeing is therefore
//!   structural, not a convention to remember.
//! - Runs once per build. Resolver misses that are routine not-found results
//!   (for example a market a locale's bundle omits) drop the candidate; a
//!   fatal dictionary failure aborts enumeration.

use meridian_catalog::Locale;
use serde::Serialize;

use meridian_content::{ContentResolver, DimensionSelection, ResolveError};

use crate::error::ManifestResult;

/// One publishable `(locale, solution)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SolutionPath {
    /// Locale segment.
    pub locale: Locale,
    /// Solution segment.
    pub solution: &'static str,
}

/// One publishable `(locale, industry)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IndustryPath {
    /// Locale segment.
    pub locale: Locale,
    /// Industry segment.
    pub industry: &'static str,
}

/// One publishable `(locale, solution, industry, market)` tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PagePath {
    /// Locale segment.
    pub locale: Locale,
    /// Solution segment.
    pub solution: &'static str,
    /// Industry segment.
    pub industry: &'static str,
    /// Market segment.
    pub market: &'static str,
}

/// Enumerates the full set of valid static paths.
#[derive(Debug)]
pub struct PathEnumerator<'a> {
    resolver: &'a ContentResolver,
}

impl<'a> PathEnumerator<'a> {
    /// Enumerate against the resolver the site will serve with.
    #[must_use]
    pub const fn new(resolver: &'a ContentResolver) -> Self {
        Self { resolver }
    }

    /// All `(locale, solution)` tuples.
    ///
    /// # Errors
    ///
    /// Propagates fatal dictionary failures.
    pub fn solution_paths(&self) -> ManifestResult<Vec<SolutionPath>> {
        let mut paths = Vec::new();
        for locale in Locale::ALL {
            for solution in self.resolver.catalog().solutions() {
                if self.accepts(*locale, &DimensionSelection::solution(solution))? {
                    paths.push(SolutionPath {
                        locale: *locale,
                        solution,
                    });
                }
            }
        }
        Ok(paths)
    }

    /// All `(locale, industry)` tuples.
    ///
    /// # Errors
    ///
    /// Propagates fatal dictionary failures.
    pub fn industry_paths(&self) -> ManifestResult<Vec<IndustryPath>> {
        let mut paths = Vec::new();
        for locale in Locale::ALL {
            for industry in self.resolver.catalog().industries() {
                if self.accepts(*locale, &DimensionSelection::industry(industry))? {
                    paths.push(IndustryPath {
                        locale: *locale,
                        industry,
                    });
                }
            }
        }
        Ok(paths)
    }

    /// All `(locale, solution, industry, market)` tuples: the cross product
    /// filtered by the compatibility predicate and per-locale market
    /// presence.
    ///
    /// # Errors
    ///
    /// Propagates fatal dictionary failures.
    pub fn page_paths(&self) -> ManifestResult<Vec<PagePath>> {
        let catalog = self.resolver.catalog();
        let mut paths = Vec::new();
        for locale in Locale::ALL {
            for solution in catalog.solutions() {
                for industry in catalog.industries_for_solution(solution) {
                    for market in catalog.markets() {
                        let dims = DimensionSelection::combined(solution, industry, market);
                        if self.accepts(*locale, &dims)? {
                            paths.push(PagePath {
                                locale: *locale,
                                solution,
                                industry,
                                market,
                            });
                        }
                    }
                }
            }
        }
        Ok(paths)
    }

    fn accepts(&self, locale: Locale, dims: &DimensionSelection<'_>) -> ManifestResult<bool> {
        match self.resolver.resolve(locale, dims) {
            Ok(_) => Ok(true),
            Err(err) if err.is_not_found() => Ok(false),
            Err(ResolveError::Dictionary(err)) => Err(err.into()),
            // is_not_found covers every non-dictionary variant.
            Err(_) => Ok(false),
        }
    }
}
