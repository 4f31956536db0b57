//! Request-time content resolution.
//!
//! # Design
//!
//! - `resolve` is a pure, synchronous function of its inputs and the immutable
//!   dictionary/catalog state: identical inputs always produce an identical
//!   view or an identical not-found classification. No retries.
//! - Checks run in a fixed order and short-circuit on the first failure:
//!   dictionary load (with the loader's one-step fallback), per-dimension key
//!   presence, then pairwise compatibility when both a solution and an
//!   industry are requested.
//! - The path enumerator validates candidate tuples through this same entry
//!   point, so enumeration and request-time validation cannot drift apart.

use std::sync::Arc;

use meridian_catalog::{CatalogGraph, Locale};

use crate::error::ResolveError;
use crate::loader;
use crate::schema::{Dictionary, IndustryContent, MarketContent, SolutionContent};

/// Zero or more requested dimension identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DimensionSelection<'a> {
    /// Requested solution identifier.
    pub solution: Option<&'a str>,
    /// Requested industry identifier.
    pub industry: Option<&'a str>,
    /// Requested market identifier.
    pub market: Option<&'a str>,
}

impl<'a> DimensionSelection<'a> {
    /// No dimensions: index and home pages.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            solution: None,
            industry: None,
            market: None,
        }
    }

    /// A single-solution selection.
    #[must_use]
    pub const fn solution(id: &'a str) -> Self {
        Self {
            solution: Some(id),
            industry: None,
            market: None,
        }
    }

    /// A single-industry selection.
    #[must_use]
    pub const fn industry(id: &'a str) -> Self {
        Self {
            solution: None,
            industry: Some(id),
            market: None,
        }
    }

    /// The full three-dimension selection.
    #[must_use]
    pub const fn combined(solution: &'a str, industry: &'a str, market: &'a str) -> Self {
        Self {
            solution: Some(solution),
            industry: Some(industry),
            market: Some(market),
        }
    }
}

/// A dictionary entry selected by the request, keyed by its identifier.
#[derive(Debug, PartialEq)]
pub struct Selected<T: 'static> {
    /// The identifier as it appears in the dictionary.
    pub id: &'static str,
    /// The localized content.
    pub content: &'static T,
}

// Manual impls: the fields are a `&'static str` and a `&'static T`, both
// copyable for any `T`, while a derive would demand `T: Copy`.
#[allow(clippy::expl_impl_clone_on_copy)]
impl<T> Clone for Selected<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Selected<T> {}

/// The composed, request-scoped result of a successful resolution. Borrowed
/// entirely from the cached dictionary; discarded after the response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedView {
    /// Locale the request asked for.
    pub locale: Locale,
    /// Whether the default locale's bundle was substituted.
    pub fallback: bool,
    /// The full dictionary for shared/common sections.
    pub dictionary: &'static Dictionary,
    /// Selected solution, when the path carries one.
    pub solution: Option<Selected<SolutionContent>>,
    /// Selected industry, when the path carries one.
    pub industry: Option<Selected<IndustryContent>>,
    /// Selected market, when the path carries one.
    pub market: Option<Selected<MarketContent>>,
}

/// Validates dimension combinations against the catalog graph and composes
/// content views from the locale dictionaries.
#[derive(Debug, Clone)]
pub struct ContentResolver {
    catalog: Arc<CatalogGraph>,
}

impl ContentResolver {
    /// Wrap a validated catalog graph.
    #[must_use]
    pub const fn new(catalog: Arc<CatalogGraph>) -> Self {
        Self { catalog }
    }

    /// The catalog this resolver validates against.
    #[must_use]
    pub fn catalog(&self) -> &CatalogGraph {
        &self.catalog
    }

    /// Resolve a locale plus dimension selection into a content view.
    ///
    /// # Errors
    ///
    /// Returns a not-found [`ResolveError`] for unknown identifiers and
    /// incompatible combinations, or [`ResolveError::Dictionary`] when even
    /// the default bundle cannot be loaded.
    pub fn resolve(
        &self,
        locale: Locale,
        dims: &DimensionSelection<'_>,
    ) -> Result<ResolvedView, ResolveError> {
        let loaded = loader::load(locale)?;
        let dictionary = loaded.dictionary;

        let solution = dims
            .solution
            .map(|id| {
                dictionary
                    .solutions
                    .get_key_value(id)
                    .map(|(key, content)| Selected {
                        id: key.as_str(),
                        content,
                    })
                    .ok_or_else(|| ResolveError::UnknownSolution {
                        solution: id.to_string(),
                    })
            })
            .transpose()?;

        let industry = dims
            .industry
            .map(|id| {
                dictionary
                    .industries
                    .get_key_value(id)
                    .map(|(key, content)| Selected {
                        id: key.as_str(),
                        content,
                    })
                    .ok_or_else(|| ResolveError::UnknownIndustry {
                        industry: id.to_string(),
                    })
            })
            .transpose()?;

        let market = dims
            .market
            .map(|id| {
                dictionary
                    .markets
                    .get_key_value(id)
                    .map(|(key, content)| Selected {
                        id: key.as_str(),
                        content,
                    })
                    .ok_or_else(|| ResolveError::UnknownMarket {
                        market: id.to_string(),
                    })
            })
            .transpose()?;

        if let (Some(solution), Some(industry)) = (&solution, &industry)
            && !self.catalog.is_compatible(solution.id, industry.id)
        {
            return Err(ResolveError::IncompatibleCombination {
                solution: solution.id.to_string(),
                industry: industry.id.to_string(),
            });
        }

        Ok(ResolvedView {
            locale,
            fallback: loaded.fallback,
            dictionary,
            solution,
            industry,
            market,
        })
    }
}
