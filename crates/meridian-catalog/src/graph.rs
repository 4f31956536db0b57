//! Validated compatibility graph over solutions, industries, and markets.
//!
//! # Design
//!
//! - The declarative tables in `tables.rs` carry the edges in both directions;
//!   construction fails unless the two tables are exact mutual inverses, so a
//!   one-sided edit can never reach the path enumerator or the resolver.
//! - Markets are an independent dimension and are never graph-constrained.

use std::collections::{HashMap, HashSet};

use crate::error::{CatalogError, CatalogResult};
use crate::tables::{INDUSTRIES, INDUSTRY_SOLUTIONS, MARKETS, SOLUTION_INDUSTRIES, SOLUTIONS};

type EdgeTable = &'static [(&'static str, &'static [&'static str])];

/// Immutable compatibility graph, built once at process start.
#[derive(Debug)]
pub struct CatalogGraph {
    forward: HashMap<&'static str, &'static [&'static str]>,
    reverse: HashMap<&'static str, &'static [&'static str]>,
}

impl CatalogGraph {
    /// Build the graph from the static tables, validating every edge.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when an identifier is duplicated, an edge
    /// names an undeclared identifier, or an edge is declared in only one
    /// direction. Any of these must halt publishing.
    pub fn new() -> CatalogResult<Self> {
        Self::from_tables(SOLUTION_INDUSTRIES, INDUSTRY_SOLUTIONS)
    }

    pub(crate) fn from_tables(
        solution_edges: EdgeTable,
        industry_edges: EdgeTable,
    ) -> CatalogResult<Self> {
        check_unique(SOLUTIONS)?;
        check_unique(INDUSTRIES)?;
        check_unique(MARKETS)?;

        let solutions: HashSet<&str> = SOLUTIONS.iter().copied().collect();
        let industries: HashSet<&str> = INDUSTRIES.iter().copied().collect();

        let mut forward = HashMap::with_capacity(solution_edges.len());
        for (solution, served) in solution_edges {
            if !solutions.contains(solution) {
                return Err(CatalogError::UnknownSolution {
                    solution: (*solution).to_string(),
                });
            }
            for industry in *served {
                if !industries.contains(industry) {
                    return Err(CatalogError::UnknownIndustry {
                        industry: (*industry).to_string(),
                    });
                }
            }
            forward.insert(*solution, *served);
        }

        let mut reverse = HashMap::with_capacity(industry_edges.len());
        for (industry, offered) in industry_edges {
            if !industries.contains(industry) {
                return Err(CatalogError::UnknownIndustry {
                    industry: (*industry).to_string(),
                });
            }
            for solution in *offered {
                if !solutions.contains(solution) {
                    return Err(CatalogError::UnknownSolution {
                        solution: (*solution).to_string(),
                    });
                }
            }
            reverse.insert(*industry, *offered);
        }

        let graph = Self { forward, reverse };
        graph.check_symmetry()?;
        Ok(graph)
    }

    /// Every edge must appear in both tables.
    fn check_symmetry(&self) -> CatalogResult<()> {
        for (solution, served) in &self.forward {
            for industry in *served {
                if !self.reverse_contains(industry, solution) {
                    return Err(CatalogError::AsymmetricEdge {
                        solution: (*solution).to_string(),
                        industry: (*industry).to_string(),
                    });
                }
            }
        }
        for (industry, offered) in &self.reverse {
            for solution in *offered {
                if !self.forward_contains(solution, industry) {
                    return Err(CatalogError::AsymmetricEdge {
                        solution: (*solution).to_string(),
                        industry: (*industry).to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn forward_contains(&self, solution: &str, industry: &str) -> bool {
        self.forward
            .get(solution)
            .is_some_and(|served| served.contains(&industry))
    }

    fn reverse_contains(&self, industry: &str, solution: &str) -> bool {
        self.reverse
            .get(industry)
            .is_some_and(|offered| offered.contains(&solution))
    }

    /// Solutions offered within an industry, in solution declaration order.
    /// Empty for unknown industries.
    #[must_use]
    pub fn solutions_for_industry(&self, industry: &str) -> &'static [&'static str] {
        self.reverse.get(industry).copied().unwrap_or(&[])
    }

    /// Industries served by a solution, in edge declaration order. Empty for
    /// unknown solutions.
    #[must_use]
    pub fn industries_for_solution(&self, solution: &str) -> &'static [&'static str] {
        self.forward.get(solution).copied().unwrap_or(&[])
    }

    /// The single compatibility predicate shared by path enumeration and
    /// request-time resolution. True iff the edge is present in both
    /// directions.
    #[must_use]
    pub fn is_compatible(&self, solution: &str, industry: &str) -> bool {
        self.forward_contains(solution, industry) && self.reverse_contains(industry, solution)
    }

    /// Solution identifiers in declaration order.
    #[must_use]
    pub const fn solutions(&self) -> &'static [&'static str] {
        SOLUTIONS
    }

    /// Industry identifiers in declaration order.
    #[must_use]
    pub const fn industries(&self) -> &'static [&'static str] {
        INDUSTRIES
    }

    /// Market identifiers in declaration order. Every market pairs with every
    /// valid solution/industry edge.
    #[must_use]
    pub const fn markets(&self) -> &'static [&'static str] {
        MARKETS
    }
}

fn check_unique(ids: &'static [&'static str]) -> CatalogResult<()> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(*id) {
            return Err(CatalogError::DuplicateId {
                id: (*id).to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_tables_validate() {
        let graph = CatalogGraph::new().expect("catalog tables are consistent");
        assert_eq!(graph.solutions().len(), 25);
        assert_eq!(graph.industries().len(), 19);
        assert_eq!(graph.markets().len(), 12);
    }

    #[test]
    fn compatibility_requires_both_directions() {
        let graph = CatalogGraph::new().expect("catalog");
        assert!(graph.is_compatible("orderlyai", "restaurants"));
        assert!(!graph.is_compatible("orderlyai", "hospitality"));
        assert!(!graph.is_compatible("unknown", "restaurants"));
        assert!(!graph.is_compatible("orderlyai", "unknown"));
    }

    #[test]
    fn edge_lookups_are_empty_for_unknown_ids() {
        let graph = CatalogGraph::new().expect("catalog");
        assert!(graph.solutions_for_industry("no-such-industry").is_empty());
        assert!(graph.industries_for_solution("no-such-solution").is_empty());
    }

    #[test]
    fn inverse_agrees_with_forward_for_every_pair() {
        let graph = CatalogGraph::new().expect("catalog");
        for solution in graph.solutions() {
            for industry in graph.industries() {
                let forward = graph.industries_for_solution(solution).contains(industry);
                let reverse = graph.solutions_for_industry(industry).contains(solution);
                assert_eq!(forward, reverse, "{solution}/{industry}");
            }
        }
    }

    #[test]
    fn asymmetric_edge_is_rejected() {
        // orderlyai -> hospitality has no mirror in the industry table.
        const BAD_FORWARD: &[(&str, &[&str])] = &[("orderlyai", &["hospitality"])];
        const EMPTY_REVERSE: &[(&str, &[&str])] = &[("hospitality", &[])];
        let err = CatalogGraph::from_tables(BAD_FORWARD, EMPTY_REVERSE)
            .expect_err("asymmetric edge must fail validation");
        assert_eq!(
            err,
            CatalogError::AsymmetricEdge {
                solution: "orderlyai".to_string(),
                industry: "hospitality".to_string(),
            }
        );
    }

    #[test]
    fn unknown_endpoint_is_rejected() {
        const BAD: &[(&str, &[&str])] = &[("orderlyai", &["zeppelin-racing"])];
        let err = CatalogGraph::from_tables(BAD, &[]).expect_err("unknown industry must fail");
        assert_eq!(
            err,
            CatalogError::UnknownIndustry {
                industry: "zeppelin-racing".to_string(),
            }
        );
    }
}
