//! Error types for catalog construction and validation.

use thiserror::Error;

/// Errors raised while building or validating the catalog graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// An edge table referenced a solution that is not declared.
    #[error("edge references unknown solution")]
    UnknownSolution {
        /// The undeclared solution identifier.
        solution: String,
    },
    /// An edge table referenced an industry that is not declared.
    #[error("edge references unknown industry")]
    UnknownIndustry {
        /// The undeclared industry identifier.
        industry: String,
    },
    /// A compatibility edge is declared in one direction only.
    #[error("compatibility edge is not bidirectionally consistent")]
    AsymmetricEdge {
        /// Solution side of the edge.
        solution: String,
        /// Industry side of the edge.
        industry: String,
    },
    /// An identifier appears more than once in its declaration table.
    #[error("duplicate identifier in catalog tables")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
