//! Errors raised by hierarchy construction and traversal queries

/// Result alias used across the taxonomy module
pub type Result<T> = std::result::Result<T, TaxonomyError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
    #[error("Unknown taxon: {0}")]
    UnknownTaxon(String),

    #[error("No common ancestor for '{a}' and '{b}': hierarchy has more than one root")]
    DisjointHierarchy { a: String, b: String },

    #[error("Cannot compute a common ancestor of an empty taxon list")]
    EmptyInput,

    #[error("Taxon '{child}' already has parent '{existing}', cannot also attach it to '{conflicting}'")]
    ConflictingParent {
        child: String,
        existing: String,
        conflicting: String,
    },

    #[error("Ancestor walk from '{taxon}' did not reach a root within {limit} steps")]
    DepthExceeded { taxon: String, limit: usize },

    #[error("Recursive fold over {count} taxa exceeds the recursion limit of {limit}")]
    TooManyTaxa { count: usize, limit: usize },
}
