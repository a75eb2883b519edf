//! Taxa — taxonomic hierarchies as immutable trees
//!
//! A hierarchy is built once from child→parent relationships and then
//! queried for ancestor chains, descendants and lowest common ancestors.

pub mod taxonomy;

pub use taxonomy::{
    AncestorChain, AncestorResolver, DescendantWalker, FoldStep, HierarchyStore, LcaEngine,
    Taxon, TaxonomyError, TraversalConfig,
};
