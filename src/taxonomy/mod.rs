//! Taxonomy — hierarchy store, ancestor chains, descendant walks and LCA
//!
//! Data flows one way: [`HierarchyStore`] → [`AncestorResolver`] →
//! [`LcaEngine`]. The store is immutable once built, so shared references to
//! it can be queried from any number of threads without locking.

mod ancestry;
mod descendants;
mod error;
mod lca;
mod primates;
mod store;
mod taxon;

pub use ancestry::{AncestorChain, AncestorResolver, TraversalConfig, MAX_RECURSION_DEPTH};
pub use descendants::DescendantWalker;
pub use error::{Result, TaxonomyError};
pub use lca::{FoldStep, LcaEngine};
pub use primates::primates;
pub use store::HierarchyStore;
pub use taxon::Taxon;
