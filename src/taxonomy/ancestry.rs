//! Ancestry — self-inclusive ancestor chains up to the root
//!
//! Root detection asks the store whether a taxon has a parent; it never
//! compares labels against a hard-coded root name. Every walk is bounded, so
//! a corrupted (cyclic) parent relation surfaces as an error instead of an
//! endless loop.

use super::error::{Result, TaxonomyError};
use super::store::HierarchyStore;
use super::taxon::Taxon;
use log::{log_enabled, trace, Level};
use serde::{Deserialize, Serialize};

/// Call-stack bound for the recursive walks, independent of hierarchy size.
/// Deeper hierarchies must use the iterative forms.
pub const MAX_RECURSION_DEPTH: usize = 1024;

/// Bounds applied to ancestor walks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Maximum number of parent steps from a taxon to its root.
    /// `None` bounds walks by the number of taxa in the store.
    pub max_depth: Option<usize>,
}

/// Ordered path from a taxon (first) to its root (last).
/// Computed fresh per query; never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestorChain<'a> {
    taxa: Vec<&'a Taxon>,
}

impl<'a> AncestorChain<'a> {
    /// The taxon the chain was computed for
    pub fn taxon(&self) -> &'a Taxon {
        self.taxa[0]
    }

    pub fn root(&self) -> &'a Taxon {
        self.taxa[self.taxa.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.taxa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taxa.is_empty()
    }

    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, &'a Taxon>> {
        self.taxa.iter().copied()
    }

    pub fn contains(&self, taxon: &str) -> bool {
        self.taxa.iter().any(|t| t.as_str() == taxon)
    }

    pub fn labels(&self) -> Vec<&'a str> {
        self.taxa.iter().map(|t| t.as_str()).collect()
    }

    pub fn to_vec(&self) -> Vec<Taxon> {
        self.taxa.iter().map(|t| (*t).clone()).collect()
    }
}

/// Computes ancestor chains over a borrowed [`HierarchyStore`]
#[derive(Debug, Clone, Copy)]
pub struct AncestorResolver<'a> {
    store: &'a HierarchyStore,
    limit: usize,
}

impl<'a> AncestorResolver<'a> {
    pub fn new(store: &'a HierarchyStore) -> Self {
        Self::with_config(store, &TraversalConfig::default())
    }

    pub fn with_config(store: &'a HierarchyStore, config: &TraversalConfig) -> Self {
        let limit = match config.max_depth {
            Some(depth) => depth.min(store.len()),
            None => store.len(),
        };
        Self { store, limit }
    }

    pub fn store(&self) -> &'a HierarchyStore {
        self.store
    }

    /// Maximum number of parent steps a walk may take
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Ancestor chain of `taxon`, starting with `taxon` and ending at the root.
    ///
    /// Fails with [`TaxonomyError::UnknownTaxon`] before walking if `taxon` is
    /// not a member, and with [`TaxonomyError::DepthExceeded`] if the root is
    /// not reached within [`limit`](Self::limit) steps.
    pub fn ancestors(&self, taxon: &str) -> Result<AncestorChain<'a>> {
        let start = self.store.resolve(taxon)?;
        let mut taxa = vec![start];
        let mut current = start;
        while let Some(parent) = self.store.parent_of(current.as_str())? {
            if taxa.len() > self.limit {
                return Err(self.exceeded(start));
            }
            taxa.push(parent);
            current = parent;
        }
        Ok(AncestorChain { taxa })
    }

    /// Recursive form of [`ancestors`](Self::ancestors), same result.
    ///
    /// Recursion stops at the smaller of [`limit`](Self::limit) and
    /// [`MAX_RECURSION_DEPTH`]; a chain deeper than that fails with
    /// [`TaxonomyError::DepthExceeded`] even when it is valid.
    /// Each level logs an indented `trace!` line, four spaces per level, so
    /// `RUST_LOG=trace` shows how deep the recursion went.
    pub fn ancestors_recursive(&self, taxon: &str) -> Result<AncestorChain<'a>> {
        let start = self.store.resolve(taxon)?;
        let limit = self.limit.min(MAX_RECURSION_DEPTH);
        let mut taxa = Vec::new();
        self.walk_up(start, start, 0, limit, &mut taxa)?;
        Ok(AncestorChain { taxa })
    }

    fn walk_up(
        &self,
        start: &'a Taxon,
        taxon: &'a Taxon,
        depth: usize,
        limit: usize,
        acc: &mut Vec<&'a Taxon>,
    ) -> Result<()> {
        let spacer = if log_enabled!(Level::Trace) {
            " ".repeat(depth * 4)
        } else {
            String::new()
        };
        trace!("{}Getting the ancestors of {}", spacer, taxon);
        acc.push(taxon);
        match self.store.parent_of(taxon.as_str())? {
            None => {
                trace!("{}{} is a root, returning", spacer, taxon);
                Ok(())
            }
            Some(_) if depth >= limit => Err(TaxonomyError::DepthExceeded {
                taxon: start.to_string(),
                limit,
            }),
            Some(parent) => {
                trace!("{}The parent of {} is {}", spacer, taxon, parent);
                self.walk_up(start, parent, depth + 1, limit, acc)
            }
        }
    }

    /// Parent steps from `taxon` to its root (a root has depth 0)
    pub fn depth(&self, taxon: &str) -> Result<usize> {
        Ok(self.ancestors(taxon)?.len() - 1)
    }

    /// Whether `ancestor` lies on the chain of `taxon` (inclusive)
    pub fn is_ancestor(&self, ancestor: &str, taxon: &str) -> Result<bool> {
        self.store.resolve(ancestor)?;
        Ok(self.ancestors(taxon)?.contains(ancestor))
    }

    fn exceeded(&self, start: &Taxon) -> TaxonomyError {
        TaxonomyError::DepthExceeded {
            taxon: start.to_string(),
            limit: self.limit,
        }
    }
}
