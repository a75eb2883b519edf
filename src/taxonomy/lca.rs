//! Lowest common ancestor — pairwise scan and left fold over many taxa
//!
//! For a pair, the chain of the first taxon is collected and the chain of the
//! second is scanned self-first. The first hit is the lowest common ancestor:
//! scanning root-first would only find *a* common ancestor (the root).

use super::ancestry::{AncestorResolver, MAX_RECURSION_DEPTH};
use super::error::{Result, TaxonomyError};
use super::store::HierarchyStore;
use super::taxon::Taxon;
use log::debug;
use serde::Serialize;
use std::collections::HashSet;

/// One step of the left fold performed by [`LcaEngine::lca_of_set`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldStep {
    /// Running result before this step
    pub left: Taxon,
    /// Next input taxon
    pub right: Taxon,
    pub lca: Taxon,
}

#[derive(Debug, Clone, Copy)]
pub struct LcaEngine<'a> {
    resolver: AncestorResolver<'a>,
}

impl<'a> LcaEngine<'a> {
    pub fn new(store: &'a HierarchyStore) -> Self {
        Self::with_resolver(AncestorResolver::new(store))
    }

    pub fn with_resolver(resolver: AncestorResolver<'a>) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &AncestorResolver<'a> {
        &self.resolver
    }

    /// Lowest common ancestor of two taxa.
    ///
    /// If one is an ancestor of the other, that one is returned, since every
    /// chain starts with its own taxon.
    pub fn lca(&self, a: &str, b: &str) -> Result<&'a Taxon> {
        let chain_a = self.resolver.ancestors(a)?;
        let chain_b = self.resolver.ancestors(b)?;
        let seen: HashSet<&str> = chain_a.iter().map(Taxon::as_str).collect();
        let found = chain_b.iter().find(|t| seen.contains(t.as_str()));
        found.ok_or_else(|| TaxonomyError::DisjointHierarchy {
            a: a.to_string(),
            b: b.to_string(),
        })
    }

    /// Lowest common ancestor of a non-empty list, folded left to right in
    /// input order. A single taxon is returned unchanged.
    pub fn lca_of_set<S: AsRef<str>>(&self, taxa: &[S]) -> Result<&'a Taxon> {
        let (first, rest) = taxa.split_first().ok_or(TaxonomyError::EmptyInput)?;
        self.validate(taxa)?;
        let mut running = self.resolver.store().resolve(first.as_ref())?;
        for next in rest {
            let lca = self.lca(running.as_str(), next.as_ref())?;
            debug!("LCA of {} and {} is {}", running, next.as_ref(), lca);
            running = lca;
        }
        Ok(running)
    }

    /// Recursive form of [`lca_of_set`](Self::lca_of_set), same result.
    ///
    /// The last taxon is combined with the LCA of everything before it, so
    /// steps are taken from the end of the list backwards. Lists longer than
    /// [`MAX_RECURSION_DEPTH`] fail with [`TaxonomyError::TooManyTaxa`].
    pub fn lca_of_set_recursive<S: AsRef<str>>(&self, taxa: &[S]) -> Result<&'a Taxon> {
        if taxa.is_empty() {
            return Err(TaxonomyError::EmptyInput);
        }
        if taxa.len() > MAX_RECURSION_DEPTH {
            return Err(TaxonomyError::TooManyTaxa {
                count: taxa.len(),
                limit: MAX_RECURSION_DEPTH,
            });
        }
        self.validate(taxa)?;
        self.fold_back(taxa)
    }

    fn fold_back<S: AsRef<str>>(&self, taxa: &[S]) -> Result<&'a Taxon> {
        match taxa.split_last() {
            None => Err(TaxonomyError::EmptyInput),
            Some((last, [])) => self.resolver.store().resolve(last.as_ref()),
            Some((last, rest)) => {
                let rest_lca = self.fold_back(rest)?;
                let lca = self.lca(last.as_ref(), rest_lca.as_str())?;
                debug!("LCA of {} and {} is {}", last.as_ref(), rest_lca, lca);
                Ok(lca)
            }
        }
    }

    /// The fold of [`lca_of_set`](Self::lca_of_set) as data, one entry per
    /// input after the first. The last step's `lca` is the overall result.
    pub fn lca_steps<S: AsRef<str>>(&self, taxa: &[S]) -> Result<Vec<FoldStep>> {
        Ok(self.lca_with_steps(taxa)?.1)
    }

    /// Overall result and per-step diagnostics from a single left fold
    pub fn lca_with_steps<S: AsRef<str>>(&self, taxa: &[S]) -> Result<(&'a Taxon, Vec<FoldStep>)> {
        let (first, rest) = taxa.split_first().ok_or(TaxonomyError::EmptyInput)?;
        self.validate(taxa)?;
        let mut running = self.resolver.store().resolve(first.as_ref())?;
        let mut steps = Vec::with_capacity(rest.len());
        for next in rest {
            let right = self.resolver.store().resolve(next.as_ref())?;
            let lca = self.lca(running.as_str(), right.as_str())?;
            steps.push(FoldStep {
                left: running.clone(),
                right: right.clone(),
                lca: lca.clone(),
            });
            running = lca;
        }
        Ok((running, steps))
    }

    // every input must be known, even ones a fold could short-circuit past
    fn validate<S: AsRef<str>>(&self, taxa: &[S]) -> Result<()> {
        let store = self.resolver.store();
        for taxon in taxa {
            store.resolve(taxon.as_ref())?;
        }
        Ok(())
    }
}
