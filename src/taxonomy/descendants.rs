//! Descendant walks over the derived parent→children index

use super::ancestry::MAX_RECURSION_DEPTH;
use super::error::{Result, TaxonomyError};
use super::store::HierarchyStore;
use super::taxon::Taxon;

/// Lists everything below a taxon, self-inclusive, in pre-order.
/// Children are visited in sorted order, so output is deterministic.
#[derive(Debug, Clone, Copy)]
pub struct DescendantWalker<'a> {
    store: &'a HierarchyStore,
}

impl<'a> DescendantWalker<'a> {
    pub fn new(store: &'a HierarchyStore) -> Self {
        Self { store }
    }

    pub fn descendants(&self, taxon: &str) -> Result<Vec<&'a Taxon>> {
        Ok(self
            .descendants_with_depth(taxon)?
            .into_iter()
            .map(|(_, t)| t)
            .collect())
    }

    /// Pre-order listing tagged with the depth below `taxon` (0 for itself).
    /// Uses an explicit stack rather than recursion.
    pub fn descendants_with_depth(&self, taxon: &str) -> Result<Vec<(usize, &'a Taxon)>> {
        let start = self.store.resolve(taxon)?;
        let limit = self.store.len();
        let mut result = Vec::new();
        let mut stack = vec![(0, start)];
        while let Some((depth, current)) = stack.pop() {
            if result.len() >= limit {
                return Err(TaxonomyError::DepthExceeded {
                    taxon: start.to_string(),
                    limit,
                });
            }
            result.push((depth, current));
            // reversed so the smallest child is popped first
            for child in self.store.children_of(current.as_str())?.iter().rev() {
                stack.push((depth + 1, child));
            }
        }
        Ok(result)
    }

    /// Recursive form of [`descendants`](Self::descendants), same result.
    /// Subtrees deeper than [`MAX_RECURSION_DEPTH`] fail with
    /// [`TaxonomyError::DepthExceeded`].
    pub fn descendants_recursive(&self, taxon: &str) -> Result<Vec<&'a Taxon>> {
        let start = self.store.resolve(taxon)?;
        let limit = self.store.len().min(MAX_RECURSION_DEPTH);
        let mut result = Vec::new();
        self.walk_down(start, start, 0, limit, &mut result)?;
        Ok(result)
    }

    fn walk_down(
        &self,
        start: &'a Taxon,
        taxon: &'a Taxon,
        depth: usize,
        limit: usize,
        acc: &mut Vec<&'a Taxon>,
    ) -> Result<()> {
        if depth >= limit {
            return Err(TaxonomyError::DepthExceeded {
                taxon: start.to_string(),
                limit,
            });
        }
        acc.push(taxon);
        for child in self.store.children_of(taxon.as_str())? {
            self.walk_down(start, child, depth + 1, limit, acc)?;
        }
        Ok(())
    }

    /// Descendants without children of their own
    pub fn leaves(&self, taxon: &str) -> Result<Vec<&'a Taxon>> {
        let mut leaves = Vec::new();
        for t in self.descendants(taxon)? {
            if self.store.children_of(t.as_str())?.is_empty() {
                leaves.push(t);
            }
        }
        Ok(leaves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::primates;

    fn labels(taxa: Vec<&Taxon>) -> Vec<&str> {
        taxa.into_iter().map(Taxon::as_str).collect()
    }

    #[test]
    fn test_descendants_pre_order() {
        let store = primates().unwrap();
        let walker = DescendantWalker::new(&store);
        assert_eq!(
            labels(walker.descendants("Strepsirrhini").unwrap()),
            vec![
                "Strepsirrhini",
                "Lemuriformes",
                "Allocebus trichotis",
                "Lorisidae",
                "Loris tardigradus",
                "Lorisiformes",
                "Galago allenii",
                "Galago moholi",
            ]
        );
    }

    #[test]
    fn test_recursive_matches_iterative() {
        let store = primates().unwrap();
        let walker = DescendantWalker::new(&store);
        for taxon in store.taxa() {
            assert_eq!(
                walker.descendants_recursive(taxon.as_str()).unwrap(),
                walker.descendants(taxon.as_str()).unwrap()
            );
        }
    }

    #[test]
    fn test_root_reaches_everything() {
        let store = primates().unwrap();
        let walker = DescendantWalker::new(&store);
        assert_eq!(walker.descendants("Primates").unwrap().len(), store.len());
    }

    #[test]
    fn test_depths() {
        let store = primates().unwrap();
        let walker = DescendantWalker::new(&store);
        let tree = walker.descendants_with_depth("Haplorrhini").unwrap();
        let depth_of = |name: &str| tree.iter().find(|(_, t)| t.as_str() == name).map(|(d, _)| *d);
        assert_eq!(depth_of("Haplorrhini"), Some(0));
        assert_eq!(depth_of("Simiiformes"), Some(1));
        assert_eq!(depth_of("Pan troglodytes"), Some(3));
        assert_eq!(depth_of("Strepsirrhini"), None);
    }

    #[test]
    fn test_leaves() {
        let store = primates().unwrap();
        let walker = DescendantWalker::new(&store);
        assert_eq!(
            labels(walker.leaves("Haplorrhini").unwrap()),
            vec!["Pan troglodytes", "Pongo abelii", "Tarsius tarsier"]
        );
        assert_eq!(labels(walker.leaves("Galago moholi").unwrap()), vec!["Galago moholi"]);
    }

    #[test]
    fn test_deep_chain() {
        let depth = 100_000;
        let store = HierarchyStore::from_parent_map(
            (1..=depth).map(|i| (format!("n{}", i), format!("n{}", i - 1))),
        )
        .unwrap();
        let walker = DescendantWalker::new(&store);

        let all = walker.descendants("n0").unwrap();
        assert_eq!(all.len(), depth + 1);
        assert_eq!(all[depth].as_str(), "n100000");
        assert_eq!(walker.leaves("n0").unwrap().len(), 1);

        assert_eq!(
            walker.descendants_recursive("n0"),
            Err(TaxonomyError::DepthExceeded {
                taxon: "n0".into(),
                limit: MAX_RECURSION_DEPTH,
            })
        );
        // the last 1000 links fit under the recursion bound
        let near_leaf = format!("n{}", depth - 999);
        assert_eq!(
            walker.descendants_recursive(&near_leaf).unwrap(),
            walker.descendants(&near_leaf).unwrap()
        );
    }

    #[test]
    fn test_unknown_and_cyclic() {
        let store = primates().unwrap();
        let walker = DescendantWalker::new(&store);
        assert!(walker.descendants("Galago").is_err());

        let cyclic = HierarchyStore::from_parent_map([("a", "b"), ("b", "a")]).unwrap();
        let walker = DescendantWalker::new(&cyclic);
        assert!(matches!(walker.descendants("a"), Err(TaxonomyError::DepthExceeded { .. })));
        assert!(matches!(
            walker.descendants_recursive("a"),
            Err(TaxonomyError::DepthExceeded { .. })
        ));
    }
}
