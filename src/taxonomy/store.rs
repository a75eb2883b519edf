//! HierarchyStore — immutable child→parent / parent→children relation
//!
//! The child→parent relation is the only ground truth. The parent→children
//! index is derived from it while the store is built, so the two views can
//! never drift apart. Every taxon that appears anywhere in the input is a
//! member; leaves carry an empty children set.

use super::error::{Result, TaxonomyError};
use super::taxon::Taxon;
use log::{debug, warn};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Default)]
pub struct HierarchyStore {
    /// Unique parent of every non-root taxon
    parent_of: HashMap<Taxon, Taxon>,
    /// Immediate children of every member (keys = all members)
    children_of: HashMap<Taxon, BTreeSet<Taxon>>,
}

impl HierarchyStore {
    /// Build from `(child, parent)` pairs.
    ///
    /// Repeating an identical pair is harmless; attaching the same child to a
    /// second parent fails with [`TaxonomyError::ConflictingParent`].
    pub fn from_parent_map<I, C, P>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, P)>,
        C: Into<Taxon>,
        P: Into<Taxon>,
    {
        let mut store = Self::default();
        for (child, parent) in pairs {
            store.attach(child.into(), parent.into())?;
        }
        Ok(store.finish())
    }

    /// Build from `(parent, children)` listings, the parent-to-child way of
    /// writing a hierarchy down. The listing is converted into child→parent
    /// edges; a parent with an empty listing still becomes a member.
    pub fn from_children_map<I, P, C, K>(listing: I) -> Result<Self>
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<Taxon>,
        C: IntoIterator<Item = K>,
        K: Into<Taxon>,
    {
        let mut store = Self::default();
        for (parent, children) in listing {
            let parent: Taxon = parent.into();
            store.children_of.entry(parent.clone()).or_default();
            for child in children {
                store.attach(child.into(), parent.clone())?;
            }
        }
        Ok(store.finish())
    }

    fn attach(&mut self, child: Taxon, parent: Taxon) -> Result<()> {
        match self.parent_of.get(&child) {
            Some(existing) if *existing == parent => return Ok(()),
            Some(existing) => {
                return Err(TaxonomyError::ConflictingParent {
                    child: child.to_string(),
                    existing: existing.to_string(),
                    conflicting: parent.to_string(),
                })
            }
            None => {}
        }
        self.children_of
            .entry(parent.clone())
            .or_default()
            .insert(child.clone());
        self.children_of.entry(child.clone()).or_default();
        self.parent_of.insert(child, parent);
        Ok(())
    }

    fn finish(self) -> Self {
        let roots = self.roots();
        debug!(
            "Built hierarchy with {} taxa and {} root(s)",
            self.len(),
            roots.len()
        );
        if roots.len() > 1 {
            warn!("Hierarchy is a forest of {} roots: {:?}", roots.len(), roots);
        }
        self
    }

    /// Canonical stored taxon for a label
    pub fn resolve(&self, taxon: &str) -> Result<&Taxon> {
        self.children_of
            .get_key_value(taxon)
            .map(|(key, _)| key)
            .ok_or_else(|| TaxonomyError::UnknownTaxon(taxon.to_string()))
    }

    /// Direct parent, `None` for a root
    pub fn parent_of(&self, taxon: &str) -> Result<Option<&Taxon>> {
        self.resolve(taxon)?;
        Ok(self.parent_of.get(taxon))
    }

    /// Immediate children, empty for a leaf
    pub fn children_of(&self, taxon: &str) -> Result<&BTreeSet<Taxon>> {
        self.children_of
            .get(taxon)
            .ok_or_else(|| TaxonomyError::UnknownTaxon(taxon.to_string()))
    }

    pub fn is_root(&self, taxon: &str) -> Result<bool> {
        Ok(self.parent_of(taxon)?.is_none())
    }

    pub fn contains(&self, taxon: &str) -> bool {
        self.children_of.contains_key(taxon)
    }

    /// Taxa without a parent, sorted. A valid hierarchy has exactly one.
    pub fn roots(&self) -> Vec<&Taxon> {
        let mut roots: Vec<&Taxon> = self
            .children_of
            .keys()
            .filter(|t| !self.parent_of.contains_key(*t))
            .collect();
        roots.sort();
        roots
    }

    /// All members, sorted
    pub fn taxa(&self) -> Vec<&Taxon> {
        let mut taxa: Vec<&Taxon> = self.children_of.keys().collect();
        taxa.sort();
        taxa
    }

    pub fn len(&self) -> usize {
        self.children_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children_of.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> HierarchyStore {
        HierarchyStore::from_parent_map([
            ("Homo sapiens", "Homo"),
            ("Homo neanderthalensis", "Homo"),
            ("Homo", "Homininae"),
        ])
        .unwrap()
    }

    #[test]
    fn test_children_derived_from_parents() {
        let store = small();
        let children: Vec<&str> = store
            .children_of("Homo")
            .unwrap()
            .iter()
            .map(Taxon::as_str)
            .collect();
        assert_eq!(children, vec!["Homo neanderthalensis", "Homo sapiens"]);
        assert!(store.children_of("Homo sapiens").unwrap().is_empty());
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_root_vs_unknown() {
        let store = small();
        assert_eq!(store.parent_of("Homininae").unwrap(), None);
        assert!(store.is_root("Homininae").unwrap());
        assert!(!store.is_root("Homo").unwrap());
        assert_eq!(
            store.parent_of("homininae"),
            Err(TaxonomyError::UnknownTaxon("homininae".into()))
        );
        assert!(store.is_root("Pan").is_err());
        assert!(store.children_of("Pan").is_err());
    }

    #[test]
    fn test_roots() {
        let store = small();
        assert_eq!(store.roots(), vec![&Taxon::from("Homininae")]);

        let forest = HierarchyStore::from_parent_map([("a", "A"), ("b", "B")]).unwrap();
        assert_eq!(forest.roots().len(), 2);
    }

    #[test]
    fn test_conflicting_parent() {
        let err = HierarchyStore::from_parent_map([("Homo", "Homininae"), ("Homo", "Ponginae")])
            .unwrap_err();
        assert_eq!(
            err,
            TaxonomyError::ConflictingParent {
                child: "Homo".into(),
                existing: "Homininae".into(),
                conflicting: "Ponginae".into(),
            }
        );
    }

    #[test]
    fn test_duplicate_pair_accepted() {
        let store =
            HierarchyStore::from_parent_map([("Homo", "Homininae"), ("Homo", "Homininae")]).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_from_children_map() {
        let store = HierarchyStore::from_children_map([
            ("Primates", vec!["Haplorrhini", "Strepsirrhini"]),
            ("Haplorrhini", vec!["Tarsiiformes"]),
            ("Lemuriformes", vec![]),
        ])
        .unwrap();
        assert_eq!(store.parent_of("Tarsiiformes").unwrap().unwrap().as_str(), "Haplorrhini");
        assert!(store.contains("Lemuriformes"));
        assert_eq!(store.roots().len(), 2);

        let err = HierarchyStore::from_children_map([
            ("Strepsirrhini", vec!["Lorisidae"]),
            ("Lorisiformes", vec!["Lorisidae"]),
        ])
        .unwrap_err();
        assert!(matches!(err, TaxonomyError::ConflictingParent { .. }));
    }

    #[test]
    fn test_resolve_returns_stored_key() {
        let store = small();
        assert_eq!(store.resolve("Homo").unwrap(), &Taxon::from("Homo"));
        assert!(store.resolve("").is_err());
    }
}
