//! Bundled primate hierarchy, written parent→children

use super::error::Result;
use super::store::HierarchyStore;

const PRIMATES: &[(&str, &[&str])] = &[
    ("Primates", &["Haplorrhini", "Strepsirrhini"]),
    ("Haplorrhini", &["Tarsiiformes", "Simiiformes"]),
    ("Tarsiiformes", &["Tarsius tarsier"]),
    ("Simiiformes", &["Hominoidea"]),
    ("Hominoidea", &["Pongo abelii", "Pan troglodytes"]),
    ("Strepsirrhini", &["Lorisidae", "Lemuriformes", "Lorisiformes"]),
    ("Lorisidae", &["Loris tardigradus"]),
    ("Lemuriformes", &["Allocebus trichotis"]),
    ("Lorisiformes", &["Galago allenii", "Galago moholi"]),
];

/// The primate sample hierarchy rooted at "Primates"
pub fn primates() -> Result<HierarchyStore> {
    HierarchyStore::from_children_map(
        PRIMATES
            .iter()
            .map(|(parent, children)| (*parent, children.iter().copied())),
    )
}
