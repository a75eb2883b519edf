use criterion::{criterion_group, criterion_main, Criterion};
use taxa_core::taxonomy::primates;
use taxa_core::{AncestorResolver, HierarchyStore, LcaEngine};

/// A single path "n0" <- "n1" <- ... <- "n{depth}"
fn deep_chain(depth: usize) -> HierarchyStore {
    HierarchyStore::from_parent_map((1..=depth).map(|i| (format!("n{}", i), format!("n{}", i - 1))))
        .unwrap()
}

fn bench_traversal(c: &mut Criterion) {
    let store = primates().unwrap();
    let resolver = AncestorResolver::new(&store);
    let engine = LcaEngine::new(&store);

    c.bench_function("ancestors_primates", |b| {
        b.iter(|| resolver.ancestors("Pongo abelii").unwrap())
    });

    c.bench_function("lca_primates", |b| {
        b.iter(|| engine.lca("Pan troglodytes", "Tarsius tarsier").unwrap())
    });

    let taxa = ["Pan troglodytes", "Tarsius tarsier", "Pongo abelii", "Galago moholi"];
    c.bench_function("lca_of_set_primates_4", |b| {
        b.iter(|| engine.lca_of_set(&taxa).unwrap())
    });

    let deep = deep_chain(10_000);
    let deep_resolver = AncestorResolver::new(&deep);
    let deep_engine = LcaEngine::new(&deep);

    c.bench_function("ancestors_chain_10000", |b| {
        b.iter(|| deep_resolver.ancestors("n10000").unwrap())
    });

    c.bench_function("lca_chain_10000", |b| {
        b.iter(|| deep_engine.lca("n10000", "n5000").unwrap())
    });
}

criterion_group!(benches, bench_traversal);
criterion_main!(benches);
