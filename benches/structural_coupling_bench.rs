//! Benchmarks for graph construction and the structural coupling search

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use couplingmap::{
    ConcreteType, ContractType, Declaration, Graph, MethodSetOracle, MethodSig, Module, ModuleSet,
    TypeInfo,
};
use std::hint::black_box;

fn method(i: usize) -> MethodSig {
    MethodSig::new(format!("M{}", i % 7), "(ctx) error")
}

/// Layered modules: each imports the two before it; every third module
/// declares a contract, the rest declare concrete types.
fn create_module_set(size: usize) -> ModuleSet {
    (0..size)
        .map(|i| {
            let imports: Vec<String> = (i.saturating_sub(2)..i).map(|j| format!("mod{j:04}")).collect();
            let types = if i % 3 == 0 {
                TypeInfo {
                    contracts: vec![ContractType {
                        name: format!("Contract{i}"),
                        methods: vec![method(i), method(i + 1)],
                    }],
                    concretes: vec![],
                }
            } else {
                TypeInfo {
                    contracts: vec![],
                    concretes: (0..3)
                        .map(|t| ConcreteType {
                            name: format!("Impl{i}_{t}"),
                            value_methods: vec![method(i + t)],
                            reference_methods: vec![method(i + t + 1)],
                        })
                        .collect(),
                }
            };
            Module::new(format!("mod{i:04}"))
                .with_imports(imports)
                .with_declarations(vec![Declaration::function("new")])
                .with_types(types)
        })
        .map(std::sync::Arc::new)
        .collect()
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    for size in [100, 500] {
        let set = create_module_set(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &set, |b, set| {
            b.iter(|| {
                let mut graph = Graph::from_modules(black_box(set));
                graph.compute_metrics(set);
                graph
            })
        });
    }
    group.finish();
}

fn bench_structural_coupling(c: &mut Criterion) {
    let mut group = c.benchmark_group("structural_coupling");
    for size in [100, 500] {
        let set = create_module_set(size);
        let graph = Graph::from_modules(&set);
        for parallel in [false, true] {
            let label = if parallel { "parallel" } else { "sequential" };
            group.bench_with_input(BenchmarkId::new(label, size), &graph, |b, graph| {
                b.iter(|| {
                    let mut graph = graph.clone();
                    graph.compute_structural_coupling(&MethodSetOracle, black_box(parallel));
                    graph
                })
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_graph_build, bench_structural_coupling);
criterion_main!(benches);
