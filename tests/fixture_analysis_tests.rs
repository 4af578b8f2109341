//! The five-module test project analyzed through the library pipeline.

use couplingmap::*;
use std::path::PathBuf;

fn fixture() -> ModuleSet {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/testproject.json");
    load_module_set(&path).unwrap()
}

fn analyzed(structural: bool) -> Graph {
    let options = AnalysisOptions {
        include_standard: true,
        structural,
        ..Default::default()
    };
    analyze(&fixture(), &StandardBaseline::empty(), &MethodSetOracle, &options).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 0.005,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_martin_metrics() {
    let graph = analyzed(false);
    // (id, Ca, Ce, A, I, D)
    let expected = [
        ("testproject/base", 3.0, 0.0, 0.67, 0.0, 0.33),
        ("testproject/compat", 0.0, 0.0, 0.0, 0.0, 1.0),
        ("testproject/handler", 0.0, 2.0, 0.0, 1.0, 0.0),
        ("testproject/service", 1.0, 2.0, 0.5, 0.67, 0.17),
        ("testproject/types", 1.0, 1.0, 0.0, 0.5, 0.5),
    ];

    assert_eq!(graph.len(), expected.len());
    for (id, ca, ce, a, i, d) in expected {
        let m = graph.get(id).unwrap().metrics;
        assert_eq!(m.ca, ca, "Ca of {id}");
        assert_eq!(m.ce, ce, "Ce of {id}");
        assert_close(m.a, a);
        assert_close(m.i, i);
        assert_close(m.d, d);
    }
}

#[test]
fn test_structural_coupling_of_compat_reference_methods() {
    let graph = analyzed(true);

    for node in graph.sorted_nodes() {
        let expected = match node.id.as_str() {
            "testproject/base" => StructuralCoupling { sca: 1.0, sce: 0.0 },
            "testproject/compat" => StructuralCoupling { sca: 0.0, sce: 1.0 },
            _ => StructuralCoupling::default(),
        };
        assert_eq!(node.structural, expected, "structural coupling of {}", node.id);
    }
    assert!(graph.issues().is_empty());
}

#[test]
fn test_sort_by_distance() {
    let graph = analyzed(false);
    let order: Vec<String> = sort_nodes(&graph, SortKey::D)
        .iter()
        .map(|n| n.node().id.to_string())
        .collect();
    assert_eq!(
        order,
        [
            "testproject/compat",
            "testproject/types",
            "testproject/base",
            "testproject/service",
            "testproject/handler",
        ]
    );
}

#[test]
fn test_up_and_down_totals() {
    let graph = analyzed(false);

    // handler reaches service, types and base transitively.
    let handler = graph.get("testproject/handler").unwrap();
    assert_eq!(handler.down.total(), 2 + 3 + 3);
    assert_eq!(handler.up.total(), 0);

    // base is downstream of handler, service and types.
    let base = graph.get("testproject/base").unwrap();
    assert_eq!(base.up.total(), 2 + 2 + 3);
    assert_eq!(base.up.contract_types, 1);
}
