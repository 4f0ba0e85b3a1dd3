//! Integration tests for whole-project compilation
//!
//! Covers the verdict, ordering and determinism guarantees of
//! `compile_project` across fixture and hand-built graphs.

mod common;

use common::{artifacts, catalog_names, codes, compile_fixture, defined_functions, load_fixture, step_block};
use pipepaint::{canonicalize, compile_project, DiagnosticCode, Edge, Graph, Node};

#[test]
fn test_clean_graph_succeeds_with_one_entry_per_dataset() {
    let result = compile_fixture("branching.yaml");
    let artifacts = artifacts(&result);

    assert_eq!(
        catalog_names(&artifacts.catalog),
        vec!["raw_data", "a", "b", "summary_report"]
    );
}

#[test]
fn test_orphans_and_placeholders_are_only_warnings() {
    let graph = Graph::new(
        vec![
            Node::dataset("d1", "Unused", "pandas.CSVDataSet", "unused.csv"),
            Node::function("f1", "Standalone"),
        ],
        vec![],
    );
    let result = compile_project(&graph);

    assert!(result.success);
    assert_eq!(
        codes(&result),
        vec![
            DiagnosticCode::OrphanDataset,
            DiagnosticCode::NoDescription,
            DiagnosticCode::EmptyFunctionBody,
            DiagnosticCode::NoDescription,
        ]
    );
    assert_eq!(catalog_names(&artifacts(&result).catalog), vec!["unused"]);
}

#[test]
fn test_recompiling_is_byte_identical() {
    let graph = load_fixture("branching.yaml");
    let first = compile_project(&graph);
    let second = compile_project(&graph);

    assert_eq!(first, second);
    assert_eq!(artifacts(&first), artifacts(&second));
}

#[test]
fn test_yaml_and_json_fixtures_agree() {
    let from_yaml = compile_fixture("starter.yaml");
    let from_json = compile_fixture("starter.json");
    assert_eq!(artifacts(&from_yaml), artifacts(&from_json));
}

#[test]
fn test_canonicalization_is_idempotent() {
    assert_eq!(canonicalize("Raw Data"), "raw_data");
    for label in ["Raw Data", "Summary   Report", "A", "  padded  "] {
        let once = canonicalize(label);
        assert_eq!(canonicalize(&once), once);
    }
}

#[test]
fn test_single_input_single_output_round_trip() {
    let graph = Graph::new(
        vec![
            Node::dataset("d1", "Raw Data", "pandas.CSVDataSet", "raw.csv"),
            Node::function("f1", "Clean"),
            Node::dataset("d2", "Processed Data", "pandas.CSVDataSet", "processed.csv"),
        ],
        vec![Edge::new("e1", "d1", "f1"), Edge::new("e2", "f1", "d2")],
    );
    let result = compile_project(&graph);
    let artifacts = artifacts(&result);

    assert!(artifacts.functions.contains("def clean(raw_data):\n"));
    let step = step_block(&artifacts.assembly, "clean_node");
    assert!(step.contains("inputs=[\"raw_data\"],"));
    assert!(step.contains("outputs=\"processed_data\","));
}

#[test]
fn test_dangling_source_fails_and_drops_binding() {
    let graph = Graph::new(
        vec![Node::function("f1", "Lonely Function")],
        vec![Edge::new("e1", "missing", "f1")],
    );
    let result = compile_project(&graph);

    assert!(!result.success);
    assert!(result.artifacts.is_none());

    let dangling: Vec<_> = result
        .diagnostics
        .iter()
        .filter(|d| d.code == DiagnosticCode::DanglingEdge)
        .collect();
    assert_eq!(dangling.len(), 1);
    assert_eq!(dangling[0].edge_id.as_deref(), Some("e1"));
    assert_eq!(dangling[0].node_id.as_deref(), Some("f1"));
}

#[test]
fn test_explicit_function_name_is_used_as_written() {
    let graph = Graph::new(
        vec![
            Node::dataset("d1", "Raw", "pandas.CSVDataSet", "raw.csv"),
            Node::function("f1", "Clean").with_function_name("Clean It"),
        ],
        vec![Edge::new("e1", "d1", "f1")],
    );
    let result = compile_project(&graph);

    assert!(result.success);
    assert!(codes(&result).contains(&DiagnosticCode::InvalidIdentifier));
    let artifacts = artifacts(&result);
    assert!(artifacts.assembly.contains("from .nodes import Clean It\n"));
    assert!(artifacts.assembly.contains("func=Clean It,"));
}

#[test]
fn test_dataset_name_collision_fails() {
    let graph = Graph::new(
        vec![
            Node::dataset("d1", "Data", "pandas.CSVDataSet", "one.csv"),
            Node::dataset("d2", "Data", "pandas.CSVDataSet", "two.csv"),
        ],
        vec![],
    );
    let result = compile_project(&graph);

    assert!(!result.success);
    let collision = result
        .diagnostics
        .iter()
        .find(|d| d.code == DiagnosticCode::NameCollision)
        .expect("collision reported");
    assert_eq!(collision.node_id.as_deref(), Some("d2"));
}

#[test]
fn test_multiple_outputs() {
    let result = compile_fixture("branching.yaml");
    let artifacts = artifacts(&result);

    let step = step_block(&artifacts.assembly, "split_data_node");
    assert!(step.contains("inputs=[\"raw_data\"],"));
    assert!(step.contains("outputs=[\"a\", \"b\"],"));

    assert!(artifacts.functions.contains(
        "    Returns:\n        a: Output data for A.\n        b: Output data for B.\n"
    ));
}

#[test]
fn test_steps_follow_node_order_not_data_flow() {
    // The consumer is declared first and stays first
    let graph = Graph::new(
        vec![
            Node::function("f-train", "Train Model").with_body("return model_input"),
            Node::dataset("d-raw", "Raw", "pandas.CSVDataSet", "raw.csv"),
            Node::function("f-prep", "Prepare").with_body("return raw"),
            Node::dataset("d-mi", "Model Input", "pandas.ParquetDataSet", "mi.parquet"),
            Node::dataset("d-model", "Model", "pickle.PickleDataSet", "model.pkl"),
        ],
        vec![
            Edge::new("e1", "d-mi", "f-train"),
            Edge::new("e2", "f-train", "d-model"),
            Edge::new("e3", "d-raw", "f-prep"),
            Edge::new("e4", "f-prep", "d-mi"),
        ],
    );
    let result = compile_project(&graph);
    let artifacts = artifacts(&result);

    assert_eq!(defined_functions(&artifacts.functions), vec!["train_model", "prepare"]);
    let train = artifacts.assembly.find("name=\"train_model_node\"").unwrap();
    let prep = artifacts.assembly.find("name=\"prepare_node\"").unwrap();
    assert!(train < prep);
    assert!(artifacts.assembly.contains("from .nodes import train_model, prepare\n"));
}

#[test]
fn test_input_graph_is_not_mutated() {
    let graph = load_fixture("broken.yaml");
    let snapshot = graph.clone();
    let _ = compile_project(&graph);
    assert_eq!(graph, snapshot);
}

#[test]
fn test_concurrent_compilations_agree() {
    let graph = load_fixture("branching.yaml");
    let expected = compile_project(&graph);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| compile_project(&graph))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
