//! Integration tests for the DOT and Kedro-Viz exports

mod common;

use common::load_fixture;
use pipepaint::{emit_dot, emit_viz};

#[test]
fn test_starter_dot() {
    let dot = emit_dot(&load_fixture("starter.yaml"));

    let expected = "\
digraph pipeline {
  \"dataset-1\" [label=\"Raw Data\"]
  \"function-1\" [label=\"Process Data\"]
  \"dataset-2\" [label=\"Processed Data\"]
  \"dataset-1\" -> \"function-1\"
  \"function-1\" -> \"dataset-2\"
}
";
    assert_eq!(dot, expected);
}

#[test]
fn test_dot_keeps_every_edge() {
    // Export is a plain notation change; validation is the compiler's job
    let dot = emit_dot(&load_fixture("broken.yaml"));
    assert_eq!(dot.matches(" -> ").count(), 6);
    assert!(dot.contains("\"ghost\" -> \"f1\""));
}

#[test]
fn test_branching_viz() {
    let json = emit_viz(&load_fixture("branching.yaml")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let kinds: Vec<&str> = value["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["type"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["data", "task", "data", "data", "task", "data"]);
    assert_eq!(value["edges"].as_array().unwrap().len(), 6);
    assert_eq!(value["nodes"][1]["name"], "Split Data");
    assert_eq!(value["nodes"][1]["pipelines"][0], "__default__");
}

#[test]
fn test_viz_skips_dangling_edges() {
    let json = emit_viz(&load_fixture("broken.yaml")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    // e2 (ghost) and e5 (nowhere) are dropped
    assert_eq!(value["edges"].as_array().unwrap().len(), 4);
}
