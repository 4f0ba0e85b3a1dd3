//! Shared test utilities for integration tests

#![allow(dead_code)]

use pipepaint::{compile_project, parser, Artifacts, Compilation, DiagnosticCode, Graph};

/// Load a graph fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> Graph {
    let path = format!("tests/test_data/{}", name);
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// Load and compile a fixture with default options
pub fn compile_fixture(name: &str) -> Compilation {
    compile_project(&load_fixture(name))
}

/// Artifacts of a compilation that must have succeeded
pub fn artifacts(result: &Compilation) -> &Artifacts {
    assert!(
        result.success,
        "Compilation should succeed, got: {:?}",
        result.diagnostics
    );
    result.artifacts.as_ref().expect("successful compilation carries artifacts")
}

/// Codes of every diagnostic, in emission order
pub fn codes(result: &Compilation) -> Vec<DiagnosticCode> {
    result.diagnostics.iter().map(|d| d.code).collect()
}

// =============================================================================
// Artifact Inspection Utilities
// =============================================================================

/// Dataset names declared in a catalog document, in order
pub fn catalog_names(catalog: &str) -> Vec<String> {
    catalog
        .lines()
        .filter(|line| !line.starts_with(' ') && !line.starts_with('#') && line.ends_with(':'))
        .map(|line| line.trim_end_matches(':').to_string())
        .collect()
}

/// The `node(...)` block of the step with the given name
pub fn step_block<'a>(assembly: &'a str, step_name: &str) -> &'a str {
    let marker = format!("name=\"{}\",", step_name);
    let end = assembly
        .find(&marker)
        .unwrap_or_else(|| panic!("step {} not found in:\n{}", step_name, assembly));
    let start = assembly[..end]
        .rfind("node(")
        .expect("step block starts with node(");
    &assembly[start..end + marker.len()]
}

/// Function names defined in a function module, in order
pub fn defined_functions(functions: &str) -> Vec<String> {
    functions
        .lines()
        .filter_map(|line| line.strip_prefix("def "))
        .filter_map(|rest| rest.split('(').next())
        .map(str::to_string)
        .collect()
}
