//! Compilation result types

use std::path::PathBuf;
use serde::Serialize;
use crate::diagnostics::Diagnostic;
use super::project::ProjectLayout;

/// The three generated text artifacts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifacts {
    /// Function-definition module (`nodes.py`)
    #[serde(rename = "functionsText")]
    pub functions: String,
    /// Pipeline-assembly module (`pipeline.py`)
    #[serde(rename = "assemblyText")]
    pub assembly: String,
    /// Catalog declaration (`<pipeline>.yml`)
    #[serde(rename = "catalogText")]
    pub catalog: String,
}

impl Artifacts {
    /// Pair each artifact with its destination in the project layout
    pub fn files(&self, layout: &ProjectLayout) -> Vec<(PathBuf, &str)> {
        vec![
            (layout.nodes_path(), self.functions.as_str()),
            (layout.pipeline_path(), self.assembly.as_str()),
            (layout.catalog_path(), self.catalog.as_str()),
        ]
    }
}

/// Outcome of one compilation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Compilation {
    pub success: bool,
    /// Present only when `success` is true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts: Option<Artifacts>,
    /// Every diagnostic, in stage order
    pub diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}
