//! pipepaint - Compile visual pipeline graphs into Kedro projects
//!
//! This library provides:
//! - Graph model types (datasets, functions, edges)
//! - Graph parsing from YAML or JSON
//! - Dependency resolution of function inputs and outputs
//! - Catalog, function-module and pipeline-assembly generation
//! - DOT and Kedro-Viz exports of the graph
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `graph/` - the canvas graph (Graph, Node, NodeKind, Edge)
//! - `diagnostics/` - collected problems (Diagnostic, DiagnosticCode, Severity)
//! - `config/` - compiler options
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML/JSON → Graph
//! - `resolver/` - Graph → ResolvedGraph (bindings per function)
//! - `catalog/` - resolved datasets → CatalogEntry list
//! - `assembly/` - resolved functions → ordered PipelineStep list
//! - `emitter/` - entries, functions and steps → text
//! - `compiler/` - runs the stages and decides success
//!
//! # Example
//!
//! ```no_run
//! use pipepaint::{compile_project, parser};
//!
//! let graph = parser::parse_file("pipeline.yaml")?;
//! let result = compile_project(&graph);
//! if let Some(artifacts) = &result.artifacts {
//!     println!("{}", artifacts.assembly);
//! }
//! for diagnostic in &result.diagnostics {
//!     eprintln!("{}", diagnostic);
//! }
//! # Ok::<(), pipepaint::ParseError>(())
//! ```

pub mod graph;
pub mod diagnostics;
pub mod config;
pub mod parser;
pub mod resolver;
pub mod catalog;
pub mod assembly;
pub mod emitter;
pub mod compiler;
pub mod error;

// Re-export commonly used types
pub use graph::{Graph, Node, NodeKind, DatasetPayload, FunctionPayload, Edge, Position, canonicalize};
pub use diagnostics::{Diagnostic, DiagnosticCode, Diagnostics, Severity};
pub use config::CompilerOptions;
pub use resolver::{resolve_graph, ResolvedGraph, DatasetRef, FunctionInfo};
pub use catalog::{build_catalog, CatalogEntry};
pub use assembly::{build_assembly, Assembly, PipelineStep, StepOutputs};
pub use emitter::{emit_catalog, emit_dot, emit_function, emit_functions_module, emit_pipeline_module, emit_viz, EmitError};
pub use compiler::{compile_project, compile_project_with, Artifacts, Compilation, ProjectLayout};
pub use error::ParseError;
