use crate::assembly::build_assembly;
use crate::catalog::build_catalog;
use crate::config::CompilerOptions;
use crate::diagnostics::{Diagnostic, DiagnosticCode, Diagnostics};
use crate::emitter::{emit_catalog, emit_functions_module, emit_pipeline_module};
use crate::graph::Graph;
use crate::resolver::resolve_graph;
use super::types::{Artifacts, Compilation};

/// Compile a graph with default options.
pub fn compile_project(graph: &Graph) -> Compilation {
    compile_project_with(graph, &CompilerOptions::default())
}

/// Compile a graph into the function module, pipeline module and catalog.
///
/// Stages run in a fixed order and each one only sees the previous stage's
/// output:
/// 1. Resolve bindings from the graph
/// 2. Build and emit the catalog from the resolved datasets
/// 3. Emit the function module from the resolved functions
/// 4. Assemble and emit the pipeline
///
/// Every stage records its problems and keeps going. Any error diagnostic
/// fails the compilation and drops the artifacts; warnings do not.
pub fn compile_project_with(graph: &Graph, options: &CompilerOptions) -> Compilation {
    let mut diagnostics = Diagnostics::new();

    // 1. Resolver
    let resolved = resolve_graph(graph, &mut diagnostics);

    // 2. Catalog
    let entries = build_catalog(&resolved.datasets, &mut diagnostics);
    let catalog = match emit_catalog(&entries, options) {
        Ok(text) => Some(text),
        Err(err) => {
            diagnostics.push(Diagnostic::error(DiagnosticCode::EmitFailure, err.to_string()));
            None
        }
    };

    // 3. Function module
    let functions = emit_functions_module(&resolved.functions, options, &mut diagnostics);

    // 4. Assembly
    let assembly = build_assembly(&resolved.functions, options, &mut diagnostics);
    let assembly = emit_pipeline_module(&assembly, options);

    let success = !diagnostics.has_errors();
    if success {
        tracing::info!(
            datasets = resolved.datasets.len(),
            functions = resolved.functions.len(),
            warnings = diagnostics.warning_count(),
            "compiled project"
        );
    } else {
        tracing::warn!(
            errors = diagnostics.error_count(),
            warnings = diagnostics.warning_count(),
            "compilation failed"
        );
    }

    let artifacts = match (success, catalog) {
        (true, Some(catalog)) => Some(Artifacts {
            functions,
            assembly,
            catalog,
        }),
        _ => None,
    };

    Compilation {
        success,
        artifacts,
        diagnostics: diagnostics.into_vec(),
    }
}
