//! Function-module emitter
//!
//! Renders one Python function per function node: signature, docstring and
//! either the user body or a placeholder.

use crate::config::CompilerOptions;
use crate::diagnostics::{Diagnostic, DiagnosticCode, Diagnostics};
use crate::graph::is_identifier;
use crate::resolver::FunctionInfo;
use super::{escape_docstring, indent_block, pad};

/// Placeholder marker written into functions without a body
pub const PLACEHOLDER_MARKER: &str = "# TODO: not yet implemented";

/// Emit the whole function module: header followed by every function
pub fn emit_functions_module(
    functions: &[FunctionInfo],
    options: &CompilerOptions,
    diagnostics: &mut Diagnostics,
) -> String {
    let mut out = module_header(options);
    for function in functions {
        out.push_str("\n\n");
        out.push_str(&emit_function(function, options, diagnostics));
    }
    out
}

fn module_header(options: &CompilerOptions) -> String {
    format!(
        "\"\"\"\nThis module contains node functions for the pipeline.\nGenerated by {}.\n\"\"\"\n\
         from typing import Any, Dict, List\n\
         import pandas as pd\n\
         import numpy as np\n",
        options.generator
    )
}

/// Emit a single function definition, ending with a newline.
///
/// Warns about a missing body, a missing description and an identifier
/// that Python would reject. None of these stop the text from rendering.
pub fn emit_function(
    function: &FunctionInfo,
    options: &CompilerOptions,
    diagnostics: &mut Diagnostics,
) -> String {
    check_function(function, diagnostics);

    let params = function.input_names().join(", ");
    let p1 = pad(1);
    let p2 = pad(2);

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("def {}({}):", function.identifier, params));

    // -- docstring ------------------------------------------------------------

    let summary = function
        .description()
        .unwrap_or(options.default_description.as_str());
    let summary = escape_docstring(summary);
    let mut summary_lines = summary.lines();
    lines.push(format!("{p1}\"\"\"{}", summary_lines.next().unwrap_or_default()));
    lines.extend(summary_lines.map(|l| indent_line(l, 1)));

    if !function.inputs.is_empty() {
        lines.push(String::new());
        lines.push(format!("{p1}Args:"));
        for input in &function.inputs {
            lines.push(escape_docstring(&format!(
                "{p2}{}: Input data from {}.",
                input.name, input.label
            )));
        }
    }

    lines.push(String::new());
    lines.push(format!("{p1}Returns:"));
    match function.outputs.len() {
        0 => lines.push(format!("{p2}None.")),
        1 => lines.push(format!("{p2}Processed data.")),
        _ => {
            for output in &function.outputs {
                lines.push(escape_docstring(&format!(
                    "{p2}{}: Output data for {}.",
                    output.name, output.label
                )));
            }
        }
    }
    lines.push(format!("{p1}\"\"\""));

    // -- body -----------------------------------------------------------------

    match function.body() {
        Some(body) => lines.push(indent_block(body.trim_end(), 1)),
        None => {
            lines.push(format!("{p1}{PLACEHOLDER_MARKER}"));
            lines.push(format!("{p1}return {}", placeholder_return(function)));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Return expression of the placeholder body.
///
/// A single output passes the inputs through; otherwise the output names
/// are returned as a tuple. `None` when there is nothing to return.
fn placeholder_return(function: &FunctionInfo) -> String {
    let names = if function.outputs.len() == 1 {
        function.input_names()
    } else {
        function.output_names()
    };

    if names.is_empty() {
        "None".to_string()
    } else {
        names.join(", ")
    }
}

fn indent_line(line: &str, level: usize) -> String {
    if line.trim().is_empty() {
        String::new()
    } else {
        format!("{}{}", pad(level), line)
    }
}

fn check_function(function: &FunctionInfo, diagnostics: &mut Diagnostics) {
    if function.body().is_none() {
        diagnostics.push(
            Diagnostic::warning(
                DiagnosticCode::EmptyFunctionBody,
                format!(
                    "Function '{}' has no body; a placeholder implementation is generated",
                    function.label
                ),
            )
            .with_node(&function.id),
        );
    }

    if function.description().is_none() {
        diagnostics.push(
            Diagnostic::warning(
                DiagnosticCode::NoDescription,
                format!("Function '{}' has no description", function.label),
            )
            .with_node(&function.id),
        );
    }

    if !is_identifier(&function.identifier) {
        diagnostics.push(
            Diagnostic::warning(
                DiagnosticCode::InvalidIdentifier,
                format!(
                    "Function identifier '{}' is not a valid Python identifier",
                    function.identifier
                ),
            )
            .with_node(&function.id),
        );
    }
}
