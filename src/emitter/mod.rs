//! Artifact emitters (verb module)
//!
//! Transform compiled structures into text: the function module, the
//! pipeline-assembly module, the catalog, and the DOT / Kedro-Viz exports.

mod catalog;
mod dot;
mod error;
mod functions;
mod pipeline;
mod viz;

pub use catalog::emit_catalog;
pub use dot::emit_dot;
pub use error::EmitError;
pub use functions::{emit_function, emit_functions_module, PLACEHOLDER_MARKER};
pub use pipeline::emit_pipeline_module;
pub use viz::{emit_viz, viz_document, VizDocument};

fn pad(indent: usize) -> String {
    "    ".repeat(indent)
}

/// Indent every non-blank line of `text`; blank lines stay empty
fn indent_block(text: &str, indent: usize) -> String {
    let p = pad(indent);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{p}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keep user text from closing a docstring early
fn escape_docstring(text: &str) -> String {
    text.replace("\"\"\"", "\\\"\\\"\\\"")
}

/// Double-quoted Python string literal
fn py_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
