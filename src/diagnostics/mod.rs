//! Compilation diagnostics (nouns)
//!
//! Structural problems are collected, never thrown. Every stage appends to a
//! shared [`Diagnostics`] accumulator and keeps going; the orchestrator turns
//! the final list into a verdict.

use serde::Serialize;
use std::fmt;

/// How bad a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Stable diagnostic codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    /// Edge endpoint references a node id that does not exist
    DanglingEdge,
    /// Edge connects two nodes of the same kind
    TypeMismatchEdge,
    /// Two datasets or two functions share a canonical name
    NameCollision,
    /// Two nodes share an id
    DuplicateNodeId,
    /// Repeated edge between the same dataset/function pair
    DuplicateBinding,
    /// Function has no body; a placeholder is emitted
    EmptyFunctionBody,
    /// Node has no description
    NoDescription,
    /// Dataset with no incident edges
    OrphanDataset,
    /// Name is not a valid Python identifier
    InvalidIdentifier,
    /// An artifact could not be rendered
    EmitFailure,
}

impl DiagnosticCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DanglingEdge => "dangling_edge",
            Self::TypeMismatchEdge => "type_mismatch_edge",
            Self::NameCollision => "name_collision",
            Self::DuplicateNodeId => "duplicate_node_id",
            Self::DuplicateBinding => "duplicate_binding",
            Self::EmptyFunctionBody => "empty_function_body",
            Self::NoDescription => "no_description",
            Self::OrphanDataset => "orphan_dataset",
            Self::InvalidIdentifier => "invalid_identifier",
            Self::EmitFailure => "emit_failure",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single structural problem, pointing at the offending element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    #[serde(rename = "nodeId", skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(rename = "edgeId", skip_serializing_if = "Option::is_none")]
    pub edge_id: Option<String>,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn error(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            node_id: None,
            edge_id: None,
            severity: Severity::Error,
        }
    }

    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            ..Self::error(code, message)
        }
    }

    pub fn with_node(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    pub fn with_edge(mut self, edge_id: impl Into<String>) -> Self {
        self.edge_id = Some(edge_id.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        match (&self.node_id, &self.edge_id) {
            (Some(node), Some(edge)) => write!(f, " (node '{}', edge '{}')", node, edge),
            (Some(node), None) => write!(f, " (node '{}')", node),
            (None, Some(edge)) => write!(f, " (edge '{}')", edge),
            (None, None) => Ok(()),
        }
    }
}

/// Ordered diagnostics accumulator threaded through every stage
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(code = %diagnostic.code, severity = %diagnostic.severity, "{}", diagnostic.message);
        self.items.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.items.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.items.len() - self.error_count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Diagnostics with the given code, in emission order
    pub fn with_code(&self, code: DiagnosticCode) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(move |d| d.code == code)
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}
