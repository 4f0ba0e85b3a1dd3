//! Node definitions

use serde::{Deserialize, Serialize};

/// Canvas position of a node. Carried through for round-tripping only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A node in the pipeline graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "NodeRecord", into = "NodeRecord")]
pub struct Node {
    /// Unique, stable identifier
    pub id: String,
    /// Human-readable name shown on the canvas
    pub label: String,
    pub position: Position,
    pub kind: NodeKind,
}

/// Kind-specific node payload
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Dataset(DatasetPayload),
    Function(FunctionPayload),
}

/// Payload of a dataset node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetPayload {
    /// Storage backend identifier (e.g., "pandas.CSVDataSet")
    pub storage_type: String,
    /// Path of the stored data
    pub location: String,
    pub description: Option<String>,
}

/// Payload of a function node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FunctionPayload {
    /// Explicit function identifier; derived from the label when absent
    pub function_name: Option<String>,
    /// User-supplied function body
    pub body: Option<String>,
    pub description: Option<String>,
}

impl Node {
    pub fn dataset(
        id: impl Into<String>,
        label: impl Into<String>,
        storage_type: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position: Position::default(),
            kind: NodeKind::Dataset(DatasetPayload {
                storage_type: storage_type.into(),
                location: location.into(),
                description: None,
            }),
        }
    }

    pub fn function(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position: Position::default(),
            kind: NodeKind::Function(FunctionPayload::default()),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = Some(description.into());
        match &mut self.kind {
            NodeKind::Dataset(payload) => payload.description = description,
            NodeKind::Function(payload) => payload.description = description,
        }
        self
    }

    /// Set the explicit function name (no-op on dataset nodes)
    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        if let NodeKind::Function(payload) = &mut self.kind {
            payload.function_name = Some(name.into());
        }
        self
    }

    /// Set the function body (no-op on dataset nodes)
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        if let NodeKind::Function(payload) = &mut self.kind {
            payload.body = Some(body.into());
        }
        self
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Position { x, y };
        self
    }

    pub fn is_dataset(&self) -> bool {
        matches!(self.kind, NodeKind::Dataset(_))
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, NodeKind::Function(_))
    }

    /// Kind name as used in messages ("dataset" or "function")
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            NodeKind::Dataset(_) => "dataset",
            NodeKind::Function(_) => "function",
        }
    }

    /// Non-blank description, if any
    pub fn description(&self) -> Option<&str> {
        let description = match &self.kind {
            NodeKind::Dataset(payload) => payload.description.as_deref(),
            NodeKind::Function(payload) => payload.description.as_deref(),
        };
        description.filter(|d| !d.trim().is_empty())
    }
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

/// On-disk node shape: the kind is the `type` tag and the label lives
/// inside `data` alongside the kind-specific fields.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum NodeRecord {
    Dataset {
        id: String,
        #[serde(default)]
        position: Position,
        data: DatasetRecord,
    },
    Function {
        id: String,
        #[serde(default)]
        position: Position,
        data: FunctionRecord,
    },
}

#[derive(Serialize, Deserialize)]
struct DatasetRecord {
    label: String,
    #[serde(rename = "type", default)]
    storage_type: String,
    #[serde(default)]
    filepath: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct FunctionRecord {
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    function_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl From<NodeRecord> for Node {
    fn from(record: NodeRecord) -> Self {
        match record {
            NodeRecord::Dataset { id, position, data } => Node {
                id,
                label: data.label,
                position,
                kind: NodeKind::Dataset(DatasetPayload {
                    storage_type: data.storage_type,
                    location: data.filepath,
                    description: data.description,
                }),
            },
            NodeRecord::Function { id, position, data } => Node {
                id,
                label: data.label,
                position,
                kind: NodeKind::Function(FunctionPayload {
                    function_name: data.function_name,
                    body: data.code,
                    description: data.description,
                }),
            },
        }
    }
}

impl From<Node> for NodeRecord {
    fn from(node: Node) -> Self {
        match node.kind {
            NodeKind::Dataset(payload) => NodeRecord::Dataset {
                id: node.id,
                position: node.position,
                data: DatasetRecord {
                    label: node.label,
                    storage_type: payload.storage_type,
                    filepath: payload.location,
                    description: payload.description,
                },
            },
            NodeKind::Function(payload) => NodeRecord::Function {
                id: node.id,
                position: node.position,
                data: FunctionRecord {
                    label: node.label,
                    function_name: payload.function_name,
                    code: payload.body,
                    description: payload.description,
                },
            },
        }
    }
}
