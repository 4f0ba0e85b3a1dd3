//! Kedro-Viz export
//!
//! Converts the graph into the JSON document Kedro-Viz loads: dataset
//! nodes become `data`, function nodes become `task`, and every node is a
//! child of the root modular pipeline.

use std::collections::{BTreeMap, HashSet};
use serde::Serialize;
use serde_json::Value;
use crate::graph::{Graph, NodeKind};
use super::error::EmitError;

const DEFAULT_PIPELINE: &str = "__default__";
const ROOT_PIPELINE: &str = "__root__";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VizDocument {
    pub nodes: Vec<VizNode>,
    pub edges: Vec<VizEdge>,
    pub tags: Vec<String>,
    pub pipelines: Vec<VizPipeline>,
    pub modular_pipelines: BTreeMap<String, VizModularPipeline>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VizNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub pipelines: Vec<String>,
    pub tags: Vec<String>,
    pub modular_pipelines: Vec<String>,
    /// `null` on data nodes, absent on tasks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<Value>,
    /// `{}` on tasks, absent on data nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VizEdge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VizPipeline {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VizModularPipeline {
    pub id: String,
    pub name: String,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub children: Vec<VizChild>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VizChild {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Build the Kedro-Viz document. Edges with an unknown endpoint are left out.
pub fn viz_document(graph: &Graph) -> VizDocument {
    let mut nodes = Vec::with_capacity(graph.nodes.len());
    let mut children = Vec::with_capacity(graph.nodes.len());
    let mut known: HashSet<&str> = HashSet::new();

    for node in &graph.nodes {
        if !known.insert(node.id.as_str()) {
            continue;
        }

        let (kind, layer, parameters) = match node.kind {
            NodeKind::Dataset(_) => ("data", Some(Value::Null), None),
            NodeKind::Function(_) => ("task", None, Some(BTreeMap::new())),
        };
        let name = if node.label.is_empty() { node.id.clone() } else { node.label.clone() };

        nodes.push(VizNode {
            id: node.id.clone(),
            name,
            kind: kind.to_string(),
            pipelines: vec![DEFAULT_PIPELINE.to_string()],
            tags: vec![],
            modular_pipelines: vec![],
            layer,
            parameters,
        });
        children.push(VizChild {
            id: node.id.clone(),
            kind: kind.to_string(),
        });
    }

    let edges = graph
        .edges
        .iter()
        .filter(|e| known.contains(e.source.as_str()) && known.contains(e.target.as_str()))
        .map(|e| VizEdge {
            source: e.source.clone(),
            target: e.target.clone(),
        })
        .collect();

    let mut modular_pipelines = BTreeMap::new();
    modular_pipelines.insert(
        ROOT_PIPELINE.to_string(),
        VizModularPipeline {
            id: ROOT_PIPELINE.to_string(),
            name: ROOT_PIPELINE.to_string(),
            inputs: vec![],
            outputs: vec![],
            children,
        },
    );

    VizDocument {
        nodes,
        edges,
        tags: vec![],
        pipelines: vec![VizPipeline {
            id: DEFAULT_PIPELINE.to_string(),
            name: "Default".to_string(),
        }],
        modular_pipelines,
    }
}

/// Emit the Kedro-Viz document as pretty-printed JSON
pub fn emit_viz(graph: &Graph) -> Result<String, EmitError> {
    Ok(serde_json::to_string_pretty(&viz_document(graph))?)
}
