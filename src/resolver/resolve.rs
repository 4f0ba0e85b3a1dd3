use std::collections::{HashMap, HashSet};
use crate::diagnostics::{Diagnostic, DiagnosticCode, Diagnostics};
use crate::graph::{canonicalize, Edge, Graph, Node, NodeKind};
use super::types::{DatasetRef, FunctionInfo, ResolvedGraph};

/// Direction of a validated edge relative to its function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    Input,
    Output,
}

/// A validated edge: one dataset bound to one function
#[derive(Debug, Clone, Copy)]
struct Binding<'g> {
    direction: Direction,
    dataset: &'g str,
    function: &'g str,
}

/// Resolve the input and output datasets of every function node.
///
/// Bad elements are isolated rather than fatal:
/// 1. Nodes repeating an earlier id are reported and ignored
/// 2. Dangling and same-kind edges are reported and skipped
/// 3. Repeated edges between the same pair collapse into the first one
/// 4. Datasets without any incident edge are reported as orphans
///
/// Inputs and outputs keep edge declaration order. An explicit function
/// name is used as written apart from trimming; names Python would reject
/// are reported by the function emitter, not rewritten here.
pub fn resolve_graph(graph: &Graph, diagnostics: &mut Diagnostics) -> ResolvedGraph {
    // 1. Index nodes by id, first occurrence wins
    let nodes = index_nodes(graph, diagnostics);
    let index: HashMap<&str, &Node> = nodes.iter().map(|n| (n.id.as_str(), *n)).collect();

    // 2. Validate edges into bindings
    let bindings = collect_bindings(graph, &index, diagnostics);

    // 3. Orphan datasets
    for node in nodes.iter().filter(|n| n.is_dataset()) {
        if !graph.edges.iter().any(|e| e.touches(&node.id)) {
            diagnostics.push(
                Diagnostic::warning(
                    DiagnosticCode::OrphanDataset,
                    format!("Dataset '{}' is not connected to any function", node.label),
                )
                .with_node(&node.id),
            );
        }
    }

    // 4. Datasets in node order
    let datasets: Vec<DatasetRef> = nodes.iter().filter_map(|n| dataset_ref(n)).collect();
    let dataset_index: HashMap<&str, &DatasetRef> =
        datasets.iter().map(|d| (d.id.as_str(), d)).collect();

    // 5. Functions in node order, each with its bindings
    let functions: Vec<FunctionInfo> = nodes
        .iter()
        .filter_map(|node| function_info(node, &bindings, &dataset_index))
        .collect();

    tracing::debug!(
        datasets = datasets.len(),
        functions = functions.len(),
        bindings = bindings.len(),
        "resolved graph"
    );

    ResolvedGraph { datasets, functions }
}

/// Keep the first node for every id, reporting later duplicates
fn index_nodes<'g>(graph: &'g Graph, diagnostics: &mut Diagnostics) -> Vec<&'g Node> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut nodes = Vec::with_capacity(graph.nodes.len());

    for node in &graph.nodes {
        if seen.insert(node.id.as_str()) {
            nodes.push(node);
        } else {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticCode::DuplicateNodeId,
                    format!(
                        "Node id '{}' is used more than once; {} '{}' is ignored",
                        node.id,
                        node.kind_name(),
                        node.label
                    ),
                )
                .with_node(&node.id),
            );
        }
    }

    nodes
}

/// Turn edges into dataset/function bindings, skipping anything invalid
fn collect_bindings<'g>(
    graph: &'g Graph,
    index: &HashMap<&str, &'g Node>,
    diagnostics: &mut Diagnostics,
) -> Vec<Binding<'g>> {
    let mut seen: HashSet<(Direction, &str, &str)> = HashSet::new();
    let mut bindings = Vec::new();

    for edge in &graph.edges {
        let Some(binding) = classify_edge(edge, index, diagnostics) else {
            continue;
        };

        if !seen.insert((binding.direction, binding.dataset, binding.function)) {
            diagnostics.push(
                Diagnostic::warning(
                    DiagnosticCode::DuplicateBinding,
                    format!(
                        "Edge '{}' repeats an existing binding from '{}' to '{}'",
                        edge.id, edge.source, edge.target
                    ),
                )
                .with_edge(&edge.id),
            );
            continue;
        }

        bindings.push(binding);
    }

    bindings
}

fn classify_edge<'g>(
    edge: &'g Edge,
    index: &HashMap<&str, &'g Node>,
    diagnostics: &mut Diagnostics,
) -> Option<Binding<'g>> {
    let source = index.get(edge.source.as_str());
    let target = index.get(edge.target.as_str());

    let (source, target) = match (source, target) {
        (Some(s), Some(t)) => (*s, *t),
        (None, None) => {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticCode::DanglingEdge,
                    format!(
                        "Edge '{}' references unknown nodes '{}' and '{}'",
                        edge.id, edge.source, edge.target
                    ),
                )
                .with_edge(&edge.id),
            );
            return None;
        }
        (None, Some(t)) => {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticCode::DanglingEdge,
                    format!("Edge '{}' references unknown source node '{}'", edge.id, edge.source),
                )
                .with_node(&t.id)
                .with_edge(&edge.id),
            );
            return None;
        }
        (Some(s), None) => {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticCode::DanglingEdge,
                    format!("Edge '{}' references unknown target node '{}'", edge.id, edge.target),
                )
                .with_node(&s.id)
                .with_edge(&edge.id),
            );
            return None;
        }
    };

    match (&source.kind, &target.kind) {
        (NodeKind::Dataset(_), NodeKind::Function(_)) => Some(Binding {
            direction: Direction::Input,
            dataset: source.id.as_str(),
            function: target.id.as_str(),
        }),
        (NodeKind::Function(_), NodeKind::Dataset(_)) => Some(Binding {
            direction: Direction::Output,
            dataset: target.id.as_str(),
            function: source.id.as_str(),
        }),
        (NodeKind::Dataset(_), NodeKind::Dataset(_))
        | (NodeKind::Function(_), NodeKind::Function(_)) => {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticCode::TypeMismatchEdge,
                    format!(
                        "Edge '{}' connects {} '{}' to {} '{}'; edges must join a dataset and a function",
                        edge.id,
                        source.kind_name(),
                        source.label,
                        target.kind_name(),
                        target.label
                    ),
                )
                .with_node(&source.id)
                .with_edge(&edge.id),
            );
            None
        }
    }
}

fn dataset_ref(node: &Node) -> Option<DatasetRef> {
    match &node.kind {
        NodeKind::Dataset(payload) => Some(DatasetRef {
            id: node.id.clone(),
            name: canonicalize(&node.label),
            label: node.label.clone(),
            storage_type: payload.storage_type.clone(),
            location: payload.location.clone(),
            description: payload.description.clone(),
        }),
        NodeKind::Function(_) => None,
    }
}

fn function_info(
    node: &Node,
    bindings: &[Binding<'_>],
    datasets: &HashMap<&str, &DatasetRef>,
) -> Option<FunctionInfo> {
    let payload = match &node.kind {
        NodeKind::Function(payload) => payload,
        NodeKind::Dataset(_) => return None,
    };

    let bound = |direction: Direction| -> Vec<DatasetRef> {
        bindings
            .iter()
            .filter(|b| b.direction == direction && b.function == node.id)
            .filter_map(|b| datasets.get(b.dataset).map(|d| (*d).clone()))
            .collect()
    };

    let identifier = payload
        .function_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| canonicalize(&node.label));

    Some(FunctionInfo {
        id: node.id.clone(),
        label: node.label.clone(),
        identifier,
        body: payload.body.clone(),
        description: payload.description.clone(),
        inputs: bound(Direction::Input),
        outputs: bound(Direction::Output),
    })
}
