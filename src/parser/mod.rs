//! Graph parser (verb module)
//!
//! Transforms YAML or JSON graph files into a [`Graph`] snapshot.

use std::path::Path;
use crate::error::ParseError;
use crate::graph::Graph;

/// Parse a graph from a file. `.json` files are read as JSON, anything else
/// as YAML.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Graph, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str,
        source: e,
    })?;

    let is_json = path
        .as_ref()
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        parse_json(&contents)
    } else {
        parse_str(&contents)
    }
}

/// Parse a graph from a YAML string
pub fn parse_str(yaml: &str) -> Result<Graph, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}

/// Parse a graph from a JSON string
pub fn parse_json(json: &str) -> Result<Graph, ParseError> {
    serde_json::from_str(json).map_err(ParseError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;
    use std::io::Write;

    const STARTER: &str = r#"
nodes:
  - id: dataset-1
    type: dataset
    position: { x: 250, y: 100 }
    data:
      label: Raw Data
      type: pandas.CSVDataSet
      filepath: data/01_raw/data.csv
      description: Raw input data
  - id: function-1
    type: function
    data:
      label: Process Data
      function_name: process_data
edges:
  - id: edge-1
    source: dataset-1
    target: function-1
    animated: true
"#;

    #[test]
    fn test_parse_yaml_graph() {
        let graph = parse_str(STARTER).unwrap();

        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 1);

        let raw = graph.get_node("dataset-1").unwrap();
        assert_eq!(raw.label, "Raw Data");
        assert!(matches!(&raw.kind, NodeKind::Dataset(p) if p.storage_type == "pandas.CSVDataSet"));

        let edge = &graph.edges[0];
        assert_eq!(edge.source, "dataset-1");
        assert_eq!(edge.target, "function-1");
    }

    #[test]
    fn test_parse_json_graph() {
        let json = r#"{
            "nodes": [
                { "id": "d", "type": "dataset", "data": { "label": "D", "type": "t", "filepath": "p" } }
            ]
        }"#;
        let graph = parse_json(json).unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_parse_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "nodes": [], "edges": [] }}"#).unwrap();
        let graph = parse_file(file.path()).unwrap();
        assert_eq!(graph, Graph::default());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_str("nodes: [unclosed: yaml");
        assert!(matches!(result, Err(ParseError::Yaml { .. })));
    }

    #[test]
    fn test_parse_missing_file() {
        let result = parse_file("no/such/graph.yaml");
        assert!(matches!(result, Err(ParseError::Io { .. })));
    }
}
