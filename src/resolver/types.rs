//! Types for resolved graph components
//!
//! Everything here is owned. Later stages never hold references back into
//! the input graph.

use serde::Serialize;

/// A dataset as seen by the downstream compilers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetRef {
    /// Node id
    pub id: String,
    /// Canonical binding name (the key used in every artifact)
    pub name: String,
    /// Original label, used in generated docs
    pub label: String,
    pub storage_type: String,
    pub location: String,
    pub description: Option<String>,
}

/// A function node together with its resolved bindings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionInfo {
    /// Node id
    pub id: String,
    pub label: String,
    /// Function identifier: explicit name, else the canonical label
    pub identifier: String,
    pub body: Option<String>,
    pub description: Option<String>,
    /// Input datasets, in edge declaration order
    pub inputs: Vec<DatasetRef>,
    /// Output datasets, in edge declaration order
    pub outputs: Vec<DatasetRef>,
}

impl FunctionInfo {
    pub fn input_names(&self) -> Vec<&str> {
        self.inputs.iter().map(|d| d.name.as_str()).collect()
    }

    pub fn output_names(&self) -> Vec<&str> {
        self.outputs.iter().map(|d| d.name.as_str()).collect()
    }

    /// Non-blank user body, if any
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref().filter(|b| !b.trim().is_empty())
    }

    /// Non-blank description, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// Output of the resolver: datasets and functions in node declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedGraph {
    pub datasets: Vec<DatasetRef>,
    pub functions: Vec<FunctionInfo>,
}

impl ResolvedGraph {
    /// Get a resolved function by node id
    pub fn get_function(&self, id: &str) -> Option<&FunctionInfo> {
        self.functions.iter().find(|f| f.id == id)
    }

    /// Get a resolved dataset by node id
    pub fn get_dataset(&self, id: &str) -> Option<&DatasetRef> {
        self.datasets.iter().find(|d| d.id == id)
    }
}
