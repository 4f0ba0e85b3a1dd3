//! Pipeline step types

use serde::Serialize;

/// Output spec of a single step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StepOutputs {
    /// No output datasets
    None,
    /// Exactly one output, written as a bare name
    Single(String),
    /// Two or more outputs, written as a list
    Many(Vec<String>),
}

impl StepOutputs {
    pub fn from_names(mut names: Vec<String>) -> Self {
        match names.len() {
            0 => StepOutputs::None,
            1 => StepOutputs::Single(names.remove(0)),
            _ => StepOutputs::Many(names),
        }
    }
}

/// One step of the assembled pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineStep {
    /// Function node id this step was built from
    pub node_id: String,
    /// Step name, derived from the function identifier
    pub name: String,
    /// Function identifier called by the step
    pub func: String,
    pub inputs: Vec<String>,
    pub outputs: StepOutputs,
}

/// Ordered list of pipeline steps
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Assembly {
    pub steps: Vec<PipelineStep>,
}

impl Assembly {
    /// Function identifiers in step order
    pub fn functions(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.func.as_str()).collect()
    }

    pub fn get_step(&self, name: &str) -> Option<&PipelineStep> {
        self.steps.iter().find(|s| s.name == name)
    }
}
