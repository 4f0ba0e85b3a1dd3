//! Pipeline-assembly compiler (verb module)
//!
//! FunctionInfo list → ordered PipelineStep list. Steps keep the order the
//! function nodes were declared in; no dependency sorting is applied.

mod build;
mod types;

pub use build::build_assembly;
pub use types::{Assembly, PipelineStep, StepOutputs};
