//! Compilation orchestrator (verb module)
//!
//! Graph → Compilation. Runs resolver, catalog, function module and
//! assembly in a fixed order and turns the collected diagnostics into a
//! verdict.

mod compile;
mod project;
mod types;

pub use compile::{compile_project, compile_project_with};
pub use project::ProjectLayout;
pub use types::{Artifacts, Compilation};
