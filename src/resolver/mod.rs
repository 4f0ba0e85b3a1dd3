//! Dependency resolver (verb module)
//!
//! Graph → ResolvedGraph: each function node's ordered input and output
//! datasets, found by scanning its incident edges.

mod resolve;
mod types;

pub use resolve::resolve_graph;
pub use types::{DatasetRef, FunctionInfo, ResolvedGraph};
