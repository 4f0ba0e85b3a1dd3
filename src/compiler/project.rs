//! Kedro project layout
//!
//! Where each artifact lands inside a generated project. Pure path
//! arithmetic; nothing here touches the filesystem.

use std::path::{Path, PathBuf};
use crate::config::CompilerOptions;
use crate::graph::canonicalize;

/// Artifact locations for one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// `<directory>/<project name>`
    root: PathBuf,
    /// Python package name, the canonical project name
    package: String,
    pipeline: String,
}

impl ProjectLayout {
    pub fn new(directory: impl AsRef<Path>, project_name: &str, options: &CompilerOptions) -> Self {
        Self {
            root: directory.as_ref().join(project_name),
            package: canonicalize(project_name).replace('-', "_"),
            pipeline: options.pipeline_name.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// `<root>/src/<package>/pipelines/<pipeline>`
    pub fn pipeline_dir(&self) -> PathBuf {
        self.root
            .join("src")
            .join(&self.package)
            .join("pipelines")
            .join(&self.pipeline)
    }

    /// `<root>/conf/base/catalog`
    pub fn catalog_dir(&self) -> PathBuf {
        self.root.join("conf").join("base").join("catalog")
    }

    pub fn nodes_path(&self) -> PathBuf {
        self.pipeline_dir().join("nodes.py")
    }

    pub fn pipeline_path(&self) -> PathBuf {
        self.pipeline_dir().join("pipeline.py")
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_dir().join(format!("{}.yml", self.pipeline))
    }
}
