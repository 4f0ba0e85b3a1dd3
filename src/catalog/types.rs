//! Catalog entry types

use serde::Serialize;

/// One dataset declaration in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Canonical dataset name
    pub name: String,
    /// Storage backend, written as `type:`
    #[serde(rename = "type")]
    pub storage_type: String,
    /// Storage location, written as `filepath:`
    #[serde(rename = "filepath")]
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
