use std::collections::HashMap;
use crate::diagnostics::{Diagnostic, DiagnosticCode, Diagnostics};
use crate::graph::is_identifier;
use crate::resolver::DatasetRef;
use super::types::CatalogEntry;

/// Build catalog entries from resolved datasets.
///
/// Output order matches input order. When two datasets canonicalize to the
/// same name, the first keeps the entry and every later one is reported as a
/// `NameCollision` and left out.
pub fn build_catalog(datasets: &[DatasetRef], diagnostics: &mut Diagnostics) -> Vec<CatalogEntry> {
    let mut owners: HashMap<&str, &DatasetRef> = HashMap::new();
    let mut entries = Vec::with_capacity(datasets.len());

    for dataset in datasets {
        if let Some(first) = owners.get(dataset.name.as_str()) {
            diagnostics.push(
                Diagnostic::error(
                    DiagnosticCode::NameCollision,
                    format!(
                        "Dataset '{}' and dataset '{}' (node '{}') both map to catalog name '{}'",
                        dataset.label, first.label, first.id, dataset.name
                    ),
                )
                .with_node(&dataset.id),
            );
            continue;
        }
        owners.insert(dataset.name.as_str(), dataset);

        if !is_identifier(&dataset.name) {
            diagnostics.push(
                Diagnostic::warning(
                    DiagnosticCode::InvalidIdentifier,
                    format!(
                        "Dataset name '{}' is not a valid Python identifier and cannot be used as a parameter",
                        dataset.name
                    ),
                )
                .with_node(&dataset.id),
            );
        }

        let description = dataset
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .map(str::to_string);

        if description.is_none() {
            diagnostics.push(
                Diagnostic::warning(
                    DiagnosticCode::NoDescription,
                    format!("Dataset '{}' has no description", dataset.label),
                )
                .with_node(&dataset.id),
            );
        }

        entries.push(CatalogEntry {
            name: dataset.name.clone(),
            storage_type: dataset.storage_type.clone(),
            location: dataset.location.clone(),
            description,
        });
    }

    tracing::debug!(entries = entries.len(), "built catalog");
    entries
}
