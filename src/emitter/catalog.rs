//! Catalog emitter
//!
//! Renders catalog entries as a YAML document, one block per dataset with
//! the description as a trailing comment.

use std::collections::BTreeMap;
use serde::Serialize;
use crate::catalog::CatalogEntry;
use crate::config::CompilerOptions;
use super::error::EmitError;

/// Body of one catalog block, in output key order
#[derive(Serialize)]
struct EntryBody<'a> {
    #[serde(rename = "type")]
    storage_type: &'a str,
    filepath: &'a str,
}

/// Emit the catalog document
pub fn emit_catalog(entries: &[CatalogEntry], options: &CompilerOptions) -> Result<String, EmitError> {
    let mut out = format!(
        "# Catalog entries for the pipeline\n# Generated by {}\n",
        options.generator
    );

    for entry in entries {
        out.push('\n');
        out.push_str(&emit_entry(entry)?);
    }

    Ok(out)
}

fn emit_entry(entry: &CatalogEntry) -> Result<String, EmitError> {
    let mut block = BTreeMap::new();
    block.insert(
        entry.name.as_str(),
        EntryBody {
            storage_type: &entry.storage_type,
            filepath: &entry.location,
        },
    );

    let mut out = serde_yaml::to_string(&block)?;
    if !out.ends_with('\n') {
        out.push('\n');
    }

    if let Some(description) = &entry.description {
        for line in description.lines().filter(|l| !l.trim().is_empty()) {
            out.push_str(&format!("  # {}\n", line.trim_end()));
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, description: Option<&str>) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            storage_type: "pandas.CSVDataSet".to_string(),
            location: format!("data/01_raw/{}.csv", name),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_catalog_document() {
        let text = emit_catalog(
            &[entry("raw_data", Some("Raw input data")), entry("lookup", None)],
            &CompilerOptions::default(),
        )
        .unwrap();

        let expected = "\
# Catalog entries for the pipeline
# Generated by Kedro Pipeline Painter

raw_data:
  type: pandas.CSVDataSet
  filepath: data/01_raw/raw_data.csv
  # Raw input data

lookup:
  type: pandas.CSVDataSet
  filepath: data/01_raw/lookup.csv
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_multiline_description_becomes_comment_lines() {
        let text = emit_catalog(
            &[entry("raw_data", Some("First line\n\nSecond line"))],
            &CompilerOptions::default(),
        )
        .unwrap();
        assert!(text.ends_with("  # First line\n  # Second line\n"));
    }

    #[test]
    fn test_output_is_valid_yaml() {
        let mut tricky = entry("flags", None);
        tricky.location = "yes".to_string();
        tricky.storage_type = "kedro.io.MemoryDataSet".to_string();

        let text = emit_catalog(&[tricky, entry("raw_data", Some("x"))], &CompilerOptions::default())
            .unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();

        assert_eq!(parsed["flags"]["filepath"].as_str(), Some("yes"));
        assert_eq!(parsed["raw_data"]["type"].as_str(), Some("pandas.CSVDataSet"));
    }

    #[test]
    fn test_empty_catalog_is_header_only() {
        let text = emit_catalog(&[], &CompilerOptions::default()).unwrap();
        assert_eq!(text, "# Catalog entries for the pipeline\n# Generated by Kedro Pipeline Painter\n");
    }
}
