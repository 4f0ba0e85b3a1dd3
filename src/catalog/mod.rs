//! Catalog compiler (verb module)
//!
//! DatasetRef list → CatalogEntry list, one entry per dataset in node order.

mod build;
mod types;

pub use build::build_catalog;
pub use types::CatalogEntry;
