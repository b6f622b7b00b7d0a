//! Inventory data sources.
//!
//! A source only has to produce records in the fixed schema; validation happens
//! at the pipeline boundary regardless of where the records came from.

pub mod csv_file;
pub mod synthetic;

use std::path::PathBuf;

use thiserror::Error;

use smartspace_inventory::InventoryRecord;

pub use csv_file::{read_records, CsvSource};
pub use synthetic::SyntheticSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid source settings: {0}")]
    InvalidSettings(String),
}

/// Supplier of raw inventory records.
pub trait InventorySource {
    /// Short name used in logs.
    fn name(&self) -> &str;

    fn load(&self) -> Result<Vec<InventoryRecord>, SourceError>;
}
