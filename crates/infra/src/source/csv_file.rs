use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use smartspace_inventory::InventoryRecord;

use super::{InventorySource, SourceError};

/// Headered CSV file with one inventory record per row.
///
/// Required columns: `id`, `current_stock`, `daily_demand` (or `monthly_sales`),
/// `current_location`. Optional: `unit_cost`, `product_category`, `item_type`,
/// `weight_kg`.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InventorySource for CsvSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<Vec<InventoryRecord>, SourceError> {
        let file = File::open(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        read_records(BufReader::new(file))
    }
}

/// Parse inventory records from any CSV reader.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<InventoryRecord>, SourceError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.deserialize::<InventoryRecord>() {
        records.push(row?);
    }
    Ok(records)
}
