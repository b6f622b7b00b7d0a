use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use smartspace_inventory::InventoryRecord;

use super::{InventorySource, SourceError};

const PRODUCT_CATEGORIES: [&str; 5] = ["Electronics", "Apparel", "Home Goods", "Beauty", "Groceries"];

/// Random warehouse simulation.
///
/// Generates `PROD_001..` records spread over `LOC_01..LOC_{locations}`.
/// With a seed the output is reproducible; without one every load differs.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    records: usize,
    locations: usize,
    seed: Option<u64>,
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self {
            records: 100,
            locations: 50,
            seed: None,
        }
    }
}

impl SyntheticSource {
    pub fn new(records: usize) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn with_locations(mut self, locations: usize) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn generate(&self, rng: &mut StdRng) -> Vec<InventoryRecord> {
        (1..=self.records)
            .map(|i| {
                let item_type = if rng.gen_bool(0.8) { "SKU" } else { "Non-SKU" };
                let category = PRODUCT_CATEGORIES[rng.gen_range(0..PRODUCT_CATEGORIES.len())];
                let daily_demand = f64::from(rng.gen_range(1u32..=100));
                let current_stock = f64::from(rng.gen_range(0u32..=500));
                let unit_cost = round2(rng.gen_range(1.0..200.0));
                let weight_kg = round2(rng.gen_range(0.1..50.0));
                let location = format!("LOC_{:02}", rng.gen_range(1..=self.locations));

                InventoryRecord::new(format!("PROD_{i:03}"), current_stock, daily_demand, location)
                    .with_unit_cost(unit_cost)
                    .with_item_type(item_type)
                    .with_product_category(category)
                    .with_weight_kg(weight_kg)
            })
            .collect()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl InventorySource for SyntheticSource {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn load(&self) -> Result<Vec<InventoryRecord>, SourceError> {
        if self.records == 0 {
            return Err(SourceError::InvalidSettings("record count must be positive".into()));
        }
        if self.locations == 0 {
            return Err(SourceError::InvalidSettings("location count must be positive".into()));
        }

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(self.generate(&mut rng))
    }
}
