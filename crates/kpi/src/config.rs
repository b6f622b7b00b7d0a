use serde::{Deserialize, Serialize};

use smartspace_core::Category;

/// What counts as "occupied" for the storage utilisation rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationBasis {
    /// One occupied slot per slotted record.
    Slots,
    /// Summed `current_stock` of the slotted records.
    #[default]
    Stock,
}

/// Per-category pick time, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickTimes {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl PickTimes {
    pub fn for_category(&self, category: Category) -> f64 {
        match category {
            Category::A => self.a,
            Category::B => self.b,
            Category::C => self.c,
        }
    }
}

impl Default for PickTimes {
    fn default() -> Self {
        Self {
            a: 20.0,
            b: 60.0,
            c: 120.0,
        }
    }
}

/// Fixed constants the KPI calculator works against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiConfig {
    /// Total available capacity, in the unit chosen by `utilization_basis`.
    pub total_capacity: f64,
    pub utilization_basis: UtilizationBasis,
    pub pick_times: PickTimes,
    /// Total cost of the storage space, spread over the units stored.
    pub total_space_cost: f64,
    /// Reported as configured; not derived from the tables.
    pub slotting_accuracy: f64,
    /// Reported as configured; not derived from the tables.
    pub abc_zone_efficiency: f64,
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            total_capacity: 50_000.0,
            utilization_basis: UtilizationBasis::Stock,
            pick_times: PickTimes::default(),
            total_space_cost: 500_000.0,
            slotting_accuracy: 90.0,
            abc_zone_efficiency: 85.0,
        }
    }
}
