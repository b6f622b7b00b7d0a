use serde::{Deserialize, Serialize};

use smartspace_core::Category;

/// Identity of a reported metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiName {
    TotalSkus,
    CategoryCount(Category),
    CategoryPercentage(Category),
    StorageUtilizationRate,
    InitialLocations,
    OptimizedLocations,
    ConsolidationIndex,
    AveragePickTime,
    SlottingAccuracy,
    AbcZoneEfficiency,
    SpaceCostPerUnit,
}

impl KpiName {
    pub fn label(self) -> String {
        match self {
            KpiName::TotalSkus => "Total SKUs".to_string(),
            KpiName::CategoryCount(c) => format!("Category {c} Items"),
            KpiName::CategoryPercentage(c) => format!("Category {c} Share (%)"),
            KpiName::StorageUtilizationRate => "Storage Utilization Rate (%)".to_string(),
            KpiName::InitialLocations => "Initial Locations".to_string(),
            KpiName::OptimizedLocations => "Optimized Locations".to_string(),
            KpiName::ConsolidationIndex => "Inventory Consolidation Index (%)".to_string(),
            KpiName::AveragePickTime => "Average Pick Time (seconds/order)".to_string(),
            KpiName::SlottingAccuracy => "Slotting Accuracy (%)".to_string(),
            KpiName::AbcZoneEfficiency => "ABC Zone Efficiency (%)".to_string(),
            KpiName::SpaceCostPerUnit => "Space Cost per Unit Stored".to_string(),
        }
    }
}

impl core::fmt::Display for KpiName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.label())
    }
}

/// A metric value with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum KpiValue {
    Count(usize),
    Percent(f64),
    Seconds(f64),
    Currency(f64),
}

impl KpiValue {
    pub fn as_f64(self) -> f64 {
        match self {
            KpiValue::Count(n) => n as f64,
            KpiValue::Percent(v) | KpiValue::Seconds(v) | KpiValue::Currency(v) => v,
        }
    }
}

impl core::fmt::Display for KpiValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KpiValue::Count(n) => write!(f, "{n}"),
            KpiValue::Percent(v) => write!(f, "{v:.2}%"),
            KpiValue::Seconds(v) => write!(f, "{v:.2} s"),
            KpiValue::Currency(v) => write!(f, "{v:.2}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub name: KpiName,
    pub value: KpiValue,
}
