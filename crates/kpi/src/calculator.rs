use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use smartspace_core::{checked_ratio, AnalysisResult, Category};
use smartspace_inventory::{InventoryTable, SlottedRecord};

use crate::config::{KpiConfig, PickTimes, UtilizationBasis};
use crate::metric::{KpiName, KpiValue, Metric};

/// Per-category slice of the slotted table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub count: usize,
    /// Share of slotted rows, in percent.
    pub percentage: f64,
    /// Summed `daily_demand` of the category.
    pub demand: f64,
}

/// KPIs for one pipeline run. Computed once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSet {
    pub total_skus: usize,
    /// Always three entries, in `A, B, C` order.
    pub categories: Vec<CategoryBreakdown>,
    pub storage_utilization_rate: f64,
    pub initial_locations: usize,
    pub optimized_locations: usize,
    /// Negative when the new layout uses more distinct slots than the old one.
    pub consolidation_index: f64,
    pub average_pick_time: f64,
    pub space_cost_per_unit: f64,
    pub slotting_accuracy: f64,
    pub abc_zone_efficiency: f64,
}

impl KpiSet {
    pub fn category(&self, category: Category) -> &CategoryBreakdown {
        &self.categories[category.index()]
    }

    pub fn get(&self, name: KpiName) -> KpiValue {
        match name {
            KpiName::TotalSkus => KpiValue::Count(self.total_skus),
            KpiName::CategoryCount(c) => KpiValue::Count(self.category(c).count),
            KpiName::CategoryPercentage(c) => KpiValue::Percent(self.category(c).percentage),
            KpiName::StorageUtilizationRate => KpiValue::Percent(self.storage_utilization_rate),
            KpiName::InitialLocations => KpiValue::Count(self.initial_locations),
            KpiName::OptimizedLocations => KpiValue::Count(self.optimized_locations),
            KpiName::ConsolidationIndex => KpiValue::Percent(self.consolidation_index),
            KpiName::AveragePickTime => KpiValue::Seconds(self.average_pick_time),
            KpiName::SlottingAccuracy => KpiValue::Percent(self.slotting_accuracy),
            KpiName::AbcZoneEfficiency => KpiValue::Percent(self.abc_zone_efficiency),
            KpiName::SpaceCostPerUnit => KpiValue::Currency(self.space_cost_per_unit),
        }
    }

    /// Every metric as a flat name → value list, in display order.
    pub fn metrics(&self) -> Vec<Metric> {
        let mut names = vec![KpiName::TotalSkus];
        for c in Category::ALL {
            names.push(KpiName::CategoryCount(c));
            names.push(KpiName::CategoryPercentage(c));
        }
        names.extend([
            KpiName::StorageUtilizationRate,
            KpiName::InitialLocations,
            KpiName::OptimizedLocations,
            KpiName::ConsolidationIndex,
            KpiName::AveragePickTime,
            KpiName::SlottingAccuracy,
            KpiName::AbcZoneEfficiency,
            KpiName::SpaceCostPerUnit,
        ]);
        names
            .into_iter()
            .map(|name| Metric {
                name,
                value: self.get(name),
            })
            .collect()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage reduction in distinct locations.
pub fn consolidation_index(before_locations: usize, after_locations: usize) -> AnalysisResult<f64> {
    let reduction = before_locations as f64 - after_locations as f64;
    Ok(checked_ratio(reduction, before_locations as f64, "consolidation index")? * 100.0)
}

/// Demand-weighted average of the per-category pick times.
///
/// `demand_by_category` is indexed by `Category::index`.
pub fn average_pick_time(demand_by_category: [f64; 3], pick_times: &PickTimes) -> AnalysisResult<f64> {
    let weighted: f64 = Category::ALL
        .iter()
        .map(|c| demand_by_category[c.index()] * pick_times.for_category(*c))
        .sum();
    let total: f64 = demand_by_category.iter().sum();
    checked_ratio(weighted, total, "average pick time")
}

/// Compute the KPI set for one run.
pub fn compute_kpis(
    before: &InventoryTable,
    after: &[SlottedRecord],
    config: &KpiConfig,
) -> AnalysisResult<KpiSet> {
    let mut counts = [0usize; 3];
    let mut demand = [0.0f64; 3];
    for row in after {
        let i = row.category().index();
        counts[i] += 1;
        demand[i] += row.daily_demand();
    }

    let categories = Category::ALL
        .iter()
        .map(|c| {
            let i = c.index();
            let share = checked_ratio(counts[i] as f64, after.len() as f64, "category percentage")?;
            Ok(CategoryBreakdown {
                category: *c,
                count: counts[i],
                percentage: round2(share * 100.0),
                demand: demand[i],
            })
        })
        .collect::<AnalysisResult<Vec<_>>>()?;

    let stored_units: f64 = after.iter().map(SlottedRecord::current_stock).sum();
    let occupied = match config.utilization_basis {
        UtilizationBasis::Slots => after.len() as f64,
        UtilizationBasis::Stock => stored_units,
    };
    let utilization = checked_ratio(occupied, config.total_capacity, "storage utilization rate")? * 100.0;

    let initial_locations = before.distinct_locations().len();
    let optimized_locations = after
        .iter()
        .map(|r| &r.new_location)
        .collect::<BTreeSet<_>>()
        .len();

    let space_cost = checked_ratio(config.total_space_cost, stored_units, "space cost per unit")?;

    Ok(KpiSet {
        total_skus: before.len(),
        categories,
        storage_utilization_rate: round2(utilization),
        initial_locations,
        optimized_locations,
        consolidation_index: round2(consolidation_index(initial_locations, optimized_locations)?),
        average_pick_time: round2(average_pick_time(demand, &config.pick_times)?),
        space_cost_per_unit: round2(space_cost),
        slotting_accuracy: config.slotting_accuracy,
        abc_zone_efficiency: config.abc_zone_efficiency,
    })
}
