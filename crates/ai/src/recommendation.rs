use serde::{Deserialize, Serialize};

use smartspace_kpi::{KpiName, KpiSet, KpiValue};

/// An action item tied to one KPI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kpi: KpiName,
    /// The KPI value the action text was rendered against.
    pub current_state: KpiValue,
    pub action_text: String,
}

/// KPIs that get an action item, in display order.
const RECOMMENDED: [KpiName; 6] = [
    KpiName::StorageUtilizationRate,
    KpiName::ConsolidationIndex,
    KpiName::AveragePickTime,
    KpiName::SlottingAccuracy,
    KpiName::AbcZoneEfficiency,
    KpiName::SpaceCostPerUnit,
];

/// One recommendation per KPI of interest.
///
/// The template is chosen by KPI identity only; the value is interpolated
/// but never branched on.
pub fn generate_recommendations(kpis: &KpiSet) -> Vec<Recommendation> {
    RECOMMENDED
        .iter()
        .map(|name| {
            let value = kpis.get(*name);
            Recommendation {
                kpi: *name,
                current_state: value,
                action_text: action_text(*name, value, kpis),
            }
        })
        .collect()
}

fn action_text(name: KpiName, value: KpiValue, kpis: &KpiSet) -> String {
    match name {
        KpiName::StorageUtilizationRate => format!(
            "Storage utilization stands at {value}. Review the long-tail C assortment to free capacity for faster movers."
        ),
        KpiName::ConsolidationIndex => format!(
            "Slotting maps {} initial locations onto {} recommended slots (consolidation index {value}). Merge partial slots within each zone to cut fragmented storage.",
            kpis.initial_locations, kpis.optimized_locations
        ),
        KpiName::AveragePickTime => format!(
            "Average pick time is about {value} per order. Keep A items in the most accessible slots to shorten picker travel."
        ),
        KpiName::SlottingAccuracy => format!(
            "Slotting accuracy is {value}. Re-run the analysis whenever demand profiles shift so slot assignments stay current."
        ),
        KpiName::AbcZoneEfficiency => format!(
            "A-zone efficiency is {value}. Watch demand trends so prime space is not taken up by overstock."
        ),
        KpiName::SpaceCostPerUnit => format!(
            "Space cost is {value} per unit stored. Retire slow-moving SKUs to bring the per-unit cost down further."
        ),
        other => format!("{} is {value}.", other.label()),
    }
}
