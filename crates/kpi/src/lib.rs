//! KPI calculator.
//!
//! Derives summary metrics comparing the inventory before optimisation with the
//! slotted table after it. Pure and deterministic: the same two tables and the
//! same constants always give the same `KpiSet`.

pub mod calculator;
pub mod config;
pub mod metric;

pub use calculator::{average_pick_time, compute_kpis, consolidation_index, CategoryBreakdown, KpiSet};
pub use config::{KpiConfig, PickTimes, UtilizationBasis};
pub use metric::{KpiName, KpiValue, Metric};
