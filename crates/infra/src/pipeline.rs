//! End-to-end analysis run.
//!
//! Source → Classifier → Slotting Recommender → KPI Calculator → Recommendations
//! (→ optional prose summary). Each run validates its input, builds every table
//! from scratch and hands the caller an `AnalysisReport`; nothing is kept between runs.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, info_span};
use uuid::Uuid;

use smartspace_ai::{generate_recommendations, summarize, Recommendation, Summary, TextGenerator};
use smartspace_core::{AnalysisError, Category};
use smartspace_inventory::{assign_slots, classify, ClassifierConfig, InventoryRecord, InventoryTable, SlottedRecord};
use smartspace_kpi::{compute_kpis, KpiSet};

use crate::config::PipelineConfig;
use crate::source::{InventorySource, SourceError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Result of one pipeline invocation, held by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub classification: ClassifierConfig,
    /// Slotted table, ordered by category then rank value.
    pub records: Vec<SlottedRecord>,
    pub kpis: KpiSet,
    pub recommendations: Vec<Recommendation>,
    pub summary: Summary,
}

impl AnalysisReport {
    pub fn records_in(&self, category: Category) -> impl Iterator<Item = &SlottedRecord> {
        self.records.iter().filter(move |r| r.category() == category)
    }

    /// Number of items whose recommended slot differs from their current one.
    pub fn relocations(&self) -> usize {
        self.records.iter().filter(|r| r.is_relocated()).count()
    }
}

/// Stateless pipeline runner.
///
/// Reentrant: concurrent `run` calls share only the immutable config and the
/// generator handle.
#[derive(Clone)]
pub struct AnalysisPipeline {
    config: PipelineConfig,
    generator: Option<Arc<dyn TextGenerator>>,
}

impl core::fmt::Debug for AnalysisPipeline {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AnalysisPipeline")
            .field("config", &self.config)
            .field("generator", &self.generator.as_ref().map(|g| g.name().to_string()))
            .finish()
    }
}

impl AnalysisPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            generator: None,
        }
    }

    /// Attach a text generator; runs will then request a prose summary.
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load records from `source` and run the analysis on them.
    pub fn run_source(&self, source: &dyn InventorySource) -> Result<AnalysisReport, PipelineError> {
        let records = source.load()?;
        info!(source = source.name(), records = records.len(), "inventory loaded");
        Ok(self.run(records)?)
    }

    /// Run every stage over `records`.
    ///
    /// Stage errors are fatal for the run and no partial report is produced.
    /// Summary failures are not errors: they surface as `Summary::Unavailable`.
    pub fn run(&self, records: Vec<InventoryRecord>) -> Result<AnalysisReport, AnalysisError> {
        let run_id = Uuid::now_v7();
        let span = info_span!("analysis_run", run = %run_id);
        let _entered = span.enter();

        let table = InventoryTable::new(records)?;
        info!(records = table.len(), "inventory table validated");

        let classified = classify(&table, &self.config.classification)?;
        info!(
            policy = ?self.config.classification.policy,
            basis = ?self.config.classification.basis,
            "classification complete"
        );

        let slotted = assign_slots(classified);
        for category in Category::ALL {
            let n = slotted.iter().filter(|r| r.category() == category).count();
            debug!(%category, items = n, "slots assigned");
        }

        let kpis = compute_kpis(&table, &slotted, &self.config.kpi)?;
        info!(
            utilization = kpis.storage_utilization_rate,
            pick_time = kpis.average_pick_time,
            consolidation = kpis.consolidation_index,
            "kpis computed"
        );

        let recommendations = generate_recommendations(&kpis);

        let summary = match &self.generator {
            Some(generator) => summarize(generator.as_ref(), &kpis, &recommendations),
            None => Summary::Skipped,
        };
        info!(summary = summary.is_generated(), "analysis run complete");

        Ok(AnalysisReport {
            run_id,
            generated_at: Utc::now(),
            classification: self.config.classification,
            records: slotted,
            kpis,
            recommendations,
            summary,
        })
    }
}
