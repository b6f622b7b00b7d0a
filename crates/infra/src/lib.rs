//! Infrastructure layer: data sources, config, external services and the
//! pipeline runner that wires the analysis stages together.

pub mod ai;
pub mod config;
pub mod pipeline;
pub mod source;


pub use config::{ConfigError, LlmSettings, PipelineConfig, SummaryConfig};
pub use pipeline::{AnalysisPipeline, AnalysisReport, PipelineError};
pub use source::{CsvSource, InventorySource, SourceError, SyntheticSource};
