mod args;
mod render;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use smartspace_ai::TextGenerator;

use smartspace_infra::ai::ChatCompletionsGenerator;
use smartspace_infra::{AnalysisPipeline, CsvSource, InventorySource, LlmSettings, PipelineConfig, SyntheticSource};

use crate::args::{Cli, Command, OutputFormat, RunArgs, SourceKind};

fn main() -> Result<()> {
    let cli = Cli::parse();
    smartspace_observability::init_with(cli.log_format.into());

    match cli.command {
        Command::Run(args) => run(args),
        Command::Config(args) => {
            let config = load_config(args.config.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(PipelineConfig::default()),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(policy) = args.policy {
        config.classification.policy = policy.into();
    }
    if let Some(basis) = args.rank_by {
        config.classification.basis = basis.into();
    }
    if let Some(capacity) = args.capacity {
        config.kpi.total_capacity = capacity;
    }
    if args.summary {
        config.summary.enabled = true;
    }
    config.validate().context("invalid configuration")?;

    let mut pipeline = AnalysisPipeline::new(config.clone());
    if config.summary.enabled {
        match LlmSettings::from_env(config.summary.timeout())
            .map_err(anyhow::Error::from)
            .and_then(|settings| ChatCompletionsGenerator::new(settings).map_err(anyhow::Error::from))
        {
            Ok(generator) => {
                info!(model = generator.name(), "summary generator configured");
                pipeline = pipeline.with_generator(Arc::new(generator));
            }
            Err(e) => warn!(error = %e, "summary requested but no generator is available; continuing without it"),
        }
    }

    let source: Box<dyn InventorySource> = match args.source {
        SourceKind::Synthetic => {
            let mut source = SyntheticSource::new(args.records).with_locations(args.locations);
            if let Some(seed) = args.seed {
                source = source.with_seed(seed);
            }
            Box::new(source)
        }
        SourceKind::Csv => {
            let path = args.input.context("--input is required with --source csv")?;
            Box::new(CsvSource::new(path))
        }
    };

    let report = pipeline.run_source(source.as_ref()).context("analysis run failed")?;

    match args.format {
        OutputFormat::Table => print!("{}", render::report_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
