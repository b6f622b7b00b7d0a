use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use smartspace_inventory::{ClassificationPolicy, RankBasis};
use smartspace_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(
    name = "smartspace",
    version,
    about = "Warehouse ABC analysis, slotting recommendations and KPIs"
)]
pub struct Cli {
    /// Log line format (logs go to stderr)
    #[arg(long, value_enum, global = true, default_value_t = LogFormatArg::Pretty, env = "SMARTSPACE_LOG_FORMAT")]
    pub log_format: LogFormatArg,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the analysis pipeline and print the report
    Run(RunArgs),

    /// Print the effective pipeline configuration as JSON
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// JSON config file (missing keys keep their defaults)
    #[arg(long, env = "SMARTSPACE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Where inventory records come from
    #[arg(long, value_enum, default_value_t = SourceKind::Synthetic)]
    pub source: SourceKind,

    /// CSV file to read when `--source csv`
    #[arg(long, required_if_eq("source", "csv"))]
    pub input: Option<PathBuf>,

    /// Number of synthetic records
    #[arg(long, default_value_t = 100)]
    pub records: usize,

    /// Number of distinct current locations in synthetic data
    #[arg(long, default_value_t = 50)]
    pub locations: usize,

    /// Seed for reproducible synthetic data
    #[arg(long, env = "SMARTSPACE_SEED")]
    pub seed: Option<u64>,

    /// JSON config file (missing keys keep their defaults)
    #[arg(long, env = "SMARTSPACE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Classification threshold policy (overrides the config file)
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Ranking criterion (overrides the config file)
    #[arg(long, value_enum)]
    pub rank_by: Option<RankArg>,

    /// Total storage capacity (overrides the config file)
    #[arg(long)]
    pub capacity: Option<f64>,

    /// Request a prose summary from the configured language model
    #[arg(long)]
    pub summary: bool,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    Synthetic,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// A ≤ 20 %, B ≤ 80 %
    TwoCut,
    /// A ≤ 80 %, B ≤ 95 %
    Pareto,
}

impl From<PolicyArg> for ClassificationPolicy {
    fn from(value: PolicyArg) -> Self {
        match value {
            PolicyArg::TwoCut => ClassificationPolicy::TwoCut,
            PolicyArg::Pareto => ClassificationPolicy::Pareto,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankArg {
    /// Raw daily demand
    Demand,
    /// Demand × 12 × unit cost
    Value,
}

impl From<RankArg> for RankBasis {
    fn from(value: RankArg) -> Self {
        match value {
            RankArg::Demand => RankBasis::Demand,
            RankArg::Value => RankBasis::AnnualValue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn csv_source_requires_input() {
        let err = Cli::try_parse_from(["smartspace", "run", "--source", "csv"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let cli = Cli::try_parse_from(["smartspace", "run", "--source", "csv", "--input", "stock.csv"]).unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.input, Some(PathBuf::from("stock.csv")));
    }

    #[test]
    fn overrides_parse() {
        let cli = Cli::try_parse_from([
            "smartspace", "run", "--policy", "pareto", "--rank-by", "value", "--capacity", "900", "--format", "json",
        ])
        .unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.policy, Some(PolicyArg::Pareto));
        assert_eq!(RankBasis::from(args.rank_by.unwrap()), RankBasis::AnnualValue);
        assert_eq!(args.capacity, Some(900.0));
        assert_eq!(args.format, OutputFormat::Json);
    }
}
