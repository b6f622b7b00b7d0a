//! Configuration loading and representation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use smartspace_inventory::ClassifierConfig;
use smartspace_kpi::KpiConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("missing setting: {0}")]
    Missing(&'static str),
}

/// Settings for the optional prose summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    pub enabled: bool,
    /// Upper bound on a single text-generation request.
    pub timeout_secs: u64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout_secs: 30,
        }
    }
}

impl SummaryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Everything a pipeline run is parameterised by.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub classification: ClassifierConfig,
    pub kpi: KpiConfig,
    pub summary: SummaryConfig,
}

impl PipelineConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let kpi = &self.kpi;
        if !(kpi.total_capacity.is_finite() && kpi.total_capacity > 0.0) {
            return Err(ConfigError::Invalid("kpi.total_capacity must be a finite positive number".into()));
        }
        if !(kpi.total_space_cost.is_finite() && kpi.total_space_cost >= 0.0) {
            return Err(ConfigError::Invalid("kpi.total_space_cost must be finite and non-negative".into()));
        }
        let picks = [kpi.pick_times.a, kpi.pick_times.b, kpi.pick_times.c];
        if picks.iter().any(|t| !(t.is_finite() && *t >= 0.0)) {
            return Err(ConfigError::Invalid("kpi.pick_times must be finite and non-negative".into()));
        }
        for (name, value) in [
            ("kpi.slotting_accuracy", kpi.slotting_accuracy),
            ("kpi.abc_zone_efficiency", kpi.abc_zone_efficiency),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigError::Invalid(format!("{name} must be within 0..=100")));
            }
        }
        if self.summary.timeout_secs == 0 {
            return Err(ConfigError::Invalid("summary.timeout_secs must be positive".into()));
        }
        Ok(())
    }
}

/// Connection settings for an OpenAI-compatible chat completions endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct LlmSettings {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl core::fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LlmSettings")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl LlmSettings {
    pub const DEFAULT_ENDPOINT: &'static str = "https://api.openai.com/v1/chat/completions";
    pub const DEFAULT_MODEL: &'static str = "gpt-4o-mini";

    /// Load from `SMARTSPACE_LLM_ENDPOINT`, `SMARTSPACE_LLM_MODEL` and
    /// `SMARTSPACE_LLM_API_KEY` (falling back to `OPENAI_API_KEY`).
    pub fn from_env(timeout: Duration) -> Result<Self, ConfigError> {
        Self::from_lookup(timeout, |key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(timeout: Duration, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("SMARTSPACE_LLM_API_KEY")
            .or_else(|| non_empty("OPENAI_API_KEY"))
            .ok_or(ConfigError::Missing("SMARTSPACE_LLM_API_KEY or OPENAI_API_KEY"))?;

        Ok(Self {
            endpoint: non_empty("SMARTSPACE_LLM_ENDPOINT").unwrap_or_else(|| Self::DEFAULT_ENDPOINT.to_string()),
            model: non_empty("SMARTSPACE_LLM_MODEL").unwrap_or_else(|| Self::DEFAULT_MODEL.to_string()),
            api_key,
            timeout,
        })
    }
}
