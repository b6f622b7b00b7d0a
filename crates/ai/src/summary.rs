//! Prose summary synthesis.
//!
//! The KPI set and recommendations are rendered into a prompt and handed to a
//! `TextGenerator`. Whatever happens on the generator side, `summarize` returns
//! a `Summary`; failures are logged and downgraded to `Summary::Unavailable`.

use serde_json::json;
use tracing::{debug, warn};

use smartspace_kpi::KpiSet;

use crate::generator::TextGenerator;
use crate::recommendation::Recommendation;
use crate::result::{GenerationError, Summary};

const INSTRUCTIONS: &str = "You are a warehouse operations analyst. Using the KPI values and the \
recommended actions below, write a short executive summary (at most three paragraphs) of the \
current slotting situation and the most important next steps. Do not invent numbers.";

/// Render the prompt sent to the generator.
pub fn build_prompt(kpis: &KpiSet, recommendations: &[Recommendation]) -> String {
    let metrics: Vec<_> = kpis
        .metrics()
        .into_iter()
        .map(|m| json!({ "kpi": m.name.label(), "value": m.value.to_string() }))
        .collect();
    let actions: Vec<_> = recommendations
        .iter()
        .map(|r| json!({ "kpi": r.kpi.label(), "action": r.action_text }))
        .collect();

    let payload = json!({ "kpis": metrics, "recommendations": actions });
    // `to_string_pretty` on a `Value` cannot fail.
    let body = serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string());

    format!("{INSTRUCTIONS}\n\n{body}\n")
}

/// Ask `generator` for a prose summary, degrading to a placeholder on failure.
pub fn summarize(
    generator: &dyn TextGenerator,
    kpis: &KpiSet,
    recommendations: &[Recommendation],
) -> Summary {
    let prompt = build_prompt(kpis, recommendations);
    debug!(generator = generator.name(), prompt_len = prompt.len(), "requesting summary");

    let outcome = generator.generate(&prompt).and_then(|text| {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            Err(GenerationError::EmptyResponse)
        } else {
            Ok(trimmed.to_string())
        }
    });

    match outcome {
        Ok(text) => Summary::Generated {
            generator: generator.name().to_string(),
            text,
        },
        Err(e) => {
            warn!(generator = generator.name(), error = %e, "summary generation failed; continuing without prose");
            Summary::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{FailingGenerator, StaticGenerator};
    use crate::recommendation::generate_recommendations;
    use smartspace_inventory::{assign_slots, classify, ClassifierConfig, InventoryRecord, InventoryTable};
    use smartspace_kpi::{compute_kpis, KpiConfig};
    use std::sync::Mutex;

    fn sample_kpis() -> KpiSet {
        let before = InventoryTable::new(vec![
            InventoryRecord::new("P1", 40.0, 90.0, "LOC_01"),
            InventoryRecord::new("P2", 25.0, 10.0, "LOC_03"),
        ])
        .unwrap();
        let after = assign_slots(classify(&before, &ClassifierConfig::default()).unwrap());
        compute_kpis(&before, &after, &KpiConfig::default()).unwrap()
    }

    /// Records the prompt it was given.
    struct RecordingGenerator {
        seen: Mutex<Option<String>>,
    }

    impl TextGenerator for RecordingGenerator {
        fn name(&self) -> &str {
            "recording"
        }

        fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
            *self.seen.lock().unwrap() = Some(prompt.to_string());
            Ok("  Summary text.  ".to_string())
        }
    }

    #[test]
    fn prompt_embeds_kpis_and_actions() {
        let kpis = sample_kpis();
        let recs = generate_recommendations(&kpis);
        let prompt = build_prompt(&kpis, &recs);

        assert!(prompt.starts_with("You are a warehouse operations analyst."));
        assert!(prompt.contains("Average Pick Time (seconds/order)"));
        assert!(prompt.contains(&recs[0].action_text));
    }

    #[test]
    fn generated_text_is_trimmed_and_attributed() {
        let kpis = sample_kpis();
        let recs = generate_recommendations(&kpis);
        let generator = RecordingGenerator { seen: Mutex::new(None) };

        let summary = summarize(&generator, &kpis, &recs);
        assert_eq!(
            summary,
            Summary::Generated {
                generator: "recording".into(),
                text: "Summary text.".into()
            }
        );
        let seen = generator.seen.lock().unwrap().clone().unwrap();
        assert_eq!(seen, build_prompt(&kpis, &recs));
    }

    #[test]
    fn service_failure_degrades_to_placeholder() {
        let kpis = sample_kpis();
        let recs = generate_recommendations(&kpis);
        let generator = FailingGenerator::new(GenerationError::QuotaExceeded("monthly limit".into()));

        let summary = summarize(&generator, &kpis, &recs);
        assert_eq!(summary.text(), Summary::PLACEHOLDER);
        assert!(matches!(summary, Summary::Unavailable { reason } if reason.contains("monthly limit")));
    }

    #[test]
    fn blank_response_counts_as_failure() {
        let kpis = sample_kpis();
        let summary = summarize(&StaticGenerator::new("   \n"), &kpis, &[]);
        assert_eq!(
            summary,
            Summary::Unavailable {
                reason: GenerationError::EmptyResponse.to_string()
            }
        );
    }
}
