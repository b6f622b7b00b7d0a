//! Human-readable report rendering.

use tabled::builder::Builder;
use tabled::settings::Style;

use smartspace_core::Category;
use smartspace_infra::AnalysisReport;

/// Rows shown per category in the slotting table.
const SLOT_PREVIEW_ROWS: usize = 10;

pub fn report_text(report: &AnalysisReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Analysis run {} ({})\n",
        report.run_id,
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!(
        "Policy: {:?}, ranked by {:?}\n\n",
        report.classification.policy, report.classification.basis
    ));

    output.push_str("## Category distribution\n\n");
    output.push_str(&category_table(report));
    output.push_str("\n\n## Slotting (top items per zone)\n\n");
    output.push_str(&slotting_table(report));
    output.push_str(&format!(
        "\n\n{} of {} items move to a new slot.\n\n",
        report.relocations(),
        report.records.len()
    ));

    output.push_str("## KPIs\n\n");
    output.push_str(&kpi_table(report));

    output.push_str("\n\n## Recommendations\n\n");
    for (i, rec) in report.recommendations.iter().enumerate() {
        output.push_str(&format!("{}. [{}] {}\n", i + 1, rec.kpi, rec.action_text));
    }

    output.push_str("\n## Summary\n\n");
    output.push_str(report.summary.text());
    output.push('\n');
    output
}

fn category_table(report: &AnalysisReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Category", "Items", "Share", "Demand"]);
    for breakdown in &report.kpis.categories {
        builder.push_record([
            breakdown.category.to_string(),
            breakdown.count.to_string(),
            format!("{:.2}%", breakdown.percentage),
            format!("{:.2}", breakdown.demand),
        ]);
    }
    builder.build().with(Style::modern()).to_string()
}

fn slotting_table(report: &AnalysisReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["SKU", "Category", "Rank value", "Cumulative", "Current", "Recommended"]);
    for category in Category::ALL {
        for row in report.records_in(category).take(SLOT_PREVIEW_ROWS) {
            let classified = &row.classified;
            builder.push_record([
                classified.record.id.to_string(),
                classified.category.to_string(),
                format!("{:.2}", classified.rank_value),
                format!("{:.2}%", classified.cumulative_fraction),
                classified.record.current_location.to_string(),
                row.new_location.to_string(),
            ]);
        }
    }
    builder.build().with(Style::modern()).to_string()
}

fn kpi_table(report: &AnalysisReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["KPI", "Value"]);
    for metric in report.kpis.metrics() {
        builder.push_record([metric.name.label(), metric.value.to_string()]);
    }
    builder.build().with(Style::modern()).to_string()
}
