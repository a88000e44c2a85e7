use crate::benchmarks::{
    comparison_series, percent_vs, reduction_needed, ImpactAnalysis, UsAverageComparison,
    GLOBAL_AVERAGE,
};
use crate::categories::{CategoryDescriptor, FieldDescriptor, FieldKind};
use crate::data::CarbonData;
use crate::estimator::estimate;
use crate::recommendations::recommend_summary;
use crate::report::types::{FootprintReport, InputEntry, SummaryCard, QUICK_TIPS};

/// Builds a [`FootprintReport`] from an input record
pub struct ReportGenerator;

impl ReportGenerator {
    /// Estimate, recommend and compare in one pass
    ///
    /// Returns `None` when nothing has been entered; callers show a
    /// "no data" state instead of an all-zero report.
    pub fn generate(data: &CarbonData, categories: &[CategoryDescriptor]) -> Option<FootprintReport> {
        if !data.has_data() {
            tracing::debug!("report skipped: empty record");
            return None;
        }

        use std::time::Instant;
        let start = Instant::now();

        let estimate = estimate(data, categories);
        let recommendations = recommend_summary(data);
        let total = estimate.total;

        let summary = SummaryCard {
            total,
            eco_score: estimate.eco_score,
            level: estimate.level(),
            message: format!("Estimated footprint: {:.1} tons CO₂/year", total),
        };

        let report = FootprintReport {
            summary,
            breakdown: estimate.per_category,
            inputs: Self::input_entries(data, categories),
            us_comparison: UsAverageComparison::for_footprint(total),
            impact_analysis: ImpactAnalysis::for_footprint(total),
            comparison: comparison_series(total),
            reduction_needed: reduction_needed(total),
            vs_global_average: percent_vs(total, GLOBAL_AVERAGE),
            recommendations,
            quick_tips: QUICK_TIPS.iter().map(|t| t.to_string()).collect(),
        };

        tracing::info!(
            "Report generated in {:.3} ms: total={:.1} t, {} recommendation(s)",
            start.elapsed().as_secs_f64() * 1000.0,
            total,
            report.recommendations.len(),
        );

        Some(report)
    }

    /// Non-zero fields of the record, labelled from the catalog
    fn input_entries(data: &CarbonData, categories: &[CategoryDescriptor]) -> Vec<InputEntry> {
        categories
            .iter()
            .flat_map(|category| {
                category.fields.iter().filter_map(move |descriptor| {
                    let value = data.get(descriptor.field);
                    (value > 0.0).then(|| InputEntry {
                        field: descriptor.field,
                        category: category.title.to_string(),
                        label: descriptor.label.to_string(),
                        value,
                        display: Self::display_value(descriptor, value),
                        mitigating: descriptor.is_mitigating(),
                    })
                })
            })
            .collect()
    }

    fn display_value(descriptor: &FieldDescriptor, value: f64) -> String {
        match descriptor.kind {
            FieldKind::Numeric { unit: "$" } => format!("${}", value),
            FieldKind::Numeric { unit } => format!("{} {}", value, unit),
            // Values that are not an option index (e.g. from a profile file) show as-is
            FieldKind::Ordinal { .. } => descriptor
                .kind
                .level_label(value)
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string()),
        }
    }
}
