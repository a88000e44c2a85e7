use crate::report::types::FootprintReport;
use serde_json::json;

/// JSON formatter for footprint reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &FootprintReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &FootprintReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }

    /// One-line headline for scripts: total, score, band, top card and savings
    pub fn format_summary(report: &FootprintReport) -> Result<String, serde_json::Error> {
        let top = report.recommendations.items.first();

        serde_json::to_string(&json!({
            "total": (report.summary.total * 10.0).round() / 10.0,
            "eco_score": report.summary.eco_score,
            "level": report.summary.level,
            "impact_band": report.impact_analysis.band,
            "top_recommendation": top.map(|r| r.title.as_str()),
            "top_savings": top.map(|r| r.savings),
            "potential_savings": report.recommendations.potential_savings,
        }))
    }
}
