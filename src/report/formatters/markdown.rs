use crate::recommendations::RecommendationSet;
use crate::report::types::FootprintReport;

/// Markdown formatter for footprint reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &FootprintReport) -> String {
        let mut md = String::with_capacity(2048);

        // Headline
        md.push_str("# Your Carbon Footprint\n\n");
        md.push_str(&format!(
            "**{:.1} tons CO₂/year** ({} Impact)\n\n",
            report.summary.total,
            report.summary.level.display_name()
        ));
        md.push_str(&format!("**Eco-score:** {}/100\n\n", report.summary.eco_score));

        let us = &report.us_comparison;
        md.push_str(&format!(
            "**vs. US Average:** {:.1}% {}\n\n",
            us.percent,
            if us.above { "above" } else { "below" }
        ));
        if us.earns_praise(report.summary.total) {
            md.push_str("🏆 Great job! You're below the national average.\n\n");
        }

        // Breakdown
        md.push_str("## Breakdown by Category\n\n");
        md.push_str("| Category | Tons CO₂/year | Share |\n");
        md.push_str("|----------|---------------|-------|\n");
        for category in &report.breakdown {
            md.push_str(&format!(
                "| {} | {:.1} | {:.1}% |\n",
                category.title, category.total, category.share
            ));
        }
        md.push('\n');

        // Inputs
        md.push_str("## Your Inputs\n\n");
        md.push_str("| Category | Input | Entry |\n");
        md.push_str("|----------|-------|-------|\n");
        for entry in &report.inputs {
            md.push_str(&format!(
                "| {} | {} | {}{} |\n",
                entry.category,
                entry.label,
                entry.display,
                if entry.mitigating { " (offsets)" } else { "" }
            ));
        }
        md.push('\n');

        // Comparison
        md.push_str("## Carbon Footprint Comparison\n\n");
        md.push_str("| Reference | Tons CO₂/year |\n");
        md.push_str("|-----------|---------------|\n");
        for point in &report.comparison {
            md.push_str(&format!("| {} | {:.2} |\n", point.name, point.value));
        }
        md.push('\n');
        md.push_str(&format!(
            "**Impact Level:** {}  \n{}\n\n",
            report.impact_analysis.band.display_name(),
            report.impact_analysis.message
        ));
        match report.reduction_needed {
            Some(tons) => md.push_str(&format!("**Reduction Needed:** {:.1} tons\n\n", tons)),
            None => md.push_str("**Reduction Needed:** Target Met!\n\n"),
        }
        md.push_str(&format!(
            "**vs Global Average:** {}{:.0}%\n\n",
            if report.vs_global_average > 0.0 { "+" } else { "" },
            report.vs_global_average
        ));

        // Recommendations
        md.push_str("## Personalized Recommendations\n\n");
        Self::format_recommendations(&mut md, &report.recommendations);

        md.push_str("### Quick Tips\n\n");
        for tip in &report.quick_tips {
            md.push_str(&format!("- {}\n", tip));
        }
        md.push('\n');

        md
    }

    /// Format recommendation cards, or the empty state
    fn format_recommendations(md: &mut String, set: &RecommendationSet) {
        if set.is_empty() {
            md.push_str("*No recommendations yet.* Enter your data to get personalized recommendations for reducing your carbon footprint.\n\n");
            return;
        }

        if set.potential_savings > 0.0 {
            md.push_str(&format!(
                "**Potential annual savings:** -{:.1} tons CO₂/year\n\n",
                set.potential_savings
            ));
        }

        for (i, rec) in set.items.iter().enumerate() {
            md.push_str(&format!("{}. **{}**  \n", i + 1, rec.title));
            md.push_str(&format!("   {}  \n", rec.description));
            md.push_str(&format!(
                "   *{} · {} · -{:.1} tons/year · {} Impact*\n",
                rec.difficulty,
                rec.category,
                rec.savings,
                rec.impact
            ));
        }
        md.push('\n');

        if set.omitted_count > 0 {
            md.push_str(&format!(
                "*Additional potential savings not shown:* -{:.1} tons CO₂/year from {} more recommendation(s)\n\n",
                set.omitted_savings, set.omitted_count
            ));
        }
    }
}
