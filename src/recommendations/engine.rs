//! Recommendation Engine
//!
//! Runs every rule, ranks the fired recommendations by savings (stable, so
//! ties keep rule order), and keeps the top five.
//!
//! The headline "potential savings" only sums what is shown. Savings cut by
//! the cap are reported on their own as `omitted_savings`.

use crate::data::CarbonData;
use crate::recommendations::rules::RULES;
use crate::recommendations::types::{Recommendation, RecommendationSet};

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 5;

/// All fired recommendations, highest savings first, before the cap
fn ranked_candidates(data: &CarbonData) -> Vec<Recommendation> {
    // The panel is only shown once something has been entered
    if !data.has_data() {
        return Vec::new();
    }

    let mut candidates: Vec<Recommendation> = RULES.iter().filter_map(|rule| rule(data)).collect();

    for rec in &candidates {
        tracing::debug!(title = %rec.title, savings = rec.savings, "recommendation fired");
    }

    // sort_by is stable: equal savings keep rule order
    candidates.sort_by(|a, b| b.savings.total_cmp(&a.savings));
    candidates
}

/// Ranked recommendations, at most [`MAX_RECOMMENDATIONS`]
///
/// Empty when no rule fires or nothing has been entered.
pub fn recommend(data: &CarbonData) -> Vec<Recommendation> {
    let mut ranked = ranked_candidates(data);
    ranked.truncate(MAX_RECOMMENDATIONS);
    ranked
}

/// Ranked recommendations with savings aggregates
pub fn recommend_summary(data: &CarbonData) -> RecommendationSet {
    let mut items = ranked_candidates(data);

    let omitted: Vec<Recommendation> = if items.len() > MAX_RECOMMENDATIONS {
        items.split_off(MAX_RECOMMENDATIONS)
    } else {
        Vec::new()
    };

    let potential_savings = items.iter().map(|r| r.savings).sum();
    let omitted_savings = omitted.iter().map(|r| r.savings).sum();

    if !omitted.is_empty() {
        tracing::debug!(
            omitted = omitted.len(),
            omitted_savings,
            "recommendations dropped by cap"
        );
    }

    RecommendationSet {
        items,
        potential_savings,
        omitted_savings,
        omitted_count: omitted.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Field;
    use approx::assert_relative_eq;

    /// Every rule fires: six candidates
    fn everything_high() -> CarbonData {
        CarbonData::default()
            .with_value(Field::CarMiles, 600.0)     // 60.0
            .with_value(Field::Flights, 12.0)       // 15.0
            .with_value(Field::Electricity, 900.0)  // 90.0
            .with_value(Field::Meat, 8.0)           // 27.73
            .with_value(Field::LocalFood, 0.0)      // 2.4
            .with_value(Field::Waste, 4.0)          // 260.0
    }

    #[test]
    fn test_empty_record_has_no_recommendations() {
        assert!(recommend(&CarbonData::default()).is_empty());

        let set = recommend_summary(&CarbonData::default());
        assert!(set.is_empty());
        assert_eq!(set.potential_savings, 0.0);
        assert_eq!(set.omitted_count, 0);
    }

    #[test]
    fn test_local_produce_alone_fires_once_data_exists() {
        let data = CarbonData::default().with_value(Field::Dairy, 1.0);
        let recs = recommend(&data);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Buy more local and seasonal produce");
    }

    #[test]
    fn test_cap_and_order() {
        let recs = recommend(&everything_high());

        assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Reduce waste and increase recycling",
                "Switch to LED bulbs & efficient appliances",
                "Reduce driving by 25%",
                "Try \"Meatless Monday\" or reduce meat intake",
                "Offset or reduce flights",
            ]
        );
        assert!(recs.windows(2).all(|w| w[0].savings >= w[1].savings));
    }

    #[test]
    fn test_truncate_then_sum() {
        let set = recommend_summary(&everything_high());

        let shown: f64 = 260.0 + 90.0 + 60.0 + 2.0 * 3.2 * 52.0 / 12.0 + 15.0;
        assert_relative_eq!(set.potential_savings, shown, epsilon = 1e-9);
        assert_eq!(set.omitted_count, 1);
        assert_relative_eq!(set.omitted_savings, 2.4);
    }

    #[test]
    fn test_ties_keep_rule_order() {
        // Both rules save 104.0 t
        let data = CarbonData::default()
            .with_value(Field::CarMiles, 1040.0)
            .with_value(Field::Electricity, 1040.0)
            .with_value(Field::LocalFood, 60.0);
        let recs = recommend(&data);

        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].savings, recs[1].savings);
        assert_eq!(recs[0].title, "Reduce driving by 25%");
        assert_eq!(recs[1].title, "Switch to LED bulbs & efficient appliances");
    }

    #[test]
    fn test_summary_matches_recommend() {
        let data = everything_high();
        assert_eq!(recommend_summary(&data).items, recommend(&data));
    }
}
