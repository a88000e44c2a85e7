//! Footprint Estimator
//!
//! Converts an input record into an annual CO₂ estimate:
//! - category total = Σ value × |factor| over the category's fields
//! - grand total = Σ category totals
//! - eco-score = clamp(round(total / 32 × 100), 0, 100)
//!
//! Values are left unrounded; formatters round to one decimal.

use crate::categories::CategoryDescriptor;
use crate::data::{CarbonData, CategoryId};
use serde::{Deserialize, Serialize};

/// Footprint (tons/year) that maps to an eco-score of 100
pub const ECO_SCORE_CEILING_TONS: f64 = 32.0;

/// Per-category share of the footprint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub id: CategoryId,
    pub title: String,
    /// Tons CO₂/year
    pub total: f64,
    /// Percentage of the grand total (0 when the grand total is 0)
    pub share: f64,
}

/// Result of [`estimate`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintEstimate {
    /// Tons CO₂/year
    pub total: f64,
    pub per_category: Vec<CategoryTotal>,
    /// 0-100, saturating at 32 tons
    pub eco_score: u8,
}

impl FootprintEstimate {
    pub fn category_total(&self, id: CategoryId) -> Option<f64> {
        self.per_category
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.total)
    }

    /// Coarse footprint band shown next to the total
    pub fn level(&self) -> FootprintLevel {
        FootprintLevel::from_total(self.total)
    }
}

/// Footprint band relative to the US average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FootprintLevel {
    Low,
    Moderate,
    High,
}

impl FootprintLevel {
    /// < 8 Low, < 16 Moderate, otherwise High
    pub fn from_total(total: f64) -> Self {
        match total {
            t if t < 8.0 => FootprintLevel::Low,
            t if t < 16.0 => FootprintLevel::Moderate,
            _ => FootprintLevel::High,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FootprintLevel::Low => "Low",
            FootprintLevel::Moderate => "Moderate",
            FootprintLevel::High => "High",
        }
    }
}

/// Sum of `value × |factor|` across one category's fields
pub fn category_total(data: &CarbonData, category: &CategoryDescriptor) -> f64 {
    category
        .fields
        .iter()
        .map(|field| field.contribution(data.get(field.field)))
        .sum()
}

/// Eco-score for a footprint total
pub fn eco_score(total: f64) -> u8 {
    let scaled = (total / ECO_SCORE_CEILING_TONS * 100.0).round();
    // NaN never reaches here from sanitized input; treat it as 0 anyway
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 100.0) as u8
}

/// Estimate the footprint of `data` under the given category catalog
pub fn estimate(data: &CarbonData, categories: &[CategoryDescriptor]) -> FootprintEstimate {
    let totals: Vec<(CategoryId, &'static str, f64)> = categories
        .iter()
        .map(|c| (c.id, c.title, category_total(data, c)))
        .collect();

    let total: f64 = totals.iter().map(|(_, _, t)| t).sum();

    let per_category = totals
        .into_iter()
        .map(|(id, title, category_total)| CategoryTotal {
            id,
            title: title.to_string(),
            total: category_total,
            share: if total > 0.0 {
                category_total / total * 100.0
            } else {
                0.0
            },
        })
        .collect();

    let eco_score = eco_score(total);

    tracing::debug!(total, eco_score, "estimated footprint");

    FootprintEstimate {
        total,
        per_category,
        eco_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::default_categories;
    use crate::data::Field;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_record_is_zero() {
        let est = estimate(&CarbonData::default(), default_categories());
        assert_eq!(est.total, 0.0);
        assert_eq!(est.eco_score, 0);
        assert_eq!(est.per_category.len(), 4);
        assert!(est.per_category.iter().all(|c| c.total == 0.0 && c.share == 0.0));
    }

    #[test]
    fn test_car_miles_only() {
        let data = CarbonData::default().with_value(Field::CarMiles, 600.0);
        let est = estimate(&data, default_categories());

        assert_relative_eq!(est.category_total(CategoryId::Transport).unwrap(), 240.0);
        assert_relative_eq!(est.total, 240.0);
        assert_relative_eq!(est.per_category[0].share, 100.0);
        assert_eq!(est.eco_score, 100);
        assert_eq!(est.level(), FootprintLevel::High);
    }

    #[test]
    fn test_mitigating_fields_add_magnitude() {
        let data = CarbonData::default()
            .with_value(Field::LocalFood, 4.0)
            .with_value(Field::Recycling, 4.0);
        let est = estimate(&data, default_categories());

        assert_relative_eq!(est.category_total(CategoryId::Food).unwrap(), 0.08, epsilon = 1e-12);
        assert_relative_eq!(est.category_total(CategoryId::Lifestyle).unwrap(), 0.2, epsilon = 1e-12);
        assert!(est.total > 0.0);
    }

    #[test]
    fn test_mixed_profile_breakdown() {
        let data = CarbonData::default()
            .with_value(Field::Electricity, 10.0)  // 5.0
            .with_value(Field::Heating, 1.0)       // 22.4
            .with_value(Field::Meat, 2.0)          // 6.4
            .with_value(Field::Shopping, 200.0);   // 2.0
        let est = estimate(&data, default_categories());

        assert_relative_eq!(est.category_total(CategoryId::Energy).unwrap(), 27.4, epsilon = 1e-9);
        assert_relative_eq!(est.category_total(CategoryId::Food).unwrap(), 6.4, epsilon = 1e-9);
        assert_relative_eq!(est.category_total(CategoryId::Lifestyle).unwrap(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(est.total, 35.8, epsilon = 1e-9);

        let share_sum: f64 = est.per_category.iter().map(|c| c.share).sum();
        assert_relative_eq!(share_sum, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_eco_score_saturation() {
        assert_eq!(eco_score(0.0), 0);
        assert_eq!(eco_score(16.0), 50);
        assert_eq!(eco_score(32.0), 100);
        assert_eq!(eco_score(64.0), 100);
        assert_eq!(eco_score(-5.0), 0);
        assert_eq!(eco_score(8.0), 25);
        assert_eq!(eco_score(10.0), 31);
    }

    #[test]
    fn test_footprint_level_bands() {
        assert_eq!(FootprintLevel::from_total(7.9), FootprintLevel::Low);
        assert_eq!(FootprintLevel::from_total(8.0), FootprintLevel::Moderate);
        assert_eq!(FootprintLevel::from_total(15.9), FootprintLevel::Moderate);
        assert_eq!(FootprintLevel::from_total(16.0), FootprintLevel::High);
    }

    #[test]
    fn test_subset_of_categories() {
        let data = CarbonData::default()
            .with_value(Field::CarMiles, 100.0)
            .with_value(Field::Dairy, 3.0);
        let only_food = &default_categories()[2..3];
        let est = estimate(&data, only_food);

        assert_eq!(est.per_category.len(), 1);
        assert_relative_eq!(est.total, 3.3, epsilon = 1e-9);
    }
}
