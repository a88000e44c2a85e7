use crate::data::CategoryId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative impact tier of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Impact {
    pub fn display_name(&self) -> &'static str {
        match self {
            Impact::Low => "Low",
            Impact::Medium => "Medium",
            Impact::High => "High",
            Impact::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How hard a recommendation is to adopt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A suggested behaviour change with its estimated annual savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub impact: Impact,
    pub difficulty: Difficulty,
    /// Tons CO₂/year
    pub savings: f64,
    pub description: String,
    /// Serialized as the card label ("Transportation", "Energy", ...)
    #[serde(with = "category_label")]
    pub category: CategoryId,
}

mod category_label {
    use crate::data::CategoryId;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const LABELS: &[&str] = &["Transportation", "Energy", "Food", "Lifestyle"];

    pub fn serialize<S: Serializer>(id: &CategoryId, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(id.label())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<CategoryId, D::Error> {
        let label = String::deserialize(deserializer)?;
        CategoryId::ALL
            .into_iter()
            .find(|id| id.label() == label)
            .ok_or_else(|| de::Error::unknown_variant(&label, LABELS))
    }
}

/// Ranked recommendations plus their savings aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    /// At most five, highest savings first
    pub items: Vec<Recommendation>,
    /// Sum of savings over `items` only
    pub potential_savings: f64,
    /// Savings of recommendations dropped by the cap (additional potential
    /// savings not shown)
    pub omitted_savings: f64,
    /// Number of recommendations dropped by the cap
    pub omitted_count: usize,
}

impl RecommendationSet {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(category: CategoryId) -> Recommendation {
        Recommendation {
            title: "Reduce driving by 25%".to_string(),
            impact: Impact::High,
            difficulty: Difficulty::Medium,
            savings: 60.0,
            description: "Use public transport, bike, or walk for short trips".to_string(),
            category,
        }
    }

    #[test]
    fn test_category_serializes_as_label() {
        let expected = [
            (CategoryId::Transport, "Transportation"),
            (CategoryId::Energy, "Energy"),
            (CategoryId::Food, "Food"),
            (CategoryId::Lifestyle, "Lifestyle"),
        ];
        for (id, label) in expected {
            let value = serde_json::to_value(card(id)).unwrap();
            assert_eq!(value["category"], label);
            assert_eq!(value["impact"], "High");
        }
    }

    #[test]
    fn test_category_label_round_trip() {
        let json = serde_json::to_string(&card(CategoryId::Transport)).unwrap();
        let back: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.category, CategoryId::Transport);
    }

    #[test]
    fn test_unknown_category_label_rejected() {
        let json = r#"{"title":"t","impact":"Low","difficulty":"Easy","savings":1.0,"description":"d","category":"transport"}"#;
        assert!(serde_json::from_str::<Recommendation>(json).is_err());
    }
}
