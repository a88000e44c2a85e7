//! Reference Footprints
//!
//! Fixed comparison points (tons CO₂/year per person) and the analyses the
//! results view derives from them.

use serde::{Deserialize, Serialize};

pub const UN_TARGET_2030: f64 = 2.3;
pub const GLOBAL_AVERAGE: f64 = 4.8;
pub const EU_AVERAGE: f64 = 8.2;
pub const US_AVERAGE: f64 = 16.0;

/// A bar in the comparison chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkPoint {
    pub name: String,
    pub value: f64,
    pub description: String,
}

/// Reference points in chart order
pub const REFERENCE_POINTS: [(&str, f64, &str); 4] = [
    ("UN Target 2030", UN_TARGET_2030, "Required to limit warming to 1.5°C"),
    ("Global Average", GLOBAL_AVERAGE, "World average carbon footprint"),
    ("EU Average", EU_AVERAGE, "European Union average"),
    ("US Average", US_AVERAGE, "United States average"),
];

/// Reference bars followed by the user's own footprint
pub fn comparison_series(total: f64) -> Vec<BenchmarkPoint> {
    REFERENCE_POINTS
        .iter()
        .copied()
        .chain(std::iter::once((
            "Your Footprint",
            total,
            "Your calculated carbon footprint",
        )))
        .map(|(name, value, description)| BenchmarkPoint {
            name: name.to_string(),
            value,
            description: description.to_string(),
        })
        .collect()
}

/// Relative difference in percent: (total − reference) / reference × 100
pub fn percent_vs(total: f64, reference: f64) -> f64 {
    (total - reference) / reference * 100.0
}

/// Tons still to cut to meet the UN 2030 target; `None` once met
pub fn reduction_needed(total: f64) -> Option<f64> {
    if total > UN_TARGET_2030 {
        Some(total - UN_TARGET_2030)
    } else {
        None
    }
}

/// Where a footprint sits among the reference points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactBand {
    Excellent,
    Good,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ImpactBand {
    pub fn display_name(&self) -> &'static str {
        match self {
            ImpactBand::Excellent => "Excellent",
            ImpactBand::Good => "Good",
            ImpactBand::Moderate => "Moderate",
            ImpactBand::High => "High",
            ImpactBand::VeryHigh => "Very High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactAnalysis {
    pub band: ImpactBand,
    pub message: String,
}

impl ImpactAnalysis {
    /// Bands are inclusive at their upper reference point
    pub fn for_footprint(total: f64) -> Self {
        let (band, message) = match total {
            t if t <= UN_TARGET_2030 => (
                ImpactBand::Excellent,
                "You're meeting the UN 2030 target! Keep up the great work.",
            ),
            t if t <= GLOBAL_AVERAGE => (
                ImpactBand::Good,
                "Below global average but room for improvement to meet UN targets.",
            ),
            t if t <= EU_AVERAGE => (
                ImpactBand::Moderate,
                "Similar to EU average. Significant reduction needed for climate goals.",
            ),
            t if t <= US_AVERAGE => (
                ImpactBand::High,
                "Above EU average. Major lifestyle changes recommended.",
            ),
            _ => (
                ImpactBand::VeryHigh,
                "Well above US average. Urgent action needed to reduce impact.",
            ),
        };

        ImpactAnalysis {
            band,
            message: message.to_string(),
        }
    }
}

/// Footprint against the US average
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsAverageComparison {
    /// Absolute percentage difference
    pub percent: f64,
    /// Strictly above the average
    pub above: bool,
}

impl UsAverageComparison {
    pub fn for_footprint(total: f64) -> Self {
        UsAverageComparison {
            percent: percent_vs(total, US_AVERAGE).abs(),
            above: total > US_AVERAGE,
        }
    }

    /// Shown when the footprint is non-zero and not above the average
    pub fn earns_praise(&self, total: f64) -> bool {
        !self.above && total > 0.0
    }
}
