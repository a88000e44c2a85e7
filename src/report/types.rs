use crate::benchmarks::{BenchmarkPoint, ImpactAnalysis, UsAverageComparison};
use crate::data::Field;
use crate::estimator::{CategoryTotal, FootprintLevel};
use crate::recommendations::RecommendationSet;
use serde::{Deserialize, Serialize};

/// Complete results for one input record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintReport {
    pub summary: SummaryCard,
    pub breakdown: Vec<CategoryTotal>,
    /// Fields with a non-zero entry, in form order
    pub inputs: Vec<InputEntry>,
    pub us_comparison: UsAverageComparison,
    pub impact_analysis: ImpactAnalysis,
    /// Reference bars plus the user's footprint
    pub comparison: Vec<BenchmarkPoint>,
    /// Tons to cut to reach the UN 2030 target (`None` once met)
    pub reduction_needed: Option<f64>,
    /// Percent above (+) or below (−) the global average
    pub vs_global_average: f64,
    pub recommendations: RecommendationSet,
    pub quick_tips: Vec<String>,
}

/// Headline numbers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    /// Tons CO₂/year
    pub total: f64,
    pub eco_score: u8,
    pub level: FootprintLevel,
    pub message: String,
}

/// One entered field as the user chose it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEntry {
    pub field: Field,
    /// Category title ("Home Energy")
    pub category: String,
    pub label: String,
    pub value: f64,
    /// Option label for list fields, amount with unit otherwise
    pub display: String,
    /// Negative coefficient: the behaviour offsets emissions
    pub mitigating: bool,
}

pub const QUICK_TIPS: [&str; 3] = [
    "Small changes compound over time - start with easy wins",
    "Track your progress monthly to stay motivated",
    "Consider carbon offset programs for unavoidable emissions",
];
