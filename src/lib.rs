//! EcoTracker Carbon Footprint Engine
//!
//! Estimates an annual CO₂ footprint from lifestyle inputs and ranks
//! reduction recommendations.
//!
//! Module layout:
//! - `data`: the input record (`CarbonData`) and field identifiers
//! - `categories`: static category/field descriptors and coefficients
//! - `input`: parsing and clamping policy for user entries
//! - `estimator`: category totals, grand total, eco-score
//! - `recommendations/`: threshold rules and the ranking engine
//! - `benchmarks`: reference footprints for comparison
//! - `report/`: combined report with Markdown and JSON formatters
//! - `session`: immutable calculator state and transitions
//! - `config`: environment configuration for the `eco_report` binary

pub mod data;
pub mod categories;
pub mod input;
pub mod estimator;
pub mod recommendations;
pub mod benchmarks;
pub mod report;
pub mod session;
pub mod config;

// Re-export commonly used types
pub use data::{CarbonData, CategoryId, Field};
pub use categories::{default_categories, CategoryDescriptor, FieldDescriptor, FieldKind};
pub use input::InputError;
pub use estimator::{eco_score, estimate, CategoryTotal, FootprintEstimate, FootprintLevel};
pub use recommendations::{recommend, recommend_summary, Difficulty, Impact, Recommendation, RecommendationSet};
pub use report::{FootprintReport, JsonFormatter, MarkdownFormatter, ReportGenerator};
pub use session::{CalculatorView, Page, Session};
pub use config::{OutputFormat, ReportConfig};
