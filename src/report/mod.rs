pub mod types;
pub mod generator;
pub mod formatters;

pub use types::{FootprintReport, InputEntry, SummaryCard, QUICK_TIPS};
pub use generator::ReportGenerator;
pub use formatters::{JsonFormatter, MarkdownFormatter};
