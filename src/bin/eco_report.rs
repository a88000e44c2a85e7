// EcoTracker report binary
//
// Usage: eco_report [PROFILE.json] [field=value ...]
//   ECO_FORMAT=markdown|json|summary   output format (default markdown)
//   ECO_PROFILE=path           profile file when no path argument is given
//   RUST_LOG                   log filter (logs go to stderr)

use anyhow::Context;
use eco_tracker::input::apply_assignment;
use eco_tracker::{
    default_categories, CarbonData, JsonFormatter, MarkdownFormatter, OutputFormat, ReportConfig,
    ReportGenerator,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eco_tracker=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ReportConfig::from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (paths, assignments): (Vec<&String>, Vec<&String>) =
        args.iter().partition(|arg| !arg.contains('='));

    if paths.len() > 1 {
        anyhow::bail!("expected at most one profile path, got {}", paths.len());
    }

    // Positional path wins over ECO_PROFILE
    let profile = paths.first().map(|p| PathBuf::from(p.as_str())).or(config.profile);

    let mut data = match &profile {
        Some(path) => {
            tracing::info!("Loading profile from {}", path.display());
            CarbonData::load(path)?
        }
        None => CarbonData::default(),
    };

    for assignment in assignments {
        data = apply_assignment(data, assignment)
            .with_context(|| format!("Invalid argument '{}'", assignment))?;
    }

    let Some(report) = ReportGenerator::generate(&data, default_categories()) else {
        println!("No Data Entered");
        println!("Please enter your information in the calculator to see results.");
        return Ok(());
    };

    match config.format {
        OutputFormat::Markdown => print!("{}", MarkdownFormatter::format(&report)),
        OutputFormat::Json => println!("{}", JsonFormatter::format(&report)?),
        OutputFormat::Summary => println!("{}", JsonFormatter::format_summary(&report)?),
    }

    Ok(())
}
