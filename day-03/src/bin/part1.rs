use day_03::part1::process;
use miette::{Context, IntoDiagnostic};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

const INPUT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/input1.txt");

#[tracing::instrument]
fn main() -> miette::Result<()> {
    init();

    let file = std::fs::read_to_string(INPUT_PATH)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read puzzle input from {INPUT_PATH}"))?;
    let result = process(&file).context("process part 1")?;
    println!("The total output joltage is: {}", result);
    Ok(())
}

fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("day_03=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::NONE)
        .try_init();
}
