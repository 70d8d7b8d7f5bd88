use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use concordance::{reader, report, Concordance, ConcordanceConfig, DEFAULT_INPUT_PATH};

#[derive(Parser, Debug)]
#[command(name = "concordance")]
#[command(about = "Alphabetised word concordance with per-sentence occurrence lists")]
#[command(version)]
struct Args {
    /// Text document to index
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // WHY: stdout carries the report itself, so structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();
    let config = ConcordanceConfig::default();
    info!(?args, "Parsed CLI arguments");

    // WHY: an unreadable document aborts the run rather than producing an empty report
    let content = reader::read_document(&args.input).await?;

    let concordance = Concordance::build(&content, &config)?;
    let lines = concordance.render();

    // Console and file are independent stages; a closed stdout must not skip output.txt
    let console_result = report::print_report(&lines);
    if let Err(ref e) = console_result {
        warn!("Console report failed: {:#}", e);
    }
    let file_result = report::write_report(&config.report_path, &lines, config.buffer_size).await;

    console_result?;
    file_result?;

    info!(stats = ?concordance.stats(), "Concordance complete");
    Ok(())
}
