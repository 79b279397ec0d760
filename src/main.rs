mod cli;
mod collections;
mod environment;
mod error;
mod http;
mod report;
mod services;
mod storage;
mod testing;

use std::io;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use report::ReportWriter;
use testing::runner::Runner;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "api_replay=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.into_config()?;
    info!(service = %config.service, input = %config.input_path.display(), "loading test cases");

    let cases = storage::load_test_cases(&config.input_path)?;
    if cases.is_empty() {
        warn!("test case file contains no test cases");
    }

    let file = storage::create_report_file(&config.report_path)?;
    let mut report = ReportWriter::new(file, config.output_format);
    println!(
        "Processing {} tests from {}...",
        cases.len(),
        config.input_path.display()
    );

    let runner = Runner::new(config.environment, Box::new(config.service));
    let summary = runner.run(&cases, &mut report, &mut io::stdout()).await?;
    report
        .into_inner()
        .into_inner()
        .map_err(|e| e.into_error())
        .context("failed to flush report")?;

    println!();
    println!(
        "Done! {} tests: {} ok, {} HTTP errors, {} connection failures, {} skipped",
        summary.total,
        summary.succeeded,
        summary.http_errors,
        summary.transport_failures,
        summary.skipped
    );
    println!("Full report saved to '{}'", config.report_path.display());
    Ok(())
}
