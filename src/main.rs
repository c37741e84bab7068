use asvclean::cli::Cli;
use asvclean::core::config::CleanConfig;
use asvclean::core::pipeline;
use asvclean::tools::blastn::BlastnSearch;
use clap::Parser;
use colored::*;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging with ASVCLEAN_LOG environment variable support
    let log_level = std::env::var("ASVCLEAN_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<asvclean::AsvcleanError>() {
            Some(asvclean::AsvcleanError::Config(_)) => 2,
            Some(asvclean::AsvcleanError::Io(_)) => 3,
            Some(asvclean::AsvcleanError::Parse(_)) | Some(asvclean::AsvcleanError::Search(_)) => {
                4
            }
            Some(asvclean::AsvcleanError::Table(_)) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CleanConfig::from_cli(&cli)?;

    let searcher = BlastnSearch::new(
        config.database.clone(),
        config.evalue,
        config.tmpdir.clone(),
    );

    let summary = pipeline::run(&config, &searcher)?;

    println!(
        "{} kept {}/{} ASVs, rejected {} (outputs in '{}')",
        "Done:".green().bold(),
        summary.accepted,
        summary.total,
        summary.rejected,
        config.outdir.display()
    );

    Ok(())
}
