use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use todo_audit::{Scanner, cli, config, driver, reporter};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::init_from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, default_filter),
    );

    let config =
        config::load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    let config = cli
        .apply_overrides(config)
        .validate()
        .context("Invalid configuration")?;

    if let Some(ref path) = cli.init_config {
        config::save_config(&config, path)?;
        println!("Config written to {}", path.display());
        return Ok(());
    }

    debug!("Using config: {:?}", config);
    debug!("Scanning: {}", cli.path.display());

    let scanner = Scanner::new(&config)?;
    let mut files = driver::list_candidates(&cli.path, &config.file_suffix)
        .with_context(|| format!("Failed to scan {}", cli.path.display()))?;
    if let Some(ref output) = cli.output {
        files = driver::exclude_output(files, output);
    }
    debug!("Found {} file(s) ending in {:?}", files.len(), config.file_suffix);

    // Only create the output once the directory is known to be listable
    let mut out = reporter::open_output(cli.output.as_deref())?;
    let summary = driver::report_files(&scanner, &files, &mut out)?;

    info!(
        "Scanned {} file(s), skipped {}, found {} annotation(s)",
        summary.scanned, summary.skipped, summary.annotations
    );

    if let Some(ref path) = cli.output {
        println!("Report written to {}", path.display());
    }

    Ok(())
}
