use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use fwstamp::config::Config;
use fwstamp::header;
use fwstamp::stamp::Stamper;

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fwstamp")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("fwstamp.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// CLI flags win over config values.
fn apply_overrides(cli: &Cli, mut config: Config) -> Config {
    if let Some(header) = &cli.header {
        config.header_path = header.clone();
    }
    if let Some(readme) = &cli.readme {
        config.readme_path = readme.clone();
    }
    if cli.no_readme {
        config.update_readme = false;
    }
    config
}

fn run(cli: &Cli, config: &Config) -> Result<()> {
    let stamper = Stamper::from_config(config, &cli.root);

    if cli.dry_run {
        let stamp = stamper.resolve_stamp();
        info!("Dry run, resolved version {}", stamp.version);
        println!("{} Would write {}:", "✓".green(), stamper.header_path.display());
        print!("{}", header::render_header(&stamp));
        return Ok(());
    }

    let report = stamper.run()?;
    info!(
        "Stamped {} into {}",
        report.stamp.version,
        report.header_path.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    // A missing log file must not fail the build.
    if let Err(e) = setup_logging() {
        env_logger::Builder::from_default_env().init();
        eprintln!("{} Logging to stderr, log file unavailable: {:#}", "⚠".yellow(), e);
    }

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let config = apply_overrides(&cli, config);

    info!("Starting fwstamp in {}", cli.root.display());

    run(&cli, &config).context("Failed to stamp version")?;

    Ok(())
}
