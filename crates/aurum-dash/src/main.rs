//! Aurum dashboard - main entry point

use anyhow::Context;
use aurum_charts::Composer;
use aurum_common::{init_logging, LoggingConfig};
use aurum_config::{validation, SettingsLoader};
use aurum_dash::{exit_code, format_report_line, parse_panels};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Render the gold-market dashboard panels", long_about = None)]
struct Args {
    /// Configuration file path (defaults to AURUM_CONFIG_PATH or ./aurum.yaml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for rendered panels
    #[arg(short, long, default_value = "dashboard")]
    out_dir: PathBuf,

    /// Country selector for the headline word cloud
    #[arg(long)]
    country: Option<String>,

    /// Trailing year window for the price trend
    #[arg(long)]
    window: Option<u32>,

    /// Panel(s) to render; repeatable, defaults to all
    #[arg(long = "panel")]
    panels: Vec<String>,

    /// Log level filter
    #[arg(short, long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => SettingsLoader::load_from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => SettingsLoader::load().context("loading settings")?,
    };

    // CLI overrides beat file and environment values, then re-validate
    if let Some(country) = args.country {
        settings.controls.country = country;
    }
    if let Some(window) = args.window {
        settings.controls.window_years = window;
    }
    if let Some(level) = args.log_level {
        settings.logging.level = level;
    }
    validation::validate_settings(&settings)?;

    init_logging(LoggingConfig {
        level: settings.logging.level.clone(),
        file_path: settings.logging.file.clone(),
        ansi: true,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    let kinds = parse_panels(&args.panels).map_err(|e| anyhow::anyhow!(e))?;
    info!(
        title = %settings.title,
        panels = kinds.len(),
        out_dir = %args.out_dir.display(),
        "starting dashboard render"
    );

    let composer = Composer::new(settings);
    let reports = composer.render_panels(&kinds, &args.out_dir)?;

    for report in &reports {
        println!("{}", format_report_line(report));
    }

    if exit_code(&reports) != 0 {
        anyhow::bail!("all {} requested panels failed", reports.len());
    }
    Ok(())
}
