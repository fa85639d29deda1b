//! questbundle - Go Map!! quest bundler
//!
//! A CLI tool that collects quest definition files scattered across a
//! directory tree into a single `quests.json` import file.
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (quest or directory not found, bad JSON, I/O failure)
//!   2 - Usage error (no selection given, conflicting flags)

mod bundle;
mod cli;
mod config;
mod error;
mod models;
mod scanner;

use anyhow::{Context, Result};
use bundle::QuestAggregator;
use cli::Args;
use config::{Config, CONFIG_FILE_NAME};
use models::Selection;
use scanner::{QuestScanner, ScanConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    init_logging(&args, &config);

    info!("questbundle v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    let selection = args.selection();
    let result = if args.dry_run {
        handle_dry_run(&config, selection).await
    } else {
        run_bundle(&config, selection, !args.quiet).await.map(|path| {
            println!("Output written to {}", path.display());
        })
    };

    if let Err(e) = result {
        error!("Bundling failed: {:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Handle --init-config: generate a default .questbundle.toml.
fn handle_init_config() -> Result<()> {
    let path = Path::new(CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;

    println!("Created {} with default settings.", CONFIG_FILE_NAME);
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args, config: &Config) {
    let level = if !args.quiet && config.general.verbose {
        tracing::Level::DEBUG
    } else {
        args.log_level()
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    load_config_from(args.config.as_deref(), Path::new(CONFIG_FILE_NAME))
}

/// An explicit config path must load; a broken implicit one only warns.
fn load_config_from(explicit: Option<&Path>, default_path: &Path) -> Result<Config> {
    // Try explicit config path
    if let Some(config_path) = explicit {
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_optional(default_path) {
        Ok(Some(config)) => Ok(config),
        Ok(None) => Ok(Config::default()),
        Err(e) => {
            eprintln!("Warning: failed to load {}: {:#}", default_path.display(), e);
            Ok(Config::default())
        }
    }
}

fn build_aggregator(config: &Config, show_progress: bool) -> QuestAggregator {
    let scanner = QuestScanner::new(config.quests.root.clone(), ScanConfig::from(&config.quests));
    QuestAggregator::new(scanner, show_progress)
}

/// Build the bundle and write it. Nothing is written unless every selected
/// quest resolves and parses.
async fn run_bundle(config: &Config, selection: Selection, show_progress: bool) -> Result<PathBuf> {
    info!("Reading quests from {}", config.quests.root.display());

    let aggregator = build_aggregator(config, show_progress);
    let bundle = tokio::task::spawn_blocking(move || aggregator.build(&selection))
        .await
        .context("Quest loading task failed")??;

    if bundle.is_empty() {
        warn!("Selection matched no quest files; writing an empty bundle");
    }

    let path =
        bundle::write_bundle(&bundle, &config.output.directory, &config.output.file_name).await?;
    info!("Bundled {} quest(s)", bundle.len());

    Ok(path)
}

/// Handle --dry-run: resolve the selection, print the files, write nothing.
async fn handle_dry_run(config: &Config, selection: Selection) -> Result<()> {
    let aggregator = build_aggregator(config, false);
    let paths = tokio::task::spawn_blocking(move || aggregator.resolve(&selection))
        .await
        .context("Quest resolution task failed")??;

    if paths.is_empty() {
        println!("No quest files matched.");
    } else {
        println!("{} quest file(s) would be bundled:", paths.len());
        for path in &paths {
            println!("  {}", path.display());
        }
    }
    println!("Dry run: {} was not written.", config.output_file().display());

    Ok(())
}
