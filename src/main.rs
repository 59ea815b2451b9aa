//! Article Params - terminal article reader with a settings panel
//!
//! Shows an article styled by the committed settings. The settings panel on
//! the right edge edits a draft that is only applied on request.

use anyhow::{Context, Result};
use article_params::config::Config;
use article_params::constants::{APP_BINARY_NAME, APP_NAME};
use article_params::models::Article;
use article_params::{logging, tui};
use clap::Parser;
use std::path::PathBuf;

/// Article Params - terminal article reader with a settings panel
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Plain text article to show (first line is the title)
    #[arg(value_name = "FILE")]
    article_path: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter directive (overrides the config file)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Write logs to this file (overrides the config file)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_file_path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(file) = cli.log_file {
        config.logging.file = Some(file);
    }

    if cli.print_config {
        let content =
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
        print!("{content}");
        return Ok(());
    }

    if let Some(file) = &config.logging.file {
        logging::init(&config.logging.level, file)?;
    }

    let article = match &cli.article_path {
        Some(path) if !path.exists() => {
            eprintln!("Error: Article file not found: {}", path.display());
            eprintln!();
            eprintln!("Examples:");
            eprintln!("  {} article.txt", APP_BINARY_NAME);
            eprintln!("  {}            (built-in sample)", APP_BINARY_NAME);
            std::process::exit(1);
        }
        Some(path) => Article::load(path)?,
        None => Article::sample(),
    };

    tracing::info!("{} v{} starting", APP_NAME, env!("CARGO_PKG_VERSION"));

    let mut app_state = tui::AppState::new(config, article)?;

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    if app_state.config.behavior.persist_on_exit {
        let committed = app_state.committed;
        app_state.config.remember_state(&committed);
        app_state.config.save_to(&config_path)?;
    }

    tracing::info!("exiting");
    Ok(())
}
