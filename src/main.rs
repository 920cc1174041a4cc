//! UFO Burgers - Main entry point
//!
//! Parses the command line, sets up logging, and either prints the menu,
//! handles a configuration command, or launches the terminal experience.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

use ufoburgers::cli::{Cli, Commands};
use ufoburgers::config::ExperienceConfig;
use ufoburgers::error::{self, UfoError};
use ufoburgers::app::{App, TerminalGuard};
use ufoburgers::{audio, catalog};

/// Initialize logging. The terminal belongs to the UI, so logs go to a file
/// or nowhere.
fn init_logger(log_file: Option<&Path>) -> anyhow::Result<()> {
    let writer = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| anyhow::anyhow!("Failed to open log file {:?}: {}", path, e))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::sink),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    // Config file may name a log file; the flag wins
    let file_config = match &cli.config {
        Some(path) => Some(ExperienceConfig::load_from_file(path)?),
        None => None,
    };
    let log_file: Option<PathBuf> = cli
        .log_file
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.log_file.clone()));
    init_logger(log_file.as_deref())?;
    info!("UFO Burgers starting up");
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Menu { json, planet }) => print_menu(json, planet.as_deref())?,
        Some(Commands::Validate { config }) => {
            info!("Validating configuration file: {:?}", config);
            match ExperienceConfig::load_from_file(&config) {
                Ok(config) => match config.validate() {
                    Ok(()) => {
                        info!("Configuration validation successful");
                        println!("✓ Configuration file is valid: {:?}", config);
                    }
                    Err(e) => {
                        error!("Configuration validation failed: {}", e);
                        eprintln!("✗ Configuration validation failed: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load configuration file: {:#}", e);
                    eprintln!("✗ Failed to load configuration file: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::InitConfig { output }) => {
            ExperienceConfig::default().save_to_file(&output)?;
            info!("Wrote default configuration to {:?}", output);
            println!("✓ Default configuration written to {}", output.display());
        }
        Some(Commands::Run) | None => {
            let mut config = file_config.unwrap_or_default();
            config.mute |= cli.mute;
            config.log_file = log_file;
            run_experience(&config.validated()?)?;
        }
    }

    Ok(())
}

/// Print the catalog, or one burger
fn print_menu(json: bool, planet: Option<&str>) -> anyhow::Result<()> {
    let burgers: Vec<&catalog::Burger> = match planet {
        Some(id) => match catalog::find(id) {
            Some((_, burger)) => vec![burger],
            None => {
                eprintln!(
                    "✗ Unknown planet '{}'. Valid ids: {}",
                    id,
                    catalog::planet_ids().join(", ")
                );
                std::process::exit(1);
            }
        },
        None => catalog::CATALOG.iter().collect(),
    };

    if json {
        println!("{}", catalog::menu_json(&burgers)?);
    } else {
        for burger in burgers {
            println!("{:<8} {:<8} {}", burger.id.to_string(), burger.name, burger.tagline);
        }
    }
    Ok(())
}

/// Run the interactive experience
fn run_experience(config: &ExperienceConfig) -> error::Result<()> {
    debug!("Initializing terminal for TUI mode");

    let audio = audio::open_output(config.mute, config.sample_rate, config.volume);
    let (columns, _rows) = crossterm::terminal::size()
        .map_err(|e| UfoError::terminal(format!("Failed to query terminal size: {}", e)))?;

    // Initialize terminal
    enable_raw_mode()
        .map_err(|e| UfoError::terminal(format!("Failed to enable raw mode: {}", e)))?;

    let result = {
        // Cleanup terminal on every path from here on, even if setup failed
        let _guard = TerminalGuard::new(|| {
            let _ = disable_raw_mode();
            let _ = crossterm::execute!(
                stdout(),
                crossterm::terminal::LeaveAlternateScreen,
                crossterm::cursor::Show
            );
        });
        run_in_terminal(config, columns, audio)
    };

    if let Err(e) = &result {
        error!("Experience ended with error: {}", e);
    } else {
        info!("Experience closed");
    }
    result
}

/// Enter the alternate screen and run the app until it quits
fn run_in_terminal(
    config: &ExperienceConfig,
    columns: u16,
    audio: Box<dyn audio::AudioOutput>,
) -> error::Result<()> {
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| UfoError::terminal(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| UfoError::terminal(format!("Failed to create terminal: {}", e)))?;
    terminal.hide_cursor()?;

    let mut app = App::new(config, columns, audio);
    app.run(&mut terminal)
}
