//! schemamd - Command-line interface for JSON Schema documentation
//!
//! This is the main entry point for the schemamd application: it loads a
//! schema, resolves its references and prints Markdown documentation.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;

use cli::Cli;
use colored::control;
use config::Config;
use error::{Error, Result};
use logging::{timing::Timer, LoggingConfig};
use std::io;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Run the application
    match run(cli) {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            // A missing schema path prints the bare message on stdout
            if let Error::MissingSchema = e {
                println!("{}", e);
            } else {
                eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));
            }

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    let source = cli.schema.clone().ok_or(Error::MissingSchema)?;

    let config = Config::load_with_file(cli.config.as_deref())?;

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    execute(&source, &cli, &config)
}

#[instrument(skip(cli, config))]
fn execute(source: &str, cli: &Cli, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    tracing::info!(verbosity = cli.verbosity_level(), "Rendering schema");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    handlers::handle_render(source, cli, config, &mut out)
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    // Create logging configuration from CLI args, config file and environment
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_file(&config.logging, cli.verbosity_level())?;
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}
