//! Courier command line entry point.
//!
//! Loads the config, runs every request in order and prints the responses,
//! or in test mode a pass/fail line per request. Logging goes to stderr and
//! is controlled with `RUST_LOG`.

use clap::Parser;
use courier::config::{load_config, locate_config};
use courier::executor::{ExecutionConfig, ReqwestTransport};
use courier::formatter::{paint, Color, ConsoleReporter};
use courier::runner::{Pipeline, PipelineOptions, RunMode};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "courier", version, about = "Run chained HTTP requests from a YAML file")]
struct Cli {
    /// Request file, defaults to courier.yaml or .courier/config.yaml
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Check each response against wantStatus and wantResponse
    #[arg(short = 't', long = "test")]
    test: bool,

    /// Pretty-print JSON responses
    #[arg(long)]
    json: bool,

    /// Client timeout in seconds (none by default)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let color = !cli.no_color;

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(message) => {
            eprintln!("{}: {}", paint("Error", Color::Red, color), message);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every use case succeeded. Errors that happen before the
/// pipeline starts are returned as messages.
fn run(cli: &Cli) -> Result<bool, String> {
    let cwd = std::env::current_dir().map_err(|e| e.to_string())?;
    let path = locate_config(cli.file.as_deref(), &cwd).map_err(|e| e.to_string())?;
    log::info!("using config {}", path.display());

    let config = load_config(&path).map_err(|e| e.to_string())?;
    for finding in config.lint() {
        log::warn!("{}", finding);
    }

    let mut env = config.environment().map_err(|e| e.to_string())?;
    let execution = ExecutionConfig {
        timeout_secs: cli.timeout,
    };
    let transport = ReqwestTransport::new(&execution).map_err(|e| e.to_string())?;

    let options = PipelineOptions {
        mode: if cli.test { RunMode::Test } else { RunMode::Normal },
        pretty_json: cli.json,
    };
    let mut reporter = ConsoleReporter::stdout(!cli.no_color).with_mode(options.mode);

    // Failures are already printed by the reporter
    match Pipeline::new(&transport, options).run(&config.requests, &mut env, &mut reporter) {
        Ok(summary) => {
            if options.mode == RunMode::Test {
                reporter.summary(&summary);
            }
            Ok(summary.is_success())
        }
        Err(_) => Ok(false),
    }
}
