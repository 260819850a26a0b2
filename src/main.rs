use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;
mod core;
mod error;
mod models;

use commands::{print_check_report, run_checks, run_eval};
use error::CalcError;
use models::{Config, Op, OutputFormat};

/// intcalc - four-function integer calculator
#[derive(Parser)]
#[command(name = "intcalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the output format
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single operation
    Eval {
        /// Operation to apply
        #[arg(value_enum)]
        op: Op,

        /// Left operand
        #[arg(allow_negative_numbers = true)]
        a: i64,

        /// Right operand
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },

    /// Run the built-in self-check suite
    Check,
}

/// Load intcalc.toml from the working directory and apply CLI overrides
fn load_config(format: Option<OutputFormat>) -> Result<Config, CalcError> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd)?;
    Ok(config.with_overrides(format))
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    let result = match cli.command {
        Commands::Eval { op, a, b } => {
            load_config(cli.format).and_then(|config| run_eval(op, a, b, &config))
        }

        Commands::Check => {
            let report = run_checks();
            print_check_report(&report);
            if report.is_pass() {
                Ok(())
            } else {
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
