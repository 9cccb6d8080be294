//! QOCA Command-Line Interface
//!
//! Builds and inspects QOCA ansatz circuits described by YAML or JSON
//! configuration files.
//!
//! ```text
//! qoca build --config h2.yaml --format qasm --output h2.qasm
//! qoca info --config h2.yaml
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{build, info, version};

/// QOCA - quantum optimal control inspired ansatz builder
#[derive(Parser)]
#[command(name = "qoca")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the ansatz circuit described by a configuration file
    Build {
        /// Configuration file (YAML or JSON)
        #[arg(short, long)]
        config: String,

        /// Comma-separated parameter values (all zeros if omitted)
        #[arg(short, long, conflicts_with = "symbolic")]
        params: Option<String>,

        /// Build with symbolic parameters theta[0], theta[1], ...
        #[arg(long)]
        symbolic: bool,

        /// Output format (summary, json, qasm)
        #[arg(short, long, default_value = "summary")]
        format: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show the structure and parameter layout of an ansatz
    Info {
        /// Configuration file (YAML or JSON)
        #[arg(short, long)]
        config: String,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Build {
            config,
            params,
            symbolic,
            format,
            output,
        } => build::execute(
            &config,
            params.as_deref(),
            symbolic,
            &format,
            output.as_deref(),
        ),

        Commands::Info { config } => info::execute(&config),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
