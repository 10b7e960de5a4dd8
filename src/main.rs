//! smalltext CLI - hypertext note engine

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use smalltext::commands;
use smalltext::interface::Context;

#[derive(Parser)]
#[command(name = "smalltext")]
#[command(author, version, about = "Hypertext note engine", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify the link graph and list unresolved mentions
    Check {
        /// Fail if any mention is unresolved
        #[arg(long)]
        strict: bool,
    },

    /// Show the forward and backward links of a document
    Links {
        /// Document title
        title: String,
    },

    /// Dump the parsed blocks of a document as JSON
    Blocks {
        /// Document title
        title: String,
    },

    /// Render a document as markdown
    Export {
        /// Document title
        title: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Determine working directory
    let base_dir = cli
        .directory
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let config = match cli.config {
        Some(ref path) => smalltext::config::read_config_file(path),
        None => smalltext::config::read_config(&base_dir),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let ctx = Context::new(config, base_dir);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Check { strict } => commands::check(&ctx, &mut out).map(|summary| {
            if strict && !summary.is_clean() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }),

        Commands::Links { title } => {
            commands::links(&ctx, &title, &mut out).map(|()| ExitCode::SUCCESS)
        }

        Commands::Blocks { title } => {
            commands::blocks(&ctx, &title, &mut out).map(|()| ExitCode::SUCCESS)
        }

        Commands::Export { title, output } => {
            let options = commands::ExportOptions { title, output };
            commands::export(&ctx, &options, &mut out).map(|()| ExitCode::SUCCESS)
        }
    };
    let _ = out.flush();

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
