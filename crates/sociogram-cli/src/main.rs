//! Sociogram CLI - command-line interface for Sociogram
//!
//! This is the entry point for analyzing social-network edge lists:
//! full connectivity reports, adjacency-matrix export, and quick stats.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "sociogram")]
#[command(author = "Sociogram Contributors")]
#[command(version)]
#[command(about = "Social network analysis from edge lists", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis report
    Analyze {
        /// Edge-list file (CSV or delimited text)
        file: PathBuf,

        /// Treat edges as undirected
        #[arg(long)]
        undirected: bool,

        /// Number of leaders to report
        #[arg(short, long, default_value = "3")]
        leaders: usize,

        /// Number of best followers to report
        #[arg(short, long, default_value = "5")]
        followers: usize,

        /// Output as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Also write the adjacency matrix to this path
        #[arg(long)]
        matrix_out: Option<PathBuf>,
    },

    /// Export the adjacency matrix
    Export {
        /// Edge-list file (CSV or delimited text)
        file: PathBuf,

        /// Output file (.csv gets comma-separated rows, anything else spaces)
        #[arg(short, long, default_value = "adjacency_matrix.txt")]
        output: PathBuf,

        /// Treat edges as undirected
        #[arg(long)]
        undirected: bool,
    },

    /// Show node and edge counts
    Stats {
        /// Edge-list file (CSV or delimited text)
        file: PathBuf,

        /// Treat edges as undirected
        #[arg(long)]
        undirected: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let result = match cli.command {
        Commands::Analyze {
            file,
            undirected,
            leaders,
            followers,
            json,
            matrix_out,
        } => commands::analyze(
            &file,
            !undirected,
            leaders,
            followers,
            json,
            matrix_out.as_deref(),
        ),
        Commands::Export {
            file,
            output,
            undirected,
        } => commands::export(&file, &output, !undirected),
        Commands::Stats { file, undirected } => commands::stats(&file, !undirected),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
