//! CLI binary entry point for hr-normalizer-cli

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use hr_normalizer::cli::commands::check::{CheckArgs, handle_check};
use hr_normalizer::cli::commands::normalize::{NormalizeArgs, handle_normalize};

#[derive(Parser)]
#[command(name = "hr-normalizer-cli")]
#[command(about = "Normalizes the flat HR attrition CSV into a 3NF PostgreSQL schema")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: CSV extracts plus the PostgreSQL setup script
    Normalize {
        /// Source CSV file (wide HR export)
        input: PathBuf,
        /// Directory the extracts and SQL script are published to
        #[arg(short, long, default_value = "hr_output")]
        output_dir: PathBuf,
        /// Overwrite an existing output directory
        #[arg(short, long)]
        force: bool,
    },
    /// Load and normalize only, reporting table counts without writing
    Check {
        /// Source CSV file (wide HR export)
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Normalize {
            input,
            output_dir,
            force,
        } => handle_normalize(&NormalizeArgs {
            input,
            output_dir,
            force,
        }),
        Commands::Check { input } => handle_check(&CheckArgs { input }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
