mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{import, inspect, ImportArgs, InspectArgs};

/// Sketchport CLI - import portable design documents into a host document
#[derive(Parser, Debug)]
#[command(name = "sketchport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import portable JSON files into a fresh in-memory document
    Import(ImportArgs),

    /// Show how a portable file classifies and what it contains
    Inspect(InspectArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Import(args) => import(args),
        Command::Inspect(args) => inspect(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
