use anyhow::Result;
use clap::{Parser, Subcommand};
use industry_scout::{analyze, check};

#[derive(Parser)]
#[command(name = "industry-scout")]
#[command(about = "Classify author affiliations as pharma/biotech industry and report company collaborations")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify affiliation strings and print one JSON record per line
    Check(check::CheckArgs),
    /// Analyze paper records and export industry papers and corpus statistics
    Analyze(analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    match cli.command {
        Commands::Check(args) => check::run(args),
        Commands::Analyze(args) => analyze::run(args),
    }
}
