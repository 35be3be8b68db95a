// CLI - command-line argument parsing
//
// Positional arguments are community names (case-insensitive) or `all`.
// Validation of the names themselves lives in `projects::parse_communities`.

use clap::Parser;
use std::path::PathBuf;

use crate::projects::{COMMUNITIES, MIN_COMMUNITIES};

/// Hackathon Roulette - spin a wheel to pick a cross-community project
#[derive(Parser, Debug)]
#[command(name = "hackroulette")]
#[command(version)]
#[command(about = "Cross-community hackathon project generator", long_about = None)]
pub struct Cli {
    /// Communities to combine (at least two), or `all`
    #[arg(value_name = "COMMUNITY")]
    pub communities: Vec<String>,

    /// Spin once without the terminal UI and print the result
    #[arg(long)]
    pub headless: bool,

    /// Seed for project pairing and spin strength (reproducible runs)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file to use instead of ~/.config/hackroulette/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

pub fn print_usage() {
    println!("Hackathon Roulette - Cross-Community Project Generator");
    println!("{}", "=".repeat(60));
    println!("\nUsage: hackroulette <community1> <community2> ...");
    println!("\nAvailable communities:");
    for community in COMMUNITIES {
        println!("  - {}", community);
    }
    println!("\nExamples:");
    println!("  hackroulette Python Frontend");
    println!("  hackroulette Python API DevOps");
    println!("  hackroulette all");
    println!("\nNote: You need at least {} communities.", MIN_COMMUNITIES);
}
