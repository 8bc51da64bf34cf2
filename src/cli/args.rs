//! CLI argument definitions using clap

use clap::Parser;

/// Interactive triangle calculator: perimeter, area, heights, medians, and bisectors
#[derive(Parser, Debug)]
#[command(name = "trigon")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<clap_complete::Shell>,
}
