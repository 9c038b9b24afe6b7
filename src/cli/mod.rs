pub mod colours;
pub mod completions;
pub mod criteria;
pub mod generate;
pub mod init;

use clap::{Parser, Subcommand};

/// discs - Weighted colour themes sorted into clusters
#[derive(Parser, Debug)]
#[command(name = "discs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress status output on stderr
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sample a theme and print the disc scene as JSON
    Generate(generate::GenerateArgs),

    /// Write a discs.yaml with the default theme
    Init(init::InitArgs),

    /// List the sorting criteria
    Criteria(criteria::CriteriaArgs),

    /// List colour ranges and named colours
    Colours(colours::ColoursArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
