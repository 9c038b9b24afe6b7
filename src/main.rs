use clap::Parser;
use miette::Result;
use theme_discs::cli::{Cli, Commands};
use theme_discs::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    match cli.command {
        Commands::Generate(args) => theme_discs::cli::generate::run(args, &printer)?,
        Commands::Init(args) => theme_discs::cli::init::run(args, &printer)?,
        Commands::Criteria(args) => theme_discs::cli::criteria::run(args)?,
        Commands::Colours(args) => theme_discs::cli::colours::run(args, &printer)?,
        Commands::Completions(args) => theme_discs::cli::completions::run(args, &printer)?,
    }

    Ok(())
}
