//! Colours command: list the names usable in descriptors.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{colour_names, named_colour, ColourRange};

/// List colour ranges and named colours
#[derive(Args, Debug)]
pub struct ColoursArgs {
    /// Only list the colour ranges
    #[arg(long)]
    pub ranges: bool,
}

pub fn run(args: ColoursArgs, printer: &Printer) -> Result<()> {
    let ranges: Vec<_> = ColourRange::names().collect();
    printer.info("Ranges", &plural(ranges.len(), "range", "ranges"));
    for name in ranges {
        println!("{}", name.to_lowercase());
    }

    if args.ranges {
        return Ok(());
    }

    let names: Vec<_> = colour_names().collect();
    printer.info("Colours", &plural(names.len(), "colour", "colours"));
    for name in names {
        // Every listed name resolves; skip rather than panic if the table drifts
        if let Some(colour) = named_colour(name) {
            println!("{:<22} {}", name, colour.to_hex_css());
        }
    }

    Ok(())
}
