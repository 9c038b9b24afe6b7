//! Completions command implementation.
//!
//! Prints a completion script for the `discs` binary, or installs it
//! into a directory when `--dir` is given.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::error::{Result, ThemeError};
use crate::output::{display_path, Printer};

use super::Cli;

const BIN_NAME: &str = "discs";

/// Generate shell completions for discs
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script into this directory instead of stdout
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

pub fn run(args: CompletionsArgs, printer: &Printer) -> Result<()> {
    match args.dir {
        Some(dir) => {
            let path = write_to_dir(args.shell, &dir)?;
            printer.success("Wrote", &display_path(&path));
        }
        None => write_script(args.shell, &mut std::io::stdout()),
    }
    Ok(())
}

/// Write the completion script for `shell` to `out`.
pub fn write_script(shell: Shell, out: &mut dyn Write) {
    clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, out);
}

/// Write the completion script into `dir`, returning the file path.
pub fn write_to_dir(shell: Shell, dir: &std::path::Path) -> Result<PathBuf> {
    clap_complete::generate_to(shell, &mut Cli::command(), BIN_NAME, dir).map_err(|e| {
        ThemeError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to write {} completions: {}", shell, e),
        }
    })
}
