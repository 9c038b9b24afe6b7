//! Terminal status output for the discs CLI.
//!
//! Status lines go to stderr with a right-aligned coloured verb, so stdout
//! stays clean for JSON scenes and name listings.

use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Stderr status printer.
///
/// ANSI colour is used only when stderr is a terminal. A quiet printer
/// drops every status line.
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    color: bool,
    quiet: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
            quiet: false,
        }
    }

    /// A printer that writes nothing.
    pub fn quiet() -> Self {
        Self {
            color: false,
            quiet: true,
        }
    }

    /// Green verb, e.g. "     Sampled 200 colours from discs".
    pub fn status(&self, verb: &str, message: &str) {
        self.line(GREEN, verb, message);
    }

    /// Green verb for a finished action.
    pub fn success(&self, verb: &str, message: &str) {
        self.line(GREEN, verb, message);
    }

    /// Cyan verb for informational lines.
    pub fn info(&self, verb: &str, message: &str) {
        self.line(CYAN, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn line(&self, color: &str, verb: &str, message: &str) {
        if self.quiet {
            return;
        }
        let mut stderr = io::stderr().lock();
        let _ = if self.color {
            writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            writeln!(stderr, "{verb:>VERB_WIDTH$} {message}")
        };
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "colour", "colours")` → "1 colour".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { pluralized })
}

/// Return a path relative to the working directory when possible.
pub fn display_path(path: &std::path::Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(|p| p.display().to_string()));

    match relative {
        Some(s) if s.is_empty() => ".".to_string(),
        Some(s) => s,
        None => path.display().to_string(),
    }
}
