//! Terminal output for the skinshop CLI.
//!
//! Status lines look like Cargo's: a right-aligned, coloured verb followed
//! by a message. They go to stderr so stdout stays clean for JSON and
//! completion scripts.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::validation::{Diagnostic, Severity};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const VERB_WIDTH: usize = 12;

/// Status printer; colours only when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// e.g. "     Zipping cape01"
    pub fn status(&self, verb: &str, message: &str) {
        self.line(GREEN, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.line(CYAN, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(YELLOW, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(RED, verb, message);
    }

    /// Print one validation finding, with its help text on the next line.
    pub fn diagnostic(&self, diagnostic: &Diagnostic) {
        let message = self.finding(diagnostic);
        match diagnostic.severity {
            Severity::Error => self.error("error", &message),
            Severity::Warning => self.warning("warning", &message),
        }

        if let Some(help) = &diagnostic.help {
            self.info("help", help);
        }
    }

    /// "<layer>: <message> <code>"
    fn finding(&self, diagnostic: &Diagnostic) -> String {
        let message = match &diagnostic.layer {
            Some(layer) => format!("{}: {}", self.bold(layer), diagnostic.message),
            None => diagnostic.message.clone(),
        };
        format!("{} {}", message, self.dim(&diagnostic.code))
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = if self.color {
            writeln!(stderr, "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            writeln!(stderr, "{verb:>VERB_WIDTH$} {message}")
        };
    }
}

/// `plural(2, "folder", "folders")` -> "2 folders".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { pluralized })
}

/// Path relative to the working directory when it is inside it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(|p| p.display().to_string()));

    match relative {
        Some(s) if s.is_empty() => ".".to_string(),
        Some(s) => s,
        None => path.display().to_string(),
    }
}
