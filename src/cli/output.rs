//! Output formatting for CLI commands
//!
//! Helpers for human-readable command output. JSON output is printed
//! by each command directly. Colors respect the NO_COLOR env var.

use crate::core::search::Term;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for search terms
    pub fn term(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for field paths
    pub fn field(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for list positions
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Display form of a term; phrases are wrapped in double quotes
pub fn format_term(term: &Term) -> String {
    if term.is_phrase() {
        format!("\"{term}\"")
    } else {
        term.to_string()
    }
}

/// Truncate to `max` characters, appending `...` when cut
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
