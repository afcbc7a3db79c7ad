//! Styled terminal output for operation results and diagnostics.
//!
//! Everything here writes to stderr: stdout is reserved for the resulting
//! property bag so the calling framework can consume it.

use crate::provider::{Diagnostic, Severity};
use owo_colors::OwoColorize;

/// Print a success message with a green checkmark
pub fn success(message: &str) {
    // Pastel mint green: RGB(152, 225, 152)
    eprintln!(
        "{} {}",
        "✓".truecolor(152, 225, 152).bold(),
        message.bright_white()
    );
}

/// Print an operation diagnostic: summary line plus dimmed detail lines
pub fn diagnostic(diag: &Diagnostic) {
    let symbol = match diag.severity {
        // Pastel coral: RGB(255, 160, 160)
        Severity::Error => "✗".truecolor(255, 160, 160).bold().to_string(),
        // Pastel cream: RGB(255, 230, 160)
        Severity::Warning => "⚠".truecolor(255, 230, 160).bold().to_string(),
    };
    eprintln!("{} {}", symbol, diag.summary.bright_white());

    for line in diag.detail.trim_end().lines() {
        eprintln!("  {}", line.truecolor(160, 160, 160));
    }
}
