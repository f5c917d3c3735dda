//! Output writer.
//!
//! The orchestrator talks to an `OutputWriter` rather than printing
//! directly, so tests can capture output with an in-memory sink.

use crate::ui::render::{render_plan, PlanFormat};
use colored::Colorize;

/// Capability of rendering user-facing output.
pub trait OutputWriter {
    /// Print an informational or success message. Suppressed in quiet mode.
    fn message(&self, message: &str);

    /// Print an error or warning message. Always shown.
    fn notice(&self, message: &str);

    /// Print a list of items with a header. Suppressed in quiet mode unless
    /// `always_show` is set.
    fn list_items(&self, header: &str, items: &[String], always_show: bool);

    /// Print the planned-move listing in the requested format.
    fn display_plan(&self, pairs: &[(String, String)], format: PlanFormat);
}

/// Console implementation of `OutputWriter` with colored styling.
pub struct ConsoleWriter {
    quiet: bool,
}

impl ConsoleWriter {
    /// Create a console writer.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl OutputWriter for ConsoleWriter {
    fn message(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    fn notice(&self, message: &str) {
        // Style by severity, mirroring the message wording
        let lower = message.to_lowercase();
        let styled = if lower.contains("error") {
            message.red().bold()
        } else if lower.contains("warning") {
            message.yellow().bold()
        } else {
            message.cyan().bold()
        };
        println!("{styled}");
    }

    fn list_items(&self, header: &str, items: &[String], always_show: bool) {
        if self.quiet && !always_show {
            return;
        }

        println!();
        println!("{}", header.cyan().bold());
        for item in items {
            println!("  {}", item.dimmed());
        }
    }

    fn display_plan(&self, pairs: &[(String, String)], format: PlanFormat) {
        if format == PlanFormat::Table && !self.quiet {
            println!();
            println!("{}", "Planned file moves:".cyan().bold());
        }
        print!("{}", render_plan(pairs, format));
    }
}
