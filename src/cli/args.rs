//! Command line argument definitions.

use crate::ui::PlanFormat;
use clap::Parser;
use std::path::PathBuf;

/// Media Librarian - Rename and organize media files with AI suggestions
#[derive(Parser, Debug)]
#[command(name = "media-librarian")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source directory containing files to rename
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Target directory containing media folders
    #[arg(long, value_name = "PATH")]
    pub target: Option<PathBuf>,

    /// Show what would be done without actually renaming files
    #[arg(long)]
    pub dry_run: bool,

    /// Automatically answer yes to all prompts
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Rendering format for the planned-move listing
    #[arg(long, value_enum, default_value = "table")]
    pub format: PlanFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["media-librarian"]);
        assert!(cli.source.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.yes);
        assert_eq!(cli.format, PlanFormat::Table);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "media-librarian",
            "--source",
            "/downloads",
            "--target",
            "/library",
            "--dry-run",
            "-y",
            "--format",
            "ndjson",
            "-q",
        ]);
        assert_eq!(cli.source, Some(PathBuf::from("/downloads")));
        assert_eq!(cli.target, Some(PathBuf::from("/library")));
        assert!(cli.dry_run);
        assert!(cli.yes);
        assert!(cli.quiet);
        assert_eq!(cli.format, PlanFormat::Ndjson);
    }
}
