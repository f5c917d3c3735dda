//! Interactive orchestrator.
//!
//! Sequences the run: scan, resolve, display the plan, confirm, check
//! conflicts and missing directories, create directories, move files,
//! report. Returns the process exit code: 0 for success, no-op,
//! cancellation or dry run; 1 for any fatal error or failed move.

use crate::core::{checker, mapper, mover, resolver::PairResolver, scanner};
use crate::models::pair::FilePair;
use crate::ui::{ConfirmPrompt, OutputWriter, PlanFormat};
use crate::Result;
use std::path::PathBuf;

/// Options for a single run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory containing the files to rename.
    pub source_root: PathBuf,
    /// Directory containing the candidate target subdirectories.
    pub target_root: PathBuf,
    /// Compute and display the plan without moving anything.
    pub dry_run: bool,
    /// Answer yes to every prompt.
    pub assume_yes: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Rendering format for the planned-move listing.
    pub format: PlanFormat,
}

/// The application, generic over its capabilities so tests can substitute
/// in-memory fakes for the resolver, the prompt and the writer.
pub struct App<R, P, W> {
    resolver: R,
    prompt: P,
    writer: W,
    options: RunOptions,
}

impl<R, P, W> App<R, P, W>
where
    R: PairResolver,
    P: ConfirmPrompt,
    W: OutputWriter,
{
    /// Create the application.
    pub fn new(resolver: R, prompt: P, writer: W, options: RunOptions) -> Self {
        Self {
            resolver,
            prompt,
            writer,
            options,
        }
    }

    /// Run the application, returning the process exit code.
    pub async fn run(&self) -> i32 {
        let file_pairs = match self.build_file_pairs().await {
            Ok(pairs) => pairs,
            Err(e) => {
                tracing::error!("Failed to build the move plan: {}", e);
                self.writer.notice(&format!("Error: {e}"));
                return 1;
            }
        };

        if file_pairs.is_empty() {
            self.writer.message("No files to rename. Exiting.");
            return 0;
        }

        self.writer
            .display_plan(&self.display_pairs(&file_pairs), self.options.format);

        if self.options.dry_run {
            self.writer
                .message("\nDry run completed. No files were renamed.");
            return 0;
        }

        if !self.options.assume_yes && !self.prompt.confirm("Continue with the file moves?") {
            self.writer.message("Operation cancelled by user.");
            return 0;
        }

        let conflicts = checker::find_conflicts(&file_pairs);
        if !conflicts.is_empty() && !self.options.assume_yes {
            self.writer
                .notice("\nWarning: the following files will be overwritten:");
            for conflict in &conflicts {
                self.writer.notice(&format!("  {}", conflict.display()));
            }
            if !self.prompt.confirm("Do you want to continue?") {
                self.writer.message("Operation cancelled by user.");
                return 0;
            }
        }

        let missing_dirs = checker::find_missing_directories(&file_pairs);
        if !missing_dirs.is_empty() {
            let items: Vec<String> = missing_dirs
                .iter()
                .map(|dir| dir.display().to_string())
                .collect();
            self.writer.list_items(
                "The following directories need to be created:",
                &items,
                !self.options.assume_yes,
            );

            if !self.options.assume_yes && !self.prompt.confirm("Create these directories?") {
                self.writer.message("Operation cancelled by user.");
                return 0;
            }

            if !mover::create_directories(&missing_dirs) {
                self.writer
                    .notice("Failed to create directories. Operation cancelled.");
                return 1;
            }
        }

        let errors = mover::move_files(&file_pairs, !self.options.quiet);

        if errors.is_empty() {
            self.writer
                .message("\nFile renaming completed successfully.");
            0
        } else {
            self.writer
                .notice("\nThe following errors occurred during file renaming:");
            for error in &errors {
                self.writer.notice(&format!(
                    "  Error moving {} to {}: {}",
                    error.source.display(),
                    error.target.display(),
                    error.message
                ));
            }
            self.writer
                .notice(&format!("\nCompleted with {} errors.", errors.len()));
            1
        }
    }

    /// Scan both roots and resolve the move plan.
    ///
    /// An empty source or target listing short-circuits to an empty plan.
    async fn build_file_pairs(&self) -> Result<Vec<FilePair>> {
        let files = scanner::list_media_files(&self.options.source_root)?;
        if files.is_empty() {
            tracing::info!(
                "No media files found in {}",
                self.options.source_root.display()
            );
            return Ok(Vec::new());
        }

        let directories = scanner::list_subdirectories(&self.options.target_root)?;
        if directories.is_empty() {
            tracing::info!(
                "No target directories found in {}",
                self.options.target_root.display()
            );
            return Ok(Vec::new());
        }

        let name_pairs = self.resolver.resolve(&files, &directories).await?;
        Ok(mapper::map_pairs(
            &name_pairs,
            &self.options.source_root,
            &self.options.target_root,
        ))
    }

    /// Build the display listing: source file name against the target path
    /// relative to the target root.
    fn display_pairs(&self, file_pairs: &[FilePair]) -> Vec<(String, String)> {
        file_pairs
            .iter()
            .map(|pair| {
                let source = pair
                    .source
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| pair.source.display().to_string());
                let target = pair
                    .target
                    .strip_prefix(&self.options.target_root)
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| pair.target.display().to_string());
                (source, target)
            })
            .collect()
    }
}
