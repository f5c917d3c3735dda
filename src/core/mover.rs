//! File mover module.
//!
//! Creates missing target directories and performs the move batch. Moves
//! are sequential and non-transactional: a failed move is recorded and the
//! remaining pairs are still attempted.

use crate::models::pair::{FilePair, MoveError};
use crate::utils::fs;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Create each directory (with ancestors), idempotently.
///
/// Stops on the first failure and returns `false`; directories already
/// created are left in place.
pub fn create_directories(directories: &[PathBuf]) -> bool {
    for directory in directories {
        match fs::create_dir_all(directory) {
            Ok(()) => {
                tracing::debug!("Created directory: {}", directory.display());
            }
            Err(e) => {
                tracing::error!("Failed to create directory {}: {}", directory.display(), e);
                return false;
            }
        }
    }
    true
}

/// Move every pair, collecting per-file errors without aborting the batch.
///
/// Returns the list of failed moves; an empty list means full success.
pub fn move_files(file_pairs: &[FilePair], show_progress: bool) -> Vec<MoveError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(file_pairs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut errors = Vec::new();
    for pair in file_pairs {
        pb.set_message(
            pair.target
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string(),
        );

        tracing::info!(
            "Moving {} -> {}",
            pair.source.display(),
            pair.target.display()
        );

        if let Err(e) = fs::move_file(&pair.source, &pair.target) {
            tracing::error!("Failed to move {}: {}", pair.source.display(), e);
            errors.push(MoveError {
                source: pair.source.clone(),
                target: pair.target.clone(),
                message: e.to_string(),
            });
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    errors
}
