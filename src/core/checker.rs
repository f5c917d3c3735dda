//! Conflict and directory checker module.
//!
//! Pure read-only filesystem queries over a computed move plan. Results
//! reflect the filesystem at call time; nothing is cached across calls.

use crate::models::pair::FilePair;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Return every target path that already exists and would be overwritten.
///
/// Order follows the order of `file_pairs`.
pub fn find_conflicts(file_pairs: &[FilePair]) -> Vec<PathBuf> {
    file_pairs
        .iter()
        .filter(|pair| pair.target.exists())
        .map(|pair| pair.target.clone())
        .collect()
}

/// Return the distinct target parent directories that do not yet exist.
///
/// Deduplicated and sorted so the list is presented to the user in a stable
/// order.
pub fn find_missing_directories(file_pairs: &[FilePair]) -> Vec<PathBuf> {
    let missing: BTreeSet<PathBuf> = file_pairs
        .iter()
        .filter_map(|pair| pair.target.parent())
        .filter(|dir| !dir.exists())
        .map(|dir| dir.to_path_buf())
        .collect();
    missing.into_iter().collect()
}
