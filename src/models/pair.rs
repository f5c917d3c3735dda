//! Rename pair data models.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single rename suggestion returned by the AI service.
///
/// `new_name` is relative to the target root and may contain a single `/`
/// separating a target subdirectory from the file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePair {
    /// File name as it exists in the source directory.
    pub original_name: String,
    /// Suggested new path relative to the target directory.
    pub new_name: String,
}

/// Fully resolved absolute source/target paths for one move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    /// Absolute path of the file to move.
    pub source: PathBuf,
    /// Absolute path the file will be moved to.
    pub target: PathBuf,
}

/// A failed move, recorded without aborting the batch.
#[derive(Debug, Clone)]
pub struct MoveError {
    /// Source path of the failed move.
    pub source: PathBuf,
    /// Target path of the failed move.
    pub target: PathBuf,
    /// Underlying error message.
    pub message: String,
}
