//! Directory scanner module.
//!
//! Lists the media files sitting directly under the source root and the
//! subdirectories sitting directly under the target root. Only names are
//! returned; these two lists form the payload sent to the suggestion
//! service.

use crate::utils::fs::{ensure_directory, get_extension};
use crate::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Supported video file extensions.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "wmv", "flv", "webm"];

/// Supported subtitle file extensions.
const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "ass", "ssa", "sub", "vtt"];

/// Check if a file extension is a recognized media format.
fn is_media_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    VIDEO_EXTENSIONS.contains(&ext_lower.as_str())
        || SUBTITLE_EXTENSIONS.contains(&ext_lower.as_str())
}

/// Check if a file is a media file (video or subtitle) based on extension.
pub fn is_media_file(path: &Path) -> bool {
    get_extension(path)
        .map(|ext| is_media_extension(&ext))
        .unwrap_or(false)
}

/// List media file names directly under `source_root`.
///
/// Names are sorted so that the request payload is deterministic for a
/// given directory state.
pub fn list_media_files(source_root: &Path) -> Result<Vec<String>> {
    ensure_directory(source_root)?;

    let mut names: Vec<String> = WalkDir::new(source_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_media_file(e.path()))
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();

    tracing::debug!(
        "Found {} media files in {}",
        names.len(),
        source_root.display()
    );
    Ok(names)
}

/// List subdirectory names directly under `target_root`, sorted.
pub fn list_subdirectories(target_root: &Path) -> Result<Vec<String>> {
    ensure_directory(target_root)?;

    let mut names: Vec<String> = WalkDir::new(target_root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    names.sort();

    tracing::debug!(
        "Found {} directories in {}",
        names.len(),
        target_root.display()
    );
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_media_file() {
        assert!(is_media_file(&PathBuf::from("episode.mkv")));
        assert!(is_media_file(&PathBuf::from("episode.MP4")));
        assert!(is_media_file(&PathBuf::from("episode.srt")));
        assert!(is_media_file(&PathBuf::from("episode.ASS")));
        assert!(!is_media_file(&PathBuf::from("episode.nfo")));
        assert!(!is_media_file(&PathBuf::from("episode.txt")));
        assert!(!is_media_file(&PathBuf::from("no_extension")));
    }

    // Integration tests for the directory listings live in
    // tests/checker_tests.rs alongside the other filesystem tests.
}
