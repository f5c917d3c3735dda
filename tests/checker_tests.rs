//! Integration tests for directory scanning and plan checking.
//!
//! Tests cover:
//! - Source/target listings
//! - Conflict detection
//! - Missing directory detection

use media_librarian::core::{checker, scanner};
use media_librarian::models::pair::FilePair;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn touch(path: &PathBuf) {
    fs::write(path, b"x").unwrap();
}

// ========== SCANNER TESTS ==========

#[test]
fn test_list_media_files_filters_and_sorts() {
    let dir = TempDir::new().unwrap();
    touch(&dir.path().join("b_episode.mkv"));
    touch(&dir.path().join("a_episode.mp4"));
    touch(&dir.path().join("subtitles.srt"));
    touch(&dir.path().join("notes.txt"));
    fs::create_dir(dir.path().join("nested")).unwrap();
    touch(&dir.path().join("nested").join("inner.mkv"));

    let files = scanner::list_media_files(dir.path()).unwrap();

    // Top-level media files only, sorted; the nested file is not listed
    assert_eq!(files, vec!["a_episode.mp4", "b_episode.mkv", "subtitles.srt"]);
}

#[test]
fn test_list_subdirectories_ignores_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("Show B")).unwrap();
    fs::create_dir(dir.path().join("Show A")).unwrap();
    touch(&dir.path().join("stray.mkv"));

    let dirs = scanner::list_subdirectories(dir.path()).unwrap();

    assert_eq!(dirs, vec!["Show A", "Show B"]);
}

#[test]
fn test_list_media_files_missing_path() {
    let result = scanner::list_media_files(&PathBuf::from("/nonexistent/source"));
    assert!(result.is_err());
}

#[test]
fn test_list_media_files_on_a_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("not_a_dir.mkv");
    touch(&file);

    let result = scanner::list_media_files(&file);
    assert!(result.is_err());
}

// ========== CONFLICT TESTS ==========

#[test]
fn test_find_conflicts_reports_existing_targets() {
    let dir = TempDir::new().unwrap();
    let existing = dir.path().join("existing.mkv");
    touch(&existing);

    let pairs = vec![
        FilePair {
            source: dir.path().join("a.mkv"),
            target: existing.clone(),
        },
        FilePair {
            source: dir.path().join("b.mkv"),
            target: dir.path().join("missing.mkv"),
        },
    ];

    let conflicts = checker::find_conflicts(&pairs);
    assert_eq!(conflicts, vec![existing]);
}

#[test]
fn test_find_conflicts_reflects_current_filesystem() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("late.mkv");
    let pairs = vec![FilePair {
        source: dir.path().join("a.mkv"),
        target: target.clone(),
    }];

    assert!(checker::find_conflicts(&pairs).is_empty());

    // Creating the target between calls changes the second result
    touch(&target);
    assert_eq!(checker::find_conflicts(&pairs), vec![target]);
}

// ========== MISSING DIRECTORY TESTS ==========

#[test]
fn test_find_missing_directories_dedups_shared_parents() {
    let dir = TempDir::new().unwrap();
    let show = dir.path().join("Show");

    let pairs = vec![
        FilePair {
            source: dir.path().join("a.mkv"),
            target: show.join("a.mkv"),
        },
        FilePair {
            source: dir.path().join("b.mkv"),
            target: show.join("b.mkv"),
        },
    ];

    let missing = checker::find_missing_directories(&pairs);
    assert_eq!(missing, vec![show]);
}

#[test]
fn test_find_missing_directories_sorted_and_skips_existing() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("Present")).unwrap();

    let pairs = vec![
        FilePair {
            source: dir.path().join("a.mkv"),
            target: dir.path().join("Zebra").join("a.mkv"),
        },
        FilePair {
            source: dir.path().join("b.mkv"),
            target: dir.path().join("Present").join("b.mkv"),
        },
        FilePair {
            source: dir.path().join("c.mkv"),
            target: dir.path().join("Alpha").join("c.mkv"),
        },
    ];

    let missing = checker::find_missing_directories(&pairs);
    assert_eq!(
        missing,
        vec![dir.path().join("Alpha"), dir.path().join("Zebra")]
    );
}
