//! Integration tests for directory creation and the move batch.

use media_librarian::core::mover;
use media_librarian::models::pair::FilePair;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn touch(path: &PathBuf) {
    fs::write(path, b"x").unwrap();
}

// ========== DIRECTORY CREATION TESTS ==========

#[test]
fn test_create_directories_with_ancestors() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("deeply").join("nested").join("dir");

    assert!(mover::create_directories(&[nested.clone()]));
    assert!(nested.is_dir());
}

#[test]
fn test_create_directories_idempotent() {
    let dir = TempDir::new().unwrap();
    let existing = dir.path().join("already");
    fs::create_dir(&existing).unwrap();

    assert!(mover::create_directories(&[existing]));
}

#[test]
fn test_create_directories_stops_on_failure() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    touch(&blocker);

    let before = dir.path().join("before");
    let inside_file = blocker.join("child");

    // The first directory is created, the second fails, and no rollback
    // removes the first one.
    assert!(!mover::create_directories(&[before.clone(), inside_file]));
    assert!(before.is_dir());
}

// ========== MOVE TESTS ==========

#[test]
fn test_move_files_success() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("ep1.mkv");
    let target = dir.path().join("Episode_01.mkv");
    touch(&source);

    let errors = mover::move_files(
        &[FilePair {
            source: source.clone(),
            target: target.clone(),
        }],
        false,
    );

    assert!(errors.is_empty());
    assert!(!source.exists());
    assert!(target.exists());
}

#[test]
fn test_move_files_overwrites_existing_target() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("ep1.mkv");
    let target = dir.path().join("Episode_01.mkv");
    fs::write(&source, b"new").unwrap();
    fs::write(&target, b"old").unwrap();

    let errors = mover::move_files(
        &[FilePair {
            source,
            target: target.clone(),
        }],
        false,
    );

    assert!(errors.is_empty());
    assert_eq!(fs::read(&target).unwrap(), b"new");
}

#[test]
fn test_move_files_collects_errors_without_aborting() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    touch(&blocker);

    let ok_source = dir.path().join("ok.mkv");
    let bad_source = dir.path().join("bad.mkv");
    let late_source = dir.path().join("late.mkv");
    touch(&ok_source);
    touch(&bad_source);
    touch(&late_source);

    let pairs = vec![
        FilePair {
            source: ok_source.clone(),
            target: dir.path().join("ok_moved.mkv"),
        },
        // Target parent is a regular file, so this move must fail
        FilePair {
            source: bad_source.clone(),
            target: blocker.join("bad.mkv"),
        },
        FilePair {
            source: late_source.clone(),
            target: dir.path().join("late_moved.mkv"),
        },
    ];

    let errors = mover::move_files(&pairs, false);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source, bad_source);
    assert!(!errors[0].message.is_empty());

    // Pairs before and after the failure are still applied
    assert!(dir.path().join("ok_moved.mkv").exists());
    assert!(dir.path().join("late_moved.mkv").exists());
    assert!(bad_source.exists());
}

#[test]
fn test_move_files_missing_source_is_an_error() {
    let dir = TempDir::new().unwrap();

    let errors = mover::move_files(
        &[FilePair {
            source: dir.path().join("missing.mkv"),
            target: dir.path().join("anything.mkv"),
        }],
        false,
    );

    assert_eq!(errors.len(), 1);
}
