use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use gmv::{validate_edits, validate_paths, GmvError};

fn p(s: &str) -> PathBuf {
    PathBuf::from(s)
}

#[test]
fn existing_unique_paths_pass() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    let d = td.path().join("dir");
    fs::write(&a, "a").unwrap();
    fs::create_dir(&d).unwrap();
    validate_paths(&[a, d]).unwrap();
}

#[test]
fn duplicate_input_is_reported() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    fs::write(&a, "a").unwrap();
    let err = validate_paths(&[a.clone(), a.clone()]).unwrap_err();
    assert!(matches!(err, GmvError::DuplicateInput(ref d) if *d == a), "got {err:?}");
    assert!(err.to_string().contains("duplicate file specified"));
}

#[test]
fn missing_path_is_reported() {
    let td = tempdir().unwrap();
    let ghost = td.path().join("ghost.txt");
    let err = validate_paths(&[ghost.clone()]).unwrap_err();
    assert!(matches!(err, GmvError::NotFound(ref g) if *g == ghost));
    assert!(err.is_input_error());
}

#[cfg(unix)]
#[test]
fn dangling_symlink_counts_as_present() {
    let td = tempdir().unwrap();
    let link = td.path().join("dangling");
    std::os::unix::fs::symlink(td.path().join("nowhere"), &link).unwrap();
    validate_paths(&[link]).unwrap();
}

#[test]
fn line_count_mismatch_reports_both_counts() {
    let err = validate_edits(&[p("/d/a"), p("/d/b")], &[p("/d/a")]).unwrap_err();
    assert!(matches!(
        err,
        GmvError::ShapeMismatch {
            expected: 2,
            actual: 1
        }
    ));
    assert!(
        err.to_string().contains("expected 2 lines, got 1 lines"),
        "message was: {err}"
    );
}

#[test]
fn moving_to_another_directory_is_rejected() {
    let err = validate_edits(&[p("/d/a")], &[p("/other/a")]).unwrap_err();
    match err {
        GmvError::DirectoryChanged { from, to } => {
            assert_eq!(from, p("/d/a"));
            assert_eq!(to, p("/other/a"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn moving_into_a_subdirectory_is_rejected() {
    let err = validate_edits(&[p("/d/a")], &[p("/d/sub/a")]).unwrap_err();
    assert!(matches!(err, GmvError::DirectoryChanged { .. }));
}

#[test]
fn duplicate_target_reports_the_path() {
    let err = validate_edits(&[p("/d/a"), p("/d/b")], &[p("/d/x"), p("/d/x")]).unwrap_err();
    assert!(matches!(err, GmvError::DuplicateTarget(ref t) if *t == p("/d/x")));
    assert!(err.to_string().contains("duplicate target filename"));
}

#[test]
fn unchanged_and_swapped_names_are_valid() {
    validate_edits(&[p("/d/a"), p("/d/b")], &[p("/d/a"), p("/d/b")]).unwrap();
    validate_edits(&[p("/d/a"), p("/d/b")], &[p("/d/b"), p("/d/a")]).unwrap();
}

#[test]
fn shape_is_checked_before_anything_else() {
    // Both a directory change and a length mismatch: the count wins.
    let err = validate_edits(&[p("/d/a"), p("/d/b")], &[p("/x/a")]).unwrap_err();
    assert!(matches!(err, GmvError::ShapeMismatch { .. }));
}
