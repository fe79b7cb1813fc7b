use std::{fs, path::PathBuf};

use proctor::{
    paths::ProjectPaths,
    style::{CheckTarget, FileResult, StyleDiagnostic, StyleEngine, StyleError, StyleProfile},
};

#[test]
fn missing_target_fails_before_any_process() {
    let err = CheckTarget::new(&PathBuf::from("/definitely/not/here/Foo.java")).unwrap_err();
    assert!(matches!(err, StyleError::TargetNotFound(_)));
}

#[test]
fn directory_target_is_not_a_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = CheckTarget::new(dir.path()).unwrap_err();
    assert!(matches!(err, StyleError::TargetNotAFile(_)));
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let notes = dir.path().join("notes.txt");
    fs::write(&notes, "not java").expect("write fixture");

    let err = CheckTarget::new(&notes).unwrap_err();
    assert!(matches!(err, StyleError::TargetUnsupported(_)));
}

#[test]
fn valid_target_absolutizes_and_keeps_its_name() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let source = dir.path().join("Foo.java");
    fs::write(&source, "class Foo {}").expect("write fixture");

    let target = CheckTarget::new(&source).expect("accept java source file");
    assert!(target.path().is_absolute());
    assert_eq!(target.file_name(), "Foo.java");
}

#[test]
fn validation_order_reports_missing_before_extension() {
    // A path that both does not exist and has the wrong extension reports
    // absence first.
    let err = CheckTarget::new(&PathBuf::from("/definitely/not/here/notes.txt")).unwrap_err();
    assert!(matches!(err, StyleError::TargetNotFound(_)));
}

#[test]
fn empty_batch_short_circuits_with_zero() {
    let engine = StyleEngine::new(ProjectPaths::default());
    let count = engine
        .check_batch(StyleProfile::Google, &[])
        .expect("empty batch");
    assert_eq!(count, 0);
}

#[test]
fn batch_aborts_on_first_invalid_target() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let engine = StyleEngine::new(ProjectPaths::new(dir.path().to_path_buf()));

    let targets = vec![dir.path().join("Missing.java")];
    let err = engine
        .check_batch(StyleProfile::Google, &targets)
        .unwrap_err();
    assert!(matches!(err, StyleError::TargetNotFound(_)));
}

#[test]
fn file_result_status_tracks_diagnostics() {
    let clean = FileResult::new("Foo.java", Vec::new());
    assert!(clean.is_clean());
    assert_eq!(clean.status().as_str(), "SUCCESSFUL");

    let dirty = FileResult::new("Bar.java", vec![
        StyleDiagnostic::builder()
            .severity(proctor::style::Severity::Error)
            .message("12: message")
            .build(),
    ]);
    assert!(!dirty.is_clean());
    assert_eq!(dirty.status().as_str(), "FAILED");
}

#[test]
fn error_messages_carry_the_offending_path() {
    let err = CheckTarget::new(&PathBuf::from("/nope/Abc.java")).unwrap_err();
    assert!(err.to_string().contains("/nope/Abc.java"));
}
