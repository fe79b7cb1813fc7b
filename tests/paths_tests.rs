use proctor::paths::ProjectPaths;

#[test]
fn defaults_follow_the_maven_layout() {
    let dir = tempfile::tempdir().expect("create temp root");
    let root = dir.path().to_path_buf();

    let paths = ProjectPaths::new(root.clone());
    assert_eq!(paths.root_dir(), root);
    assert_eq!(paths.source_dir(), root.join("src/main/java"));
    assert_eq!(paths.test_dir(), root.join("src/test/java"));
    assert_eq!(paths.build_dir(), root.join("target"));
    assert_eq!(paths.classes_dir(), root.join("target/classes"));
    assert_eq!(paths.test_classes_dir(), root.join("target/test-classes"));
    assert_eq!(paths.lib_dir(), root.join("lib"));
}

#[test]
fn from_parts_without_overrides_matches_new() {
    let dir = tempfile::tempdir().expect("create temp root");
    let root = dir.path().to_path_buf();

    let via_new = ProjectPaths::new(root.clone());
    let via_parts = ProjectPaths::from_parts(root, None, None, None, None);
    assert_eq!(via_new, via_parts);
}

#[test]
fn overrides_replace_only_their_directory() {
    let dir = tempfile::tempdir().expect("create temp root");
    let root = dir.path().to_path_buf();

    let paths = ProjectPaths::from_parts(
        root.clone(),
        Some(root.join("sources")),
        None,
        None,
        None,
    );
    assert_eq!(paths.source_dir(), root.join("sources"));
    assert_eq!(paths.test_dir(), root.join("src/test/java"));

    let relocated = paths.with_lib_dir(root.join("jars"));
    assert_eq!(relocated.lib_dir(), root.join("jars"));
}

#[test]
fn separator_matches_the_platform() {
    let paths = ProjectPaths::default();
    if cfg!(windows) {
        assert_eq!(paths.separator(), ";");
    } else {
        assert_eq!(paths.separator(), ":");
    }
}
