#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Represents standard workspace paths for a Maven-layout Java project.
pub struct ProjectPaths {
    /// Root directory of the project workspace.
    root_dir:         PathBuf,
    /// `src/main/java/` directory containing production sources.
    source_dir:       PathBuf,
    /// `src/test/java/` directory containing test sources.
    test_dir:         PathBuf,
    /// `target/` build output directory.
    build_dir:        PathBuf,
    /// `target/classes/` directory holding compiled production classes.
    classes_dir:      PathBuf,
    /// `target/test-classes/` directory holding compiled test classes.
    test_classes_dir: PathBuf,
    /// `lib/` directory holding downloaded tool jars.
    lib_dir:          PathBuf,
}

impl ProjectPaths {
    /// Creates a new set of workspace paths rooted at `root_dir`.
    pub fn new(root_dir: PathBuf) -> Self {
        Self::build_with_defaults(root_dir, None, None, None, None)
    }

    /// Construct paths from optional overrides.
    pub fn from_parts(
        root_dir: PathBuf,
        source_dir: Option<PathBuf>,
        test_dir: Option<PathBuf>,
        build_dir: Option<PathBuf>,
        lib_dir: Option<PathBuf>,
    ) -> Self {
        Self::build_with_defaults(root_dir, source_dir, test_dir, build_dir, lib_dir)
    }

    /// Returns the platform specific separator character for java classpaths.
    pub fn separator(&self) -> &'static str {
        if cfg!(windows) { ";" } else { ":" }
    }

    /// Root directory for the project.
    pub fn root_dir(&self) -> &Path {
        self.root_dir.as_path()
    }

    /// Production source directory for the project.
    pub fn source_dir(&self) -> &Path {
        self.source_dir.as_path()
    }

    /// Test source directory for the project.
    pub fn test_dir(&self) -> &Path {
        self.test_dir.as_path()
    }

    /// Build output directory for the project.
    pub fn build_dir(&self) -> &Path {
        self.build_dir.as_path()
    }

    /// Compiled production classes directory.
    pub fn classes_dir(&self) -> &Path {
        self.classes_dir.as_path()
    }

    /// Compiled test classes directory.
    pub fn test_classes_dir(&self) -> &Path {
        self.test_classes_dir.as_path()
    }

    /// Library directory holding downloaded tool jars.
    pub fn lib_dir(&self) -> &Path {
        self.lib_dir.as_path()
    }

    /// Returns a copy of these paths with a different `lib` directory.
    pub fn with_lib_dir(mut self, lib_dir: impl Into<PathBuf>) -> Self {
        self.lib_dir = lib_dir.into();
        self
    }

    /// Centralized constructor that applies the Maven standard layout when
    /// overrides are absent.
    fn build_with_defaults(
        root_dir: PathBuf,
        source_dir: Option<PathBuf>,
        test_dir: Option<PathBuf>,
        build_dir: Option<PathBuf>,
        lib_dir: Option<PathBuf>,
    ) -> Self {
        let source_dir = source_dir.unwrap_or_else(|| root_dir.join("src/main/java"));
        let test_dir = test_dir.unwrap_or_else(|| root_dir.join("src/test/java"));
        let build_dir = build_dir.unwrap_or_else(|| root_dir.join("target"));
        let lib_dir = lib_dir.unwrap_or_else(|| root_dir.join("lib"));
        let classes_dir = build_dir.join("classes");
        let test_classes_dir = build_dir.join("test-classes");

        Self {
            root_dir,
            source_dir,
            test_dir,
            build_dir,
            classes_dir,
            test_classes_dir,
            lib_dir,
        }
    }
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}
