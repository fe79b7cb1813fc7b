#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The style-verification engine: drives an external checker process per
//! file, parses its output into diagnostics, and renders a per-file and
//! aggregate report.

/// Validated targets and the external checker process.
pub mod launcher;
/// Raw capture text to ordered diagnostics.
pub mod parser;
/// The closed set of rule configurations.
pub mod profile;
/// Console rendering of per-file results and batch footers.
pub mod render;
/// Diagnostics, per-file results, and batch counters.
pub mod results;

use std::path::{Path, PathBuf};

pub use launcher::CheckTarget;
pub use profile::StyleProfile;
pub use results::{BatchSummary, CheckStatus, FileResult, Severity, StyleDiagnostic};

use crate::paths::ProjectPaths;

/// Every fatal condition the style engine can surface.
///
/// None of these are recovered locally; the first one aborts the current
/// file and the rest of its batch.
#[derive(thiserror::Error, Debug)]
pub enum StyleError {
    /// The target path does not exist.
    #[error("{} is absent", .0.display())]
    TargetNotFound(PathBuf),
    /// The target exists but is a directory.
    #[error("{} is not a file", .0.display())]
    TargetNotAFile(PathBuf),
    /// The target's extension is not in the accepted set.
    #[error("{} is not supported", .0.display())]
    TargetUnsupported(PathBuf),
    /// The checker process exited non-zero (or died to a signal).
    #[error("Checker process exited with code {code:?}")]
    CheckerFailed {
        /// Exit code, absent when the process was killed by a signal.
        code: Option<i32>,
    },
    /// Waiting on the checker process or draining its output failed.
    #[error("Checker process was interrupted")]
    Interrupted(#[source] std::io::Error),
    /// The checker produced no output where at least its audit markers were
    /// expected.
    #[error("Checker console capture is empty")]
    EmptyCapture,
    /// Anything else: spawn failures, classpath assembly, and so on.
    #[error(transparent)]
    Unknown(#[from] anyhow::Error),
}

/// The orchestrator: Launcher, then Parser, then Renderer, per file.
#[derive(Debug, Clone)]
pub struct StyleEngine {
    /// Workspace layout used for classpath assembly.
    paths: ProjectPaths,
}

impl StyleEngine {
    /// Creates an engine over the given workspace layout.
    pub fn new(paths: ProjectPaths) -> Self {
        Self { paths }
    }

    /// Checks one file and returns its diagnostic count.
    ///
    /// Validates the target, launches the checker, parses the capture, and
    /// renders the file's report. Zero means the file passed.
    pub fn check_file(&self, profile: StyleProfile, path: &Path) -> Result<usize, StyleError> {
        let target = CheckTarget::new(path)?;
        let capture = launcher::launch(profile, &target, &self.paths)?;
        let diagnostics = parser::parse(&capture)?;

        let result = FileResult::new(target.file_name(), diagnostics);
        render::render_file(&result);

        Ok(result.diagnostics().len())
    }

    /// Checks every target in order and returns the total diagnostic count.
    ///
    /// An empty batch prints a banner and returns zero without touching the
    /// launcher or renderer. Otherwise each file is checked sequentially;
    /// the first error aborts the remaining files. The footer is rendered
    /// once, after the last file.
    pub fn check_batch(
        &self,
        profile: StyleProfile,
        targets: &[PathBuf],
    ) -> Result<usize, StyleError> {
        if targets.is_empty() {
            println!("{}", render::underline("You have nothing to verify!"));
            return Ok(0);
        }

        let mut summary = BatchSummary::default();
        for target in targets {
            let count = self.check_file(profile, target)?;
            summary.record(count);
        }
        render::render_batch_footer(&summary);

        Ok(summary.errors())
    }
}
