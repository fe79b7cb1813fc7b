#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    io::Read,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::Context;

use super::{StyleError, profile::StyleProfile};
use crate::{
    constants::{CHECKSTYLE_MAIN, SOURCE_EXTENSION},
    paths::ProjectPaths,
    util::{classpath, java_path},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A validated path to a source file the checker may be pointed at.
///
/// Construction is the only validation gate: a `CheckTarget` that exists is
/// known to be a regular `.java` file, so the launcher never has to
/// re-check before spawning a process.
pub struct CheckTarget {
    /// Absolute path handed to the checker process.
    path: PathBuf,
}

impl CheckTarget {
    /// Validates `path` and absolutizes it.
    ///
    /// Checks run in order: existence, regular-file, extension. Each
    /// violation maps to its own error kind so callers can branch without
    /// string-matching.
    pub fn new(path: &Path) -> Result<Self, StyleError> {
        if !path.exists() {
            return Err(StyleError::TargetNotFound(path.to_path_buf()));
        }
        if path.is_dir() {
            return Err(StyleError::TargetNotAFile(path.to_path_buf()));
        }
        if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
            return Err(StyleError::TargetUnsupported(path.to_path_buf()));
        }

        let path = std::path::absolute(path)
            .with_context(|| format!("Could not absolutize {}", path.display()))?;

        Ok(Self { path })
    }

    /// Absolute path of the target.
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// File name of the target, for report headers.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Runs the checker process over one target and returns its merged
/// stdout+stderr verbatim.
///
/// Both streams are wired to a single pipe so interleaving is preserved as
/// emitted. Blocks until the process exits; a non-zero exit is
/// [`StyleError::CheckerFailed`], a failure while draining or waiting is
/// [`StyleError::Interrupted`].
pub fn launch(
    profile: StyleProfile,
    target: &CheckTarget,
    paths: &ProjectPaths,
) -> Result<String, StyleError> {
    let class_path = classpath(paths)?;

    let (mut reader, writer) = std::io::pipe().context("Could not create a capture pipe")?;
    let writer_clone = writer
        .try_clone()
        .context("Could not clone the capture pipe writer")?;

    let mut child = Command::new(java_path()?)
        .arg("-Duser.language=en")
        .arg("-cp")
        .arg(class_path.as_str())
        .arg(CHECKSTYLE_MAIN)
        .arg("-c")
        .arg(profile.config())
        .arg(target.path())
        .stdin(Stdio::null())
        .stdout(writer)
        .stderr(writer_clone)
        .spawn()
        .context("Failed to spawn the checker process")?;

    // Both writer ends now live in the child; reading hits EOF when it
    // exits.
    let mut capture = String::new();
    reader.read_to_string(&mut capture).map_err(|e| {
        tracing::warn!("Interrupted while capturing checker output: {e}");
        StyleError::Interrupted(e)
    })?;

    let status = child.wait().map_err(|e| {
        tracing::warn!("Interrupted while waiting for the checker process: {e}");
        StyleError::Interrupted(e)
    })?;

    if !status.success() {
        return Err(StyleError::CheckerFailed {
            code: status.code(),
        });
    }

    Ok(capture)
}
