#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{path::Path, process::Command};

use anyhow::{Context, Result, bail};

use crate::{paths::ProjectPaths, util::maven_path};

/// Runs `mvn clean compile package` in the project root with inherited
/// stdio.
///
/// `maven_home` is the explicit `--maven` override; resolution falls back
/// to `MAVEN_HOME` and then `mvn` on the search path. A non-zero exit is
/// fatal; everything downstream (test dispatch, style checks over build
/// output) assumes a successful build.
pub fn build(maven_home: Option<&Path>, paths: &ProjectPaths) -> Result<()> {
    let mvn = maven_path(maven_home)?;

    tracing::info!("Running `mvn clean compile package`");
    let status = Command::new(&mvn)
        .current_dir(paths.root_dir())
        .args(["clean", "compile", "package"])
        .status()
        .with_context(|| format!("Failed to run {}", mvn.to_string_lossy()))?;

    if !status.success() {
        bail!("Maven build failed with {status}");
    }

    Ok(())
}
