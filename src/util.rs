#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    ffi::OsString,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::glob;
use itertools::Itertools;
use which::which;

use crate::{
    config,
    constants::{CHECKSTYLE_URL, JUNIT_PLATFORM_URL, SOURCE_EXTENSION},
    paths::ProjectPaths,
};

/// Finds and returns the path to java binary
pub fn java_path() -> Result<OsString> {
    which("java")
        .map(PathBuf::into_os_string)
        .context("Cannot find a Java runtime on path (java)")
}

/// Finds and returns the path to the maven binary.
///
/// Resolution order: the explicit home override, then `MAVEN_HOME`, then
/// `mvn` on the search path.
// TODO: resolve mvn.cmd when the home override points at a Windows install.
pub fn maven_path(maven_home: Option<&Path>) -> Result<OsString> {
    if let Some(home) = maven_home {
        return Ok(home.join("bin").join("mvn").into_os_string());
    }

    if let Some(home) = config::maven_home() {
        return Ok(home.join("bin").join("mvn").into_os_string());
    }

    which("mvn")
        .map(PathBuf::into_os_string)
        .context("Cannot find Maven on path (mvn)")
}

/// A glob utility function to find paths to files with certain extension
///
/// * `extension`: the file extension to find paths for
/// * `search_depth`: how many folders deep to search for
/// * `root_dir`: the root directory where search starts
pub fn find_files(extension: &str, search_depth: i8, root_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut pattern = root_dir.to_path_buf();

    for _ in 0..search_depth {
        pattern.push("**");
    }

    pattern.push(format!("*.{extension}"));
    let pattern = pattern
        .to_str()
        .context("Could not convert root_dir to string")?
        .to_string();

    Ok(glob(&pattern)
        .context("Could not create glob")?
        .filter_map(Result::ok)
        .collect())
}

/// Find class, jar files in library path and build directories to populate
/// classpath and return it
pub fn classpath(paths: &ProjectPaths) -> Result<String> {
    let mut entries: Vec<String> = vec![
        paths.lib_dir().display().to_string(),
        paths.classes_dir().display().to_string(),
        paths.test_classes_dir().display().to_string(),
    ];

    entries.append(
        &mut find_files("jar", 4, paths.root_dir())?
            .iter()
            .map(|p| p.as_path().display().to_string())
            .collect(),
    );

    Ok(entries.join(paths.separator()))
}

/// Finds every Java source file under the production and test trees, in
/// sorted order.
pub fn find_sources(paths: &ProjectPaths) -> Result<Vec<PathBuf>> {
    let sources = find_files(SOURCE_EXTENSION, 4, paths.source_dir())?;
    let tests = find_files(SOURCE_EXTENSION, 4, paths.test_dir())?;

    Ok(sources.into_iter().chain(tests).sorted().collect())
}

/// Downloads `url` to `dest`, overwriting any existing file.
pub fn download(url: &str, dest: &Path) -> Result<()> {
    let bytes = reqwest::blocking::get(url)
        .context(format!("Failed to download {url}"))?
        .bytes()
        .context(format!("Failed to get response as bytes: {url}"))?;

    let mut file = fs::File::create(dest)
        .with_context(|| format!("Could not create {}", dest.display()))?;
    file.write_all(&bytes)
        .with_context(|| format!("Could not write {}", dest.display()))?;

    Ok(())
}

/// Ensures the checker and launcher jars are present under `lib/`,
/// downloading any that are missing.
pub fn ensure_libraries(paths: &ProjectPaths) -> Result<()> {
    fs::create_dir_all(paths.lib_dir())
        .with_context(|| format!("Could not create {}", paths.lib_dir().display()))?;

    let required = [
        (config::checkstyle_jar(), CHECKSTYLE_URL),
        (config::junit_console_jar(), JUNIT_PLATFORM_URL),
    ];

    for (file_name, url) in required {
        let dest = paths.lib_dir().join(&file_name);
        if dest.exists() {
            continue;
        }

        tracing::info!("Downloading {file_name}");
        download(url, &dest)?;
    }

    Ok(())
}
