#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, sync::OnceLock};

use crate::constants::{CHECKSTYLE_JAR, JUNIT_PLATFORM};

/// Environment-derived settings, read once per process.
struct ConfigState {
    /// Maven installation root from `MAVEN_HOME`, if set.
    maven_home:        Option<PathBuf>,
    /// File name of the Checkstyle jar expected under `lib/`.
    checkstyle_jar:    String,
    /// File name of the JUnit console launcher jar expected under `lib/`.
    junit_console_jar: String,
}

impl ConfigState {
    /// Reads settings from the environment, applying defaults for anything
    /// unset.
    fn new() -> Self {
        Self {
            maven_home:        read_path("MAVEN_HOME"),
            checkstyle_jar:    read_name("CHECKSTYLE_JAR", CHECKSTYLE_JAR),
            junit_console_jar: read_name("JUNIT_CONSOLE_JAR", JUNIT_PLATFORM),
        }
    }
}

/// Reads an environment variable as a path, ignoring blank values.
fn read_path(env: &str) -> Option<PathBuf> {
    std::env::var(env)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Reads an overridable file name from the environment, falling back to
/// `default` when unset or blank.
fn read_name(env: &str, default: &str) -> String {
    std::env::var(env)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Global storage for the lazily constructed configuration state.
static CONFIG: OnceLock<ConfigState> = OnceLock::new();

/// Returns the active configuration, initializing it on demand.
fn get() -> &'static ConfigState {
    CONFIG.get_or_init(ConfigState::new)
}

/// Returns the Maven home directory from the environment, if configured.
pub fn maven_home() -> Option<PathBuf> {
    get().maven_home.clone()
}

/// Returns the file name of the Checkstyle jar expected under `lib/`.
pub fn checkstyle_jar() -> String {
    get().checkstyle_jar.clone()
}

/// Returns the file name of the JUnit console launcher jar expected under
/// `lib/`.
pub fn junit_console_jar() -> String {
    get().junit_console_jar.clone()
}
