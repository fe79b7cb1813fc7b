#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::process::Command;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    constants::JUNIT_LAUNCHER,
    curriculum::TestClass,
    parsers::parser,
    paths::ProjectPaths,
    style::{CheckStatus, render},
    util::{classpath, java_path},
};

#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
/// Outcome of dispatching one scheduled test class.
pub struct ClassRun {
    /// Fully-qualified class name that was dispatched.
    class_name:   String,
    /// Tests the launcher discovered for the class.
    tests_found:  u32,
    /// Tests that passed.
    tests_passed: u32,
    /// Tests that failed.
    tests_failed: u32,
    /// Whether the launcher process itself exited cleanly.
    clean_exit:   bool,
}

impl ClassRun {
    /// Dispatched class name.
    pub fn class_name(&self) -> &str {
        self.class_name.as_ref()
    }

    /// Tests discovered for the class.
    pub fn tests_found(&self) -> u32 {
        self.tests_found
    }

    /// Tests that passed.
    pub fn tests_passed(&self) -> u32 {
        self.tests_passed
    }

    /// Tests that failed.
    pub fn tests_failed(&self) -> u32 {
        self.tests_failed
    }

    /// Whether the launcher process itself exited cleanly.
    pub fn clean_exit(&self) -> bool {
        self.clean_exit
    }

    /// A class run counts as successful when nothing failed and the
    /// launcher exited cleanly.
    ///
    /// A run that never executes its tests (a scheduled class missing from
    /// the compiled project, say) exits non-zero without emitting a failed
    /// summary line; the exit status is what catches it.
    pub fn is_successful(&self) -> bool {
        self.clean_exit && self.tests_failed == 0
    }

    /// Pass/fail marker for the status line.
    pub fn status(&self) -> CheckStatus {
        if self.is_successful() {
            CheckStatus::Successful
        } else {
            CheckStatus::Failed
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
/// Aggregate counters across one dispatch of scheduled classes.
pub struct DispatchSummary {
    /// Classes dispatched.
    classes:      usize,
    /// Classes with no failing tests.
    successful:   usize,
    /// Classes with at least one failing test.
    failed:       usize,
    /// Tests passed across all classes.
    tests_passed: u32,
    /// Tests found across all classes.
    tests_found:  u32,
}

impl DispatchSummary {
    /// Folds one class run into the counters.
    pub fn record(&mut self, run: &ClassRun) {
        self.classes += 1;
        if run.is_successful() {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
        self.tests_passed += run.tests_passed();
        self.tests_found += run.tests_found();
    }

    /// Classes dispatched.
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Classes with no failing tests.
    pub fn successful(&self) -> usize {
        self.successful
    }

    /// Classes with at least one failing test.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Tests passed across all classes.
    pub fn tests_passed(&self) -> u32 {
        self.tests_passed
    }

    /// Tests found across all classes.
    pub fn tests_found(&self) -> u32 {
        self.tests_found
    }
}

/// Dispatches one scheduled class through the JUnit console launcher.
///
/// Prints the launcher's report followed by a colorized per-class status
/// line, and returns the parsed summary counts together with the
/// launcher's exit status. A red run is a result, not an error; only a
/// spawn or decode failure is.
pub fn run_class(class: &TestClass, paths: &ProjectPaths) -> Result<ClassRun> {
    let class_path = classpath(paths)?;

    let child = Command::new(java_path()?)
        .arg("-cp")
        .arg(class_path.as_str())
        .arg(JUNIT_LAUNCHER)
        .arg("--disable-banner")
        .arg("--disable-ansi-colors")
        .arg("--details-theme=unicode")
        .arg("--single-color")
        .arg(format!("--select-class={}", class.class_name()))
        .output()
        .context("Failed to spawn the JUnit console launcher")?;

    let clean_exit = child.status.success();
    let report = [
        String::from_utf8(child.stderr).context("Error when parsing stderr as utf8")?,
        String::from_utf8(child.stdout).context("Error when parsing stdout as utf8")?,
    ]
    .concat();

    let mut tests_found = 0;
    let mut tests_passed = 0;
    let mut tests_failed = 0;
    for line in report.lines() {
        if let Ok(n) = parser::num_tests_found(line) {
            tests_found = n;
        }
        if let Ok(n) = parser::num_tests_passed(line) {
            tests_passed = n;
        }
        if let Ok(n) = parser::num_tests_failed(line) {
            tests_failed = n;
        }
    }

    let run = ClassRun {
        class_name: class.class_name().to_string(),
        tests_found,
        tests_passed,
        tests_failed,
        clean_exit,
    };

    println!("{report}");
    {
        let _colors = render::ColorScope::new();
        println!("{} - {}", run.class_name(), run.status().label());
    }

    Ok(run)
}

/// Dispatches every given class in order and prints an aggregate footer.
///
/// Classes whose tests fail do not stop the remaining classes; the summary
/// reports them at the end. A spawn failure aborts the dispatch.
pub fn run_all(classes: &[TestClass], paths: &ProjectPaths) -> Result<DispatchSummary> {
    if classes.is_empty() {
        println!("{}", render::underline("You have nothing to test!"));
        return Ok(DispatchSummary::default());
    }

    let mut summary = DispatchSummary::default();
    for class in classes {
        tracing::info!("Dispatching {}", class.class_name());
        let run = run_class(class, paths)?;
        summary.record(&run);
    }

    let mut segments = vec![format!("\nCLASSES {}", summary.classes())];
    if summary.successful() > 0 {
        segments.push(format!("SUCCESSFUL {}", summary.successful()));
    }
    if summary.failed() > 0 {
        segments.push(format!("FAILED {}", summary.failed()));
    }
    segments.push(format!(
        "TESTS {}/{}",
        summary.tests_passed(),
        summary.tests_found()
    ));
    println!("{}", render::ruled_bar(&segments));

    Ok(summary)
}
