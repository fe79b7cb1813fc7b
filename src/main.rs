#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # proctor
//!
//! A build-and-verification harness for boot camp Java assignments.
//!
//! `proctor build` compiles the student project with Maven, `proctor test`
//! dispatches the scheduled JUnit test classes for a week/day (or all of
//! them, or one by name), `proctor show` prints the schedule, and
//! `proctor style` verifies source files with an external style checker.

use std::path::PathBuf;

use anyhow::{Result, bail};
use bpaf::*;
use dotenvy::dotenv;
use proctor::{
    curriculum::{Curriculum, TestClass},
    junit, maven,
    paths::ProjectPaths,
    style::{StyleEngine, StyleProfile},
    util,
};
use tabled::{
    Table,
    settings::{Panel, Style},
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Which scheduled classes a `test` invocation selects.
#[derive(Debug, Clone)]
enum Selection {
    /// Every scheduled class, week-major order.
    All,
    /// The classes scheduled for one week/day slot.
    Slot {
        /// Week to select.
        week: usize,
        /// Day within the week.
        day:  usize,
    },
    /// One class by its fully-qualified identifier.
    Name(String),
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Build the project and stop.
    Build {
        /// Explicit Maven home override.
        maven: Option<PathBuf>,
    },
    /// Build the project, then dispatch the selected test classes.
    Test {
        /// Which scheduled classes to dispatch.
        selection: Selection,
        /// Explicit Maven home override.
        maven:     Option<PathBuf>,
    },
    /// Print the scheduled test classes, optionally filtered.
    Show {
        /// Restrict to one week.
        week: Option<usize>,
        /// Restrict to one day within the week.
        day:  Option<usize>,
    },
    /// Verify source files with the style engine.
    StyleCheck {
        /// Rule configuration to apply.
        profile: StyleProfile,
        /// Files to check; every discovered source file when empty.
        files:   Vec<PathBuf>,
    },
    /// Print a JSON description of the workspace and curriculum.
    Info,
}

/// Parses the explicit Maven home override.
fn maven_arg() -> impl Parser<Option<PathBuf>> {
    long("maven")
        .short('m')
        .help("Path to the Maven home to build with")
        .argument::<PathBuf>("PATH")
        .optional()
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    let build = {
        let maven = maven_arg();
        construct!(Cmd::Build { maven })
            .to_options()
            .command("build")
            .help("Build the project with Maven")
    };

    let test = {
        let all = long("all")
            .short('a')
            .help("Run every scheduled test class")
            .req_flag(Selection::All);
        let week = long("week")
            .short('w')
            .help("Week to test")
            .argument::<usize>("WEEK");
        let day = long("day")
            .short('d')
            .help("Day within the week to test")
            .argument::<usize>("DAY");
        let slot = construct!(Selection::Slot { week, day });
        let name = long("test")
            .short('t')
            .help("Fully-qualified name of one scheduled test class")
            .argument::<String>("NAME")
            .map(Selection::Name);

        // The three selection forms are structurally exclusive.
        let selection = construct!([all, slot, name]);
        let maven = maven_arg();
        construct!(Cmd::Test { selection, maven })
            .to_options()
            .command("test")
            .help("Build the project, then run scheduled test classes")
    };

    let show = {
        let week = long("week")
            .short('w')
            .help("Restrict to one week")
            .argument::<usize>("WEEK")
            .optional();
        let day = long("day")
            .short('d')
            .help("Restrict to one day, requires --week")
            .argument::<usize>("DAY")
            .optional();
        construct!(Cmd::Show { week, day })
            .to_options()
            .command("show")
            .help("Print the scheduled test classes")
    };

    let style = {
        let profile = long("profile")
            .short('p')
            .help("Style profile to apply: google or sun")
            .argument::<StyleProfile>("PROFILE")
            .fallback(StyleProfile::Google);
        let files = positional::<PathBuf>("FILE")
            .help("Source files to check; all discovered sources when omitted")
            .many();
        construct!(Cmd::StyleCheck { profile, files })
            .to_options()
            .command("style")
            .help("Verify source files with the style checker")
    };

    let info = pure(Cmd::Info)
        .to_options()
        .command("info")
        .help("Prints a JSON description of the workspace and curriculum");

    let cmd = construct!([build, test, show, style, info]);

    cmd.to_options()
        .descr("Build and verification harness for boot camp assignments")
        .run()
}

/// Resolves a `test` selection against the materialized curriculum.
fn select_classes(curriculum: &Curriculum, selection: &Selection) -> Result<Vec<TestClass>> {
    let classes = match selection {
        Selection::All => curriculum.all().to_vec(),
        Selection::Slot { week, day } => curriculum.day(*week, *day)?,
        Selection::Name(name) => vec![curriculum.find(name)?.clone()],
    };
    Ok(classes)
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let cmd = options();
    let paths = ProjectPaths::default();

    match cmd {
        Cmd::Build { maven } => maven::build(maven.as_deref(), &paths)?,
        Cmd::Test { selection, maven } => {
            let curriculum = Curriculum::new();
            let classes = select_classes(&curriculum, &selection)?;

            maven::build(maven.as_deref(), &paths)?;
            util::ensure_libraries(&paths)?;

            let summary = junit::run_all(&classes, &paths)?;
            if summary.failed() > 0 {
                std::process::exit(1);
            }
        }
        Cmd::Show { week, day } => {
            let curriculum = Curriculum::new();
            let rows = match (week, day) {
                (Some(week), Some(day)) => curriculum.day(week, day)?,
                (Some(week), None) => curriculum.week(week)?,
                (None, None) => curriculum.all().to_vec(),
                (None, Some(_)) => bail!("--day requires --week"),
            };

            println!(
                "{}",
                Table::new(&rows)
                    .with(Panel::header("Scheduled test classes"))
                    .with(Style::modern())
            );
        }
        Cmd::StyleCheck { profile, files } => {
            util::ensure_libraries(&paths)?;

            let files = if files.is_empty() {
                util::find_sources(&paths)?
            } else {
                files
            };

            let engine = StyleEngine::new(paths);
            let count = engine.check_batch(profile, &files)?;
            if count > 0 {
                std::process::exit(1);
            }
        }
        Cmd::Info => {
            let info = serde_json::json!({
                "paths": paths,
                "curriculum": Curriculum::new().all(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    };

    Ok(())
}
