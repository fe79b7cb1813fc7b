#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// The course schedule: week-major, then day-major, then declared order.
///
/// Empty day slots are legitimate (no scheduled classes that day). The
/// identifiers are fully-qualified JUnit test classes compiled into the
/// student project.
const SCHEDULE: &[&[&[&str]]] = &[
    &[
        &["edu.bootcamp.suite.week0.day0.MainTest"],
        &[
            "edu.bootcamp.suite.week0.day1.AlphabetTest",
            "edu.bootcamp.suite.week0.day1.NumbersTest",
        ],
        &["edu.bootcamp.suite.week0.day2.NumbersTest"],
        &["edu.bootcamp.suite.week0.day3.PointTest"],
    ],
    &[
        &[],
        &[
            "edu.bootcamp.suite.week1.day1.StringUtilsTest",
            "edu.bootcamp.suite.week1.day1.StdStringTest",
        ],
        &["edu.bootcamp.suite.week1.day2.ListTest"],
    ],
    &[
        &[
            "edu.bootcamp.suite.week2.day0.MainPrintParamTest",
            "edu.bootcamp.suite.week2.day0.MainPrintReversedParamTest",
            "edu.bootcamp.suite.week2.day0.CalculatorTest",
            "edu.bootcamp.suite.week2.day0.MainPrintSortedParamTest",
        ],
        &[
            "edu.bootcamp.suite.week2.day1.BoxGeneratorTest",
            "edu.bootcamp.suite.week2.day1.TextPrinter2Test",
            "edu.bootcamp.suite.week2.day1.TextPrinterTest",
        ],
        &[],
    ],
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
/// One scheduled test class: its slot in the curriculum and its identifier.
pub struct TestClass {
    /// Week the class is scheduled in.
    week:       usize,
    /// Day within the week.
    day:        usize,
    /// Fully-qualified class name handed to the test launcher.
    #[tabled(rename = "class")]
    class_name: String,
}

impl TestClass {
    /// Week the class is scheduled in.
    pub fn week(&self) -> usize {
        self.week
    }

    /// Day within the week.
    pub fn day(&self) -> usize {
        self.day
    }

    /// Fully-qualified class name.
    pub fn class_name(&self) -> &str {
        self.class_name.as_ref()
    }
}

/// Error returned for selections outside the schedule.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CurriculumError {
    /// The requested week is not part of the curriculum.
    #[error("Week {0} is not part of the curriculum")]
    UnknownWeek(usize),
    /// The requested day does not exist within its week.
    #[error("Week {week} has no day {day}")]
    UnknownDay {
        /// Week the lookup was scoped to.
        week: usize,
        /// Day that does not exist.
        day:  usize,
    },
    /// No scheduled class carries the requested identifier.
    #[error("No scheduled test class named {0}")]
    UnknownClass(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// The static schedule materialized into lookupable entries at startup.
///
/// Resolution happens against this registry, never by name lookup at call
/// time: an identifier that is not in the registry is an error up front.
pub struct Curriculum {
    /// Every scheduled class, week-major then day-major then declared
    /// order.
    entries: Vec<TestClass>,
}

impl Curriculum {
    /// Materializes the static schedule.
    pub fn new() -> Self {
        let entries = SCHEDULE
            .iter()
            .enumerate()
            .flat_map(|(week, days)| {
                days.iter().enumerate().flat_map(move |(day, classes)| {
                    classes.iter().map(move |class_name| TestClass {
                        week,
                        day,
                        class_name: (*class_name).to_string(),
                    })
                })
            })
            .collect();

        Self { entries }
    }

    /// Every scheduled class, in dispatch order.
    pub fn all(&self) -> &[TestClass] {
        &self.entries
    }

    /// Classes scheduled for one week, in dispatch order.
    pub fn week(&self, week: usize) -> Result<Vec<TestClass>, CurriculumError> {
        if week >= SCHEDULE.len() {
            return Err(CurriculumError::UnknownWeek(week));
        }

        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.week == week)
            .cloned()
            .collect())
    }

    /// Classes scheduled for one day. An empty slot yields an empty list,
    /// not an error.
    pub fn day(&self, week: usize, day: usize) -> Result<Vec<TestClass>, CurriculumError> {
        if week >= SCHEDULE.len() {
            return Err(CurriculumError::UnknownWeek(week));
        }
        if day >= SCHEDULE[week].len() {
            return Err(CurriculumError::UnknownDay { week, day });
        }

        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.week == week && entry.day == day)
            .cloned()
            .collect())
    }

    /// Resolves one class by its fully-qualified identifier.
    pub fn find(&self, class_name: &str) -> Result<&TestClass, CurriculumError> {
        self.entries
            .iter()
            .find(|entry| entry.class_name == class_name)
            .ok_or_else(|| CurriculumError::UnknownClass(class_name.to_string()))
    }
}

impl Default for Curriculum {
    fn default() -> Self {
        Self::new()
    }
}
