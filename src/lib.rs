//! # proctor
//!
//! A build-and-verification harness for boot camp Java assignments: it
//! builds the student project with Maven, dispatches a week/day curriculum
//! of JUnit test classes, and verifies source style by driving an external
//! checker process per file.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Environment-derived settings, read once per process
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// The static week/day schedule of test classes
pub mod curriculum;
/// Dispatching scheduled classes through the JUnit console launcher
pub mod junit;
/// The Maven build invoker
pub mod maven;
/// For all parsers used
pub mod parsers;
/// Standard workspace paths for a Maven-layout project
pub mod paths;
/// The style-verification engine
pub mod style;
/// Utility functions for convenience
pub mod util;
