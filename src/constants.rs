#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// file name for JUnit platform console standalone jar
pub const JUNIT_PLATFORM: &str = "junit-platform-console-standalone-1.10.2.jar";

/// download URL for the JUnit platform console standalone jar
pub const JUNIT_PLATFORM_URL: &str = "https://repo1.maven.org/maven2/org/junit/platform/junit-platform-console-standalone/1.10.2/junit-platform-console-standalone-1.10.2.jar";

/// file name for the Checkstyle all-in-one jar
pub const CHECKSTYLE_JAR: &str = "checkstyle-10.12.4-all.jar";

/// download URL for the Checkstyle all-in-one jar
pub const CHECKSTYLE_URL: &str = "https://github.com/checkstyle/checkstyle/releases/download/checkstyle-10.12.4/checkstyle-10.12.4-all.jar";

/// entry point of the Checkstyle command line runner
pub const CHECKSTYLE_MAIN: &str = "com.puppycrawl.tools.checkstyle.Main";

/// entry point of the JUnit platform console launcher
pub const JUNIT_LAUNCHER: &str = "org.junit.platform.console.ConsoleLauncher";

/// extension of source files accepted by the style engine
pub const SOURCE_EXTENSION: &str = "java";
