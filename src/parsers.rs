#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

peg::parser! {
    /// Grammar for the summary lines of the JUnit console launcher.
    pub grammar parser() for str {
        /// matches any sequence of 1 or more numbers
        rule number() -> u32
            = n:$(['0'..='9']+) {? n.parse().or(Err("u32")) }

        /// matches any number of whitespace characters
        rule whitespace() = quiet!{[' ' | '\n' | '\t' | '\r']+}

        /// matches the keyword "tests successful"
        rule successful_tests()
            = " tests successful"

        /// matches the keyword "tests found"
        rule found_tests()
            = " tests found"

        /// matches the keyword "tests failed"
        rule failed_tests()
            = " tests failed"

        /// parses and returns the number of tests passed
        pub rule num_tests_passed() -> u32
            = whitespace()? "[" whitespace()? l:number() successful_tests() whitespace()? "]" { l }

        /// parses and returns the number of tests found
        pub rule num_tests_found() -> u32
            = whitespace()? "[" whitespace()? l:number() found_tests() whitespace()? "]" { l }

        /// parses and returns the number of tests failed
        pub rule num_tests_failed() -> u32
            = whitespace()? "[" whitespace()? l:number() failed_tests() whitespace()? "]" { l }
    }
}
