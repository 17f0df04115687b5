//! Custom assertion macros for end-to-end tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "Watching: src");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert the process exit code, showing the output on failure.
///
/// # Example
/// ```ignore
/// assert_exit_code!(result, 2);
/// ```
#[macro_export]
macro_rules! assert_exit_code {
    ($result:expr, $code:expr) => {
        assert_eq!(
            $result.exit_code, $code,
            "Unexpected exit code\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $result.stdout, $result.stderr
        );
    };
}
