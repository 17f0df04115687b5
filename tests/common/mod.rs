//! Common test utilities for relo end-to-end tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with temp directories
//! - Assertion macros: `assert_output_contains!`, `assert_exit_code!`

pub mod assertions;
pub mod env;

#[allow(unused_imports)]
pub use env::*;
