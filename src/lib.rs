//! relo - watch files and re-run a command whenever they change
//!
//! This crate turns relo's command line into a validated [`ParsedOptions`]
//! for the watch/run supervisor:
//!
//! ```
//! use relo::{parse, Signal};
//!
//! let options = parse(["src/main.rs", "-g", "--", "cargo", "run"]).unwrap();
//! assert_eq!(options.watches(), ["src/main.rs"]);
//! assert_eq!(options.command(), ["cargo", "run"]);
//! assert!(options.group() && options.g());
//! assert_eq!(options.signal(), Signal::Int);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod report;
pub mod signal;

// Re-exports for convenience
pub use config::{Config, OutputFormat, Verbosity};
pub use error::{ParseError, ReloError, ReloResult};
pub use options::{parse, parse_with_defaults, Defaults, ParsedOptions, SEPARATOR};
pub use signal::Signal;
