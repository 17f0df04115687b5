//! Command-line surface
//!
//! The grammar itself is parsed by [`crate::options`]. This clap definition
//! describes the same surface so `--help` and `--version` render the way
//! every other clap tool does.

use clap::Parser;

use crate::options::SEPARATOR;
use crate::signal::Signal;

/// relo - watch files and re-run a command whenever they change
#[derive(Parser, Debug)]
#[command(name = "relo")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "relo [OPTIONS] <WATCH>... -- <COMMAND> [ARGS]...")]
#[command(after_help = "Defaults can be set in relo.toml or through RELO_* environment variables.")]
pub struct Cli {
    /// Files to watch for changes
    #[arg(value_name = "WATCH", required = true)]
    pub watches: Vec<String>,

    /// Wait for the running command to exit before starting it again
    #[arg(short, long)]
    pub wait: bool,

    /// Deliver the signal to the command's whole process group
    #[arg(short, long)]
    pub group: bool,

    /// Start a new run without stopping the previous one
    #[arg(short, long)]
    pub parallel: bool,

    /// Signal sent to the running command before it is restarted
    #[arg(short, long, value_enum, default_value_t = Signal::Int)]
    pub signal: Signal,

    /// Command to run, followed by its arguments
    #[arg(value_name = "COMMAND", last = true, required = true)]
    pub command: Vec<String>,
}

/// Requests answered by the driver instead of the option parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intercept {
    Help,
    Version,
}

/// Look for `-h`/`--help` or `-V`/`--version` before the separator
///
/// The first match wins. Tokens after `--` belong to the command and are
/// never inspected.
pub fn intercept<S: AsRef<str>>(args: &[S]) -> Option<Intercept> {
    args.iter()
        .map(AsRef::as_ref)
        .take_while(|arg| *arg != SEPARATOR)
        .find_map(|arg| match arg {
            "-h" | "--help" => Some(Intercept::Help),
            "-V" | "--version" => Some(Intercept::Version),
            _ => None,
        })
}

/// Rendered `--help` text
pub fn help() -> String {
    use clap::CommandFactory;
    Cli::command().render_long_help().to_string()
}

/// Rendered `--version` text
pub fn version() -> String {
    use clap::CommandFactory;
    Cli::command().render_version().to_string()
}
