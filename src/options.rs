//! Command-line option parser
//!
//! Turns the raw argument list into a validated [`ParsedOptions`]:
//!
//! ```text
//! <watch-path>... [-w|--wait] [-g|--group] [-p|--parallel] [-s|--signal <SIGNAL>] -- <command> [args...]
//! ```
//!
//! Everything before the first `--` is either a flag or a path to watch;
//! everything after it is the command, passed through untouched. Parsing is
//! a pure function of its input.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::signal::Signal;

/// Separates the files to watch from the command to run
pub const SEPARATOR: &str = "--";

/// Values used for flags that do not appear on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub wait: bool,
    pub group: bool,
    pub parallel: bool,
    pub signal: Signal,
}

/// A validated command line
///
/// Each option is stored once and exposed under both its long and short
/// name (`group()` and `g()` read the same field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedOptions {
    watches: Vec<String>,
    command: Vec<String>,
    wait: bool,
    group: bool,
    parallel: bool,
    signal: Signal,
}

impl ParsedOptions {
    /// Paths to watch, in command-line order (never empty)
    pub fn watches(&self) -> &[String] {
        &self.watches
    }

    /// Command and its arguments (never empty)
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// Executable name, the first element of [`command`](Self::command)
    pub fn program(&self) -> &str {
        &self.command[0]
    }

    /// Arguments passed to [`program`](Self::program)
    pub fn args(&self) -> &[String] {
        &self.command[1..]
    }

    /// `-w`/`--wait`: let the running command exit before starting it again
    pub fn wait(&self) -> bool {
        self.wait
    }

    /// Alias of [`wait`](Self::wait)
    pub fn w(&self) -> bool {
        self.wait
    }

    /// `-g`/`--group`: signal the command's whole process group
    pub fn group(&self) -> bool {
        self.group
    }

    /// Alias of [`group`](Self::group)
    pub fn g(&self) -> bool {
        self.group
    }

    /// `-p`/`--parallel`: start a new run without stopping the previous one
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Alias of [`parallel`](Self::parallel)
    pub fn p(&self) -> bool {
        self.parallel
    }

    /// `-s`/`--signal`: sent to the running command before a restart
    pub fn signal(&self) -> Signal {
        self.signal
    }

    /// Alias of [`signal`](Self::signal)
    pub fn s(&self) -> Signal {
        self.signal
    }
}

/// Parse a command line (without the program name) using built-in defaults
pub fn parse<I, S>(argv: I) -> Result<ParsedOptions, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parse_with_defaults(argv, &Defaults::default())
}

/// Parse a command line, falling back to `defaults` for absent flags
///
/// Flags can only switch booleans on. Errors are checked in a fixed order:
/// missing command, then missing watches, then signal problems, then
/// unknown flags. The first `--` is never taken as a flag value.
pub fn parse_with_defaults<I, S>(argv: I, defaults: &Defaults) -> Result<ParsedOptions, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut tokens: Vec<String> = argv.into_iter().map(Into::into).collect();

    let command = match tokens.iter().position(|token| token == SEPARATOR) {
        Some(idx) => {
            let command = tokens.split_off(idx + 1);
            tokens.pop();
            command
        }
        None => Vec::new(),
    };

    let scan = Scan::run(tokens);

    if command.is_empty() {
        return Err(ParseError::NoCommandGiven);
    }
    if scan.watches.is_empty() {
        return Err(ParseError::NoWatchesGiven);
    }
    if let Some(err) = scan.signal_error {
        return Err(err);
    }
    if let Some(flag) = scan.unknown_flag {
        return Err(ParseError::UnknownFlag { flag });
    }

    Ok(ParsedOptions {
        watches: scan.watches,
        command,
        wait: defaults.wait || scan.wait,
        group: defaults.group || scan.group,
        parallel: defaults.parallel || scan.parallel,
        signal: scan.signal.unwrap_or(defaults.signal),
    })
}

/// Result of walking the tokens before `--`
///
/// Defects are recorded rather than returned so the caller can report them
/// in precedence order.
#[derive(Debug, Default)]
struct Scan {
    watches: Vec<String>,
    wait: bool,
    group: bool,
    parallel: bool,
    signal: Option<Signal>,
    signal_error: Option<ParseError>,
    unknown_flag: Option<String>,
}

impl Scan {
    fn run(tokens: Vec<String>) -> Self {
        let mut scan = Scan::default();
        let mut tokens = tokens.into_iter();

        while let Some(token) = tokens.next() {
            if let Some(long) = token.strip_prefix("--") {
                let (name, inline) = match long.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (long, None),
                };
                match (name, inline) {
                    ("wait", None) => scan.wait = true,
                    ("group", None) => scan.group = true,
                    ("parallel", None) => scan.parallel = true,
                    ("signal", Some(value)) => scan.signal_value(value),
                    ("signal", None) => match tokens.next() {
                        Some(value) => scan.signal_value(&value),
                        None => scan.missing_signal_value("--signal"),
                    },
                    _ => scan.unknown(&token),
                }
            } else if token.len() > 1 && token.starts_with('-') {
                // Clustered short flags: `-wg`, `-sSIGTERM`, `-ws SIGTERM`
                let cluster = &token[1..];
                for (idx, flag) in cluster.char_indices() {
                    match flag {
                        'w' => scan.wait = true,
                        'g' => scan.group = true,
                        'p' => scan.parallel = true,
                        's' => {
                            let rest = &cluster[idx + flag.len_utf8()..];
                            if !rest.is_empty() {
                                scan.signal_value(rest);
                            } else {
                                match tokens.next() {
                                    Some(value) => scan.signal_value(&value),
                                    None => scan.missing_signal_value("-s"),
                                }
                            }
                            break;
                        }
                        other => scan.unknown(&format!("-{}", other)),
                    }
                }
            } else if token == "-" {
                scan.unknown(&token);
            } else {
                scan.watches.push(token);
            }
        }

        scan
    }

    fn signal_value(&mut self, value: &str) {
        match value.parse::<Signal>() {
            Ok(signal) => self.signal = Some(signal),
            Err(err) => self.signal_defect(err),
        }
    }

    fn missing_signal_value(&mut self, flag: &str) {
        self.signal_defect(ParseError::MissingSignalValue {
            flag: flag.to_string(),
        });
    }

    fn signal_defect(&mut self, err: ParseError) {
        if self.signal_error.is_none() {
            self.signal_error = Some(err);
        }
    }

    fn unknown(&mut self, flag: &str) {
        if self.unknown_flag.is_none() {
            self.unknown_flag = Some(flag.to_string());
        }
    }
}
