//! Termination signals
//!
//! The closed set of signals relo accepts for `-s`/`--signal`. Mapping a
//! variant to a platform signal number is the supervisor's job; this type
//! only names the choice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Signal sent to a running command before it is restarted
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Signal {
    /// Hangup
    #[serde(rename = "SIGHUP")]
    #[value(name = "SIGHUP")]
    Hup,
    /// Interrupt, as sent by Ctrl+C (default)
    #[default]
    #[serde(rename = "SIGINT")]
    #[value(name = "SIGINT")]
    Int,
    /// Polite termination request
    #[serde(rename = "SIGTERM")]
    #[value(name = "SIGTERM")]
    Term,
    /// Forced kill, cannot be caught
    #[serde(rename = "SIGKILL")]
    #[value(name = "SIGKILL")]
    Kill,
}

impl Signal {
    /// Every accepted signal, in the order they are listed to users
    pub const ALL: [Signal; 4] = [Signal::Hup, Signal::Int, Signal::Term, Signal::Kill];

    /// Canonical name, e.g. `SIGTERM`
    pub fn name(&self) -> &'static str {
        match self {
            Signal::Hup => "SIGHUP",
            Signal::Int => "SIGINT",
            Signal::Term => "SIGTERM",
            Signal::Kill => "SIGKILL",
        }
    }

    /// Comma-separated list of accepted names, for messages
    pub fn expected() -> &'static str {
        "SIGHUP, SIGINT, SIGTERM, SIGKILL"
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Signal {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Signal::ALL
            .into_iter()
            .find(|signal| signal.name() == s)
            .ok_or_else(|| ParseError::InvalidSignalGiven {
                value: s.to_string(),
            })
    }
}
