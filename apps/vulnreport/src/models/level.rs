//! Verbosity levels and their ordering.
//!
//! Levels are ordered from least to most suppressive:
//! `Verbose < Info < Warn < Error`. A threshold admits every message whose
//! level is at or above it.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
/// Severity of a message, also used as the reporter's threshold.
pub enum VerbosityLevel {
    Verbose,
    #[default]
    Info,
    Warn,
    Error,
}

impl VerbosityLevel {
    /// Every level, least suppressive first.
    pub const ALL: [VerbosityLevel; 4] = [
        VerbosityLevel::Verbose,
        VerbosityLevel::Info,
        VerbosityLevel::Warn,
        VerbosityLevel::Error,
    ];

    /// Whether a message at `level` passes when `self` is the threshold.
    pub fn allows(self, level: VerbosityLevel) -> bool {
        level >= self
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VerbosityLevel::Verbose => "verbose",
            VerbosityLevel::Info => "info",
            VerbosityLevel::Warn => "warn",
            VerbosityLevel::Error => "error",
        }
    }

    fn expected() -> String {
        Self::ALL
            .iter()
            .map(|l| l.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for VerbosityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VerbosityLevel {
    type Err = Error;

    /// Parse a level name; `warning` is accepted as an alias of `warn`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" => Ok(VerbosityLevel::Verbose),
            "info" => Ok(VerbosityLevel::Info),
            "warn" | "warning" => Ok(VerbosityLevel::Warn),
            "error" => Ok(VerbosityLevel::Error),
            _ => Err(Error::InvalidLevel {
                given: s.to_string(),
                expected: Self::expected(),
            }),
        }
    }
}
