//! Severity levels that gate which messages reach the sink.

use crate::internal;
use std::fmt;
use std::str::FromStr;

/// Ordinals start at 1 so a category table entry can never collide with "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// High-volume instrumentation that would be too noisy outside of development.
    Trace = 1,
    /// Diagnostics for developers; the default global threshold.
    #[default]
    Debug = 2,
    /// Normal operational milestones.
    Info = 3,
    /// Non-fatal anomalies that may need attention.
    Warn = 4,
    /// Failures that prevent an operation from completing.
    Error = 5,
}

impl Level {
    /// Lowercase because config files, env vars and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// The bracketed tag in plain output (`[INFO]`) is uppercase.
    #[must_use]
    pub const fn as_upper(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Numeric severity, higher is more severe.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Every level, least severe first.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
        ]
    }

    /// Lenient parser for free-text level names (config values, env vars, CLI args).
    ///
    /// Unknown names are reported on the internal diagnostic channel and resolve to
    /// [`Level::Debug`]; this never fails.
    #[must_use]
    pub fn parse_or_debug(name: &str) -> Self {
        name.parse().unwrap_or_else(|e: ParseLevelError| {
            internal::warn("LEVEL", &format!("{e}, using debug"));
            Self::Debug
        })
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = ParseLevelError;

    fn try_from(value: u8) -> Result<Self, ParseLevelError> {
        match value {
            1 => Ok(Self::Trace),
            2 => Ok(Self::Debug),
            3 => Ok(Self::Info),
            4 => Ok(Self::Warn),
            5 => Ok(Self::Error),
            _ => Err(ParseLevelError(value.to_string())),
        }
    }
}
