// crates/domain/src/time.rs
use std::{fmt, str::FromStr};

use brushfilter_shared_kernel::{DomainError, DomainResult, EpochMillis};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeMode {
    Absolute,
    Quick,
    Relative,
}

impl FromStr for TimeMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "absolute" => Ok(Self::Absolute),
            "quick" => Ok(Self::Quick),
            "relative" => Ok(Self::Relative),
            other => Err(DomainError::InvalidTimeMode { mode: other.to_string() }),
        }
    }
}

impl fmt::Display for TimeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Absolute => "absolute",
            Self::Quick => "quick",
            Self::Relative => "relative",
        };
        f.write_str(s)
    }
}

/// The dashboard's active time window.
///
/// `from`/`to` are ISO-8601 timestamps in absolute mode and date-math
/// expressions such as `now-24h` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
    pub mode: TimeMode,
}

impl TimeRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>, mode: TimeMode) -> Self {
        Self { from: from.into(), to: to.into(), mode }
    }

    pub fn absolute(from: EpochMillis, to: EpochMillis) -> DomainResult<Self> {
        Ok(Self::new(from.to_iso_string()?, to.to_iso_string()?, TimeMode::Absolute))
    }

    pub fn quick(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::new(from, to, TimeMode::Quick)
    }

    pub fn is_absolute(&self) -> bool {
        self.mode == TimeMode::Absolute
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::quick("now-15m", "now")
    }
}

/// Auto-refresh setting shown next to the time picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshInterval {
    pub display: String,
    pub pause: bool,
    /// Milliseconds between refreshes; `0` disables refreshing.
    pub value: u64,
}

impl Default for RefreshInterval {
    fn default() -> Self {
        Self { display: "Off".to_string(), pause: false, value: 0 }
    }
}
