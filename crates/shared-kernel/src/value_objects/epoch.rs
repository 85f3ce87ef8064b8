// crates/shared-kernel/src/value_objects/epoch.rs
use std::fmt;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Milliseconds since the Unix epoch, UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpochMillis(i64);

impl EpochMillis {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self(datetime.timestamp_millis())
    }

    pub fn to_datetime(self) -> DomainResult<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0)
            .single()
            .ok_or(DomainError::TimestampOutOfRange { millis: self.0.to_string() })
    }

    /// ISO-8601 in UTC with millisecond precision, e.g. `2014-01-01T07:00:00.000Z`.
    pub fn to_iso_string(self) -> DomainResult<String> {
        Ok(self.to_datetime()?.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

impl From<i64> for EpochMillis {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for EpochMillis {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
