// crates/domain/src/event/brush_range.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single sample of a brushed range: a plain number or a point in time.
///
/// Dates travel as RFC 3339 strings on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BrushValue {
    Number(f64),
    Date(DateTime<Utc>),
}

impl BrushValue {
    /// Numeric view of the sample; dates become epoch milliseconds.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Number(n) => n,
            Self::Date(d) => d.timestamp_millis() as f64,
        }
    }
}

impl From<f64> for BrushValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for BrushValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<DateTime<Utc>> for BrushValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

/// Samples produced by a brush gesture. Order is not significant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrushRange(Vec<BrushValue>);

impl BrushRange {
    pub fn new(values: Vec<BrushValue>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[BrushValue] {
        &self.0
    }

    /// Ordered `(min, max)` of the first two samples, or `None` with fewer than two.
    pub fn endpoints(&self) -> Option<(f64, f64)> {
        match self.0.as_slice() {
            [a, b, ..] => {
                let (a, b) = (a.as_f64(), b.as_f64());
                Some((a.min(b), a.max(b)))
            }
            _ => None,
        }
    }

    /// `(min, max)` over every sample, or `None` with fewer than two.
    pub fn extent(&self) -> Option<(f64, f64)> {
        if self.0.len() < 2 {
            return None;
        }
        self.0.iter().map(|v| v.as_f64()).fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

impl<T: Into<BrushValue>> FromIterator<T> for BrushRange {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
