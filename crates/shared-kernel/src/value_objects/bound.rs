// crates/shared-kernel/src/value_objects/bound.rs
use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DomainError, DomainResult};
use crate::value_objects::EpochMillis;

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// One end of a range clause (`gte` or `lt`). Always finite.
///
/// Integral values serialise as JSON integers so that epoch-millisecond
/// bounds survive a round trip unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound(f64);

impl Bound {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::InvalidBound {
                value: value.to_string(),
                reason: "bound must be a finite number".to_string(),
            });
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_integral(self) -> bool {
        self.0.fract() == 0.0 && self.0.abs() <= MAX_SAFE_INTEGER
    }

    /// Interprets the bound as epoch milliseconds, flooring any fraction.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TimestampOutOfRange`] when the floored value
    /// does not fit in an `i64`.
    pub fn to_epoch_millis(self) -> DomainResult<EpochMillis> {
        let floored = self.0.floor();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
        if floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
            return Err(DomainError::TimestampOutOfRange { millis: self.to_string() });
        }
        Ok(EpochMillis::new(floored as i64))
    }
}

impl From<EpochMillis> for Bound {
    fn from(millis: EpochMillis) -> Self {
        Self(millis.value() as f64)
    }
}

impl From<i32> for Bound {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl TryFrom<f64> for Bound {
    type Error = DomainError;

    fn try_from(value: f64) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.total_cmp(&other.0))
    }
}

impl PartialEq<f64> for Bound {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integral() {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Serialize for Bound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_integral() {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

impl<'de> Deserialize<'de> for Bound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = f64::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
