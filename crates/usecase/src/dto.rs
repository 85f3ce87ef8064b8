// crates/usecase/src/dto.rs
use std::fmt;

use brushfilter_domain::{filtering::FilterState, time::TimeRange};
use brushfilter_shared_kernel::FieldName;
use serde::Serialize;

/// Why a brush event left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    MissingAxisField,
    TooFewSamples,
    ZeroSpan,
    OutOfRange,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MissingAxisField => "event has no x-axis field",
            Self::TooFewSamples => "range does not span at least two values",
            Self::ZeroSpan => "range spans zero time",
            Self::OutOfRange => "range endpoint is outside the representable date range",
        };
        f.write_str(s)
    }
}

/// What a brush event did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BrushOutcome {
    Ignored { reason: IgnoreReason },
    TimeRangeUpdated { range: TimeRange },
    FilterAdded { field: FieldName },
    FilterUpdated { field: FieldName, index: usize },
}

impl BrushOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored { .. })
    }
}

/// The state after a brush event, plus a description of the change.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushTransition {
    pub state: FilterState,
    pub outcome: BrushOutcome,
}
