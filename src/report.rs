// src/report.rs
use brushfilter_domain::{
    filtering::FilterState,
    time::{RefreshInterval, TimeRange},
};
use brushfilter_usecase::BrushOutcome;
use serde::Serialize;

/// Printed result of one run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub outcome: BrushOutcome,
    pub state: FilterState,
    pub time: TimeRange,
    pub refresh_interval: RefreshInterval,
    /// Filters moved out of the pending list by `--commit`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committed: Option<usize>,
}
