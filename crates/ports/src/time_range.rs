// crates/ports/src/time_range.rs
use brushfilter_domain::time::TimeRange;
use brushfilter_shared_kernel::Result;

/// Shared store holding the dashboard's active time window.
pub trait TimeRangeStore: Send + Sync {
    fn get_time(&self) -> Result<TimeRange>;
    fn set_time(&self, range: TimeRange) -> Result<()>;
}
