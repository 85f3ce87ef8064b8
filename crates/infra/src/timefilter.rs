// crates/infra/src/timefilter.rs
use std::sync::{Mutex, MutexGuard};

use brushfilter_domain::time::{RefreshInterval, TimeRange};
use brushfilter_ports::time_range::TimeRangeStore;
use brushfilter_shared_kernel::{InfrastructureError, Result};
use log::debug;

use crate::config::TimepickerConfig;

#[derive(Debug, Clone)]
struct TimefilterState {
    time: TimeRange,
    refresh_interval: RefreshInterval,
    time_range_selector: bool,
    auto_refresh_selector: bool,
    initialized: bool,
}

/// In-memory time-range store backing the dashboard timepicker.
#[derive(Debug)]
pub struct Timefilter {
    state: Mutex<TimefilterState>,
}

impl Timefilter {
    pub fn new(config: &TimepickerConfig) -> Self {
        Self {
            state: Mutex::new(TimefilterState {
                time: config.time_defaults.clone(),
                refresh_interval: config.refresh_interval_defaults.clone(),
                time_range_selector: false,
                auto_refresh_selector: false,
                initialized: false,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, TimefilterState>> {
        self.state.lock().map_err(|e| {
            InfrastructureError::StoreUnavailable { details: format!("timefilter lock poisoned: {e}") }.into()
        })
    }

    pub fn init(&self) -> Result<()> {
        self.lock()?.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> Result<bool> {
        Ok(self.lock()?.initialized)
    }

    pub fn enable_time_range_selector(&self) -> Result<()> {
        self.lock()?.time_range_selector = true;
        Ok(())
    }

    pub fn enable_auto_refresh_selector(&self) -> Result<()> {
        self.lock()?.auto_refresh_selector = true;
        Ok(())
    }

    pub fn is_time_range_selector_enabled(&self) -> Result<bool> {
        Ok(self.lock()?.time_range_selector)
    }

    pub fn is_auto_refresh_selector_enabled(&self) -> Result<bool> {
        Ok(self.lock()?.auto_refresh_selector)
    }

    pub fn refresh_interval(&self) -> Result<RefreshInterval> {
        Ok(self.lock()?.refresh_interval.clone())
    }

}

impl TimeRangeStore for Timefilter {
    fn get_time(&self) -> Result<TimeRange> {
        Ok(self.lock()?.time.clone())
    }

    fn set_time(&self, range: TimeRange) -> Result<()> {
        debug!("timefilter set to {} .. {} ({})", range.from, range.to, range.mode);
        self.lock()?.time = range;
        Ok(())
    }
}
