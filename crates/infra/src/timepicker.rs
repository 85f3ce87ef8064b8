// crates/infra/src/timepicker.rs
use std::sync::{Arc, OnceLock};

use brushfilter_shared_kernel::{ApplicationError, Result};
use log::{info, warn};

use crate::{config::TimepickerConfig, timefilter::Timefilter};

/// Holds the application's timefilter once the timepicker has been set up.
///
/// Reading it before [`TimepickerRegistry::initialize`] is a programming
/// error and is reported as [`ApplicationError::TimepickerNotInitialized`].
#[derive(Debug, Default)]
pub struct TimepickerRegistry {
    timefilter: OnceLock<Arc<Timefilter>>,
}

impl TimepickerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and initialises the timefilter. Later calls return the first one.
    pub fn initialize(&self, config: &TimepickerConfig) -> Result<Arc<Timefilter>> {
        if let Some(existing) = self.timefilter.get() {
            warn!("timepicker already initialized; keeping the existing timefilter");
            return Ok(Arc::clone(existing));
        }

        let timefilter = Timefilter::new(config);
        if config.time_range_selector {
            timefilter.enable_time_range_selector()?;
        }
        if config.auto_refresh_selector {
            timefilter.enable_auto_refresh_selector()?;
        }
        timefilter.init()?;
        info!(
            "timepicker initialized with {} .. {} ({})",
            config.time_defaults.from, config.time_defaults.to, config.time_defaults.mode
        );

        Ok(Arc::clone(self.timefilter.get_or_init(|| Arc::new(timefilter))))
    }

    pub fn timefilter(&self) -> Result<Arc<Timefilter>> {
        self.timefilter
            .get()
            .cloned()
            .ok_or_else(|| ApplicationError::TimepickerNotInitialized.into())
    }

    pub fn is_initialized(&self) -> bool {
        self.timefilter.get().is_some()
    }
}
