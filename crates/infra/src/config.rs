// crates/infra/src/config.rs
use std::path::Path;

use brushfilter_domain::time::{RefreshInterval, TimeRange};
use brushfilter_shared_kernel::{ErrorContext, Result};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::io::{DocumentFormat, FileReader};

/// Settings the timepicker is initialised from.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
#[serde(default, rename_all = "camelCase")]
pub struct TimepickerConfig {
    /// Window shown before the user picks one.
    #[builder(default = "TimeRange::quick(\"now-24h\", \"now\")")]
    pub time_defaults: TimeRange,
    #[builder(default)]
    pub refresh_interval_defaults: RefreshInterval,
    #[builder(default = "true")]
    pub time_range_selector: bool,
    #[builder(default = "true")]
    pub auto_refresh_selector: bool,
}

impl Default for TimepickerConfig {
    fn default() -> Self {
        Self {
            time_defaults: TimeRange::quick("now-24h", "now"),
            refresh_interval_defaults: RefreshInterval::default(),
            time_range_selector: true,
            auto_refresh_selector: true,
        }
    }
}

impl TimepickerConfig {
    /// Loads a JSON or YAML config file; missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = FileReader::read_to_string(path)?;
        DocumentFormat::from_path(path)
            .decode(&text)
            .with_context(|| format!("loading timepicker config from {}", path.display()))
    }
}
