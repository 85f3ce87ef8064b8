// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod formatting;
pub mod io;
pub mod timefilter;
pub mod timepicker;

pub use config::{TimepickerConfig, TimepickerConfigBuilder};
pub use formatting::DefaultFieldFormatter;
pub use timefilter::Timefilter;
pub use timepicker::TimepickerRegistry;
