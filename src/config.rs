// src/config.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use brushfilter_infra::{TimepickerConfig, io::DocumentFormat};
use derive_builder::Builder;

use crate::args::Args;

/// Everything a single run needs, resolved from CLI arguments and files.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct AppConfig {
    pub event: PathBuf,
    #[builder(default)]
    pub state: Option<PathBuf>,
    #[builder(default)]
    pub timepicker: TimepickerConfig,
    #[builder(default)]
    pub format: DocumentFormat,
    #[builder(default)]
    pub output: Option<PathBuf>,
    #[builder(default)]
    pub commit: bool,
}

impl TryFrom<Args> for AppConfig {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        let timepicker = match &args.input.config {
            Some(path) => TimepickerConfig::load(path)?,
            None => TimepickerConfig::default(),
        };

        let format = args
            .output
            .format
            .map(DocumentFormat::from)
            .or_else(|| args.output.output.as_deref().map(DocumentFormat::from_path))
            .unwrap_or_default();

        AppConfigBuilder::default()
            .event(args.input.event)
            .state(args.input.state)
            .timepicker(timepicker)
            .format(format)
            .output(args.output.output)
            .commit(args.behavior.commit)
            .build()
            .context("failed to build config")
    }
}
