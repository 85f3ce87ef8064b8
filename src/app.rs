// src/app.rs
use std::path::Path;

use anyhow::{Context, Result};
use brushfilter_domain::filtering::FilterState;
use brushfilter_infra::{
    DefaultFieldFormatter, TimepickerRegistry,
    io::{BrushEventDocument, DocumentFormat, FileReader, FileWriter},
};
use brushfilter_ports::time_range::TimeRangeStore;
use brushfilter_shared_kernel::{PresentationError, PresentationResult};
use brushfilter_usecase::ApplyBrush;
use log::info;

use crate::{config::AppConfig, report::Report};

pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(path) = config.output.as_deref() {
        check_output(path)?;
    }
    let report = execute(config)?;
    let text = config.format.encode(&report).map_err(|e| PresentationError::RenderFailed {
        format: format!("{:?}", config.format).to_lowercase(),
        details: e.to_string(),
    })?;

    match &config.output {
        Some(path) => {
            FileWriter::atomic_write(path, text.as_bytes())?;
            info!("report written to {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Applies the configured brush event and returns the resulting report.
pub fn execute(config: &AppConfig) -> Result<Report> {
    let event_text = FileReader::read_to_string(&config.event)?;
    let event = BrushEventDocument::parse(&event_text, DocumentFormat::from_path(&config.event))
        .with_context(|| format!("failed to decode {}", config.event.display()))?;
    let state = match &config.state {
        Some(path) => load_state(path)?,
        None => FilterState::default(),
    };

    let registry = TimepickerRegistry::new();
    registry.initialize(&config.timepicker)?;
    let timefilter = registry.timefilter()?;

    let formatter = DefaultFieldFormatter;
    let transition = ApplyBrush::new(timefilter.as_ref(), &formatter).run(state, &event)?;

    let mut state = transition.state;
    let committed = config.commit.then(|| state.commit_new_filters());

    Ok(Report {
        outcome: transition.outcome,
        state,
        time: timefilter.get_time()?,
        refresh_interval: timefilter.refresh_interval()?,
        committed,
    })
}

fn check_output(path: &Path) -> PresentationResult<()> {
    if path.is_dir() {
        return Err(PresentationError::InvalidOutput {
            path: path.to_path_buf(),
            reason: "is a directory".to_string(),
        });
    }
    Ok(())
}

fn load_state(path: &Path) -> Result<FilterState> {
    let text = FileReader::read_to_string(path)?;
    DocumentFormat::from_path(path)
        .decode(&text)
        .with_context(|| format!("failed to decode filter state {}", path.display()))
}
