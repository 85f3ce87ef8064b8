// crates/usecase/src/brush.rs
use brushfilter_domain::{
    event::{AxisField, BrushEvent},
    filtering::{Filter, FilterState, RangeBounds, RangeFormat},
    time::TimeRange,
};
use brushfilter_ports::{formatting::FieldFormatter, time_range::TimeRangeStore};
use brushfilter_shared_kernel::{ApplicationError, Bound, DomainResult, Result};
use log::{debug, info};

use crate::dto::{BrushOutcome, BrushTransition, IgnoreReason};

/// Turns a brush selection into a filter change or a time-window change.
///
/// Date selections on the index pattern's time field move the shared time
/// window; other date selections queue an `epoch_millis` range filter.
/// Selections on any other field type update the existing filter for that
/// field, or queue a new one.
pub struct ApplyBrush<'a> {
    store: &'a dyn TimeRangeStore,
    formatter: &'a dyn FieldFormatter,
}

impl<'a> ApplyBrush<'a> {
    pub fn new(store: &'a dyn TimeRangeStore, formatter: &'a dyn FieldFormatter) -> Self {
        Self { store, formatter }
    }

    /// Applies `event` to `state` and returns the resulting state.
    ///
    /// Events without an axis field or with too small a range are not
    /// errors; they come back as [`BrushOutcome::Ignored`] with the state
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Fails only when the time-range store rejects an update.
    pub fn run(&self, state: FilterState, event: &BrushEvent) -> Result<BrushTransition> {
        let Some(field) = event.axis_field.as_ref() else {
            return Ok(ignored(state, IgnoreReason::MissingAxisField));
        };

        if field.field_type.is_date() {
            self.apply_date(state, event, field)
        } else {
            self.apply_value(state, event, field)
        }
    }

    fn apply_date(&self, state: FilterState, event: &BrushEvent, field: &AxisField) -> Result<BrushTransition> {
        let Some((min, max)) = event.range.endpoints() else {
            return Ok(ignored(state, IgnoreReason::TooFewSamples));
        };
        if min == max {
            return Ok(ignored(state, IgnoreReason::ZeroSpan));
        }
        let (gte, lt) = (Bound::new(min)?, Bound::new(max)?);

        if event.is_time_field(&field.name) {
            let range = match absolute_window(gte, lt) {
                Ok(range) => range,
                Err(e) => {
                    debug!("time brush on '{}' not representable: {e}", field.name);
                    return Ok(ignored(state, IgnoreReason::OutOfRange));
                }
            };
            self.store
                .set_time(range.clone())
                .map_err(|e| ApplicationError::TimeRangeUpdateFailed {
                    reason: format!("brush on time field '{}'", field.name),
                    source: Some(Box::new(e)),
                })?;
            info!("time range set to {} - {}", range.from, range.to);
            return Ok(BrushTransition { state, outcome: BrushOutcome::TimeRangeUpdated { range } });
        }

        let bounds = RangeBounds::new(gte, lt).with_format(RangeFormat::epoch_millis());
        Ok(self.queue(state, event, field, bounds))
    }

    fn apply_value(&self, mut state: FilterState, event: &BrushEvent, field: &AxisField) -> Result<BrushTransition> {
        let Some((min, max)) = event.range.extent() else {
            return Ok(ignored(state, IgnoreReason::TooFewSamples));
        };
        let (gte, lt) = (Bound::new(min)?, Bound::new(max)?);

        let Some(index) = state.position_by_key(&field.name) else {
            return Ok(self.queue(state, event, field, RangeBounds::new(gte, lt)));
        };

        let filter = &mut state.filters[index];
        filter.set_range(&field.name, gte, lt);
        filter.meta.value = Some(self.formatter.format_range(field.field_type, gte, lt));
        info!(
            "updated {} filter on '{}' to [{gte}, {lt})",
            if filter.is_scripted() { "scripted" } else { "range" },
            field.name
        );
        Ok(BrushTransition {
            state,
            outcome: BrushOutcome::FilterUpdated { field: field.name.clone(), index },
        })
    }

    fn queue(&self, mut state: FilterState, event: &BrushEvent, field: &AxisField, bounds: RangeBounds) -> BrushTransition {
        let label = self.formatter.format_range(field.field_type, bounds.gte, bounds.lt);
        info!("queued range filter on '{}' ({label})", field.name);

        let mut filter = Filter::range(field.name.clone(), bounds);
        filter.meta.value = Some(label);
        filter.meta.index = event.index_pattern_id().map(str::to_string);
        state.queue_new_filter(filter);

        BrushTransition { state, outcome: BrushOutcome::FilterAdded { field: field.name.clone() } }
    }
}

fn absolute_window(gte: Bound, lt: Bound) -> DomainResult<TimeRange> {
    TimeRange::absolute(gte.to_epoch_millis()?, lt.to_epoch_millis()?)
}

fn ignored(state: FilterState, reason: IgnoreReason) -> BrushTransition {
    debug!("brush event ignored: {reason}");
    BrushTransition { state, outcome: BrushOutcome::Ignored { reason } }
}
