// crates/domain/src/event/brush_event.rs
use brushfilter_shared_kernel::FieldName;
use serde::{Deserialize, Serialize};

use super::{AxisField, BrushRange};

/// The index pattern a visualisation queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPattern {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_field_name: Option<FieldName>,
}

impl IndexPattern {
    pub fn new(id: impl Into<String>, time_field_name: Option<FieldName>) -> Self {
        Self { id: id.into(), time_field_name }
    }
}

/// A validated brush selection over a chart axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrushEvent {
    pub axis_field: Option<AxisField>,
    pub range: BrushRange,
    pub index_pattern: Option<IndexPattern>,
}

impl BrushEvent {
    pub fn new(axis_field: Option<AxisField>, range: BrushRange, index_pattern: Option<IndexPattern>) -> Self {
        Self { axis_field, range, index_pattern }
    }

    /// Whether `field` is the index pattern's designated time field.
    pub fn is_time_field(&self, field: &FieldName) -> bool {
        self.index_pattern
            .as_ref()
            .and_then(|p| p.time_field_name.as_ref())
            .is_some_and(|time_field| time_field == field)
    }

    pub fn index_pattern_id(&self) -> Option<&str> {
        self.index_pattern.as_ref().map(|p| p.id.as_str())
    }
}
