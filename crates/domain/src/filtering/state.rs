// crates/domain/src/filtering/state.rs
use serde::{Deserialize, Serialize};

use super::Filter;

/// Filters applied to a dashboard plus filters queued by the latest gesture.
///
/// `new_filters` stays `None` until something is queued, so "nothing was
/// created" and "an empty batch was created" remain distinguishable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(rename = "$newFilters", default, skip_serializing_if = "Option::is_none")]
    pub new_filters: Option<Vec<Filter>>,
}

impl FilterState {
    pub fn new(filters: Vec<Filter>) -> Self {
        Self { filters, new_filters: None }
    }

    /// Index of the first applied filter keyed on `field`.
    pub fn position_by_key(&self, field: &str) -> Option<usize> {
        self.filters.iter().position(|f| f.key() == field)
    }

    pub fn queue_new_filter(&mut self, filter: Filter) {
        self.new_filters.get_or_insert_with(Vec::new).push(filter);
    }

    pub fn pending(&self) -> &[Filter] {
        self.new_filters.as_deref().unwrap_or_default()
    }

    pub fn has_pending(&self) -> bool {
        self.new_filters.is_some()
    }

    /// Moves queued filters into `filters`, skipping ones already applied,
    /// and clears the queue. Returns how many were appended.
    pub fn commit_new_filters(&mut self) -> usize {
        let Some(pending) = self.new_filters.take() else {
            return 0;
        };
        let mut appended = 0;
        for filter in pending {
            if self.filters.iter().any(|existing| existing.same_query(&filter)) {
                continue;
            }
            self.filters.push(filter);
            appended += 1;
        }
        appended
    }
}
