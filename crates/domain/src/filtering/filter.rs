// crates/domain/src/filtering/filter.rs
use std::fmt;

use brushfilter_shared_kernel::{Bound, FieldName};
use serde::{Deserialize, Serialize};

/// Date format hint attached to range clauses over date fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeFormat(String);

impl RangeFormat {
    pub const EPOCH_MILLIS: &'static str = "epoch_millis";

    pub fn new(format: impl Into<String>) -> Self {
        Self(format.into())
    }

    pub fn epoch_millis() -> Self {
        Self::new(Self::EPOCH_MILLIS)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RangeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `[gte, lt)` bounds of a range clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    pub gte: Bound,
    pub lt: Bound,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<RangeFormat>,
}

impl RangeBounds {
    pub fn new(gte: Bound, lt: Bound) -> Self {
        Self { gte, lt, format: None }
    }

    #[must_use]
    pub fn with_format(mut self, format: RangeFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// Script block of a filter over a scripted field. Bounds live in `params`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    pub params: RangeBounds,
}

/// Pill metadata. `key` is the identity used to find a filter for a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterMeta {
    pub key: FieldName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub negate: bool,
}

impl FilterMeta {
    pub fn new(key: FieldName) -> Self {
        Self { key, index: None, value: None, disabled: false, negate: false }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterQuery {
    /// Range clause over a mapped index field.
    Range { field: FieldName, bounds: RangeBounds },
    /// Range check evaluated by a script over a scripted field.
    ScriptedRange { script: ScriptSpec },
}

/// A search filter as stored in the dashboard's filter bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub meta: FilterMeta,
    pub query: FilterQuery,
}

impl Filter {
    /// Plain range filter keyed on `field`.
    pub fn range(field: FieldName, bounds: RangeBounds) -> Self {
        Self {
            meta: FilterMeta::new(field.clone()),
            query: FilterQuery::Range { field, bounds },
        }
    }

    /// Range filter over a scripted field.
    pub fn scripted_range(field: FieldName, script: ScriptSpec) -> Self {
        Self {
            meta: FilterMeta::new(field),
            query: FilterQuery::ScriptedRange { script },
        }
    }

    pub fn key(&self) -> &FieldName {
        &self.meta.key
    }

    pub fn is_scripted(&self) -> bool {
        matches!(self.query, FilterQuery::ScriptedRange { .. })
    }

    pub fn bounds(&self) -> &RangeBounds {
        match &self.query {
            FilterQuery::Range { bounds, .. } => bounds,
            FilterQuery::ScriptedRange { script } => &script.params,
        }
    }

    /// Moves the range to `[gte, lt)` on `field`, keeping any format hint.
    ///
    /// A plain range clause is re-pointed at `field`; scripted filters only
    /// get new `params`.
    pub fn set_range(&mut self, field: &FieldName, gte: Bound, lt: Bound) {
        let bounds = match &mut self.query {
            FilterQuery::Range { field: clause_field, bounds } => {
                clause_field.clone_from(field);
                bounds
            }
            FilterQuery::ScriptedRange { script } => &mut script.params,
        };
        bounds.gte = gte;
        bounds.lt = lt;
    }

    /// Same field and same clause, ignoring pill labels and toggles.
    pub fn same_query(&self, other: &Self) -> bool {
        self.meta.key == other.meta.key && self.query == other.query
    }
}
