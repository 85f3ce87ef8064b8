// crates/domain/src/filtering/wire.rs
//! Filter-bar document shape: `{meta, range: {<field>: bounds}}` or
//! `{meta, script: {script: {params}}}`.
//!
//! A bare `range: {gte, lt}` clause is also accepted on input and is taken
//! to range over `meta.key`. Output always names the field.

use std::collections::BTreeMap;

use brushfilter_shared_kernel::{DomainError, FieldName};
use serde::{Deserialize, Serialize};

use super::filter::{Filter, FilterMeta, FilterQuery, RangeBounds, ScriptSpec};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct FilterRepr {
    meta: FilterMeta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<RangeClause>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    script: Option<ScriptWrapper>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RangeClause {
    Bare(RangeBounds),
    Named(BTreeMap<FieldName, RangeBounds>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScriptWrapper {
    script: ScriptSpec,
}

impl TryFrom<FilterRepr> for Filter {
    type Error = DomainError;

    fn try_from(repr: FilterRepr) -> Result<Self, Self::Error> {
        let query = match (repr.range, repr.script) {
            (_, Some(wrapper)) => FilterQuery::ScriptedRange { script: wrapper.script },
            (Some(RangeClause::Bare(bounds)), None) => FilterQuery::Range {
                field: repr.meta.key.clone(),
                bounds,
            },
            (Some(RangeClause::Named(range)), None) => {
                let mut clauses = range.into_iter();
                match (clauses.next(), clauses.next()) {
                    (Some((field, bounds)), None) => FilterQuery::Range { field, bounds },
                    _ => {
                        return Err(DomainError::InvalidFilter {
                            key: repr.meta.key.to_string(),
                            reason: "range clause must name exactly one field".to_string(),
                        });
                    }
                }
            }
            (None, None) => {
                return Err(DomainError::InvalidFilter {
                    key: repr.meta.key.to_string(),
                    reason: "filter has neither a range nor a script clause".to_string(),
                });
            }
        };
        Ok(Self { meta: repr.meta, query })
    }
}

impl From<Filter> for FilterRepr {
    fn from(filter: Filter) -> Self {
        match filter.query {
            FilterQuery::Range { field, bounds } => Self {
                meta: filter.meta,
                range: Some(RangeClause::Named(BTreeMap::from([(field, bounds)]))),
                script: None,
            },
            FilterQuery::ScriptedRange { script } => Self {
                meta: filter.meta,
                range: None,
                script: Some(ScriptWrapper { script }),
            },
        }
    }
}

impl Serialize for Filter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FilterRepr::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = FilterRepr::deserialize(deserializer)?;
        Self::try_from(repr).map_err(serde::de::Error::custom)
    }
}
