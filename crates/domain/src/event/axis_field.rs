// crates/domain/src/event/axis_field.rs
use brushfilter_shared_kernel::{DomainResult, FieldName};
use serde::{Deserialize, Serialize};

/// Data type of the field plotted on a chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Date,
    Number,
    String,
    #[serde(other)]
    Other,
}

impl FieldType {
    #[inline]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::Date)
    }
}

/// The field behind the brushed axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisField {
    pub name: FieldName,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl AxisField {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> DomainResult<Self> {
        Ok(Self { name: FieldName::new(name)?, field_type })
    }

    pub fn date(name: impl Into<String>) -> DomainResult<Self> {
        Self::new(name, FieldType::Date)
    }

    pub fn number(name: impl Into<String>) -> DomainResult<Self> {
        Self::new(name, FieldType::Number)
    }
}
