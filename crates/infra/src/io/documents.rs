// crates/infra/src/io/documents.rs
use std::path::Path;

use brushfilter_domain::event::{AxisField, BrushEvent, BrushRange, IndexPattern};
use brushfilter_shared_kernel::{InfraResult, InfrastructureError};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// Text encoding of event, state and report documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml`/`.yml` select YAML; anything else (including stdin) is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    pub fn decode<T: DeserializeOwned>(self, text: &str) -> InfraResult<T> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            Self::Yaml => decode_yaml(text),
        }
    }

    pub fn encode<T: Serialize>(self, value: &T) -> InfraResult<String> {
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(value)?),
            Self::Yaml => encode_yaml(value),
        }
    }
}

#[cfg(feature = "yaml")]
fn decode_yaml<T: DeserializeOwned>(text: &str) -> InfraResult<T> {
    Ok(serde_yaml::from_str(text)?)
}

#[cfg(feature = "yaml")]
fn encode_yaml<T: Serialize>(value: &T) -> InfraResult<String> {
    Ok(serde_yaml::to_string(value)?)
}

#[cfg(not(feature = "yaml"))]
fn decode_yaml<T: DeserializeOwned>(_text: &str) -> InfraResult<T> {
    Err(yaml_disabled())
}

#[cfg(not(feature = "yaml"))]
fn encode_yaml<T: Serialize>(_value: &T) -> InfraResult<String> {
    Err(yaml_disabled())
}

#[cfg(not(feature = "yaml"))]
fn yaml_disabled() -> InfrastructureError {
    InfrastructureError::SerializationError {
        format: "YAML".to_string(),
        details: "built without the `yaml` feature".to_string(),
    }
}

/// Chart-library brush callback payload.
///
/// Keys other than `xAxisField` and `indexPattern` (such as the
/// `fieldFormatter` callback) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrushEventDocument {
    #[serde(default)]
    pub data: BrushEventData,
    #[serde(default)]
    pub range: BrushRange,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrushEventData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_field: Option<AxisField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_pattern: Option<IndexPattern>,
}

impl From<BrushEventDocument> for BrushEvent {
    fn from(doc: BrushEventDocument) -> Self {
        Self::new(doc.data.x_axis_field, doc.range, doc.data.index_pattern)
    }
}

impl BrushEventDocument {
    pub fn parse(text: &str, format: DocumentFormat) -> InfraResult<BrushEvent> {
        let doc: Self = format.decode(text).map_err(|e| match e {
            InfrastructureError::SerializationError { format, details } => InfrastructureError::SerializationError {
                format,
                details: format!("brush event: {details}"),
            },
            other => other,
        })?;
        Ok(doc.into())
    }
}
