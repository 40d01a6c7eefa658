use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Field names used by the persisted settings payload.
pub mod field {
    pub const ENABLED: &str = "enabled";
    pub const ALLOWED_ORIGINS: &str = "allowedOrigins";
    pub const ALLOWED_METHODS: &str = "allowedMethods";
}

/// Settings supplied by the host's configuration provider.
///
/// `allowed_origins` is the raw comma-separated allow-list and
/// `allowed_methods` is copied verbatim into `Access-Control-Allow-Methods`.
/// Neither is validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfiguration {
    pub enabled: bool,
    pub allowed_origins: Option<String>,
    pub allowed_methods: Option<String>,
}

/// Errors raised while reading a settings payload.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("settings payload is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("settings payload is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("settings field `{field}` must be {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },
}

impl PolicyConfiguration {
    pub fn new<O, M>(enabled: bool, allowed_origins: O, allowed_methods: M) -> Self
    where
        O: Into<String>,
        M: Into<String>,
    {
        Self {
            enabled,
            allowed_origins: Some(allowed_origins.into()),
            allowed_methods: Some(allowed_methods.into()),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_allowed_origins<S: Into<String>>(mut self, origins: S) -> Self {
        self.allowed_origins = Some(origins.into());
        self
    }

    pub fn with_allowed_methods<S: Into<String>>(mut self, methods: S) -> Self {
        self.allowed_methods = Some(methods.into());
        self
    }

    /// Parses a submitted settings form. All three fields must be present.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigurationError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_json_value(&value)
    }

    pub fn from_json_value(value: &Value) -> Result<Self, ConfigurationError> {
        let object = value.as_object().ok_or(ConfigurationError::InvalidType {
            field: "<root>",
            expected: "an object",
        })?;

        let enabled = match object.get(field::ENABLED) {
            Some(Value::Bool(enabled)) => *enabled,
            Some(_) => {
                return Err(ConfigurationError::InvalidType {
                    field: field::ENABLED,
                    expected: "a boolean",
                });
            }
            None => return Err(ConfigurationError::MissingField(field::ENABLED)),
        };

        Ok(Self {
            enabled,
            allowed_origins: nullable_string(object, field::ALLOWED_ORIGINS)?,
            allowed_methods: nullable_string(object, field::ALLOWED_METHODS)?,
        })
    }

    pub fn to_json_string(&self) -> Result<String, ConfigurationError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn nullable_string(
    object: &Map<String, Value>,
    name: &'static str,
) -> Result<Option<String>, ConfigurationError> {
    match object.get(name) {
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(Value::Null) => Ok(None),
        Some(_) => Err(ConfigurationError::InvalidType {
            field: name,
            expected: "a string or null",
        }),
        None => Err(ConfigurationError::MissingField(name)),
    }
}

#[cfg(test)]
#[path = "configuration_test.rs"]
mod configuration_test;
