//! Shared document pools: colors, text styles, layer styles.
//!
//! Pool entries are validated on the way in; a portable color that does not
//! carry sane components is rejected rather than stored.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    #[error("color is not an object: {0}")]
    NotAnObject(String),

    #[error("color component '{component}' is missing or not a number")]
    MissingComponent { component: &'static str },

    #[error("color component '{component}' is out of range: {value}")]
    ComponentOutOfRange { component: &'static str, value: f64 },

    #[error("shared style has an empty name")]
    EmptyStyleName,
}

/// One shared color asset, components in 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharedColor {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl SharedColor {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Validate a raw portable color value
    pub fn from_value(value: &Value) -> Result<Self, AssetError> {
        let object = value
            .as_object()
            .ok_or_else(|| AssetError::NotAnObject(value.to_string()))?;

        let component = |name: &'static str| -> Result<f64, AssetError> {
            let number = object
                .get(name)
                .and_then(Value::as_f64)
                .ok_or(AssetError::MissingComponent { component: name })?;
            if !(0.0..=1.0).contains(&number) {
                return Err(AssetError::ComponentOutOfRange {
                    component: name,
                    value: number,
                });
            }
            Ok(number)
        };

        Ok(Self {
            red: component("red")?,
            green: component("green")?,
            blue: component("blue")?,
            // Alpha defaults to opaque when absent
            alpha: match object.get("alpha") {
                Some(_) => component("alpha")?,
                None => 1.0,
            },
        })
    }
}

/// One entry of a shared style pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedStyleEntry {
    pub name: String,
    pub value: Value,
}

impl SharedStyleEntry {
    pub fn new(name: impl Into<String>, value: Value) -> Result<Self, AssetError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AssetError::EmptyStyleName);
        }
        Ok(Self { name, value })
    }
}
