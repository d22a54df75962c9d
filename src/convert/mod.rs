pub mod camel;
pub mod kebab;

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use camel::to_camel_case;
pub use kebab::to_kebab_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("input must be text")]
    NotText { found: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Kebab,
    Camel,
}

impl FromStr for Case {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kebab" => Ok(Case::Kebab),
            "camel" => Ok(Case::Camel),
            _ => Err(format!("Unknown case: {}", s)),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Case::Kebab => write!(f, "kebab"),
            Case::Camel => write!(f, "camel"),
        }
    }
}

impl Case {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Case::Kebab => to_kebab_case(text),
            Case::Camel => to_camel_case(text),
        }
    }
}

/// Classify a dynamically-typed value as textual, rejecting everything else
pub fn expect_text(value: &Value) -> Result<&str, ConvertError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(ConvertError::NotText {
            found: kind_of(other),
        }),
    }
}

/// Normalize an arbitrary value to kebab-case
///
/// The value must be textual; any other kind fails before segmentation
/// starts. Textual input never fails, even when it contains no letters
/// or digits at all (the result is then empty).
pub fn normalize(value: &Value) -> Result<String, ConvertError> {
    expect_text(value).map(to_kebab_case)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
