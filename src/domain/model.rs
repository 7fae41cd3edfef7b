use crate::utils::error::QualifierError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed qualifier value, carried through code that does not care which
/// qualifier produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum QualifierValue {
    Integer(i32),
}

impl QualifierValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            QualifierValue::Integer(_) => ValueType::Integer,
        }
    }

    pub fn as_integer(&self) -> Option<i32> {
        match self {
            QualifierValue::Integer(n) => Some(*n),
        }
    }
}

/// Canonical text of the value.
impl fmt::Display for QualifierValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualifierValue::Integer(n) => write!(f, "{}", n),
        }
    }
}

impl From<i32> for QualifierValue {
    fn from(value: i32) -> Self {
        QualifierValue::Integer(value)
    }
}

/// Identifies the kind of value a qualifier governs. Consumers dispatch on
/// this to pick widgets, comparisons and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[non_exhaustive]
pub enum ValueType {
    Integer,
}

impl ValueType {
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Integer => "integer",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValueType {
    type Err = QualifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" => Ok(ValueType::Integer),
            _ => Err(QualifierError::UnknownValueType {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ValueType {
    type Error = QualifierError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// A named piece of field text waiting to be checked. `text` may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValueEntry {
    pub name: String,
    #[serde(default)]
    pub text: Option<String>,
}
