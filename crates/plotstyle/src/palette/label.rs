//! Category labels assigned to colors.

use std::fmt;

use serde::Serialize;
use serde_yaml::Value;

use crate::error::StyleError;

/// A category value from caller data.
///
/// Labels are hashable and totally ordered so a label set can be sorted
/// into a stable color assignment. Within a kind the order is the natural
/// one; across kinds `Bool < Int < Text`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Label {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl Label {
    /// Converts a YAML mapping key into a label.
    ///
    /// Floats become their textual form since they have no total order.
    pub fn from_yaml(value: &Value) -> Result<Self, StyleError> {
        match value {
            Value::String(s) => Ok(Label::Text(s.clone())),
            Value::Bool(b) => Ok(Label::Bool(*b)),
            Value::Number(n) => Ok(n
                .as_i64()
                .map(Label::Int)
                .unwrap_or_else(|| Label::Text(n.to_string()))),
            Value::Tagged(tagged) => Label::from_yaml(&tagged.value),
            other => Err(StyleError::Type(format!(
                "palette category must be a scalar, got {:?}",
                other
            ))),
        }
    }

    pub fn to_yaml(&self) -> Value {
        match self {
            Label::Bool(b) => Value::Bool(*b),
            Label::Int(i) => Value::Number((*i).into()),
            Label::Text(s) => Value::String(s.clone()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Label::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Bool(b) => write!(f, "{}", b),
            Label::Int(i) => write!(f, "{}", i),
            Label::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label::Text(s.to_string())
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        Label::Text(s)
    }
}

impl From<&String> for Label {
    fn from(s: &String) -> Self {
        Label::Text(s.clone())
    }
}

impl From<i64> for Label {
    fn from(i: i64) -> Self {
        Label::Int(i)
    }
}

impl From<i32> for Label {
    fn from(i: i32) -> Self {
        Label::Int(i64::from(i))
    }
}

impl From<u32> for Label {
    fn from(i: u32) -> Self {
        Label::Int(i64::from(i))
    }
}

impl From<bool> for Label {
    fn from(b: bool) -> Self {
        Label::Bool(b)
    }
}
