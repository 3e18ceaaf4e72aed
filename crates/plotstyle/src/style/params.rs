//! Style parameter mappings.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::error::StyleError;

/// A set of global style parameters, keyed like `"figure.dpi"` or `"axes.grid"`.
///
/// Values keep their YAML type (numbers, strings, booleans, lists). The
/// backend decides how to interpret each key.
///
/// # Example
///
/// ```rust
/// use plotstyle::StyleParams;
///
/// let theme = StyleParams::new().with("figure.dpi", 100).with("axes.grid", true);
/// let overrides = StyleParams::new().with("figure.dpi", 300);
///
/// let merged = theme.merge(overrides);
/// assert_eq!(merged.get("figure.dpi").and_then(|v| v.as_i64()), Some(300));
/// assert_eq!(merged.get("axes.grid").and_then(|v| v.as_bool()), Some(true));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleParams {
    entries: BTreeMap<String, Value>,
}

impl StyleParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds parameters from a YAML mapping.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Type`] if a key is not a string.
    pub fn from_mapping(mapping: &Mapping) -> Result<Self, StyleError> {
        let mut params = Self::new();
        for (key, value) in mapping {
            let key = key.as_str().ok_or_else(|| {
                StyleError::Type(format!("style parameter key must be a string, got {:?}", key))
            })?;
            params.set(key, value.clone());
        }
        Ok(params)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Merges `other` into this set. Keys in `other` take precedence.
    pub fn merge(mut self, other: StyleParams) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for StyleParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}
