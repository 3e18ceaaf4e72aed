//! Palette values: ordered color lists and category-to-color mappings.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml::Value;

use super::label::Label;
use crate::error::StyleError;

/// An insertion-ordered mapping from [`Label`] to color string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    entries: Vec<(Label, String)>,
    index: HashMap<Label, usize>,
}

impl ColorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the color for `label`, keeping its original position if present.
    pub fn insert(&mut self, label: impl Into<Label>, color: impl Into<String>) -> Option<String> {
        let label = label.into();
        let color = color.into();
        match self.index.get(&label).copied() {
            Some(position) => Some(std::mem::replace(&mut self.entries[position].1, color)),
            None => {
                self.index.insert(label.clone(), self.entries.len());
                self.entries.push((label, color));
                None
            }
        }
    }

    pub fn get(&self, label: &Label) -> Option<&str> {
        self.index
            .get(label)
            .map(|&position| self.entries[position].1.as_str())
    }

    pub fn contains_key(&self, label: &Label) -> bool {
        self.index.contains_key(label)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Label> {
        self.entries.iter().map(|(l, _)| l)
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, c)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Label, &str)> {
        self.entries.iter().map(|(l, c)| (l, c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<Label>, C: Into<String>> FromIterator<(L, C)> for ColorMap {
    fn from_iter<I: IntoIterator<Item = (L, C)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = ColorMap::new();
        map.entries.reserve(iter.size_hint().0);
        map.index.reserve(iter.size_hint().0);
        for (label, color) in iter {
            map.insert(label, color);
        }
        map
    }
}

impl IntoIterator for ColorMap {
    type Item = (Label, String);
    type IntoIter = std::vec::IntoIter<(Label, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for ColorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, color) in &self.entries {
            map.serialize_entry(label, color)?;
        }
        map.end()
    }
}

/// A named palette as authored in configuration.
///
/// The variant is decided once when the palette is loaded; callers that only
/// need colors use [`colors`](Palette::colors) regardless of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Palette {
    /// Ordered colors, assigned to labels by position.
    Sequence(Vec<String>),
    /// Colors keyed by category name.
    Mapping(ColorMap),
}

impl Palette {
    /// Builds a palette from its YAML value.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Type`] if the value is neither a sequence nor a
    /// mapping, or if an entry is not a string color.
    pub fn from_yaml(name: &str, value: &Value) -> Result<Self, StyleError> {
        match value {
            Value::Sequence(items) => items
                .iter()
                .map(|item| color_string(name, item))
                .collect::<Result<Vec<_>, _>>()
                .map(Palette::Sequence),
            Value::Mapping(mapping) => {
                let mut colors = ColorMap::new();
                for (key, item) in mapping {
                    colors.insert(Label::from_yaml(key)?, color_string(name, item)?);
                }
                Ok(Palette::Mapping(colors))
            }
            Value::Tagged(tagged) => Palette::from_yaml(name, &tagged.value),
            other => Err(StyleError::Type(format!(
                "palette '{}' must be a sequence or a mapping of colors, got {:?}",
                name, other
            ))),
        }
    }

    /// The palette's colors in order. Mapping values come out in insertion order.
    pub fn colors(&self) -> Vec<String> {
        match self {
            Palette::Sequence(colors) => colors.clone(),
            Palette::Mapping(map) => map.values().map(str::to_string).collect(),
        }
    }

    pub fn as_mapping(&self) -> Option<&ColorMap> {
        match self {
            Palette::Mapping(map) => Some(map),
            Palette::Sequence(_) => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Palette::Sequence(colors) => Some(colors),
            Palette::Mapping(_) => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Palette::Mapping(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Palette::Sequence(colors) => colors.len(),
            Palette::Mapping(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts back to the YAML shape the palette was authored in.
    pub fn to_yaml(&self) -> Value {
        match self {
            Palette::Sequence(colors) => {
                Value::Sequence(colors.iter().cloned().map(Value::String).collect())
            }
            Palette::Mapping(map) => Value::Mapping(
                map.iter()
                    .map(|(label, color)| (label.to_yaml(), Value::String(color.to_string())))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Palette::Sequence(colors) => colors.serialize(serializer),
            Palette::Mapping(map) => map.serialize(serializer),
        }
    }
}

fn color_string(palette: &str, value: &Value) -> Result<String, StyleError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(StyleError::Type(format!(
            "palette '{}' contains a non-string color {:?}",
            palette, other
        ))),
    }
}
