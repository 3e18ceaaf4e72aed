//! Theme definitions loaded from YAML.
//!
//! A theme is a mapping of style parameter keys to values, plus two reserved
//! keys that are not passed to the backend as-is:
//!
//! - `fonts`: font family name → list of font file locations
//! - `advanced_grid_style`: optional `major` / `minor` grid parameter mappings
//!
//! ```yaml
//! paper:
//!   figure.dpi: 100
//!   axes.grid: true
//!   fonts:
//!     Inter:
//!       - https://github.com/rsms/inter/raw/master/docs/font-files/Inter-Regular.otf
//!   advanced_grid_style:
//!     major: { color: "#dddddd", linewidth: 0.8 }
//!     minor: { color: "#eeeeee", linewidth: 0.4 }
//! ```

use serde_yaml::{Mapping, Value};

use crate::error::StyleError;
use crate::style::StyleParams;

/// Reserved theme key declaring font families.
pub const FONTS_KEY: &str = "fonts";

/// Reserved theme key declaring per-axis grid styling.
pub const GRID_STYLE_KEY: &str = "advanced_grid_style";

/// A font family and the files that provide it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily {
    pub name: String,
    pub files: Vec<String>,
}

/// Major and minor grid-line parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridStyle {
    pub major: Option<StyleParams>,
    pub minor: Option<StyleParams>,
}

impl GridStyle {
    pub fn is_empty(&self) -> bool {
        self.major.is_none() && self.minor.is_none()
    }
}

/// A named theme.
///
/// The raw settings are kept exactly as authored so they can be inspected;
/// fonts, grid style and the remaining parameters are split out when the
/// theme is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    settings: Mapping,
    fonts: Vec<FontFamily>,
    grid_style: Option<GridStyle>,
    params: StyleParams,
}

impl Theme {
    /// Builds a theme from its YAML value.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Type`] if the value is not a mapping or a reserved
    /// key has the wrong shape.
    pub fn from_yaml(name: impl Into<String>, value: &Value) -> Result<Self, StyleError> {
        let name = name.into();
        let settings = match value {
            Value::Mapping(mapping) => mapping.clone(),
            Value::Tagged(tagged) => return Theme::from_yaml(name, &tagged.value),
            other => {
                return Err(StyleError::Type(format!(
                    "theme '{}' must be a mapping of style settings, got {:?}",
                    name, other
                )))
            }
        };

        let mut remaining = settings.clone();
        let fonts = match remaining.remove(FONTS_KEY) {
            Some(value) => parse_fonts(&name, &value)?,
            None => Vec::new(),
        };
        let grid_style = match remaining.remove(GRID_STYLE_KEY) {
            Some(value) => Some(parse_grid_style(&name, &value)?),
            None => None,
        };
        let params = StyleParams::from_mapping(&remaining)?;

        Ok(Self {
            name,
            settings,
            fonts,
            grid_style,
            params,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The theme as authored, reserved keys included.
    pub fn settings(&self) -> &Mapping {
        &self.settings
    }

    /// Declared font families in declaration order.
    pub fn fonts(&self) -> &[FontFamily] {
        &self.fonts
    }

    pub fn grid_style(&self) -> Option<&GridStyle> {
        self.grid_style.as_ref()
    }

    /// Style parameters without the reserved keys.
    pub fn params(&self) -> &StyleParams {
        &self.params
    }
}

fn parse_fonts(theme: &str, value: &Value) -> Result<Vec<FontFamily>, StyleError> {
    let mapping = match value {
        Value::Mapping(m) => m,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(StyleError::Type(format!(
                "'{}' in theme '{}' must map font names to file lists, got {:?}",
                FONTS_KEY, theme, other
            )))
        }
    };

    let mut families = Vec::with_capacity(mapping.len());
    for (key, files) in mapping {
        let name = key.as_str().ok_or_else(|| {
            StyleError::Type(format!("font name in theme '{}' must be a string", theme))
        })?;
        let files = match files {
            Value::String(single) => vec![single.clone()],
            Value::Sequence(items) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        StyleError::Type(format!(
                            "font '{}' in theme '{}' lists a non-string location",
                            name, theme
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Value::Null => Vec::new(),
            other => {
                return Err(StyleError::Type(format!(
                    "font '{}' in theme '{}' must list file locations, got {:?}",
                    name, theme, other
                )))
            }
        };
        families.push(FontFamily {
            name: name.to_string(),
            files,
        });
    }
    Ok(families)
}

fn parse_grid_style(theme: &str, value: &Value) -> Result<GridStyle, StyleError> {
    let mapping = match value {
        Value::Mapping(m) => m,
        Value::Null => return Ok(GridStyle::default()),
        other => {
            return Err(StyleError::Type(format!(
                "'{}' in theme '{}' must be a mapping, got {:?}",
                GRID_STYLE_KEY, theme, other
            )))
        }
    };

    let section = |key: &str| -> Result<Option<StyleParams>, StyleError> {
        match mapping.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Mapping(m)) => StyleParams::from_mapping(m).map(Some),
            Some(other) => Err(StyleError::Type(format!(
                "'{}.{}' in theme '{}' must be a mapping, got {:?}",
                GRID_STYLE_KEY, key, theme, other
            ))),
        }
    };

    Ok(GridStyle {
        major: section("major")?,
        minor: section("minor")?,
    })
}
