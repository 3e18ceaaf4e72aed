//! Resolving palettes to colors and labels to colors.

use std::collections::BTreeSet;

use super::label::Label;
use super::palette::{ColorMap, Palette};
use crate::config::StyleConfig;
use crate::error::StyleError;

/// Color given to labels missing from a mapping-form palette.
pub const DEFAULT_UNSEEN_COLOR: &str = "#808080";

/// Returns a palette's colors as an ordered list.
///
/// List palettes come back verbatim; mapping palettes yield their colors in
/// the order the categories were authored.
///
/// # Errors
///
/// [`StyleError::NotFound`] (listing available names) if the palette does not
/// exist, [`StyleError::EmptyConfig`] if no palettes are loaded.
///
/// # Example
///
/// ```rust
/// use plotstyle::{get_palette, StyleConfig};
///
/// let mut config = StyleConfig::new();
/// config.load_palettes_str("warm: ['#fee8c8', '#fdbb84', '#e34a33']").unwrap();
/// assert_eq!(get_palette(&config, "warm").unwrap(), vec!["#fee8c8", "#fdbb84", "#e34a33"]);
/// ```
pub fn get_palette(config: &StyleConfig, name: &str) -> Result<Vec<String>, StyleError> {
    config.palette(name).map(Palette::colors)
}

/// Assigns a stable color to every distinct label.
///
/// For a **mapping** palette, labels that are not yet categories are added
/// to the stored palette with `unseen_color` (default
/// [`DEFAULT_UNSEEN_COLOR`]) and the whole mapping is returned, including
/// categories that do not occur in `labels`. Because the stored palette is
/// extended, later calls and [`get_palette`] see those labels too, for as long
/// as the current palette collection is loaded.
///
/// For a **list** palette, the distinct labels are sorted and the i-th label
/// gets color `i % len`. The result depends only on the set of labels, never
/// on their order or repetition.
///
/// # Errors
///
/// - [`StyleError::NotFound`] if the palette does not exist
/// - [`StyleError::InvalidArgument`] if `labels` is empty (or the palette has
///   no colors) for a list palette
///
/// # Example
///
/// ```rust
/// use plotstyle::{get_mapped_palette, Label, StyleConfig};
///
/// let mut config = StyleConfig::new();
/// config.load_palettes_str("p: ['#111', '#222', '#333']").unwrap();
///
/// let map = get_mapped_palette(&mut config, "p", ["d", "b", "a", "c", "a"], None).unwrap();
/// assert_eq!(map.get(&Label::from("a")), Some("#111"));
/// assert_eq!(map.get(&Label::from("d")), Some("#111"));
/// ```
pub fn get_mapped_palette<I, L>(
    config: &mut StyleConfig,
    name: &str,
    labels: I,
    unseen_color: Option<&str>,
) -> Result<ColorMap, StyleError>
where
    I: IntoIterator<Item = L>,
    L: Into<Label>,
{
    let labels: BTreeSet<Label> = labels.into_iter().map(Into::into).collect();
    let unseen_color = unseen_color.unwrap_or(DEFAULT_UNSEEN_COLOR);

    match config.palette_mut(name)? {
        Palette::Mapping(map) => {
            let unseen: Vec<Label> = labels
                .into_iter()
                .filter(|label| !map.contains_key(label))
                .collect();
            if !unseen.is_empty() {
                log::info!(
                    "labels not in palette '{}' assigned color '{}': {}",
                    name,
                    unseen_color,
                    unseen
                        .iter()
                        .map(Label::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            for label in unseen {
                map.insert(label, unseen_color);
            }
            Ok(map.clone())
        }
        Palette::Sequence(colors) => {
            if labels.is_empty() {
                return Err(StyleError::InvalidArgument(format!(
                    "at least one label is needed to map list palette '{}'",
                    name
                )));
            }
            if colors.is_empty() {
                return Err(StyleError::InvalidArgument(format!(
                    "palette '{}' has no colors to assign",
                    name
                )));
            }
            Ok(labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| (label, colors[i % colors.len()].clone()))
                .collect())
        }
    }
}
