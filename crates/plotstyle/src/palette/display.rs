//! Drawing palettes as labeled color swatches.

use super::palette::Palette;
use crate::backend::PlotBackend;
use crate::config::StyleConfig;
use crate::error::StyleError;
use crate::style::Rgba;

/// Swatch text switches from white to black at this luminance.
pub const LUMINANCE_THRESHOLD: f64 = 0.5;

/// Color of the text printed on a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    Black,
    White,
}

impl TextColor {
    /// Picks readable text for a background color.
    pub fn for_background(color: &Rgba) -> Self {
        Self::for_luminance(color.luminance())
    }

    /// White below [`LUMINANCE_THRESHOLD`], black from it upwards.
    pub fn for_luminance(luminance: f64) -> Self {
        if luminance < LUMINANCE_THRESHOLD {
            TextColor::White
        } else {
            TextColor::Black
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TextColor::Black => "black",
            TextColor::White => "white",
        }
    }
}

/// One bar of a swatch chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    /// The color as written in the palette.
    pub color: String,
    /// Tick label: the category for mapping palettes, empty for lists.
    pub label: String,
    pub text_color: TextColor,
}

/// A bar chart with one unit-height bar per palette color, each showing its
/// color string.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchChart {
    pub title: String,
    /// `(width, height)` in inches.
    pub figure_size: (f64, f64),
    /// Rotation of the tick labels in degrees.
    pub label_rotation: f64,
    pub swatches: Vec<Swatch>,
}

/// Builds the swatch chart for a palette without drawing it.
///
/// Colors are resolved through [`PlotBackend::to_rgba`], so the chart accepts
/// whatever the backend can draw.
///
/// # Errors
///
/// [`StyleError::NotFound`] for unknown palettes and
/// [`StyleError::InvalidColor`] if the backend cannot resolve a color.
pub fn swatch_chart(
    config: &StyleConfig,
    name: &str,
    backend: &dyn PlotBackend,
) -> Result<SwatchChart, StyleError> {
    let palette = config.palette(name)?;
    let entries: Vec<(String, String)> = match palette {
        Palette::Sequence(colors) => colors.iter().map(|c| (c.clone(), String::new())).collect(),
        Palette::Mapping(map) => map
            .iter()
            .map(|(label, color)| (color.to_string(), label.to_string()))
            .collect(),
    };

    let swatches = entries
        .into_iter()
        .map(|(color, label)| {
            let rgba = backend.to_rgba(&color)?;
            Ok(Swatch {
                text_color: TextColor::for_background(&rgba),
                color,
                label,
            })
        })
        .collect::<Result<Vec<_>, StyleError>>()?;

    Ok(SwatchChart {
        title: format!("Palette: {}", name),
        figure_size: (swatches.len() as f64 * 1.5, 2.5),
        label_rotation: 45.0,
        swatches,
    })
}

/// Returns a palette in its authored form, drawing it when a backend is given.
///
/// # Errors
///
/// [`StyleError::NotFound`] for unknown palettes; when drawing, any error
/// from [`swatch_chart`] or the backend.
///
/// # Example
///
/// ```rust
/// use plotstyle::backend::MemoryBackend;
/// use plotstyle::{display_palette, Palette, StyleConfig};
///
/// let mut config = StyleConfig::new();
/// config.load_palettes_str("mono: ['#000000', '#ffffff']").unwrap();
///
/// let mut backend = MemoryBackend::new();
/// let palette = display_palette(&config, "mono", Some(&mut backend)).unwrap();
/// assert!(matches!(palette, Palette::Sequence(_)));
/// assert_eq!(backend.charts()[0].swatches.len(), 2);
/// ```
pub fn display_palette(
    config: &StyleConfig,
    name: &str,
    backend: Option<&mut dyn PlotBackend>,
) -> Result<Palette, StyleError> {
    let palette = config.palette(name)?.clone();
    if let Some(backend) = backend {
        let chart = swatch_chart(config, name, &*backend)?;
        backend.draw_swatches(&chart)?;
    }
    Ok(palette)
}
