//! Rendering backend abstraction.
//!
//! This module defines the seams between the styling layer and whatever
//! plotting library draws the figures. The styling layer only ever:
//!
//! - resets and updates global style parameters,
//! - sets the default categorical color cycle,
//! - registers named colormaps,
//! - registers font files,
//! - resolves color strings to RGBA,
//! - draws palette swatch charts,
//! - styles the grid of an individual axis.
//!
//! [`MemoryBackend`] implements all of it in memory, which is what the tests
//! and headless callers use.

mod memory;

pub use memory::{MemoryAxis, MemoryBackend, MemoryFigure, RegisteredFont};

use crate::error::StyleError;
use crate::palette::SwatchChart;
use crate::style::{ColorRamp, Rgba, StyleParams};

/// Accepts font files declared by themes.
pub trait FontRegistry {
    /// Registers the font bytes fetched from `location` under `family`.
    ///
    /// Errors are reported as strings; the caller treats them as non-fatal.
    fn register_font(&mut self, family: &str, location: &str, data: Vec<u8>) -> Result<(), String>;
}

/// Global plotting context that themes are applied to.
pub trait PlotBackend: FontRegistry {
    /// Restores all global style parameters to the backend's defaults.
    fn reset_params(&mut self);

    /// Updates global style parameters. Keys not in `params` are untouched.
    fn update_params(&mut self, params: &StyleParams);

    /// Sets the default categorical color cycle.
    fn set_color_cycle(&mut self, colors: &[String]);

    /// Registers a colormap, replacing any existing one with the same name.
    fn register_colormap(&mut self, ramp: ColorRamp);

    /// Draws one labeled swatch per palette entry.
    fn draw_swatches(&mut self, chart: &SwatchChart) -> Result<(), StyleError>;

    /// Resolves a color string the way this backend would when drawing.
    ///
    /// Swatch contrast and continuous ramps go through this, so any color the
    /// backend accepts can appear in a palette. The default is [`Rgba::parse`].
    fn to_rgba(&self, color: &str) -> Result<Rgba, StyleError> {
        Rgba::parse(color)
    }
}

/// Which grid lines a style applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridWhich {
    Major,
    Minor,
}

/// A single plot axis whose grid can be styled.
pub trait Axis {
    fn set_grid(&mut self, which: GridWhich, params: &StyleParams);

    fn minor_ticks_on(&mut self);
}

/// Anything a grid style may be handed: axes, figures, legends.
///
/// Only axes can take a grid style; everything else returns `None`.
pub trait StyleTarget {
    fn as_axis_mut(&mut self) -> Option<&mut dyn Axis>;

    /// Short description used in error messages.
    fn describe(&self) -> String;
}
