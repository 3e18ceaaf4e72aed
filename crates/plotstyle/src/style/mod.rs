//! Style parameters, colors and theme application.
//!
//! - [`StyleParams`]: global parameter mappings with key-wise merge
//! - [`Rgba`]: parsing of the color strings used in palettes and themes
//! - [`ColorRamp`]: continuous gradients derived from palettes
//! - [`set_style`]: applies a theme to a [`PlotBackend`](crate::backend::PlotBackend)

mod apply;
mod color;
mod params;
mod ramp;

pub use apply::{register_continuous_ramps, set_style, GridStyler, StyleOptions, DEFAULT_PALETTE};
pub use color::{cycle_index, Rgba, DEFAULT_CYCLE};
pub use params::StyleParams;
pub use ramp::{ColorRamp, RAMP_PREFIX, REVERSED_SUFFIX};
