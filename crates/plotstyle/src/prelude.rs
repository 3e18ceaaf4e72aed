//! Prelude for convenient imports.
//!
//! ```rust
//! use plotstyle::prelude::*;
//!
//! let mut config = StyleConfig::new();
//! config.load_themes_str("clean:\n  axes.spines.top: false\n")?;
//!
//! let mut backend = MemoryBackend::new();
//! set_style(&config, "clean", &StyleOptions::default(), &mut backend)?;
//! # Ok::<(), StyleError>(())
//! ```

// Store and loading
pub use crate::config::{LoadOptions, StyleConfig};

// Palettes
pub use crate::palette::{display_palette, get_mapped_palette, get_palette, ColorMap, Label, Palette};

// Themes and styling
pub use crate::style::{set_style, GridStyler, StyleOptions, StyleParams};
pub use crate::theme::{FontAuth, Theme};

// Backends
pub use crate::backend::{MemoryBackend, PlotBackend, StyleTarget};

pub use crate::error::StyleError;
