//! # Plotstyle - Palettes and Themes for Plotting
//!
//! `plotstyle` keeps the colors and look of a project's figures in shared YAML
//! files instead of scattered through plotting code. Palettes assign colors to
//! data labels, themes set global plotting parameters, and both can be loaded
//! from local files or remote URLs.
//!
//! The crate does not draw anything itself. Everything it applies goes through
//! the [`PlotBackend`](backend::PlotBackend) trait; [`backend::MemoryBackend`]
//! records the result in memory.
//!
//! ## Core Concepts
//!
//! - [`StyleConfig`]: the store of loaded palettes and themes
//! - [`Palette`]: an ordered color list or a category-to-color mapping
//! - [`get_mapped_palette`]: stable label-to-color assignment
//! - [`Theme`]: a named set of plotting parameters, fonts and grid style
//! - [`set_style`]: applies a theme, color cycle and colormaps to a backend
//!
//! ## Quick Start
//!
//! ```rust
//! use plotstyle::backend::MemoryBackend;
//! use plotstyle::{get_mapped_palette, set_style, Label, StyleConfig, StyleOptions};
//!
//! let mut config = StyleConfig::new();
//! config.load_palettes_str(r##"
//! default: ["#1f77b4", "#ff7f0e", "#2ca02c"]
//! "##).unwrap();
//! config.load_themes_str(r##"
//! paper:
//!   figure.dpi: 150
//!   axes.grid: true
//! "##).unwrap();
//!
//! let mut backend = MemoryBackend::new();
//! set_style(&config, "paper", &StyleOptions::default(), &mut backend).unwrap();
//! assert_eq!(backend.color_cycle().len(), 3);
//! assert!(backend.colormap("project_default_r").is_some());
//!
//! let colors = get_mapped_palette(&mut config, "default", ["wt", "ko"], None).unwrap();
//! assert_eq!(colors.get(&Label::from("ko")), Some("#1f77b4"));
//! ```
//!
//! ## Category Palettes
//!
//! Mapping palettes pin colors to known categories. Labels the palette has not
//! seen get a fallback color, and that assignment is remembered:
//!
//! ```rust
//! use plotstyle::{get_mapped_palette, get_palette, StyleConfig};
//!
//! let mut config = StyleConfig::new();
//! config.load_palettes_str("condition: {control: '#7f7f7f', treated: '#d62728'}").unwrap();
//!
//! get_mapped_palette(&mut config, "condition", ["treated", "vehicle"], Some("#000000")).unwrap();
//! assert_eq!(
//!     get_palette(&config, "condition").unwrap(),
//!     vec!["#7f7f7f", "#d62728", "#000000"],
//! );
//! ```
//!
//! ## Remote Sources
//!
//! ```rust,no_run
//! use plotstyle::{LoadOptions, StyleConfig};
//!
//! let mut config = StyleConfig::new();
//! let options = LoadOptions::new().with_auth_token("ghp_example");
//! config
//!     .load_palettes("https://raw.githubusercontent.com/lab/style/main/palettes.yaml", &options)
//!     .unwrap();
//! ```
//!
//! ## Bundled Defaults
//!
//! [`StyleConfig::with_defaults`] starts from the palettes and themes shipped
//! with the crate, and [`global::shared`] exposes one such store process-wide.

pub mod backend;
pub mod config;
mod error;
pub mod global;
pub mod palette;
pub mod prelude;
pub mod style;
pub mod theme;

// Error types
pub use error::{ConfigKind, FetchError, StyleError};

// Configuration store
pub use config::{LoadOptions, Source, StyleConfig};

// Palettes
pub use palette::{
    display_palette, get_mapped_palette, get_palette, swatch_chart, ColorMap, Label, Palette,
    SwatchChart, DEFAULT_UNSEEN_COLOR,
};

// Themes and styling
pub use style::{
    register_continuous_ramps, set_style, ColorRamp, GridStyler, Rgba, StyleOptions, StyleParams,
};
pub use theme::{FontAuth, FontFamily, FontIssue, FontReport, GridStyle, Theme};
