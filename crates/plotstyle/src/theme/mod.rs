//! Themes: named sets of global style parameters.
//!
//! Themes are loaded from a YAML file whose top level maps theme names to
//! style settings. Most keys are passed straight to the backend as global
//! parameters. Two keys are reserved:
//!
//! ```yaml
//! paper:
//!   figure.dpi: 100
//!   axes.spines.top: false
//!
//!   # Font families, first one wins
//!   fonts:
//!     Inter: [fonts/Inter-Regular.otf, fonts/Inter-Bold.otf]
//!
//!   # Applied per axis through the GridStyler returned by set_style
//!   advanced_grid_style:
//!     major: { color: "#cccccc", linewidth: 0.8 }
//!     minor: { color: "#eeeeee", linewidth: 0.4, linestyle: ":" }
//! ```
//!
//! ## Fonts
//!
//! When themes are loaded, every listed font file is fetched and handed to the
//! backend's [`FontRegistry`](crate::backend::FontRegistry). A font that fails
//! to download or register is reported in the returned [`FontReport`] and
//! logged; the theme itself still loads.
//!
//! ## See Also
//!
//! - [`crate::style::set_style`]: applying a theme to a backend

mod fonts;
#[allow(clippy::module_inception)]
mod theme;

pub(crate) use fonts::install_fonts;
pub use fonts::{FontAuth, FontIssue, FontReport};
pub use theme::{FontFamily, GridStyle, Theme, FONTS_KEY, GRID_STYLE_KEY};
