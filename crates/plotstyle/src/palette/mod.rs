//! Palettes and label-to-color mapping.
//!
//! A palette file maps palette names to either a list of colors or a
//! mapping from category to color:
//!
//! ```yaml
//! default: ["#1f77b4", "#ff7f0e", "#2ca02c"]
//! condition:
//!   control: "#7f7f7f"
//!   treated: "#d62728"
//! ```
//!
//! ## Stable label colors
//!
//! [`get_mapped_palette`] turns a set of data labels into a [`ColorMap`]:
//!
//! - List palettes: labels are sorted and de-duplicated, then cycle through
//!   the colors. The same set of labels always yields the same mapping.
//! - Mapping palettes: known categories keep their color; unknown labels get
//!   the unseen color and are **added to the stored palette**, so the
//!   assignment sticks for every later call against the same loaded palettes.
//!
//! ## Swatches
//!
//! [`display_palette`] returns a palette as authored and can draw it through a
//! [`PlotBackend`](crate::backend::PlotBackend) as a row of labeled swatches.

mod display;
mod label;
#[allow(clippy::module_inception)]
mod palette;
mod resolve;

pub use display::{display_palette, swatch_chart, Swatch, SwatchChart, TextColor, LUMINANCE_THRESHOLD};
pub use label::Label;
pub use palette::{ColorMap, Palette};
pub use resolve::{get_mapped_palette, get_palette, DEFAULT_UNSEEN_COLOR};
