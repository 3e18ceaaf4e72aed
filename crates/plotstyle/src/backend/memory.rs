//! In-memory backend that records every styling call.

use std::collections::{BTreeMap, HashMap};

use super::{Axis, FontRegistry, GridWhich, PlotBackend, StyleTarget};
use crate::error::StyleError;
use crate::palette::SwatchChart;
use crate::style::{cycle_index, ColorRamp, Rgba, StyleParams};

/// A font file accepted by [`MemoryBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredFont {
    pub family: String,
    pub location: String,
    pub size: usize,
}

/// Headless [`PlotBackend`] keeping its state in memory.
///
/// # Example
///
/// ```rust
/// use plotstyle::backend::{MemoryBackend, PlotBackend};
/// use plotstyle::StyleParams;
///
/// let mut backend = MemoryBackend::with_defaults(StyleParams::new().with("figure.dpi", 72));
/// backend.update_params(&StyleParams::new().with("figure.dpi", 150));
/// assert_eq!(backend.param("figure.dpi").and_then(|v| v.as_i64()), Some(150));
///
/// backend.reset_params();
/// assert_eq!(backend.param("figure.dpi").and_then(|v| v.as_i64()), Some(72));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    defaults: StyleParams,
    params: StyleParams,
    color_cycle: Vec<String>,
    colormaps: BTreeMap<String, ColorRamp>,
    fonts: Vec<RegisteredFont>,
    charts: Vec<SwatchChart>,
    resets: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend whose reset state is `defaults`.
    pub fn with_defaults(defaults: StyleParams) -> Self {
        Self {
            params: defaults.clone(),
            defaults,
            ..Self::default()
        }
    }

    pub fn params(&self) -> &StyleParams {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.params.get(key)
    }

    pub fn color_cycle(&self) -> &[String] {
        &self.color_cycle
    }

    pub fn colormap(&self, name: &str) -> Option<&ColorRamp> {
        self.colormaps.get(name)
    }

    pub fn colormap_names(&self) -> Vec<&str> {
        self.colormaps.keys().map(String::as_str).collect()
    }

    pub fn fonts(&self) -> &[RegisteredFont] {
        &self.fonts
    }

    pub fn charts(&self) -> &[SwatchChart] {
        &self.charts
    }

    /// Number of times [`reset_params`](PlotBackend::reset_params) ran.
    pub fn reset_count(&self) -> usize {
        self.resets
    }
}

impl FontRegistry for MemoryBackend {
    fn register_font(&mut self, family: &str, location: &str, data: Vec<u8>) -> Result<(), String> {
        if data.is_empty() {
            return Err(format!("font file {} is empty", location));
        }
        self.fonts.push(RegisteredFont {
            family: family.to_string(),
            location: location.to_string(),
            size: data.len(),
        });
        Ok(())
    }
}

impl PlotBackend for MemoryBackend {
    fn reset_params(&mut self) {
        self.params = self.defaults.clone();
        self.resets += 1;
    }

    fn update_params(&mut self, params: &StyleParams) {
        for (key, value) in params.iter() {
            self.params.set(key, value.clone());
        }
    }

    fn set_color_cycle(&mut self, colors: &[String]) {
        self.color_cycle = colors.to_vec();
    }

    fn register_colormap(&mut self, ramp: ColorRamp) {
        self.colormaps.insert(ramp.name().to_string(), ramp);
    }

    fn draw_swatches(&mut self, chart: &SwatchChart) -> Result<(), StyleError> {
        self.charts.push(chart.clone());
        Ok(())
    }

    /// Cycle references (`C0`, `C1`, ...) index the current color cycle once
    /// one is set.
    fn to_rgba(&self, color: &str) -> Result<Rgba, StyleError> {
        match cycle_index(color) {
            Some(index) if !self.color_cycle.is_empty() => {
                Rgba::parse(&self.color_cycle[index % self.color_cycle.len()])
            }
            _ => Rgba::parse(color),
        }
    }
}

/// A recorded plot axis.
#[derive(Debug, Clone, Default)]
pub struct MemoryAxis {
    grids: HashMap<GridWhich, StyleParams>,
    minor_ticks: bool,
}

impl MemoryAxis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self, which: GridWhich) -> Option<&StyleParams> {
        self.grids.get(&which)
    }

    pub fn minor_ticks(&self) -> bool {
        self.minor_ticks
    }
}

impl Axis for MemoryAxis {
    fn set_grid(&mut self, which: GridWhich, params: &StyleParams) {
        self.grids.insert(which, params.clone());
    }

    fn minor_ticks_on(&mut self) {
        self.minor_ticks = true;
    }
}

impl StyleTarget for MemoryAxis {
    fn as_axis_mut(&mut self) -> Option<&mut dyn Axis> {
        Some(self)
    }

    fn describe(&self) -> String {
        "axis".to_string()
    }
}

/// A recorded figure. Figures hold axes but cannot take a grid style themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryFigure {
    pub axes: Vec<MemoryAxis>,
}

impl StyleTarget for MemoryFigure {
    fn as_axis_mut(&mut self) -> Option<&mut dyn Axis> {
        None
    }

    fn describe(&self) -> String {
        format!("figure with {} axes", self.axes.len())
    }
}
