//! Applying a theme to a backend.

use super::params::StyleParams;
use super::ramp::ColorRamp;
use crate::backend::{GridWhich, PlotBackend, StyleTarget};
use crate::config::StyleConfig;
use crate::error::StyleError;
use crate::theme::GridStyle;

/// Name of the palette preferred for the default color cycle.
pub const DEFAULT_PALETTE: &str = "default";

/// Options for [`set_style`].
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Reset the backend's global parameters before applying the theme.
    pub clean_reset: bool,
    /// Parameters applied on top of the theme; they win key-by-key.
    pub overrides: StyleParams,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            clean_reset: true,
            overrides: StyleParams::new(),
        }
    }
}

impl StyleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clean_reset(mut self, clean_reset: bool) -> Self {
        self.clean_reset = clean_reset;
        self
    }

    pub fn with_override(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_yaml::Value>,
    ) -> Self {
        self.overrides.set(key, value);
        self
    }
}

/// Applies a theme's grid style to individual axes.
///
/// Returned by [`set_style`]; global parameters cannot express separate major
/// and minor grid styles, so they are applied per axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridStyler {
    grid: Option<GridStyle>,
}

impl GridStyler {
    pub fn new(grid: Option<GridStyle>) -> Self {
        Self { grid }
    }

    pub fn grid_style(&self) -> Option<&GridStyle> {
        self.grid.as_ref()
    }

    /// Styles the grid of `target`.
    ///
    /// Major parameters style the major grid. When minor parameters exist,
    /// minor ticks are turned on and the minor grid is styled too. Without a
    /// grid style this does nothing.
    ///
    /// # Errors
    ///
    /// [`StyleError::Type`] if `target` is not an axis.
    pub fn apply(&self, target: &mut dyn StyleTarget) -> Result<(), StyleError> {
        let description = target.describe();
        let axis = target.as_axis_mut().ok_or_else(|| {
            StyleError::Type(format!("grid style needs an axis, got {}", description))
        })?;

        let Some(grid) = &self.grid else {
            return Ok(());
        };
        if let Some(major) = &grid.major {
            axis.set_grid(GridWhich::Major, major);
        }
        if let Some(minor) = &grid.minor {
            axis.minor_ticks_on();
            axis.set_grid(GridWhich::Minor, minor);
        }
        Ok(())
    }
}

/// Applies a theme to the backend's global style.
///
/// In order:
///
/// 1. resets the backend when `options.clean_reset` is set,
/// 2. points the sans-serif family list at the theme's fonts (first font first),
/// 3. applies the theme parameters merged with `options.overrides`,
/// 4. sets the color cycle from the `"default"` palette, or the first palette,
/// 5. registers a continuous ramp and its reverse for every palette.
///
/// Missing palettes only produce warnings. The returned [`GridStyler`] carries
/// the theme's `advanced_grid_style`.
///
/// # Errors
///
/// [`StyleError::NotFound`] (listing available themes) for an unknown theme,
/// [`StyleError::EmptyConfig`] if no themes are loaded.
///
/// # Example
///
/// ```rust
/// use plotstyle::backend::MemoryBackend;
/// use plotstyle::{set_style, StyleConfig, StyleOptions};
///
/// let mut config = StyleConfig::new();
/// config.load_themes_str("paper:\n  figure.dpi: 100\n").unwrap();
///
/// let mut backend = MemoryBackend::new();
/// let options = StyleOptions::new().with_override("figure.dpi", 300);
/// set_style(&config, "paper", &options, &mut backend).unwrap();
///
/// assert_eq!(backend.param("figure.dpi").and_then(|v| v.as_i64()), Some(300));
/// ```
pub fn set_style(
    config: &StyleConfig,
    theme_name: &str,
    options: &StyleOptions,
    backend: &mut dyn PlotBackend,
) -> Result<GridStyler, StyleError> {
    let theme = config.theme(theme_name)?;

    if options.clean_reset {
        backend.reset_params();
    }

    let mut params = theme.params().clone();
    if !theme.fonts().is_empty() {
        let families: Vec<String> = theme.fonts().iter().map(|f| f.name.clone()).collect();
        params.set("font.family", "sans-serif");
        params.set("font.sans-serif", families);
    }
    let params = params.merge(options.overrides.clone());
    backend.update_params(&params);

    match config.palettes() {
        Ok(palettes) => {
            let cycle = palettes
                .get(DEFAULT_PALETTE)
                .or_else(|| palettes.first().map(|(_, p)| p));
            if let Some(palette) = cycle {
                backend.set_color_cycle(&palette.colors());
            }
        }
        Err(_) => log::warn!("no palettes loaded; color cycle not set"),
    }

    register_continuous_ramps(config, backend);

    log::info!("applied style '{}'", theme_name);
    Ok(GridStyler::new(theme.grid_style().cloned()))
}

/// Registers a continuous ramp named `project_<palette>` and its reverse
/// `project_<palette>_r` for every loaded palette.
///
/// Colors are resolved with [`PlotBackend::to_rgba`]. Existing registrations
/// are replaced. Palettes that are empty or contain colors the backend cannot
/// resolve are skipped with a warning. Returns the number of
/// palettes registered.
pub fn register_continuous_ramps(config: &StyleConfig, backend: &mut dyn PlotBackend) -> usize {
    let palettes = match config.palettes() {
        Ok(palettes) => palettes,
        Err(_) => {
            log::warn!("no palettes loaded; no colormaps registered");
            return 0;
        }
    };

    let mut registered = 0;
    for (name, palette) in palettes.iter() {
        let ramp = palette
            .colors()
            .iter()
            .map(|color| backend.to_rgba(color))
            .collect::<Result<Vec<_>, _>>()
            .and_then(|stops| ColorRamp::new(ColorRamp::name_for_palette(name), stops));
        match ramp {
            Ok(ramp) => {
                backend.register_colormap(ramp.reversed());
                backend.register_colormap(ramp);
                registered += 1;
            }
            Err(e) => log::warn!("skipping colormap for palette '{}': {}", name, e),
        }
    }
    registered
}
