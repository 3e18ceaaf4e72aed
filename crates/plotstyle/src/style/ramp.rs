//! Continuous color ramps derived from discrete palettes.
//!
//! A ramp places its colors at evenly spaced stops on `[0, 1]` and linearly
//! interpolates between neighbours, so a two-color palette becomes a plain
//! gradient and a single-color palette a constant ramp.

use super::color::Rgba;
use crate::error::StyleError;

/// Prefix used to name ramps derived from palettes.
pub const RAMP_PREFIX: &str = "project_";

/// Suffix appended to the name of a reversed ramp.
pub const REVERSED_SUFFIX: &str = "_r";

/// A named piecewise-linear color gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRamp {
    name: String,
    stops: Vec<Rgba>,
}

impl ColorRamp {
    /// Builds a ramp through already resolved colors.
    ///
    /// # Errors
    ///
    /// [`StyleError::InvalidArgument`] if `stops` is empty.
    pub fn new(name: impl Into<String>, stops: Vec<Rgba>) -> Result<Self, StyleError> {
        let name = name.into();
        if stops.is_empty() {
            return Err(StyleError::InvalidArgument(format!(
                "ramp '{}' needs at least one color",
                name
            )));
        }
        Ok(Self { name, stops })
    }

    /// Builds a ramp through `colors` in order, parsed with [`Rgba::parse`].
    ///
    /// # Errors
    ///
    /// [`StyleError::InvalidArgument`] for an empty color list and
    /// [`StyleError::InvalidColor`] if any color does not parse.
    pub fn from_colors<S: AsRef<str>>(
        name: impl Into<String>,
        colors: &[S],
    ) -> Result<Self, StyleError> {
        let stops = colors
            .iter()
            .map(|c| Rgba::parse(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(name, stops)
    }

    /// Name under which a palette's ramp is registered.
    pub fn name_for_palette(palette: &str) -> String {
        format!("{}{}", RAMP_PREFIX, palette)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stops(&self) -> &[Rgba] {
        &self.stops
    }

    /// Samples the ramp at `t`, clamped to `[0, 1]`.
    pub fn at(&self, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let segments = self.stops.len() - 1;
        if segments == 0 {
            return self.stops[0];
        }
        let scaled = t * segments as f64;
        let index = (scaled.floor() as usize).min(segments - 1);
        self.stops[index].lerp(&self.stops[index + 1], scaled - index as f64)
    }

    /// Samples `n` evenly spaced colors, both endpoints included.
    pub fn sample(&self, n: usize) -> Vec<Rgba> {
        match n {
            0 => Vec::new(),
            1 => vec![self.at(0.0)],
            _ => (0..n)
                .map(|i| self.at(i as f64 / (n - 1) as f64))
                .collect(),
        }
    }

    /// The same gradient running from the last color to the first,
    /// named with [`REVERSED_SUFFIX`].
    pub fn reversed(&self) -> Self {
        let mut stops = self.stops.clone();
        stops.reverse();
        Self {
            name: format!("{}{}", self.name, REVERSED_SUFFIX),
            stops,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgba, b: Rgba) -> bool {
        (a.r - b.r).abs() < 1e-9
            && (a.g - b.g).abs() < 1e-9
            && (a.b - b.b).abs() < 1e-9
            && (a.a - b.a).abs() < 1e-9
    }

    #[test]
    fn test_two_color_gradient() {
        let ramp = ColorRamp::from_colors("bw", &["#000000", "#ffffff"]).unwrap();
        assert!(close(ramp.at(0.0), Rgba::rgb(0.0, 0.0, 0.0)));
        assert!(close(ramp.at(0.5), Rgba::rgb(0.5, 0.5, 0.5)));
        assert!(close(ramp.at(1.0), Rgba::rgb(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_three_stops_hit_middle_color() {
        let ramp = ColorRamp::from_colors("rgb", &["red", "lime", "blue"]).unwrap();
        assert!(close(ramp.at(0.5), Rgba::rgb(0.0, 1.0, 0.0)));
        assert!(close(ramp.at(0.25), Rgba::rgb(0.5, 0.5, 0.0)));
    }

    #[test]
    fn test_single_color_is_constant() {
        let ramp = ColorRamp::from_colors("one", &["#336699"]).unwrap();
        assert_eq!(ramp.at(0.0), ramp.at(1.0));
        assert_eq!(ramp.sample(3).len(), 3);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let ramp = ColorRamp::from_colors("bw", &["black", "white"]).unwrap();
        assert_eq!(ramp.at(-1.0), ramp.at(0.0));
        assert_eq!(ramp.at(7.0), ramp.at(1.0));
    }

    #[test]
    fn test_reversed_name_and_direction() {
        let ramp = ColorRamp::from_colors(ColorRamp::name_for_palette("warm"), &["red", "yellow"])
            .unwrap();
        let rev = ramp.reversed();
        assert_eq!(ramp.name(), "project_warm");
        assert_eq!(rev.name(), "project_warm_r");
        assert!(close(rev.at(0.0), ramp.at(1.0)));
        assert!(close(rev.at(1.0), ramp.at(0.0)));
    }

    #[test]
    fn test_empty_and_invalid_colors() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            ColorRamp::from_colors("e", &empty),
            Err(StyleError::InvalidArgument(_))
        ));
        assert!(matches!(
            ColorRamp::from_colors("bad", &["#000", "nope"]),
            Err(StyleError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_new_from_resolved_stops() {
        assert!(matches!(
            ColorRamp::new("e", Vec::new()),
            Err(StyleError::InvalidArgument(_))
        ));
        let ramp = ColorRamp::new("g", vec![Rgba::rgb(0.2, 0.2, 0.2)]).unwrap();
        assert_eq!(ramp.at(0.7), Rgba::rgb(0.2, 0.2, 0.2));
    }
}
