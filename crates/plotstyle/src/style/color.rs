//! Color value parsing.
//!
//! Palette and theme files carry colors as strings. They are kept verbatim in
//! the configuration and only parsed here when a numeric value is needed
//! (swatch text contrast, continuous ramps).
//!
//! Supported formats:
//!
//! - RGB hex: `"#ff6b35"` or `"#fff"` (3 or 6 digits)
//! - RGBA hex: `"#ff6b3580"` or `"#fff8"` (4 or 8 digits)
//! - Gray levels: `"0.75"` (a float string between 0 and 1)
//! - Single-letter base colors: `b`, `g`, `r`, `c`, `m`, `y`, `k`, `w`
//! - Tableau colors: `tab:blue`, `tab:orange`, ...
//! - Cycle references `C0`, `C1`, ...: positions in [`DEFAULT_CYCLE`]
//! - CSS4 color names, case-insensitive: `cornflowerblue`, `gray`/`grey`, ...
//! - `none`: fully transparent
//!
//! Backends that know their own color cycle resolve cycle references against
//! it through [`PlotBackend::to_rgba`](crate::backend::PlotBackend::to_rgba).
//!
//! # Example
//!
//! ```rust
//! use plotstyle::style::Rgba;
//!
//! let orange = Rgba::parse("#ff6b35").unwrap();
//! assert_eq!(orange.to_rgb8(), (255, 107, 53));
//!
//! let half = Rgba::parse("0.5").unwrap();
//! assert!((half.luminance() - 0.5).abs() < 1e-9);
//! ```

use crate::error::StyleError;

/// Colors that `C0` to `C9` stand for when no other cycle is known.
pub const DEFAULT_CYCLE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// Index of a cycle reference such as `C3`, or `None` for other strings.
pub fn cycle_index(color: &str) -> Option<usize> {
    let digits = color.trim().strip_prefix('C')?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// A color with components on a 0–1 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Parses a color string.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidColor`] for anything that is not one of the
    /// formats listed in the module documentation.
    pub fn parse(s: &str) -> Result<Self, StyleError> {
        let trimmed = s.trim();

        if let Some(hex) = trimmed.strip_prefix('#') {
            return Self::parse_hex(hex).map_err(|message| invalid(s, message));
        }

        if let Ok(level) = trimmed.parse::<f64>() {
            if !(0.0..=1.0).contains(&level) {
                return Err(invalid(s, "gray level must be between 0 and 1"));
            }
            return Ok(Self::rgb(level, level, level));
        }

        if let Some(index) = cycle_index(trimmed) {
            return Self::parse(DEFAULT_CYCLE[index % DEFAULT_CYCLE.len()]);
        }

        let name = trimmed.to_lowercase();
        if name == "none" {
            return Ok(Self {
                a: 0.0,
                ..Self::rgb(0.0, 0.0, 0.0)
            });
        }

        named_color(&name)
            .map(|(r, g, b)| Self::from_rgb8(r, g, b))
            .ok_or_else(|| invalid(s, "unknown color name"))
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("'#{}' contains non-hex digits", hex));
        }
        let digits: Vec<u8> = match hex.len() {
            // #rgb / #rgba: each digit doubles (f -> ff)
            3 | 4 => hex
                .chars()
                .map(|c| c.to_digit(16).unwrap_or(0) as u8 * 17)
                .collect(),
            6 | 8 => (0..hex.len())
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0))
                .collect(),
            n => return Err(format!("hex color must have 3, 4, 6 or 8 digits, got {}", n)),
        };

        let mut color = Self::from_rgb8(digits[0], digits[1], digits[2]);
        if let Some(alpha) = digits.get(3) {
            color.a = f64::from(*alpha) / 255.0;
        }
        Ok(color)
    }

    /// Perceived brightness, `0.299 R + 0.587 G + 0.114 B`.
    pub fn luminance(&self) -> f64 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Linear interpolation towards `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: &Rgba, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (channel(self.r), channel(self.g), channel(self.b))
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.a < 1.0 {
            let a = (self.a.clamp(0.0, 1.0) * 255.0).round() as u8;
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
        } else {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        }
    }
}

fn invalid(value: &str, message: impl Into<String>) -> StyleError {
    StyleError::InvalidColor {
        value: value.to_string(),
        message: message.into(),
    }
}

fn named_color(name: &str) -> Option<(u8, u8, u8)> {
    let rgb = match name {
        // Single-letter base colors
        "b" => (0, 0, 255),
        "g" => (0, 128, 0),
        "r" => (255, 0, 0),
        "c" => (0, 191, 191),
        "m" => (191, 0, 191),
        "y" => (191, 191, 0),
        "k" => (0, 0, 0),
        "w" => (255, 255, 255),

        // Tableau palette
        "tab:blue" => (0x1f, 0x77, 0xb4),
        "tab:orange" => (0xff, 0x7f, 0x0e),
        "tab:green" => (0x2c, 0xa0, 0x2c),
        "tab:red" => (0xd6, 0x27, 0x28),
        "tab:purple" => (0x94, 0x67, 0xbd),
        "tab:brown" => (0x8c, 0x56, 0x4b),
        "tab:pink" => (0xe3, 0x77, 0xc2),
        "tab:gray" | "tab:grey" => (0x7f, 0x7f, 0x7f),
        "tab:olive" => (0xbc, 0xbd, 0x22),
        "tab:cyan" => (0x17, 0xbe, 0xcf),

        _ => {
            return ::palette::named::from_str(name).map(|c| (c.red, c.green, c.blue));
        }
    };
    Some(rgb)
}
