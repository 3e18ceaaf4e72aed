//! The configuration store holding loaded palettes and themes.
//!
//! [`StyleConfig`] owns two collections, palettes and themes, each loaded from
//! a YAML source. Loading a source **replaces** the whole collection: the new
//! collection is fully parsed before it is swapped in, so a failed load leaves
//! the previous one untouched and readers never observe a half-loaded state.
//!
//! # Sources
//!
//! A source is a local path or an `http(s)://` URL. Remote sources under a
//! recognized source-hosting domain receive the auth token from
//! [`LoadOptions`] as a bearer header (see [`source`]).
//!
//! # Example
//!
//! ```rust
//! use plotstyle::StyleConfig;
//!
//! let mut config = StyleConfig::new();
//! config.load_palettes_str(r##"
//! default: ["#1b9e77", "#d95f02", "#7570b3"]
//! cells:
//!   T cell: "#e41a1c"
//!   B cell: "#377eb8"
//! "##).unwrap();
//!
//! assert_eq!(config.available_palette_names(), vec!["default", "cells"]);
//! assert!(config.available_theme_names().is_empty());
//! ```
//!
//! # Sharing
//!
//! `StyleConfig` is a plain value: mutation needs `&mut`, so the borrow checker
//! serializes access within a thread. For process-wide use see
//! [`crate::global`].

mod collection;
mod defaults;
pub mod source;

use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::backend::FontRegistry;
use crate::error::{ConfigKind, StyleError};
use crate::palette::Palette;
use crate::theme::{install_fonts, FontAuth, FontReport, Theme};

pub use collection::Collection;
pub use defaults::{DEFAULT_PALETTES_FILE, DEFAULT_THEMES_FILE};
pub use source::{auth_header, Fetch, FetchConfig, HttpFetcher, Source};

/// Options for loading a palette or theme source.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Token sent to recognized source-hosting domains.
    pub auth_token: Option<String>,
    /// Token policy for font files declared by themes.
    pub font_auth: FontAuth,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_font_auth(mut self, font_auth: FontAuth) -> Self {
        self.font_auth = font_auth;
        self
    }
}

/// Loaded palettes and themes.
pub struct StyleConfig {
    palettes: Collection<Palette>,
    themes: Collection<Theme>,
    fetcher: Box<dyn Fetch>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StyleConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleConfig")
            .field("palettes", &self.palettes.names())
            .field("themes", &self.themes.names())
            .finish_non_exhaustive()
    }
}

impl StyleConfig {
    /// Creates an empty store using the default [`HttpFetcher`].
    pub fn new() -> Self {
        Self::with_fetcher(Box::new(HttpFetcher::default()))
    }

    /// Creates an empty store reading sources through `fetcher`.
    pub fn with_fetcher(fetcher: Box<dyn Fetch>) -> Self {
        Self {
            palettes: Collection::new(),
            themes: Collection::new(),
            fetcher,
        }
    }

    /// Creates a store populated from the palettes and themes bundled with the crate.
    ///
    /// A bundled file that fails to parse leaves its collection empty and logs
    /// a warning; this never fails.
    pub fn with_defaults() -> Self {
        let mut config = Self::new();
        defaults::load_bundled(&mut config);
        config
    }

    /// Creates a store populated from [`DEFAULT_PALETTES_FILE`] and
    /// [`DEFAULT_THEMES_FILE`] inside `dir`.
    ///
    /// Missing or unparseable files leave their collection empty and log a warning.
    pub fn with_defaults_from(dir: impl AsRef<Path>) -> Self {
        let mut config = Self::new();
        defaults::load_dir(&mut config, dir.as_ref());
        config
    }

    /// Loads palettes from a local path or URL, replacing all current palettes.
    ///
    /// # Errors
    ///
    /// - [`StyleError::ConfigLoad`] if the source cannot be read or is not a
    ///   YAML mapping
    /// - [`StyleError::Type`] if a palette is neither a list nor a mapping of
    ///   color strings
    pub fn load_palettes(&mut self, source: &str, options: &LoadOptions) -> Result<(), StyleError> {
        let text = self
            .fetcher
            .fetch_text(&Source::parse(source), options.auth_token.as_deref())
            .map_err(|e| StyleError::load(ConfigKind::Palette, source, e))?;
        self.replace_palettes(source, &text)?;
        log::info!("loaded {} palettes from {}", self.palettes.len(), source);
        Ok(())
    }

    /// Loads palettes from YAML text, replacing all current palettes.
    pub fn load_palettes_str(&mut self, yaml: &str) -> Result<(), StyleError> {
        self.replace_palettes("<inline>", yaml)
    }

    /// Loads themes from a local path or URL, replacing all current themes,
    /// then fetches and registers every font the new themes declare.
    ///
    /// Font problems do not fail the load; they are returned in the
    /// [`FontReport`] and logged.
    ///
    /// # Errors
    ///
    /// [`StyleError::ConfigLoad`] if the source cannot be read, is not a YAML
    /// mapping, or a theme is malformed.
    pub fn load_themes(
        &mut self,
        source: &str,
        options: &LoadOptions,
        fonts: &mut dyn FontRegistry,
    ) -> Result<FontReport, StyleError> {
        let text = self
            .fetcher
            .fetch_text(&Source::parse(source), options.auth_token.as_deref())
            .map_err(|e| StyleError::load(ConfigKind::Theme, source, e))?;
        self.replace_themes(source, &text)?;
        log::info!("loaded {} themes from {}", self.themes.len(), source);

        let token = options.font_auth.resolve(options.auth_token.as_deref());
        Ok(install_fonts(&self.themes, self.fetcher.as_ref(), token, fonts))
    }

    /// Loads themes from YAML text, replacing all current themes.
    ///
    /// Declared fonts are not fetched.
    pub fn load_themes_str(&mut self, yaml: &str) -> Result<(), StyleError> {
        self.replace_themes("<inline>", yaml)
    }

    fn replace_palettes(&mut self, source: &str, text: &str) -> Result<(), StyleError> {
        let document = parse_document(ConfigKind::Palette, source, text)?;
        let mut palettes = Collection::new();
        for (key, value) in &document {
            let name = entry_name(ConfigKind::Palette, source, key)?;
            palettes.insert(name, Palette::from_yaml(name, value)?);
        }
        self.palettes = palettes;
        Ok(())
    }

    fn replace_themes(&mut self, source: &str, text: &str) -> Result<(), StyleError> {
        let document = parse_document(ConfigKind::Theme, source, text)?;
        let mut themes = Collection::new();
        for (key, value) in &document {
            let name = entry_name(ConfigKind::Theme, source, key)?;
            let theme = Theme::from_yaml(name, value)
                .map_err(|e| StyleError::load(ConfigKind::Theme, source, e))?;
            themes.insert(name, theme);
        }
        self.themes = themes;
        Ok(())
    }

    /// All loaded palettes.
    ///
    /// # Errors
    ///
    /// [`StyleError::EmptyConfig`] if no palettes are loaded.
    pub fn palettes(&self) -> Result<&Collection<Palette>, StyleError> {
        if self.palettes.is_empty() {
            return Err(StyleError::EmptyConfig {
                kind: ConfigKind::Palette,
            });
        }
        Ok(&self.palettes)
    }

    /// All loaded themes.
    ///
    /// # Errors
    ///
    /// [`StyleError::EmptyConfig`] if no themes are loaded.
    pub fn themes(&self) -> Result<&Collection<Theme>, StyleError> {
        if self.themes.is_empty() {
            return Err(StyleError::EmptyConfig {
                kind: ConfigKind::Theme,
            });
        }
        Ok(&self.themes)
    }

    /// Looks up one palette.
    pub fn palette(&self, name: &str) -> Result<&Palette, StyleError> {
        let palettes = self.palettes()?;
        palettes
            .get(name)
            .ok_or_else(|| StyleError::not_found(ConfigKind::Palette, name, palettes.names()))
    }

    pub(crate) fn palette_mut(&mut self, name: &str) -> Result<&mut Palette, StyleError> {
        if self.palettes.is_empty() {
            return Err(StyleError::EmptyConfig {
                kind: ConfigKind::Palette,
            });
        }
        let available = self.palettes.names();
        self.palettes
            .get_mut(name)
            .ok_or_else(|| StyleError::not_found(ConfigKind::Palette, name, available))
    }

    /// Looks up one theme.
    pub fn theme(&self, name: &str) -> Result<&Theme, StyleError> {
        let themes = self.themes()?;
        themes
            .get(name)
            .ok_or_else(|| StyleError::not_found(ConfigKind::Theme, name, themes.names()))
    }

    /// Returns a theme's settings exactly as authored.
    pub fn inspect_theme(&self, name: &str) -> Result<&Mapping, StyleError> {
        self.theme(name).map(Theme::settings)
    }

    /// Palette names in the order they were authored. Empty if nothing is loaded.
    pub fn available_palette_names(&self) -> Vec<String> {
        self.palettes.names()
    }

    /// Theme names in the order they were authored. Empty if nothing is loaded.
    pub fn available_theme_names(&self) -> Vec<String> {
        self.themes.names()
    }

    pub fn has_palette(&self, name: &str) -> bool {
        self.palettes.contains(name)
    }

    pub fn has_theme(&self, name: &str) -> bool {
        self.themes.contains(name)
    }
}

fn parse_document(kind: ConfigKind, source: &str, text: &str) -> Result<Mapping, StyleError> {
    let value: Value =
        serde_yaml::from_str(text).map_err(|e| StyleError::load(kind, source, e))?;
    match value {
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(StyleError::load(
            kind,
            source,
            format!("expected a mapping of {} names, got {:?}", kind, other),
        )),
    }
}

fn entry_name<'a>(kind: ConfigKind, source: &str, key: &'a Value) -> Result<&'a str, StyleError> {
    key.as_str().ok_or_else(|| {
        StyleError::load(kind, source, format!("{} name must be a string, got {:?}", kind, key))
    })
}
