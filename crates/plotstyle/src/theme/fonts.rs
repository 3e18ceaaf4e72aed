//! Fetching and registering the font files declared by themes.

use std::fmt;

use crate::backend::FontRegistry;
use crate::config::{Collection, Fetch, Source};

use super::theme::Theme;

/// Which token to send when fetching font files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FontAuth {
    /// Reuse the token given for the theme source.
    #[default]
    Inherit,
    /// Use a dedicated token for font files.
    Token(String),
    /// Never send a token for font files.
    Disabled,
}

impl FontAuth {
    /// Resolves the token to use given the theme source token.
    pub fn resolve<'a>(&'a self, auth_token: Option<&'a str>) -> Option<&'a str> {
        match self {
            FontAuth::Inherit => auth_token,
            FontAuth::Token(token) => Some(token.as_str()),
            FontAuth::Disabled => None,
        }
    }
}

/// A font file that could not be fetched or registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontIssue {
    pub theme: String,
    pub family: String,
    pub location: String,
    pub message: String,
}

impl fmt::Display for FontIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "font '{}' of theme '{}' from {}: {}",
            self.family, self.theme, self.location, self.message
        )
    }
}

/// Outcome of installing theme fonts. Failures here never fail a theme load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontReport {
    /// `(family, location)` pairs that were registered.
    pub registered: Vec<(String, String)>,
    pub issues: Vec<FontIssue>,
}

impl FontReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

pub(crate) fn install_fonts(
    themes: &Collection<Theme>,
    fetcher: &dyn Fetch,
    token: Option<&str>,
    registry: &mut dyn FontRegistry,
) -> FontReport {
    let mut report = FontReport::default();

    for (theme_name, theme) in themes.iter() {
        for family in theme.fonts() {
            for location in &family.files {
                let outcome = fetcher
                    .fetch(&Source::parse(location), token)
                    .map_err(|e| e.to_string())
                    .and_then(|data| registry.register_font(&family.name, location, data));

                match outcome {
                    Ok(()) => {
                        log::debug!("registered font '{}' from {}", family.name, location);
                        report
                            .registered
                            .push((family.name.clone(), location.clone()));
                    }
                    Err(message) => {
                        let issue = FontIssue {
                            theme: theme_name.to_string(),
                            family: family.name.clone(),
                            location: location.clone(),
                            message,
                        };
                        log::warn!("could not install {}", issue);
                        report.issues.push(issue);
                    }
                }
            }
        }
    }

    report
}
