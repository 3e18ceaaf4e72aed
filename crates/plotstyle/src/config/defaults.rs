//! Palettes and themes bundled with the crate.

use std::path::Path;

use super::StyleConfig;

/// File name of the default palettes inside a resource directory.
pub const DEFAULT_PALETTES_FILE: &str = "palettes.yaml";

/// File name of the default themes inside a resource directory.
pub const DEFAULT_THEMES_FILE: &str = "themes.yaml";

const BUNDLED_PALETTES: &str = include_str!("../../resources/palettes.yaml");
const BUNDLED_THEMES: &str = include_str!("../../resources/themes.yaml");

pub(super) fn load_bundled(config: &mut StyleConfig) {
    if let Err(e) = config.load_palettes_str(BUNDLED_PALETTES) {
        log::warn!("bundled palettes could not be loaded: {}", e);
    }
    if let Err(e) = config.load_themes_str(BUNDLED_THEMES) {
        log::warn!("bundled themes could not be loaded: {}", e);
    }
}

pub(super) fn load_dir(config: &mut StyleConfig, dir: &Path) {
    let palettes = dir.join(DEFAULT_PALETTES_FILE);
    match std::fs::read_to_string(&palettes) {
        Ok(text) => {
            if let Err(e) = config.load_palettes_str(&text) {
                log::warn!("default palettes {} not loaded: {}", palettes.display(), e);
            }
        }
        Err(e) => log::warn!("default palettes {} not found: {}", palettes.display(), e),
    }

    let themes = dir.join(DEFAULT_THEMES_FILE);
    match std::fs::read_to_string(&themes) {
        Ok(text) => {
            if let Err(e) = config.load_themes_str(&text) {
                log::warn!("default themes {} not loaded: {}", themes.display(), e);
            }
        }
        Err(e) => log::warn!("default themes {} not found: {}", themes.display(), e),
    }
}
