//! Process-wide configuration store.
//!
//! Most programs load their palettes and themes once and use them from
//! everywhere. [`shared`] gives access to a single [`StyleConfig`] that starts
//! out with the bundled defaults; [`replace`] swaps it out wholesale.
//!
//! Callers that prefer explicit state can ignore this module and pass their
//! own [`StyleConfig`] around.
//!
//! ```rust
//! use plotstyle::global;
//!
//! let names = global::shared().available_palette_names();
//! assert!(names.iter().any(|n| n == "default"));
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::config::StyleConfig;

static SHARED: Lazy<Mutex<StyleConfig>> = Lazy::new(|| Mutex::new(StyleConfig::with_defaults()));

/// Locks the shared configuration.
///
/// The guard must be dropped before calling `shared` again on the same thread.
pub fn shared() -> MutexGuard<'static, StyleConfig> {
    SHARED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the shared configuration, returning the previous one.
pub fn replace(config: StyleConfig) -> StyleConfig {
    std::mem::replace(&mut *shared(), config)
}

/// Restores the bundled defaults.
pub fn reset() -> StyleConfig {
    replace(StyleConfig::with_defaults())
}
