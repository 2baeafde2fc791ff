//! Display preferences stored next to the tasks
//!
//! Only dark mode exists. It is stored as the literal strings `"true"` and
//! `"false"`; anything else reads as light mode.

use tracing::warn;

use crate::storage::PersistenceMedium;

/// Medium key holding the dark mode flag
pub const DARK_MODE_KEY: &str = "darkMode";

/// Read the dark mode flag, defaulting to `false`
pub fn dark_mode<M: PersistenceMedium + ?Sized>(medium: &M) -> bool {
    match medium.get(DARK_MODE_KEY) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            warn!("Failed to read dark mode preference: {}", e);
            false
        }
    }
}

/// Store the dark mode flag; failures are logged and ignored
pub fn set_dark_mode<M: PersistenceMedium + ?Sized>(medium: &mut M, enabled: bool) {
    let value = if enabled { "true" } else { "false" };
    if let Err(e) = medium.set(DARK_MODE_KEY, value) {
        warn!("Failed to save dark mode preference: {}", e);
    }
}

/// Flip the dark mode flag and return the new value
pub fn toggle_dark_mode<M: PersistenceMedium + ?Sized>(medium: &mut M) -> bool {
    let enabled = !dark_mode(&*medium);
    set_dark_mode(medium, enabled);
    enabled
}
