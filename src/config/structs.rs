//! Configuration struct definitions.

use serde::Deserialize;

/// Settings that apply to every logger of a context.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Global threshold for categories without their own level.
    pub threshold: String,
    /// Prepended to every logger name.
    pub prefix: String,
    /// Route output through the styler.
    pub styled: bool,
    /// Categories flagged for debugging (informational).
    pub debug_categories: Vec<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            threshold: "debug".to_string(),
            prefix: String::new(),
            styled: false,
            debug_categories: Vec::new(),
        }
    }
}
