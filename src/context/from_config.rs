//! Context configuration from tierlog config files.

use super::LogContext;
use crate::config::Config;
use crate::internal;
use std::sync::Arc;

impl LogContext {
    /// Builds a fresh context (console sink, default styler) with `config` applied.
    #[must_use]
    pub fn from_config(config: &Config) -> Arc<Self> {
        let context = Self::new();
        context.apply_config(config);
        context
    }

    /// Applies `config` on top of the current state. Tables are merged rather than
    /// replaced, matching [`LogContext::set_category_levels`].
    pub fn apply_config(&self, config: &Config) {
        let threshold = config.parse_threshold();
        internal::debug("CONTEXT", &format!("Threshold: {threshold}"));
        self.set_log_threshold(threshold);

        let categories = config.category_levels();
        if !categories.is_empty() {
            internal::debug(
                "CONTEXT",
                &format!("Loaded {} category levels", categories.len()),
            );
        }
        self.set_category_levels(categories);

        for (name, level) in config.override_levels() {
            self.set_override_level_for(&name, level);
        }

        self.set_prefix_global(config.general.prefix.clone());
        self.set_styler_enabled(config.general.styled);

        for name in &config.general.debug_categories {
            if !self.is_debug_category(name) {
                self.add_debug_category(name.clone());
            }
        }
    }
}
