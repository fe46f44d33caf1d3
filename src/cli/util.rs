//! Utility functions for the CLI.

use super::Cli;
use crate::config::Config;
use crate::context::LogContext;
use crate::internal;
use crate::level::Level;
use crate::value::Value;
use std::sync::Arc;

/// Config first, then flags on top.
#[must_use]
pub fn build_context(config: &Config, cli: &Cli) -> Arc<LogContext> {
    let context = LogContext::from_config(config);

    if let Some(threshold) = &cli.threshold {
        context.set_log_threshold(Level::parse_or_debug(threshold));
    }
    context.set_category_levels(cli.categories.iter().cloned());
    if let Some(prefix) = &cli.global_prefix {
        context.set_prefix_global(prefix.as_str());
    }
    if cli.styled {
        context.set_styler_enabled(true);
    }

    context
}

/// Turns message words into log args. With `json`, the first word is parsed as a
/// structured value; unparsable JSON is kept as text with a warning.
#[must_use]
pub fn message_args(words: &[String], json: bool) -> Vec<Value> {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if json && i == 0 {
                serde_json::from_str::<serde_json::Value>(word).map_or_else(
                    |e| {
                        internal::warn("CLI", &format!("Invalid JSON message: {e}"));
                        Value::from(word)
                    },
                    Value::from,
                )
            } else {
                Value::from(word)
            }
        })
        .collect()
}
