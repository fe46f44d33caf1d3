//! The process-wide default context and the free-function API that forwards to it.
//!
//! Hosts that want isolation build their own [`LogContext`]; these functions are
//! for the common case of one logging setup per process.

use crate::config::{parse_category_list, parse_name_list};
use crate::context::LogContext;
use crate::fmt::Styler;
use crate::internal;
use crate::level::Level;
use crate::logger::{Logger, LoggerFactory};
use crate::sink::Sink;
use std::sync::{Arc, OnceLock};

/// Default threshold, read once when the global context is first used.
pub const LEVEL_ENV: &str = "TIERLOG_LEVEL";
/// Comma-delimited `name=level` category levels, read once at startup.
pub const CATEGORIES_ENV: &str = "TIERLOG_CATEGORIES";
/// Comma-delimited debug-category lists, read once at startup.
pub const DEBUG_ENVS: [&str; 2] = ["DEBUG", "LOG_DEBUG"];

static GLOBAL: OnceLock<Arc<LogContext>> = OnceLock::new();

/// The process-wide context, built from the environment on first use.
pub fn context() -> &'static Arc<LogContext> {
    GLOBAL.get_or_init(build_from_env)
}

fn build_from_env() -> Arc<LogContext> {
    let mut builder = LogContext::builder();

    if let Ok(level) = std::env::var(LEVEL_ENV) {
        builder = builder.threshold(Level::parse_or_debug(&level));
    }

    if let Ok(list) = std::env::var(CATEGORIES_ENV) {
        builder = builder.categories(parse_category_list(&list));
    }

    for var in DEBUG_ENVS {
        if let Ok(list) = std::env::var(var) {
            builder = builder.debug_categories(parse_name_list(&list));
        }
    }

    internal::debug("GLOBAL", "Default context ready");
    builder.build()
}

/// Creates a logger on the global context through its active factory.
#[must_use]
pub fn create(name: &str) -> Logger {
    context().create(name)
}

/// Alias of [`create`].
#[must_use]
pub fn get_logger(name: &str) -> Logger {
    create(name)
}

pub fn set_category_levels<I, K>(levels: I)
where
    I: IntoIterator<Item = (K, Level)>,
    K: Into<String>,
{
    context().set_category_levels(levels);
}

#[must_use]
pub fn category_level(name: &str) -> Option<Level> {
    context().category_level(name)
}

pub fn set_log_threshold(level: Level) {
    context().set_log_threshold(level);
}

/// Sets the override in the logger's own context, which need not be the global one.
pub fn set_override_level(logger: &Logger, level: Level) {
    logger.set_override_level(level);
}

pub fn set_logger_output(sink: Sink) {
    context().set_logger_output(sink);
}

pub fn set_logger_factory(factory: impl LoggerFactory + 'static) {
    context().set_logger_factory(factory);
}

pub fn set_styler(styler: Styler) {
    context().set_styler(styler);
}

#[must_use]
pub fn get_styler() -> Option<Styler> {
    context().get_styler()
}

pub fn set_styler_enabled(enabled: bool) {
    context().set_styler_enabled(enabled);
}

/// Wraps `logger` so every call leads with `prefix`. The original is unchanged.
#[must_use]
pub fn set_prefix(logger: &Logger, prefix: &str) -> Logger {
    logger.with_prefix(prefix)
}

pub fn set_prefix_global(prefix: impl Into<String>) {
    context().set_prefix_global(prefix);
}

/// Flags `name` as a debug category on the global context. Best effort.
pub fn debug_category(name: &str) {
    context().add_debug_category(name);
}
