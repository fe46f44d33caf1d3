//! All mutable logging state in one injectable object. Every logger holds an `Arc`
//! to its context, so configuration changes (new sink, new thresholds, styling on
//! or off) reach loggers that were created earlier.
//!
//! State sits behind one `RwLock`. Dispatch copies what it needs out of the lock
//! before calling into the sink or styler, so a sink that logs again cannot deadlock.

mod builder;
mod from_config;

pub use builder::ContextBuilder;

use crate::fmt::{Styler, default_styler};
use crate::level::Level;
use crate::logger::{DefaultLoggerFactory, Logger, LoggerFactory, is_suppressed};
use crate::sink::{OutputFn, Sink};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub(crate) struct State {
    pub(crate) threshold: Level,
    pub(crate) prefix: String,
    pub(crate) styler: Option<Styler>,
    pub(crate) styled: bool,
    pub(crate) categories: HashMap<String, Level>,
    pub(crate) overrides: HashMap<String, Level>,
    pub(crate) sink: Sink,
    pub(crate) factory: Arc<dyn LoggerFactory>,
    pub(crate) debug_categories: Vec<String>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            threshold: Level::Debug,
            prefix: String::new(),
            styler: Some(default_styler()),
            styled: false,
            categories: HashMap::new(),
            overrides: HashMap::new(),
            sink: Sink::console(),
            factory: Arc::new(DefaultLoggerFactory),
            debug_categories: Vec::new(),
        }
    }
}

/// Everything a visible message needs once the lock is released.
pub(crate) struct Emission {
    pub(crate) output: OutputFn,
    pub(crate) prefix: String,
    pub(crate) styler: Option<Styler>,
}

/// Shared configuration for a family of loggers.
#[derive(Default)]
pub struct LogContext {
    state: RwLock<State>,
}

impl LogContext {
    /// A context with defaults: threshold `Debug`, console sink, default styler installed
    /// but disabled, empty tables.
    #[must_use]
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[must_use]
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    pub(crate) fn from_state(state: State) -> Arc<Self> {
        Arc::new(Self {
            state: RwLock::new(state),
        })
    }

    // A panicking sink poisons nothing we care about: the state is plain data and
    // every write leaves it consistent.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Creates a logger through the active factory.
    #[must_use]
    pub fn create(self: &Arc<Self>, raw_name: &str) -> Logger {
        let factory = Arc::clone(&self.read().factory);
        factory.create(self, raw_name)
    }

    /// Swaps the factory used by later `create` calls. Existing loggers are unaffected.
    pub fn set_logger_factory(&self, factory: impl LoggerFactory + 'static) {
        self.write().factory = Arc::new(factory);
    }

    /// Merges `levels` into the category table, overwriting on key collision.
    pub fn set_category_levels<I, K>(&self, levels: I)
    where
        I: IntoIterator<Item = (K, Level)>,
        K: Into<String>,
    {
        let mut state = self.write();
        for (name, level) in levels {
            state.categories.insert(name.into(), level);
        }
    }

    /// `None` means the category falls back to the global threshold.
    #[must_use]
    pub fn category_level(&self, name: &str) -> Option<Level> {
        self.read().categories.get(name).copied()
    }

    pub fn set_log_threshold(&self, level: Level) {
        self.write().threshold = level;
    }

    #[must_use]
    pub fn log_threshold(&self) -> Level {
        self.read().threshold
    }

    /// Forces a minimum level for `logger`, bypassing category and global thresholds.
    /// Keyed by the logger's name; last write wins.
    pub fn set_override_level(&self, logger: &Logger, level: Level) {
        self.set_override_level_for(logger.name(), level);
    }

    pub(crate) fn set_override_level_for(&self, name: &str, level: Level) {
        self.write().overrides.insert(name.to_string(), level);
    }

    #[must_use]
    pub fn override_level(&self, name: &str) -> Option<Level> {
        self.read().overrides.get(name).copied()
    }

    /// Replaces the sink. Takes effect on the next call of every logger.
    pub fn set_logger_output(&self, sink: Sink) {
        self.write().sink = sink;
    }

    pub fn set_styler(&self, styler: Styler) {
        self.write().styler = Some(styler);
    }

    #[must_use]
    pub fn get_styler(&self) -> Option<Styler> {
        self.read().styler.clone()
    }

    /// With no styler, styled mode falls back to plain formatting.
    pub fn clear_styler(&self) {
        self.write().styler = None;
    }

    pub fn set_styler_enabled(&self, enabled: bool) {
        self.write().styled = enabled;
    }

    #[must_use]
    pub fn styler_enabled(&self) -> bool {
        self.read().styled
    }

    /// Prepended to the name segment of every message, styled or not.
    pub fn set_prefix_global(&self, prefix: impl Into<String>) {
        self.write().prefix = prefix.into();
    }

    #[must_use]
    pub fn prefix_global(&self) -> String {
        self.read().prefix.clone()
    }

    /// Appends to the debug-category list. Informational only; it does not affect
    /// which messages are emitted.
    pub fn add_debug_category(&self, name: impl Into<String>) {
        self.write().debug_categories.push(name.into());
    }

    /// Case-insensitive membership test against the debug-category list.
    #[must_use]
    pub fn is_debug_category(&self, name: &str) -> bool {
        self.read()
            .debug_categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn debug_categories(&self) -> Vec<String> {
        self.read().debug_categories.clone()
    }

    /// Decides visibility for one message and, when visible, resolves the output.
    ///
    /// `Ok(None)` means suppressed. The sink is only consulted for visible messages.
    pub(crate) fn plan(
        &self,
        identity: &str,
        category: &str,
        level: Level,
    ) -> Result<Option<Emission>, crate::Error> {
        let state = self.read();

        let override_level = state.overrides.get(identity).copied();
        let category_level = state.categories.get(category).copied();
        if is_suppressed(override_level, level, category_level, state.threshold) {
            return Ok(None);
        }

        let (_, output) = state.sink.resolve(level).ok_or(crate::Error::NoOutput)?;
        let styler = if state.styled {
            state.styler.clone()
        } else {
            None
        };

        Ok(Some(Emission {
            output,
            prefix: state.prefix.clone(),
            styler,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn poison(context: &Arc<LogContext>) {
        let context = Arc::clone(context);
        let _ = thread::spawn(move || {
            let _guard = context.state.write().unwrap();
            panic!("poisoning the state lock");
        })
        .join();
    }

    #[test]
    fn debug_category_survives_a_poisoned_lock() {
        let context = LogContext::new();
        poison(&context);
        assert!(context.state.is_poisoned());

        context.add_debug_category("net");
        assert!(context.is_debug_category("NET"));
    }

    #[test]
    fn setters_survive_a_poisoned_lock() {
        let context = LogContext::new();
        poison(&context);

        context.set_log_threshold(Level::Error);
        assert_eq!(context.log_threshold(), Level::Error);
    }
}
