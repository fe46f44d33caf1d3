//! Stepwise construction of a [`LogContext`], for hosts that want their settings in
//! place before the first logger exists.

use super::{LogContext, State};
use crate::fmt::Styler;
use crate::level::Level;
use crate::logger::LoggerFactory;
use crate::sink::Sink;
use std::sync::Arc;

#[derive(Default)]
pub struct ContextBuilder {
    state: State,
}

impl ContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Global floor for categories without their own level. Defaults to `Debug`.
    #[must_use]
    pub fn threshold(mut self, level: Level) -> Self {
        self.state.threshold = level;
        self
    }

    #[must_use]
    pub fn category(mut self, name: impl Into<String>, level: Level) -> Self {
        self.state.categories.insert(name.into(), level);
        self
    }

    #[must_use]
    pub fn categories<I, K>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = (K, Level)>,
        K: Into<String>,
    {
        self.state
            .categories
            .extend(levels.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    /// Pre-seeds an override for the logger named `name`.
    #[must_use]
    pub fn override_level(mut self, name: impl Into<String>, level: Level) -> Self {
        self.state.overrides.insert(name.into(), level);
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.state.prefix = prefix.into();
        self
    }

    #[must_use]
    pub const fn styled(mut self, enabled: bool) -> Self {
        self.state.styled = enabled;
        self
    }

    #[must_use]
    pub fn styler(mut self, styler: Styler) -> Self {
        self.state.styler = Some(styler);
        self
    }

    #[must_use]
    pub fn sink(mut self, sink: Sink) -> Self {
        self.state.sink = sink;
        self
    }

    #[must_use]
    pub fn factory(mut self, factory: impl LoggerFactory + 'static) -> Self {
        self.state.factory = Arc::new(factory);
        self
    }

    #[must_use]
    pub fn debug_categories<I, K>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.state
            .debug_categories
            .extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn build(self) -> Arc<LogContext> {
        LogContext::from_state(self.state)
    }
}
