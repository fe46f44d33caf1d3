//! Named logger handles. A logger is a name bound to a context; every call goes
//! through the context's current thresholds, sink and styler, so nothing about
//! the output is fixed at creation time.

mod dispatch;
mod factory;

pub use dispatch::is_suppressed;
pub use factory::{DefaultLoggerFactory, LoggerFactory, category_name};

use crate::context::LogContext;
use crate::level::Level;
use crate::value::{IntoArgs, Value};
use std::fmt;
use std::sync::Arc;

/// Cheap to clone: a name, a category, an `Arc` and any injected prefix args.
#[derive(Clone)]
pub struct Logger {
    name: String,
    category: String,
    context: Arc<LogContext>,
    prefix: Vec<Value>,
}

impl Logger {
    /// A logger whose identity and category are both `name`.
    #[must_use]
    pub fn new(context: Arc<LogContext>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            category: name.clone(),
            name,
            context,
            prefix: Vec::new(),
        }
    }

    /// Separate identity (keys the override table) and category (keys the category
    /// table), for factories that hand out several loggers per category.
    #[must_use]
    pub fn with_identity(
        context: Arc<LogContext>,
        identity: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: identity.into(),
            category: category.into(),
            context,
            prefix: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub const fn context(&self) -> &Arc<LogContext> {
        &self.context
    }

    /// Args injected ahead of the caller's own by [`Logger::with_prefix`].
    #[must_use]
    pub fn prefix_args(&self) -> &[Value] {
        &self.prefix
    }

    /// Dispatches one message.
    ///
    /// # Errors
    /// [`crate::Error::NoOutput`] when the message is visible but the sink has no
    /// usable capability.
    pub fn try_log(&self, level: Level, args: impl IntoArgs) -> Result<(), crate::Error> {
        let mut all = self.prefix.clone();
        all.extend(args.into_args());
        dispatch::dispatch(&self.context, &self.name, &self.category, level, all)
    }

    /// Dispatches one message.
    ///
    /// # Panics
    /// When the message is visible and the sink can't take it. That is a setup bug,
    /// not something to handle at the call site; use [`Logger::try_log`] to observe it.
    pub fn log(&self, level: Level, args: impl IntoArgs) {
        if let Err(e) = self.try_log(level, args) {
            panic!("{e}");
        }
    }

    /// # Panics
    /// See [`Logger::log`].
    pub fn trace(&self, args: impl IntoArgs) {
        self.log(Level::Trace, args);
    }

    /// # Panics
    /// See [`Logger::log`].
    pub fn debug(&self, args: impl IntoArgs) {
        self.log(Level::Debug, args);
    }

    /// # Panics
    /// See [`Logger::log`].
    pub fn info(&self, args: impl IntoArgs) {
        self.log(Level::Info, args);
    }

    /// # Panics
    /// See [`Logger::log`].
    pub fn warn(&self, args: impl IntoArgs) {
        self.log(Level::Warn, args);
    }

    /// # Panics
    /// See [`Logger::log`].
    pub fn error(&self, args: impl IntoArgs) {
        self.log(Level::Error, args);
    }

    /// Forces a minimum level for this logger's name in its context.
    pub fn set_override_level(&self, level: Level) {
        self.context.set_override_level(self, level);
    }

    /// A new logger that calls through to this one with `prefix` as the leading
    /// argument. `self` is left untouched; wrapping twice puts the outer prefix
    /// after the inner one.
    #[must_use]
    pub fn with_prefix(&self, prefix: impl Into<Value>) -> Self {
        let mut wrapped = self.clone();
        wrapped.prefix.push(prefix.into());
        wrapped
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
