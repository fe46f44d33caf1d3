//! The destination of emitted lines. A sink advertises up to three capabilities,
//! checked in order on every dispatch: a function for the message's level, a generic
//! `log` function, and finally the sink itself as a plain callable. Nothing is
//! cached, so replacing the sink takes effect for every existing logger at once.

mod console;

pub use console::write_line;

use crate::level::Level;
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A resolved output function: receives the formatted line followed by trailing args.
pub type OutputFn = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// Which capability a dispatch resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Leveled(Level),
    GenericLog,
    Direct,
}

#[derive(Clone, Default)]
pub struct Sink {
    levels: HashMap<Level, OutputFn>,
    log: Option<OutputFn>,
    direct: Option<OutputFn>,
}

impl Sink {
    /// A sink with no capability at all. Dispatching into it is a configuration error.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Stdout for trace/debug/info and the generic `log`, stderr for warn/error.
    #[must_use]
    pub fn console() -> Self {
        let mut sink = Self::empty().log(|args| write_line(false, args));
        for level in Level::all() {
            let to_stderr = level >= Level::Warn;
            sink = sink.level(level, move |args| write_line(to_stderr, args));
        }
        sink
    }

    /// A sink that is only callable, with no level or `log` functions.
    #[must_use]
    pub fn direct(f: impl Fn(&[Value]) + Send + Sync + 'static) -> Self {
        Self::empty().callable(f)
    }

    /// A sink exposing only a generic `log` function.
    #[must_use]
    pub fn generic_log(f: impl Fn(&[Value]) + Send + Sync + 'static) -> Self {
        Self::empty().log(f)
    }

    /// Registers the function used for messages of `level`.
    #[must_use]
    pub fn level(mut self, level: Level, f: impl Fn(&[Value]) + Send + Sync + 'static) -> Self {
        self.levels.insert(level, Arc::new(f));
        self
    }

    /// Registers the generic `log` function, used when no level function matches.
    #[must_use]
    pub fn log(mut self, f: impl Fn(&[Value]) + Send + Sync + 'static) -> Self {
        self.log = Some(Arc::new(f));
        self
    }

    /// Makes the sink directly callable, the last resort of the resolution chain.
    #[must_use]
    pub fn callable(mut self, f: impl Fn(&[Value]) + Send + Sync + 'static) -> Self {
        self.direct = Some(Arc::new(f));
        self
    }

    #[must_use]
    pub fn has_level(&self, level: Level) -> bool {
        self.levels.contains_key(&level)
    }

    /// Picks the first capability that can take a message at `level`.
    #[must_use]
    pub fn resolve(&self, level: Level) -> Option<(Capability, OutputFn)> {
        if let Some(f) = self.levels.get(&level) {
            return Some((Capability::Leveled(level), Arc::clone(f)));
        }
        if let Some(f) = &self.log {
            return Some((Capability::GenericLog, Arc::clone(f)));
        }
        self.direct
            .as_ref()
            .map(|f| (Capability::Direct, Arc::clone(f)))
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut levels: Vec<_> = self.levels.keys().copied().collect();
        levels.sort();
        f.debug_struct("Sink")
            .field("levels", &levels)
            .field("log", &self.log.is_some())
            .field("direct", &self.direct.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_function_wins_over_log() {
        let sink = Sink::empty()
            .log(|_| {})
            .callable(|_| {})
            .level(Level::Warn, |_| {});
        let (cap, _) = sink.resolve(Level::Warn).unwrap();
        assert_eq!(cap, Capability::Leveled(Level::Warn));
        let (cap, _) = sink.resolve(Level::Info).unwrap();
        assert_eq!(cap, Capability::GenericLog);
    }

    #[test]
    fn direct_is_last_resort() {
        let (cap, _) = Sink::direct(|_| {}).resolve(Level::Error).unwrap();
        assert_eq!(cap, Capability::Direct);
    }

    #[test]
    fn empty_sink_resolves_nothing() {
        assert!(Sink::empty().resolve(Level::Info).is_none());
    }

    #[test]
    fn console_covers_every_level() {
        let sink = Sink::console();
        assert!(Level::all().iter().all(|l| sink.has_level(*l)));
    }
}
