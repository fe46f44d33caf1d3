//! tierlog's own diagnostic channel: level-parse fallbacks, skipped config entries
//! and similar warnings. It runs on a private context, so changes to the host's
//! sink or thresholds never silence it or loop back into it.
//!
//! Uses `OnceLock` so the context is built exactly once, on first use.

use crate::context::LogContext;
use crate::level::Level;
use crate::sink::Sink;
use std::sync::{Arc, OnceLock};

/// Minimum level of internal diagnostics. Defaults to `warn`.
pub const LEVEL_ENV: &str = "TIERLOG_INTERNAL_LEVEL";

static INTERNAL_CONTEXT: OnceLock<Arc<LogContext>> = OnceLock::new();

/// The private context. Exposed so hosts and tests can redirect diagnostics.
pub fn context() -> &'static Arc<LogContext> {
    INTERNAL_CONTEXT.get_or_init(|| {
        // Must not go through `Level::parse_or_debug`, which reports back here.
        let threshold = std::env::var(LEVEL_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Level::Warn);
        LogContext::builder()
            .threshold(threshold)
            .prefix("tierlog:")
            .sink(Sink::console())
            .build()
    })
}

/// Never panics: a misconfigured internal sink just loses the message.
fn log(level: Level, scope: &str, msg: &str) {
    let _ = context().create(scope).try_log(level, msg);
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
