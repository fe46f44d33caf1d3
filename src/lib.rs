//! `tierlog` - leveled, category-aware console logging facade.
//!
//! Filters messages by severity against a global threshold, per-category levels
//! and per-logger overrides, then hands them to a replaceable sink, optionally
//! through a styler:
//! - Override level for a logger wins unconditionally
//! - Otherwise a category level beats the global threshold
//! - Sinks resolve per call (level function, then `log`, then direct callable)
//! - Plain `[name] [LEVEL] message` output, or a pluggable colored styler
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use tierlog::{Level, LogContext, Sink};
//!
//! let lines = Arc::new(Mutex::new(Vec::new()));
//! let captured = Arc::clone(&lines);
//! let context = LogContext::builder()
//!     .threshold(Level::Info)
//!     .category("net", Level::Warn)
//!     .sink(Sink::direct(move |args| {
//!         captured.lock().unwrap().push(args[0].to_text());
//!     }))
//!     .build();
//!
//! let log = context.create("src/net.rs");
//! log.info("dropped by the net category level");
//! log.warn("connection timeout");
//!
//! assert_eq!(*lines.lock().unwrap(), ["[net] [WARN] connection timeout"]);
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `tierlog` command-line binary

pub mod config;
pub mod context;
mod error;
pub mod fmt;
mod global;
pub mod internal;
pub mod level;
pub mod logger;
pub mod sink;
mod value;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

pub use config::Config;
pub use context::{ContextBuilder, LogContext};
pub use error::Error;
pub use fmt::{Styler, default_styler};
pub use global::{
    CATEGORIES_ENV, DEBUG_ENVS, LEVEL_ENV, category_level, context, create, debug_category,
    get_logger, get_styler, set_category_levels, set_log_threshold, set_logger_factory,
    set_logger_output, set_override_level, set_prefix, set_prefix_global, set_styler,
    set_styler_enabled,
};
pub use level::{Level, ParseLevelError};
pub use logger::{DefaultLoggerFactory, Logger, LoggerFactory, category_name};
pub use sink::{Capability, OutputFn, Sink};
pub use value::{IntoArgs, Value};
