//! The default styler: a colored `[name] ` segment followed by a `[LEVEL]` badge.
//!
//! Any function with the [`Styler`] signature can replace it. A styler owns the
//! final output: it receives the resolved output function and must call it itself.

use super::color::{Color, Style};
use crate::level::Level;
use crate::sink::OutputFn;
use crate::value::Value;
use std::sync::Arc;

/// `(output, prefixed name, level, message and trailing args)`.
pub type Styler = Arc<dyn Fn(&OutputFn, &str, Level, &[Value]) + Send + Sync>;

/// Name and tag styles for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelStyle {
    pub name: Style,
    pub tag: Style,
}

impl LevelStyle {
    #[must_use]
    pub const fn for_level(level: Level) -> Self {
        match level {
            Level::Trace => Self {
                name: Style::fg(Color::grey()),
                tag: Style::fg(Color::grey()),
            },
            Level::Debug => Self {
                name: Style::fg(Color::white()),
                tag: Style::fg(Color::green()),
            },
            Level::Info => Self {
                name: Style::fg(Color::blue()).bold(),
                tag: Style::badge(Color::blue()),
            },
            Level::Warn => Self {
                name: Style::fg(Color::yellow()).bold(),
                tag: Style::badge(Color::yellow()),
            },
            Level::Error => Self {
                name: Style::fg(Color::red()).bold(),
                tag: Style::badge(Color::red()),
            },
        }
    }
}

/// Builds the styled prefix without emitting anything.
#[must_use]
pub fn styled_prefix(name: &str, level: Level) -> String {
    let style = LevelStyle::for_level(level);
    let name = style.name.paint(&format!("[{name}] "));
    let tag = style.tag.paint(&format!("[{}]", level.as_upper()));
    format!("{name}{tag}")
}

/// Signature-compatible with [`Styler`].
pub fn style(output: &OutputFn, name: &str, level: Level, args: &[Value]) {
    let mut line = Vec::with_capacity(args.len() + 1);
    line.push(Value::Str(styled_prefix(name, level)));
    line.extend_from_slice(args);
    output(&line);
}

/// The styler installed in every new context.
#[must_use]
pub fn default_styler() -> Styler {
    Arc::new(style)
}
