//! Visibility decision and formatting for a single log call.

use crate::context::{Emission, LogContext};
use crate::level::Level;
use crate::value::Value;

/// Whether a message at `msg` is dropped.
///
/// An override, when present, is the only thing consulted. Without one, a category
/// level takes precedence over the global threshold.
#[must_use]
pub fn is_suppressed(
    override_level: Option<Level>,
    msg: Level,
    category: Option<Level>,
    threshold: Level,
) -> bool {
    match (override_level, category) {
        (Some(forced), _) => forced > msg,
        (None, Some(floor)) => msg < floor,
        (None, None) => msg < threshold,
    }
}

pub(super) fn dispatch(
    context: &LogContext,
    identity: &str,
    category: &str,
    level: Level,
    mut args: Vec<Value>,
) -> Result<(), crate::Error> {
    let Some(Emission {
        output,
        prefix,
        styler,
    }) = context.plan(identity, category, level)?
    else {
        return Ok(());
    };

    let message = (!args.is_empty()).then(|| args.remove(0));

    // The styler sees only what follows the primary message.
    if let Some(styler) = styler {
        styler(&output, &format!("{prefix}{category}"), level, &args);
        return Ok(());
    }

    let mut line = format!("{prefix}[{category}] [{}]", level.as_upper());
    if let Some(message) = message {
        line.push(' ');
        line.push_str(&message.to_text());
    }

    let mut out = Vec::with_capacity(args.len() + 1);
    out.push(Value::Str(line));
    out.extend(args);
    output(&out);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_threshold_applies_without_category_or_override() {
        assert!(is_suppressed(None, Level::Debug, None, Level::Info));
        assert!(!is_suppressed(None, Level::Info, None, Level::Info));
        assert!(!is_suppressed(None, Level::Error, None, Level::Info));
    }

    #[test]
    fn category_beats_global_threshold_both_ways() {
        // Stricter category hides what the global floor would show.
        assert!(is_suppressed(None, Level::Info, Some(Level::Warn), Level::Trace));
        // Looser category shows what the global floor would hide.
        assert!(!is_suppressed(None, Level::Debug, Some(Level::Debug), Level::Error));
    }

    #[test]
    fn override_ignores_category_and_threshold() {
        assert!(is_suppressed(
            Some(Level::Error),
            Level::Warn,
            Some(Level::Trace),
            Level::Trace
        ));
        assert!(!is_suppressed(
            Some(Level::Trace),
            Level::Trace,
            Some(Level::Error),
            Level::Error
        ));
    }

    #[test]
    fn override_equal_to_message_level_emits() {
        for level in Level::all() {
            assert!(!is_suppressed(Some(level), level, None, Level::Error));
        }
    }
}
