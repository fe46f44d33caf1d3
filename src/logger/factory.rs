//! Logger creation is pluggable so hosts can change how raw names map to loggers.

use super::Logger;
use crate::context::LogContext;
use std::sync::Arc;

pub trait LoggerFactory: Send + Sync {
    fn create(&self, context: &Arc<LogContext>, raw_name: &str) -> Logger;
}

/// Names a logger after the file or module it was created for.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLoggerFactory;

impl LoggerFactory for DefaultLoggerFactory {
    fn create(&self, context: &Arc<LogContext>, raw_name: &str) -> Logger {
        Logger::new(Arc::clone(context), category_name(raw_name))
    }
}

impl<F> LoggerFactory for F
where
    F: Fn(&Arc<LogContext>, &str) -> Logger + Send + Sync,
{
    fn create(&self, context: &Arc<LogContext>, raw_name: &str) -> Logger {
        self(context, raw_name)
    }
}

/// Last path segment with everything from the first `.` cut off:
/// `a/b/c.ts` gives `c`, `src/net/client.rs` gives `client`, `app::net::client`
/// gives `client`.
#[must_use]
pub fn category_name(raw_name: &str) -> &str {
    let last = raw_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(raw_name);
    let last = last.rsplit("::").next().unwrap_or(last);
    last.split('.').next().unwrap_or(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_path_and_extension() {
        assert_eq!(category_name("a/b/c.ts"), "c");
        assert_eq!(category_name("c.spec.ts"), "c");
        assert_eq!(category_name("plain"), "plain");
    }

    #[test]
    fn handles_rust_paths() {
        assert_eq!(category_name("src/net/client.rs"), "client");
        assert_eq!(category_name("tierlog::net::client"), "client");
        assert_eq!(category_name(r"C:\src\db.rs"), "db");
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(category_name(""), "");
        assert_eq!(category_name("dir/"), "");
        assert_eq!(category_name(".hidden"), "");
    }
}
