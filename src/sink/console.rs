//! Console backend of the default sink.

use crate::value::Value;
use std::io::{self, Write};

/// Writes `args` space-separated on one line. Warn and error go to stderr, everything
/// else to stdout. Write failures are dropped: a closed pipe must not take the
/// host down with it.
pub fn write_line(to_stderr: bool, args: &[Value]) {
    let line = args
        .iter()
        .map(Value::to_text)
        .collect::<Vec<_>>()
        .join(" ");

    if to_stderr {
        let _ = writeln!(io::stderr().lock(), "{line}");
    } else {
        let _ = writeln!(io::stdout().lock(), "{line}");
    }
}
