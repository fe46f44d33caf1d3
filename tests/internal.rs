//! The library's own diagnostic channel.

mod common;

use common::Capture;
use tierlog::Level;

#[test]
fn unknown_level_name_warns_once_on_the_side_channel() {
    let capture = Capture::new();
    tierlog::internal::context().set_logger_output(capture.leveled());

    assert_eq!(Level::parse_or_debug("loud"), Level::Debug);

    let lines: Vec<String> = capture
        .lines()
        .into_iter()
        .filter(|line| line.contains("'loud'"))
        .collect();
    assert_eq!(
        lines,
        ["tierlog:[LEVEL] [WARN] unknown log level: 'loud', using debug"]
    );
}
