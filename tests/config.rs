//! Config parsing, includes and application to a context.

mod common;

use common::Capture;
use std::fs;
use tempfile::TempDir;
use tierlog::config::{parse_category_entry, parse_category_list, parse_name_list};
use tierlog::{Config, Error, Level, LogContext};

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.parse_threshold(), Level::Debug);
    assert!(config.categories.is_empty());
    assert!(!config.general.styled);
}

#[test]
fn parses_all_sections() {
    let config = Config::parse(
        r#"
[general]
threshold = "warn"
prefix = "app:"
styled = true
debug_categories = ["net"]

[categories]
db = "error"

[overrides]
noisy = "info"
"#,
    )
    .unwrap();

    assert_eq!(config.parse_threshold(), Level::Warn);
    assert_eq!(config.general.prefix, "app:");
    assert_eq!(config.category_levels(), [("db".to_string(), Level::Error)]);
    assert_eq!(config.override_levels(), [("noisy".to_string(), Level::Info)]);
}

#[test]
fn unknown_level_in_config_falls_back_to_debug() {
    let config = Config::parse("[categories]\nnet = \"loud\"\n").unwrap();
    assert_eq!(config.category_levels(), [("net".to_string(), Level::Debug)]);
}

#[test]
fn malformed_toml_is_an_error() {
    let err = Config::parse("[general\n").unwrap_err();
    assert!(matches!(err, Error::ConfigParse(_)));
}

#[test]
fn missing_file_yields_defaults() {
    let tmp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&tmp_dir.path().join("nope.toml")).unwrap();
    assert!(config.categories.is_empty());
}

#[test]
fn load_with_sources_merges_tables() {
    let tmp_dir = TempDir::new().unwrap();
    let base_path = tmp_dir.path().join("base.toml");
    let child_path = tmp_dir.path().join("child.toml");

    fs::write(
        &base_path,
        format!(
            "source = \"{}\"\n\n[categories]\nnet = \"warn\"\n",
            child_path.display()
        ),
    )
    .unwrap();
    fs::write(
        &child_path,
        "[categories]\nnet = \"trace\"\ndb = \"error\"\n\n[overrides]\nx = \"info\"\n",
    )
    .unwrap();

    let config = Config::load_from(&base_path).unwrap();
    assert_eq!(config.categories["net"], "warn");
    assert_eq!(config.categories["db"], "error");
    assert_eq!(config.overrides["x"], "info");
}

#[test]
fn load_with_cyclic_sources_errors() {
    let tmp_dir = TempDir::new().unwrap();
    let a_path = tmp_dir.path().join("a.toml");
    let b_path = tmp_dir.path().join("b.toml");

    fs::write(&a_path, format!(r#"source = "{}""#, b_path.display())).unwrap();
    fs::write(&b_path, format!(r#"source = "{}""#, a_path.display())).unwrap();

    let err = Config::load_from(&a_path).unwrap_err();
    assert!(matches!(err, Error::CyclicInclude(_)));
}

#[test]
fn context_from_config() {
    let capture = Capture::new();
    let config = Config::parse(
        r#"
[general]
threshold = "info"
prefix = "p:"

[categories]
db = "error"

[overrides]
noisy = "trace"
"#,
    )
    .unwrap();

    let context = LogContext::from_config(&config);
    context.set_logger_output(capture.leveled());

    assert_eq!(context.log_threshold(), Level::Info);
    assert_eq!(context.category_level("db"), Some(Level::Error));
    assert_eq!(context.override_level("noisy"), Some(Level::Trace));

    context.create("db").warn("hidden");
    context.create("noisy").trace("shown");
    context.create("other").debug("hidden");
    assert_eq!(capture.lines(), ["p:[noisy] [TRACE] shown"]);
}

#[test]
fn category_entry_parsing() {
    assert_eq!(
        parse_category_entry("net=warn").unwrap(),
        ("net".to_string(), Level::Warn)
    );
    assert!(matches!(
        parse_category_entry("net"),
        Err(Error::InvalidCategory(_))
    ));
    assert!(matches!(
        parse_category_entry("=warn"),
        Err(Error::InvalidCategory(_))
    ));
    assert!(matches!(
        parse_category_entry("net=loud"),
        Err(Error::InvalidLevel(_))
    ));
}

#[test]
fn category_list_skips_bad_entries() {
    let levels = parse_category_list("net=warn, bogus ,,db=ERROR,x=loud");
    assert_eq!(
        levels,
        [
            ("net".to_string(), Level::Warn),
            ("db".to_string(), Level::Error),
        ]
    );
}

#[test]
fn name_list_drops_blanks() {
    assert_eq!(parse_name_list(",net, db ,"), ["net", "db"]);
}

#[test]
fn source_key_inside_table_is_a_category() {
    let (sources, rest) = tierlog::config::extract_sources(
        "source = \"a.toml\"\nsourcemap = \"x\"\n[categories]\nsource = \"warn\"\n",
    );
    assert_eq!(sources, ["a.toml"]);
    assert!(rest.contains("sourcemap"));

    let config = Config::parse(&rest).unwrap();
    assert_eq!(config.categories["source"], "warn");
}

#[test]
fn source_value_drops_trailing_comment() {
    let (sources, _) = tierlog::config::extract_sources(
        "source = \"a.toml\"  # note\nsource = 'b # c.toml' # quoted hash\nsource = ~/d.toml # bare\n",
    );
    assert_eq!(sources, ["a.toml", "b # c.toml", "~/d.toml"]);
}
