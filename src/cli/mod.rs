//! Command-line front end: emit one log line through a context built from the
//! config file and flags. Lets shell scripts share category levels with the
//! programs they drive.

mod util;

pub use util::{build_context, message_args};

use crate::config::{Config, parse_category_entry};
use crate::level::Level;
use clap::Parser;
use std::path::PathBuf;

/// tierlog - emit a leveled, category-filtered log line.
#[derive(Debug, Parser)]
#[command(name = "tierlog", version, about = "Emit a leveled log line")]
pub struct Cli {
    /// Config file (defaults to $TIERLOG_CONFIG or the platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Global threshold
    #[arg(long, value_name = "LEVEL")]
    pub threshold: Option<String>,
    /// Category level, repeatable
    #[arg(long = "category", value_name = "NAME=LEVEL", value_parser = parse_category_entry)]
    pub categories: Vec<(String, Level)>,
    /// Forced minimum level for this logger
    #[arg(long = "override", value_name = "LEVEL")]
    pub override_level: Option<String>,
    /// Leading argument injected ahead of the message
    #[arg(long)]
    pub prefix: Option<String>,
    /// Prepended to the logger name
    #[arg(long, value_name = "PREFIX")]
    pub global_prefix: Option<String>,
    /// Decorate output with the default styler
    #[arg(long)]
    pub styled: bool,
    /// Parse the first message word as JSON
    #[arg(long)]
    pub json: bool,
    /// Message level (unknown names fall back to debug)
    pub level: String,
    /// Logger name; paths and extensions are stripped
    pub name: String,
    /// Message followed by trailing values
    pub message: Vec<String>,
}

/// Loads config, applies flags and emits the message.
///
/// # Errors
/// Config loading failures, or [`crate::Error::NoOutput`] from the dispatch.
pub fn run(cli: &Cli) -> Result<(), crate::Error> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let context = build_context(&config, cli);
    let mut logger = context.create(&cli.name);
    if let Some(level) = &cli.override_level {
        logger.set_override_level(Level::parse_or_debug(level));
    }
    if let Some(prefix) = &cli.prefix {
        logger = logger.with_prefix(prefix.as_str());
    }

    let level = Level::parse_or_debug(&cli.level);
    logger.try_log(level, message_args(&cli.message, cli.json))
}
