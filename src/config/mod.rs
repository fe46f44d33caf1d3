//! TOML configuration loading with `source = "..."` include resolution.
//!
//! Separated from struct definitions so that the loading logic (file I/O, cycle detection,
//! merge strategy) stays independent of the serde schema.

mod structs;

pub use structs::GeneralConfig;

use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the default config location.
pub const CONFIG_ENV: &str = "TIERLOG_CONFIG";

/// An empty file is a valid config: every field has a default, and missing
/// sections resolve to empty tables rather than errors.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    /// Category name to minimum level.
    pub categories: HashMap<String, String>,
    /// Logger name to forced minimum level.
    pub overrides: HashMap<String, String>,
}

/// Pulls top-level `source = "..."` lines out of raw TOML before deserialization.
/// Returns the include paths and the remaining content. Inside a table, `source`
/// is an ordinary key (a category may well be called that).
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();
    let mut top_level = true;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') {
            top_level = false;
        }
        let directive = trimmed
            .split_once('=')
            .filter(|(key, _)| top_level && key.trim() == "source");
        if let Some((_, value)) = directive {
            let path = include_path(value);
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

/// The path of a `source` value: the quoted text, or a bare value up to any `#` comment.
fn include_path(value: &str) -> &str {
    let value = value.trim();
    let mut chars = value.chars();
    match chars.next() {
        Some(quote @ ('"' | '\'')) => {
            let rest = chars.as_str();
            rest.find(quote).map_or(rest, |end| &rest[..end])
        }
        _ => value.split_once('#').map_or(value, |(path, _)| path).trim(),
    }
}

impl Config {
    /// Loads from `$TIERLOG_CONFIG` or the platform config directory.
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Fails if no config directory exists, a file can't be read, TOML is malformed,
    /// or includes form a cycle.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        internal::debug(
            "CONFIG",
            &format!("Loading config from {}", config_path.display()),
        );
        Self::load_with_sources(&config_path, &mut HashSet::new())
    }

    /// Loads from an explicit path instead of the default location.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// Parses config text directly; includes are not followed.
    ///
    /// # Errors
    /// Returns the TOML error on malformed input.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            let expanded = shellexpand::tilde(&source_path);
            let source_file = Path::new(expanded.as_ref());
            if source_file.exists() {
                let source_config = Self::load_with_sources(source_file, seen)?;
                config.merge(source_config);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source_path}"));
            }
        }

        Ok(config)
    }

    /// Folds an included config into `self`. Keys already present win.
    pub fn merge(&mut self, other: Self) {
        for (k, v) in other.categories {
            self.categories.entry(k).or_insert(v);
        }
        for (k, v) in other.overrides {
            self.overrides.entry(k).or_insert(v);
        }
        for name in other.general.debug_categories {
            if !self.general.debug_categories.contains(&name) {
                self.general.debug_categories.push(name);
            }
        }
    }

    /// `$TIERLOG_CONFIG` (tilde-expanded) if set, else `<config_dir>/tierlog/tierlog.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        if let Ok(path) = std::env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(shellexpand::tilde(&path).as_ref()));
        }

        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("tierlog").join("tierlog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown names fall back to `Debug` with a warning.
    #[must_use]
    pub fn parse_threshold(&self) -> Level {
        Level::parse_or_debug(&self.general.threshold)
    }

    #[must_use]
    pub fn category_levels(&self) -> Vec<(String, Level)> {
        parse_table(&self.categories)
    }

    #[must_use]
    pub fn override_levels(&self) -> Vec<(String, Level)> {
        parse_table(&self.overrides)
    }
}

fn parse_table(table: &HashMap<String, String>) -> Vec<(String, Level)> {
    table
        .iter()
        .map(|(name, level)| (name.clone(), Level::parse_or_debug(level)))
        .collect()
}

/// Parses one `name=level` entry strictly.
///
/// # Errors
/// [`crate::Error::InvalidCategory`] when the `=` or the name is missing,
/// [`crate::Error::InvalidLevel`] when the level is unknown.
pub fn parse_category_entry(entry: &str) -> Result<(String, Level), crate::Error> {
    let Some((name, level)) = entry.split_once('=') else {
        return Err(crate::Error::InvalidCategory(entry.to_string()));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(crate::Error::InvalidCategory(entry.to_string()));
    }
    Ok((name.to_string(), level.parse()?))
}

/// Parses a comma-delimited `name=level` list, as found in `TIERLOG_CATEGORIES`.
/// Bad entries are reported on the internal channel and skipped.
#[must_use]
pub fn parse_category_list(list: &str) -> Vec<(String, Level)> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| match parse_category_entry(entry) {
            Ok(pair) => Some(pair),
            Err(e) => {
                internal::warn("CONFIG", &format!("Skipping category entry: {e}"));
                None
            }
        })
        .collect()
}

/// Splits a comma-delimited name list (`DEBUG`, `LOG_DEBUG`), dropping blanks.
#[must_use]
pub fn parse_name_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
        .collect()
}
