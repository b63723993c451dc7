use anyhow::{Context, Result};
use chrono::{NaiveDateTime, NaiveTime};
use directories::BaseDirs;
use serde::Deserialize;
use std::{collections::HashMap, fs, path::PathBuf};

use crate::clock::parse_12h;
use crate::extract::ReminderDefaults;
use crate::keywords::Keywords;
use crate::render::DEFAULT_DATE_FORMAT;

#[derive(Debug, Clone)]
pub struct Config {
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// Times used when a reminder names no clock time.
    pub defaults: ReminderDefaults,
    /// Format for dates beyond tomorrow in human-readable output.
    pub date_format: String,
    /// Reference instant for "today"/"tomorrow". `None` means the local clock.
    pub reference: Option<NaiveDateTime>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: None,
            defaults: ReminderDefaults::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            reference: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    editor: Option<String>,
    default_time: Option<String>,
    date_format: Option<String>,
    /// Optional table:
    /// [day_parts]
    /// morning = "08:30"
    /// evening = "7:00 PM"
    day_parts: Option<DayPartTimes>,
    /// Optional table:
    /// [synonyms]
    /// tmrw = "tomorrow"
    /// mtg = "meeting"
    synonyms: Option<HashMap<String, String>>,
}

#[derive(Debug, Default, Deserialize)]
struct DayPartTimes {
    morning: Option<String>,
    afternoon: Option<String>,
    evening: Option<String>,
    night: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native), apply defaults,
    /// and extend the global Keywords registry with user-defined synonyms if present.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            log::warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let fallback = ReminderDefaults::default();
        let day_parts = file_config.day_parts.unwrap_or_default();
        let defaults = ReminderDefaults {
            default_time: Self::time_or(file_config.default_time.as_deref(), fallback.default_time),
            morning: Self::time_or(day_parts.morning.as_deref(), fallback.morning),
            afternoon: Self::time_or(day_parts.afternoon.as_deref(), fallback.afternoon),
            evening: Self::time_or(day_parts.evening.as_deref(), fallback.evening),
            night: Self::time_or(day_parts.night.as_deref(), fallback.night),
        };

        let date_format = file_config
            .date_format
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());

        // Extend global keyword registry once at startup.
        Self::load_synonyms(&file_config.synonyms);

        Self {
            editor: file_config.editor,
            defaults,
            date_format,
            reference: None,
        }
    }

    /// Parse a "%H:%M" or "H:MM AM" string, keeping `fallback` when it is invalid.
    fn time_or(time: Option<&str>, fallback: NaiveTime) -> NaiveTime {
        match time {
            Some(s) => parse_12h(s).unwrap_or_else(|| {
                log::warn!("invalid time '{s}' in config, using {fallback}");
                fallback
            }),
            None => fallback,
        }
    }

    /// Candidate config files, in lookup order.
    pub fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("nudge").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("nudge").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        Self::read_first(&Self::config_file_paths())
    }

    fn read_first(paths: &[PathBuf]) -> Result<FileConfig> {
        for path in paths {
            if !path.exists() {
                continue;
            }
            log::debug!("reading config from {}", path.display());
            let s =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[synonyms]` into the global Keywords registry.
    /// Omits synonyms that collide with a canonical keyword (eg. "today").
    fn load_synonyms(synonyms: &Option<HashMap<String, String>>) {
        match synonyms {
            Some(map) if !map.is_empty() => {
                let pairs: Vec<(String, String)> = map
                    .iter()
                    .filter(|(alias, _)| !Keywords::is_canonical(alias))
                    .map(|(a, t)| (a.clone(), t.clone()))
                    .collect();

                if !pairs.is_empty() {
                    Keywords::extend(&pairs);
                }
            }
            _ => {}
        }
    }
}
