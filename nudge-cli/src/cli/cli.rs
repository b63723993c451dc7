use chrono::{NaiveDate, NaiveDateTime};
use clap::{ArgGroup, Parser};

use crate::render::ColorMode;

/// nudge: turn free text into reminders
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("input").args(["text", "remind"]).multiple(true)),
    group(ArgGroup::new("solo").args(["path"]).conflicts_with_all(["input"])),
)]
pub struct Cli {
    /// Prints the config file locations, in lookup order.
    #[arg(long, short)]
    pub path: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Treat the text as a reminder even without a cue word (e.g., `nudge -r water plants`).
    #[arg(long, short)]
    pub remind: bool,
    /// Reference instant for relative dates, instead of the local clock.
    /// Accepts `2025-08-15T10:00`, `2025-08-15 10:00` or `2025-08-15`.
    #[arg(long, env = "NUDGE_NOW", value_parser = parse_now)]
    pub now: Option<NaiveDateTime>,
    /// Print the result as JSON.
    #[arg(long, short)]
    pub json: bool,

    /// Free text (e.g., `nudge call mom tomorrow at 5pm`). Opens your $EDITOR when empty.
    #[arg()]
    pub text: Vec<String>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

fn parse_now(s: &str) -> Result<NaiveDateTime, String> {
    let s = s.trim();
    for fmt in ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid reference time '{s}', expected YYYY-MM-DDTHH:MM"))
}
