//! Natural-language date/time recognition.
//!
//! A [`TemporalParser`] finds the date/time expressions inside free text and resolves
//! them against a reference instant. The reminder extractor only needs the first
//! match, its span and whether a clock time was spelled out.

pub mod english;

pub use english::EnglishParser;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Coarse time of day named by a word rather than a clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayPart {
    Morning,
    Afternoon,
    Evening,
    Night,
}

static DAY_PART_RES: Lazy<[(DayPart, Regex); 4]> = Lazy::new(|| {
    let re = |pattern: &str| Regex::new(pattern).expect("valid day part regex");
    [
        (DayPart::Morning, re(r"\bmorning\b")),
        (DayPart::Afternoon, re(r"\bafternoon\b")),
        (DayPart::Evening, re(r"\bevening\b")),
        (DayPart::Night, re(r"\b(?:to)?night\b")),
    ]
});

impl DayPart {
    /// Maps a single word to a day part. `"tonight"` counts as night.
    pub fn from_word(word: &str) -> Option<DayPart> {
        match word.to_ascii_lowercase().as_str() {
            "morning" => Some(DayPart::Morning),
            "afternoon" => Some(DayPart::Afternoon),
            "evening" => Some(DayPart::Evening),
            "night" | "tonight" => Some(DayPart::Night),
            _ => None,
        }
    }

    /// Looks for a day-part word anywhere in `text`.
    ///
    /// The search goes by priority, not position: morning, then afternoon, evening
    /// and night. `"evening or morning"` yields [`DayPart::Morning`].
    pub fn find_in(text: &str) -> Option<DayPart> {
        let lower = text.to_ascii_lowercase();
        DAY_PART_RES
            .iter()
            .find(|(_, re)| re.is_match(&lower))
            .map(|(part, _)| *part)
    }
}

/// Options shared by every parser implementation.
#[derive(Copy, Clone, Debug)]
pub struct ParseOptions {
    /// Resolve ambiguous expressions ("friday", "at 9am") to the next future
    /// occurrence instead of the closest one.
    pub forward_date: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { forward_date: true }
    }
}

/// One date/time expression found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemporal {
    /// Byte offset of the match in the input.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// The input text that encoded the date/time, original casing kept.
    pub matched_text: String,
    /// The resolved calendar date.
    pub date: NaiveDate,
    /// Only set when a clock time was explicitly present.
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    /// Day part named inside the match, e.g. `evening` in `tomorrow evening`.
    pub day_part: Option<DayPart>,
}

impl ParsedTemporal {
    /// The explicit clock time, if any.
    pub fn time(&self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour?, self.minute.unwrap_or(0), 0)
    }
}

/// A natural-language date/time recognizer.
///
/// Implementations return every match found in `text`, ordered by position.
/// They must not panic on any input.
pub trait TemporalParser {
    fn parse(
        &self,
        text: &str,
        reference: NaiveDateTime,
        options: ParseOptions,
    ) -> Vec<ParsedTemporal>;
}
