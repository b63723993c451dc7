//! Reminder extraction: free text in, `{text, date, time}` out.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};
use std::fmt;

use crate::cleanup::{
    collapse_whitespace, is_too_short, remove_span, strip_dangling_prepositions,
    strip_lead_phrase,
};
use crate::clock::format_time;
use crate::temporal::{DayPart, EnglishParser, ParseOptions, TemporalParser};

/// A reminder ready to be stored or shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderDraft {
    /// Trimmed, whitespace-collapsed description.
    pub text: String,
    #[serde(serialize_with = "serialize_date")]
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_time")]
    pub time: NaiveTime,
}

impl ReminderDraft {
    /// `YYYY-MM-DD`
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `H:MM AM|PM`
    pub fn time_label(&self) -> String {
        format_time(self.time)
    }

    /// The instant the reminder is due.
    pub fn due_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

impl fmt::Display for ReminderDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} - {}", self.date_iso(), self.time_label(), self.text)
    }
}

fn serialize_date<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&date.format("%Y-%m-%d"))
}

fn serialize_time<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_time(*time))
}

/// Times used when the input names no clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderDefaults {
    /// Used when nothing better is known. 9:00 AM unless configured.
    pub default_time: NaiveTime,
    pub morning: NaiveTime,
    pub afternoon: NaiveTime,
    pub evening: NaiveTime,
    pub night: NaiveTime,
}

impl Default for ReminderDefaults {
    fn default() -> Self {
        let at = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN);
        Self {
            default_time: at(9),
            morning: at(9),
            afternoon: at(14),
            evening: at(18),
            night: at(20),
        }
    }
}

impl ReminderDefaults {
    pub fn for_day_part(&self, part: DayPart) -> NaiveTime {
        match part {
            DayPart::Morning => self.morning,
            DayPart::Afternoon => self.afternoon,
            DayPart::Evening => self.evening,
            DayPart::Night => self.night,
        }
    }
}

/// Extracts a reminder from `text` with the bundled English parser and default times.
///
/// Always succeeds. Without any date/time in the text the reminder is due today at
/// 9:00 AM and keeps the whole text.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use nudge_core::parse_smart_reminder;
/// let now = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
///
/// let draft = parse_smart_reminder("dentist appointment tomorrow at 2pm", now);
///
/// assert_eq!(draft.text, "dentist appointment");
/// assert_eq!(draft.date_iso(), "2025-08-16");
/// assert_eq!(draft.time_label(), "2:00 PM");
/// ```
pub fn parse_smart_reminder(text: &str, now: NaiveDateTime) -> ReminderDraft {
    parse_smart_reminder_with(text, now, &EnglishParser, &ReminderDefaults::default())
}

/// [`parse_smart_reminder`] with a caller-supplied parser and default times.
pub fn parse_smart_reminder_with<P>(
    text: &str,
    now: NaiveDateTime,
    parser: &P,
    defaults: &ReminderDefaults,
) -> ReminderDraft
where
    P: TemporalParser + ?Sized,
{
    let first = parser
        .parse(text, now, ParseOptions { forward_date: true })
        .into_iter()
        .next();

    let (date, time, rest) = match first {
        Some(found) => {
            let time = found.time().unwrap_or_else(|| {
                found
                    .day_part
                    .or_else(|| DayPart::find_in(text))
                    .map(|part| defaults.for_day_part(part))
                    .unwrap_or(defaults.default_time)
            });
            let rest = remove_span(text, &found.matched_text);
            (found.date, time, strip_dangling_prepositions(rest.trim()))
        }
        None => (now.date(), defaults.default_time, text.to_string()),
    };

    let mut cleaned = collapse_whitespace(&strip_lead_phrase(rest.trim()));
    if is_too_short(&cleaned) {
        log::debug!("cleanup left {cleaned:?}, keeping the original text");
        cleaned = collapse_whitespace(text);
    }

    let draft = ReminderDraft {
        text: cleaned,
        date,
        time,
    };
    log::debug!("extracted reminder {draft:?}");
    draft
}
