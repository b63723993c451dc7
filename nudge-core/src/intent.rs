use chrono::NaiveDateTime;
use serde::Serialize;

use crate::extract::{ReminderDefaults, ReminderDraft, parse_smart_reminder_with};
use crate::keywords::Keywords;
use crate::temporal::{EnglishParser, TemporalParser};

/// Outcome of [`detect_reminder_intent`].
///
/// Serializes flat, e.g. `{"isReminder":true,"text":"call mom","date":"2025-08-16","time":"5:00 PM"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentResult {
    pub is_reminder: bool,
    /// Present exactly when `is_reminder` is true.
    #[serde(flatten)]
    pub draft: Option<ReminderDraft>,
}

impl IntentResult {
    pub fn not_reminder() -> Self {
        Self {
            is_reminder: false,
            draft: None,
        }
    }

    pub fn reminder(draft: ReminderDraft) -> Self {
        Self {
            is_reminder: true,
            draft: Some(draft),
        }
    }
}

/// Decides whether `text` reads like a reminder and extracts it if so.
///
/// The gate is a whole-word, case-insensitive keyword check (action words such as
/// "call" or "meeting", weekdays, "at", "tomorrow", "pm"...). Text without any cue
/// is not a reminder; callers keep it as a plain note.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use nudge_core::detect_reminder_intent;
/// let now = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
///
/// assert!(!detect_reminder_intent("hello there", now).is_reminder);
///
/// let found = detect_reminder_intent("call mom tomorrow at 5pm", now);
/// let draft = found.draft.unwrap();
/// assert_eq!(draft.text, "call mom");
/// assert_eq!(draft.time_label(), "5:00 PM");
/// ```
pub fn detect_reminder_intent(text: &str, now: NaiveDateTime) -> IntentResult {
    detect_reminder_intent_with(text, now, &EnglishParser, &ReminderDefaults::default())
}

/// [`detect_reminder_intent`] with a caller-supplied parser and default times.
pub fn detect_reminder_intent_with<P>(
    text: &str,
    now: NaiveDateTime,
    parser: &P,
    defaults: &ReminderDefaults,
) -> IntentResult
where
    P: TemporalParser + ?Sized,
{
    match Keywords::find_cue(text) {
        Some(cue) => {
            log::debug!("reminder cue '{}' found", cue.as_ref());
            IntentResult::reminder(parse_smart_reminder_with(text, now, parser, defaults))
        }
        None => {
            log::debug!("no reminder cue in {text:?}");
            IntentResult::not_reminder()
        }
    }
}
