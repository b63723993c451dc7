//! Pure display helpers.
//!
//! Day label:   `Today`, `Tomorrow`, or the configured date format (`Monday, Aug 18`)
//! Reminder:    `## Tomorrow 5:00 PM - call mom`

use chrono::NaiveDate;

use crate::extract::ReminderDraft;

/// Default format for dates beyond tomorrow.
pub const DEFAULT_DATE_FORMAT: &str = "%A, %b %-d";

/// `Today`, `Tomorrow`, or `date` in `date_format`.
pub fn format_day_label(date: NaiveDate, today: NaiveDate, date_format: &str) -> String {
    if date == today {
        "Today".to_string()
    } else if today.succ_opt() == Some(date) {
        "Tomorrow".to_string()
    } else {
        date.format(date_format).to_string()
    }
}

/// Cuts `text` to `max_chars` characters and appends `...` when it is longer.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Render a reminder as a Markdown heading line.
pub fn format_reminder_line(draft: &ReminderDraft, today: NaiveDate, date_format: &str) -> String {
    format!(
        "## {} {} - {}",
        format_day_label(draft.date, today, date_format),
        draft.time_label(),
        draft.text
    )
}
