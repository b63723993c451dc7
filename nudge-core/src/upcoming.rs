use chrono::NaiveDateTime;

use crate::extract::ReminderDraft;

/// Returns the reminder due soonest after `now`.
///
/// Reminders due exactly at `now` or earlier are skipped. When several are due at
/// the same instant the first one in `reminders` wins.
pub fn upcoming_reminder(reminders: &[ReminderDraft], now: NaiveDateTime) -> Option<&ReminderDraft> {
    reminders
        .iter()
        .filter(|reminder| reminder.due_at() > now)
        .min_by_key(|reminder| reminder.due_at())
}
