pub mod cleanup;
pub mod clock;
pub mod config;
pub mod extract;
pub mod intent;
pub mod keywords;
pub mod nudge;
pub mod render;
pub mod temporal;
pub mod upcoming;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use extract::{ReminderDefaults, ReminderDraft, parse_smart_reminder, parse_smart_reminder_with};
pub use intent::{IntentResult, detect_reminder_intent, detect_reminder_intent_with};
pub use nudge::Nudge;
pub use temporal::{DayPart, EnglishParser, ParseOptions, ParsedTemporal, TemporalParser};
pub use upcoming::upcoming_reminder;
