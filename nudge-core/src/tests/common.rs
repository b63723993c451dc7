use crate::{Config, extract::ReminderDefaults, render::DEFAULT_DATE_FORMAT};
use chrono::NaiveDateTime;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(reference: Option<NaiveDateTime>) -> Config {
    Config {
        editor: None,
        defaults: ReminderDefaults::default(),
        date_format: DEFAULT_DATE_FORMAT.to_string(),
        reference,
    }
}
