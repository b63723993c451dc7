use crate::{
    Config,
    extract::{ReminderDraft, parse_smart_reminder_with},
    intent::{IntentResult, detect_reminder_intent_with},
    temporal::EnglishParser,
    upcoming::upcoming_reminder,
};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};

pub struct Nudge {
    pub config: Config,
    parser: EnglishParser,
}

impl Nudge {
    /// Creates a new `Nudge` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Ok(Self::with_config(config))
    }

    /// Creates a new `Nudge` instance with a specific `Config`.
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            parser: EnglishParser,
        }
    }

    /// The configured reference instant, or the local clock.
    pub fn now(&self) -> NaiveDateTime {
        self.config
            .reference
            .unwrap_or_else(|| Local::now().naive_local())
    }

    /// Free-form input: decide whether it is a reminder before extracting it.
    pub fn detect(&self, input: &str) -> IntentResult {
        detect_reminder_intent_with(input, self.now(), &self.parser, &self.config.defaults)
    }

    /// Input already known to be a reminder, e.g. typed into a reminder list.
    pub fn parse(&self, input: &str) -> ReminderDraft {
        parse_smart_reminder_with(input, self.now(), &self.parser, &self.config.defaults)
    }

    /// The reminder due soonest after the reference instant.
    pub fn upcoming<'a>(&self, reminders: &'a [ReminderDraft]) -> Option<&'a ReminderDraft> {
        upcoming_reminder(reminders, self.now())
    }
}
