use super::theme::OneDark;
use anyhow::Result;
use chrono::NaiveDate;
use nudge_core::{
    IntentResult, ReminderDraft,
    render::{DEFAULT_DATE_FORMAT, format_day_label, format_reminder_line, truncate_text},
};
use serde::Serialize;
use termimad::{MadSkin, crossterm::style::Stylize};

/// How much of a non-reminder is echoed back.
const ECHO_CHARS: usize = 50;

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
    pub json: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: DEFAULT_DATE_FORMAT.to_string(),
                    use_color: true,
                    json: false,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_plain(&self, line: &str) {
        println!("{line}");
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string(value)?);
        Ok(())
    }

    pub fn print_intent(&self, result: &IntentResult, input: &str, today: NaiveDate) -> Result<()> {
        if self.opts.json {
            return self.print_json(result);
        }
        match &result.draft {
            Some(draft) => self.print_reminder_line(draft, today),
            None => self.print_info(&format!(
                "Not a reminder: {}",
                truncate_text(input.trim(), ECHO_CHARS)
            )),
        }
        Ok(())
    }

    pub fn print_reminder(&self, draft: &ReminderDraft, today: NaiveDate) -> Result<()> {
        if self.opts.json {
            return self.print_json(draft);
        }
        self.print_reminder_line(draft, today);
        Ok(())
    }

    /// `2025-08-16 5:00 PM - call mom (Tomorrow)`; a Markdown heading when colored.
    pub fn print_reminder_line(&self, draft: &ReminderDraft, today: NaiveDate) {
        if self.opts.use_color {
            self.print_md(&format_reminder_line(draft, today, &self.opts.date_format));
            let date = draft.date_iso().with(OneDark::CYAN).to_string();
            let time = draft.time_label().with(OneDark::BLUE).to_string();
            println!("{date} {time}");
            return;
        }
        let label = format_day_label(draft.date, today, &self.opts.date_format);
        println!("{draft} ({label})");
    }
}
