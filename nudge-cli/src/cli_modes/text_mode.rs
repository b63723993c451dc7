use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use nudge_core::{Nudge, ReminderDraft};

pub fn text_mode(cli: &Cli, renderer: &Renderer, nudge: &Nudge) -> Result<CliModeResult> {
    if cli.text.is_empty() {
        return Ok(CliModeResult::NothingToDo);
    }
    let inline = cli.text.join(" ");
    handle_input(&inline, cli, renderer, nudge)?;
    Ok(CliModeResult::Finish)
}

/// Runs detection (or plain extraction with `--remind`) and prints the outcome.
pub(super) fn handle_input(
    input: &str,
    cli: &Cli,
    renderer: &Renderer,
    nudge: &Nudge,
) -> Result<Option<ReminderDraft>> {
    let today = nudge.now().date();
    if cli.remind {
        let draft = nudge.parse(input);
        renderer.print_reminder(&draft, today)?;
        return Ok(Some(draft));
    }
    let result = nudge.detect(input);
    renderer.print_intent(&result, input, today)?;
    Ok(result.draft)
}
