use super::{
    CliModeResult,
    editor_utils::{create_editor_buffer, resolve_editor},
    text_mode::handle_input,
};
use crate::{Cli, render::Renderer};
use anyhow::Result;
use nudge_core::Nudge;

pub fn editor_mode(cli: &Cli, renderer: &Renderer, nudge: &Nudge) -> Result<CliModeResult> {
    let editor = resolve_editor(&nudge.config.editor)?;
    let input = create_editor_buffer(&editor)?;
    // one reminder per line
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        renderer.print_info("Nothing to do, because no text was received.");
        return Ok(CliModeResult::Finish);
    }

    let mut drafts = Vec::new();
    for line in lines {
        if let Some(draft) = handle_input(line, cli, renderer, nudge)? {
            drafts.push(draft);
        }
    }

    if drafts.len() > 1 && !cli.json {
        if let Some(next) = nudge.upcoming(&drafts) {
            renderer.print_info(&format!("Next up: {} at {}", next.text, next.time_label()));
        }
    }
    Ok(CliModeResult::Finish)
}
