mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use cli::Cli;
use cli_modes::{CliModeResult, editor_mode, path_mode, text_mode, use_color};
use nudge_core::Nudge;
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    pretty_env_logger::init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("nudge: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    let mut nudge = Nudge::new()?;
    if cli.now.is_some() {
        nudge.config.reference = cli.now;
    }

    let renderer = Renderer::new(Some(RenderOptions {
        date_format: nudge.config.date_format.to_string(),
        use_color: use_color(&cli),
        json: cli.json,
    }));

    if let CliModeResult::Finish = path_mode(&cli, &renderer)? {
        return Ok(());
    };

    if let CliModeResult::Finish = text_mode(&cli, &renderer, &nudge)? {
        return Ok(());
    };

    editor_mode(&cli, &renderer, &nudge)?;
    Ok(())
}
