use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use nudge_core::Config;

pub fn path_mode(cli: &Cli, renderer: &Renderer) -> Result<CliModeResult> {
    if !cli.path {
        return Ok(CliModeResult::NothingToDo);
    }
    let paths = Config::config_file_paths();
    if paths.is_empty() {
        renderer.print_info("No home directory found, config files are not read.");
    }
    for path in paths {
        let marker = if path.exists() { "" } else { " (missing)" };
        renderer.print_plain(&format!("{}{marker}", path.display()));
    }
    Ok(CliModeResult::Finish)
}
