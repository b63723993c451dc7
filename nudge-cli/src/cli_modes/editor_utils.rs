use anyhow::{Context, Result};
use std::{fs, path::Path, process::Command};

pub fn resolve_editor(editor: &Option<String>) -> Result<String> {
    let editor = editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into());
    Ok(editor)
}

pub fn create_editor_buffer(editor_cmd: &str) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("nudge")
        .suffix(".txt")
        .tempfile()?;

    let path = file.path().to_path_buf();
    open_file_in_editor(editor_cmd, &path)?;
    fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))
}

fn open_file_in_editor(editor_cmd: &str, path: &Path) -> Result<()> {
    log::debug!("opening {} with {editor_cmd}", path.display());
    let status = Command::new(editor_cmd)
        .arg(path)
        .status()
        .with_context(|| format!("launching editor '{editor_cmd}'"))?;
    if !status.success() {
        anyhow::bail!("Editor exited with status {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_editor_wins() {
        let editor = resolve_editor(&Some("hx".to_string())).unwrap();
        assert_eq!(editor, "hx");
    }

    #[cfg(unix)]
    #[test]
    fn failing_editor_is_an_error() {
        let err = create_editor_buffer("false").unwrap_err();
        assert!(err.to_string().contains("Editor exited"));
    }

    #[cfg(unix)]
    #[test]
    fn untouched_buffer_is_empty() {
        assert_eq!(create_editor_buffer("true").unwrap(), "");
    }
}
