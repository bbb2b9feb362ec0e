use anyhow::{Context, Result};
use std::{fs, path::Path, process::Command};

pub fn resolve_editor(editor: &Option<String>) -> String {
    editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok().filter(|v| !v.trim().is_empty()))
        .or_else(|| std::env::var("EDITOR").ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| "vim".into())
}

/// Opens `editor_cmd` on an empty temp file and returns what was saved,
/// without trailing line breaks.
pub fn create_editor_buffer(editor_cmd: &str) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("journal-")
        .suffix(".txt")
        .tempfile()
        .context("failed to create temp file")?;

    let path = file.path().to_path_buf();
    open_file_in_editor(editor_cmd, &path)?;
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content.trim_end_matches(['\n', '\r']).to_string())
}

/// Runs the editor on `path`. The command may carry arguments (`code -w`).
pub fn open_file_in_editor(editor_cmd: &str, path: &Path) -> Result<()> {
    let mut parts = editor_cmd.split_whitespace();
    let program = parts.next().unwrap_or("vim");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("failed to launch editor `{editor_cmd}`"))?;
    if !status.success() {
        anyhow::bail!("editor exited with status {}", status);
    }
    Ok(())
}
