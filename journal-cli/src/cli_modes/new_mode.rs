use super::{
    editor_utils::{create_editor_buffer, resolve_editor},
    input_utils::{read_interactive, read_piped},
};
use crate::{cli::NewArgs, render::Renderer};
use anyhow::{Context, Result};
use chrono::Local;
use journal_core::{Config, Entry, Store};
use std::io::{self, IsTerminal};
use tracing::debug;

pub fn new_mode(args: &NewArgs, config: &Config, store: &Store, renderer: &Renderer) -> Result<()> {
    let writing_start_time = Local::now();

    let (content, tags) = if let Some(content) = &args.content {
        (content.clone(), args.tags.clone())
    } else if args.interactive {
        let stdin = io::stdin();
        read_interactive(stdin.lock(), |prompt| renderer.print_md(prompt))?
    } else if !io::stdin().is_terminal() {
        debug!("reading entry from stdin");
        (read_piped(io::stdin().lock())?, args.tags.clone())
    } else {
        let editor = resolve_editor(&config.editor);
        debug!(editor = %editor, "opening editor");
        let content = create_editor_buffer(&editor).context("failed to open editor")?;
        (content, args.tags.clone())
    };

    if content.trim().is_empty() {
        anyhow::bail!("journal entry content cannot be empty");
    }

    let entry = Entry::with_times(content, tags, writing_start_time, Local::now());
    let path = store.save(&entry).context("failed to save entry")?;
    renderer.print_saved(&entry, &path);
    Ok(())
}
