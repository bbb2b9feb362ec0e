use crate::render::Renderer;
use anyhow::{Context, Result};
use chrono::Local;
use journal_core::{Store, human::format_elapsed};
use tracing::debug;

pub fn since_mode(store: &Store, renderer: &Renderer) -> Result<()> {
    let (entry, path) = store
        .find_most_recent()
        .context("failed to find last entry")?;
    debug!(path = %path.display(), "most recent entry");

    let elapsed = format_elapsed(Local::now() - entry.publish_time);
    renderer.print_since(&entry, &elapsed);
    Ok(())
}
