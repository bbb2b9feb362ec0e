use super::theme::OneDark;
use chrono::Duration;
use journal_core::{Entry, human::format_span};
use std::path::Path;
use termimad::{MadSkin, crossterm::style::Stylize};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub use_color: bool,
    /// chrono format used when showing an entry's publish time.
    pub datetime_format: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            use_color: true,
            datetime_format: "%B %-d, %Y at %-I:%M %p".to_string(),
        }
    }
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: config.unwrap_or_default(),
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            println!("{}", message.with(OneDark::FG));
        } else {
            println!("{message}");
        }
    }

    pub fn print_saved(&self, entry: &Entry, path: &Path) {
        println!("{}", self.saved_line(entry, path));
    }

    /// `Journal entry saved to <path> [tags] (written in 12 minutes)`
    ///
    /// The writing time is only shown once it reaches a minute.
    fn saved_line(&self, entry: &Entry, path: &Path) -> String {
        let mut path = path.display().to_string();
        let mut tags = String::new();
        if !entry.tags.is_empty() {
            tags = format!(" [{}]", entry.tags.join(", "));
        }
        let mut written = String::new();
        let writing = entry.writing_duration();
        if writing >= Duration::minutes(1) {
            written = format!(" (written in {})", format_span(writing));
        }
        if self.opts.use_color {
            path = path.with(OneDark::CYAN).to_string();
            tags = tags.with(OneDark::GREEN).to_string();
            written = written.with(OneDark::COMMENT).to_string();
        }
        format!("Journal entry saved to {path}{tags}{written}")
    }

    pub fn print_since(&self, entry: &Entry, elapsed: &str) {
        println!("{}", self.since_line(entry, elapsed));
    }

    /// `Last journal entry: 3 days ago (March 7, 2024 at 2:30 PM)`
    fn since_line(&self, entry: &Entry, elapsed: &str) -> String {
        let mut when = entry
            .publish_time
            .format(&self.opts.datetime_format)
            .to_string();
        let mut elapsed = elapsed.to_string();
        if self.opts.use_color {
            elapsed = elapsed.with(OneDark::YELLOW).to_string();
            when = when.with(OneDark::BLUE).to_string();
        }
        format!("Last journal entry: {elapsed} ({when})")
    }
}
