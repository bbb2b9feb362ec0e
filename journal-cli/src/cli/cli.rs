use crate::render::ColorMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// A journal keeping CLI
///
/// Keeps one JSON file per entry under `YYYY/MM/DD/` in the journal directory.
#[derive(Parser, Debug)]
#[command(name = "journal", version, about)]
pub struct Cli {
    /// Journal root directory. Defaults to `~/Dropbox/Journal`.
    #[arg(long, global = true, env = "JOURNAL_PATH", value_name = "DIR")]
    pub journal_path: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Print debug logs to stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new journal entry
    New(NewArgs),
    /// Show how long it's been since your last journal entry
    Since,
    /// Prints the journal root directory
    Path,
}

#[derive(Args, Debug)]
pub struct NewArgs {
    /// Journal entry content. Without it, piped stdin or your $EDITOR is used.
    #[arg(long, short)]
    pub content: Option<String>,
    /// Tags for the journal entry (comma-separated, e.g. `-t work,ideas`)
    #[arg(long, short, value_delimiter = ',')]
    pub tags: Vec<String>,
    /// Interactive mode for entering content
    #[arg(long, short, conflicts_with = "content")]
    pub interactive: bool,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn tags_split_on_commas_and_repeat() {
        let cli = Cli::try_parse_from(["journal", "new", "-c", "hi", "-t", "a,b", "--tags", "c"])
            .unwrap();
        match cli.command {
            Command::New(args) => {
                assert_eq!(args.content.as_deref(), Some("hi"));
                assert_eq!(args.tags, vec!["a", "b", "c"]);
                assert!(!args.interactive);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn interactive_conflicts_with_content() {
        assert!(Cli::try_parse_from(["journal", "new", "-i", "-c", "x"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["journal", "since", "--journal-path", "/tmp/j", "-v"])
            .unwrap();
        assert!(matches!(cli.command, Command::Since));
        assert_eq!(cli.journal_path, Some(PathBuf::from("/tmp/j")));
        assert!(cli.verbose);
    }
}
