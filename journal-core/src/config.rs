use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

/// Environment variable that overrides the journal root.
pub const JOURNAL_PATH_ENV: &str = "JOURNAL_PATH";

#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the `YYYY/MM/DD` entry tree.
    pub journal_dir: PathBuf,
    /// Preferred editor binary. Optional; the CLI falls back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_dir: Option<PathBuf>,
    editor: Option<String>,
}

impl Config {
    /// Loads the configuration once for the whole process.
    ///
    /// `journal_dir` comes from, in order: `override_dir`, the `JOURNAL_PATH`
    /// environment variable, the config file, `<home>/Dropbox/Journal` and
    /// finally `./Journal`. A broken config file is logged and ignored.
    pub fn load(override_dir: Option<PathBuf>) -> Self {
        let file_config = match Self::read_file_config() {
            Ok(fc) => fc,
            Err(error) => {
                warn!("ignoring config file: {error:#}");
                FileConfig::default()
            }
        };
        let env_dir = std::env::var_os(JOURNAL_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let home = BaseDirs::new().map(|b| b.home_dir().to_path_buf());

        let override_dir = override_dir.filter(|p| !p.as_os_str().is_empty());
        let config = Self::resolve(override_dir.or(env_dir), file_config, home.as_deref());
        debug!(journal_dir = %config.journal_dir.display(), "resolved configuration");
        config
    }

    fn resolve(env_dir: Option<PathBuf>, file_config: FileConfig, home: Option<&Path>) -> Self {
        let journal_dir = env_dir
            .or(file_config.journal_dir)
            .unwrap_or_else(|| Self::default_journal_dir(home));

        Self {
            journal_dir,
            editor: file_config.editor,
        }
    }

    /// Default journal root: `<home>/Dropbox/Journal`, or `./Journal` without a home.
    fn default_journal_dir(home: Option<&Path>) -> PathBuf {
        match home {
            Some(home) => home.join("Dropbox").join("Journal"),
            None => PathBuf::from("./Journal"),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("journal")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("journal").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("journal")
                .join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert!(c.contains(&b.config_dir().join("journal").join("config.toml")));
        }
    }

    #[test]
    fn parse_file_accepts_journal_dir_and_editor() {
        let toml = r#"
            journal_dir = "/tmp/my-journal"
            editor = "hx"
        "#;
        let fc = Config::parse_file(toml).unwrap();
        assert_eq!(fc.journal_dir.as_deref(), Some(Path::new("/tmp/my-journal")));
        assert_eq!(fc.editor.as_deref(), Some("hx"));
    }

    #[test]
    fn parse_file_rejects_wrong_types() {
        assert!(Config::parse_file("journal_dir = 3").is_err());
    }

    #[test]
    fn env_dir_wins_over_file_and_home() {
        let fc = FileConfig {
            journal_dir: Some(PathBuf::from("/from/file")),
            editor: Some("nano".into()),
        };
        let c = Config::resolve(
            Some(PathBuf::from("/from/env")),
            fc,
            Some(Path::new("/home/me")),
        );
        assert_eq!(c.journal_dir, PathBuf::from("/from/env"));
        assert_eq!(c.editor.as_deref(), Some("nano"));
    }

    #[test]
    fn file_dir_wins_over_home() {
        let fc = FileConfig {
            journal_dir: Some(PathBuf::from("/from/file")),
            editor: None,
        };
        let c = Config::resolve(None, fc, Some(Path::new("/home/me")));
        assert_eq!(c.journal_dir, PathBuf::from("/from/file"));
    }

    #[test]
    fn defaults_to_dropbox_under_home() {
        let c = Config::resolve(None, FileConfig::default(), Some(Path::new("/home/me")));
        assert_eq!(c.journal_dir, PathBuf::from("/home/me/Dropbox/Journal"));
        assert!(c.editor.is_none());
    }

    #[test]
    fn falls_back_to_cwd_without_home() {
        let c = Config::resolve(None, FileConfig::default(), None);
        assert_eq!(c.journal_dir, PathBuf::from("./Journal"));
    }
}
