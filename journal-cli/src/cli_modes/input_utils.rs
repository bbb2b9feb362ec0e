use anyhow::{Context, Result};
use std::io::BufRead;

/// Reads every line from `reader`, joined with `\n`.
pub fn read_piped<R: BufRead>(reader: R) -> Result<String> {
    let lines = reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("error reading from stdin")?;
    Ok(lines.join("\n"))
}

/// Terminal capture: lines until two consecutive blank lines (or end of input),
/// then a single line of comma-separated tags.
pub fn read_interactive<R, P>(mut reader: R, mut prompt: P) -> Result<(String, Vec<String>)>
where
    R: BufRead,
    P: FnMut(&str),
{
    prompt("Enter journal content (press Enter twice to finish):");
    let mut lines: Vec<String> = Vec::new();
    loop {
        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .context("error reading input")?;
        if read == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']).to_string();
        if line.is_empty() && lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
            break;
        }
        lines.push(line);
    }

    prompt("Enter tags (comma-separated, or press Enter for none):");
    let mut tag_line = String::new();
    reader
        .read_line(&mut tag_line)
        .context("error reading tags")?;

    Ok((lines.join("\n"), parse_tag_line(&tag_line)))
}

/// `" a, b ,,c "` -> `["a", "b", "", "c"]`; a blank line means no tags.
pub fn parse_tag_line(input: &str) -> Vec<String> {
    let input = input.trim();
    if input.is_empty() {
        return Vec::new();
    }
    input.split(',').map(|t| t.trim().to_string()).collect()
}
