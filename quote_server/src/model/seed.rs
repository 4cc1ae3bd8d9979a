//! Reading seed quotes from a text file: one quote per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use quote_common::{QuoteError, Result};

/// Parses quotes from a buffered reader.
///
/// Each line is trimmed; blank lines are skipped. Returns an error if a line
/// cannot be read.
pub fn parse_quotes<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut quotes = Vec::new();
    for line_result in reader.lines() {
        let line = line_result.map_err(QuoteError::Io)?;
        let trimmed_line = line.trim();
        if trimmed_line.is_empty() {
            continue;
        }
        quotes.push(trimmed_line.to_string());
    }
    Ok(quotes)
}

/// Loads quotes from `path`. A missing file or a file without quotes is an error.
pub fn load_quotes(path: &Path) -> Result<Vec<String>> {
    if !is_file_exist(path) {
        return Err(QuoteError::ParseQuotesFile(format!(
            "{} is not a readable file",
            path.display()
        )));
    }
    let quotes = parse_quotes(BufReader::new(File::open(path)?))?;
    if quotes.is_empty() {
        return Err(QuoteError::ParseQuotesFile(format!(
            "{} contains no quotes",
            path.display()
        )));
    }
    Ok(quotes)
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
pub fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

fn is_file_exist(path: &Path) -> bool {
    path.exists() && path.is_file()
}
