//! Root-word sources.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{EjaanError, Result};

/// Public list of Indonesian root words (kata dasar).
pub const DEFAULT_ROOT_WORDS_URL: &str =
    "https://raw.githubusercontent.com/sastrawi/sastrawi/master/data/kata-dasar.txt";

/// Where the root-word list comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RootSource {
    /// A local file with one root per line.
    File { path: PathBuf },
    /// A remote text file with one root per line.
    Url { url: String },
    /// Roots supplied in memory.
    Inline { roots: Vec<String> },
    /// No roots at all.
    None,
}

impl Default for RootSource {
    fn default() -> Self {
        RootSource::Url {
            url: DEFAULT_ROOT_WORDS_URL.to_string(),
        }
    }
}

impl RootSource {
    /// Fetch the roots, trimmed and lowercased, with blank lines dropped.
    pub fn fetch(&self) -> Result<Vec<String>> {
        let raw = match self {
            RootSource::File { path } => {
                info!("Reading root words from {}", path.display());
                fs::read_to_string(path)?
            }
            RootSource::Url { url } => {
                info!("Downloading root words from {url}");
                download(url)?
            }
            RootSource::Inline { roots } => roots.join("\n"),
            RootSource::None => String::new(),
        };

        Ok(parse_roots(&raw))
    }
}

fn download(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .map_err(|e| EjaanError::fetch(format!("Failed to build HTTP client: {e}")))?;

    let response = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(|e| EjaanError::fetch(format!("Failed to download {url}: {e}")))?;

    response
        .text()
        .map_err(|e| EjaanError::fetch(format!("Failed to read body of {url}: {e}")))
}

fn parse_roots(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_fetch_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Makan").unwrap();
        writeln!(temp_file, "   ").unwrap();
        writeln!(temp_file, "  pukul  ").unwrap();
        temp_file.flush().unwrap();

        let source = RootSource::File {
            path: temp_file.path().to_path_buf(),
        };
        assert_eq!(source.fetch().unwrap(), vec!["makan", "pukul"]);
    }

    #[test]
    fn test_fetch_from_missing_file_fails() {
        let source = RootSource::File {
            path: PathBuf::from("/nonexistent/kata-dasar.txt"),
        };
        assert!(source.fetch().is_err());
    }

    #[test]
    fn test_inline_and_none() {
        let source = RootSource::Inline {
            roots: vec!["nasi".to_string(), "".to_string()],
        };
        assert_eq!(source.fetch().unwrap(), vec!["nasi"]);
        assert!(RootSource::None.fetch().unwrap().is_empty());
    }

    #[test]
    fn test_serde_representation() {
        let source: RootSource =
            serde_json::from_str(r#"{"type": "file", "path": "data/kata-dasar.txt"}"#).unwrap();
        assert_eq!(
            source,
            RootSource::File {
                path: PathBuf::from("data/kata-dasar.txt")
            }
        );

        let json = serde_json::to_string(&RootSource::None).unwrap();
        assert_eq!(json, r#"{"type":"none"}"#);
    }
}
