use crate::error::ScanError;
use crate::models::{Annotation, Config, FileReport};
use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Scans files for a fixed set of literal markers
#[derive(Debug)]
pub struct Scanner {
    markers: Vec<String>,
    patterns: Vec<Regex>,
    delimiter: String,
    strict: bool,
}

impl Scanner {
    /// Compile the configured markers
    pub fn new(config: &Config) -> Result<Self> {
        let config = config.clone().validate()?;
        let patterns = config
            .markers
            .iter()
            .map(|marker| build_marker_regex(marker))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            markers: config.markers,
            patterns,
            delimiter: config.delimiter,
            strict: config.strict,
        })
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Scan a single file for annotations
    pub fn scan(&self, path: &Path) -> Result<FileReport, ScanError> {
        debug!("Scanning {}", path.display());

        let file = File::open(path).map_err(|source| ScanError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        self.scan_reader(path, BufReader::new(file))
    }

    /// Scan any line-oriented source, attributing results to `path`
    pub fn scan_reader<R: BufRead>(&self, path: &Path, reader: R) -> Result<FileReport, ScanError> {
        let mut report = FileReport::new(path.to_path_buf(), &self.markers);

        for (line_number, chunk) in reader.split(b'\n').enumerate() {
            let bytes = chunk.map_err(|source| ScanError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
            report.lines += 1;

            let decoded = String::from_utf8_lossy(&bytes);
            let line = decoded.strip_suffix('\r').unwrap_or(&decoded);

            for (bucket, pattern) in report.buckets.iter_mut().zip(&self.patterns) {
                if !pattern.is_match(line) {
                    continue;
                }

                let text = match extract_text(line, pattern, &self.delimiter) {
                    Some(text) => text,
                    None if self.strict => {
                        return Err(ScanError::Format {
                            path: path.to_path_buf(),
                            line: line_number,
                            marker: bucket.marker.clone(),
                            delimiter: self.delimiter.clone(),
                        });
                    }
                    None => {
                        debug!(
                            "{}:{}: no `{}` after {}, recording empty text",
                            path.display(),
                            line_number,
                            self.delimiter,
                            bucket.marker
                        );
                        String::new()
                    }
                };

                bucket.annotations.push(Annotation::new(line_number, text));
            }
        }

        Ok(report)
    }
}

/// Build a regex matching `marker` literally
fn build_marker_regex(marker: &str) -> Result<Regex> {
    Regex::new(&regex::escape(marker))
        .with_context(|| format!("Failed to compile marker regex for {:?}", marker))
}

/// Extract annotation text from a line that matched `marker`
///
/// Removes the marker, takes everything after the first delimiter and trims it.
/// A leading `:` (as in `TODO: ...`) is dropped too. Returns `None` when the
/// line has no delimiter.
fn extract_text(line: &str, marker: &Regex, delimiter: &str) -> Option<String> {
    let without_marker = marker.replace_all(line, "");
    let (_, comment) = without_marker.split_once(delimiter)?;

    let text = comment.trim();
    let text = text.strip_prefix(':').unwrap_or(text).trim();

    Some(text.to_string())
}
