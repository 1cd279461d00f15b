use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single marker occurrence found in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Line where the marker was found (0-indexed)
    pub line_number: usize,

    /// Comment text following the delimiter, marker removed and trimmed
    pub text: String,
}

impl Annotation {
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }
}

/// All annotations recorded for one marker, in order of appearance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerBucket {
    pub marker: String,
    pub annotations: Vec<Annotation>,
}

/// Scan result for a single file
#[derive(Debug, Clone)]
pub struct FileReport {
    /// Path of the scanned file
    pub path: PathBuf,

    /// Total number of lines read
    pub lines: usize,

    /// One bucket per configured marker, in configured order
    pub buckets: Vec<MarkerBucket>,
}

impl FileReport {
    /// Create an empty report with a bucket for each marker
    pub fn new(path: PathBuf, markers: &[String]) -> Self {
        let buckets = markers
            .iter()
            .map(|marker| MarkerBucket {
                marker: marker.clone(),
                annotations: Vec::new(),
            })
            .collect();

        Self {
            path,
            lines: 0,
            buckets,
        }
    }

    /// File name as shown in the report header
    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Annotations recorded for `marker`, or `None` if it was not configured
    pub fn annotations_for(&self, marker: &str) -> Option<&[Annotation]> {
        self.buckets
            .iter()
            .find(|bucket| bucket.marker == marker)
            .map(|bucket| bucket.annotations.as_slice())
    }

    /// Total number of annotations across all markers
    pub fn total_annotations(&self) -> usize {
        self.buckets.iter().map(|b| b.annotations.len()).sum()
    }
}

/// Configuration for the annotation scanner and driver
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Markers to search for, in report order
    #[serde(default = "default_markers")]
    pub markers: Vec<String>,

    /// Only files whose name ends with this suffix are scanned
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,

    /// Comment token after which annotation text begins
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Treat a matched line without a delimiter as an error
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            markers: default_markers(),
            file_suffix: default_file_suffix(),
            delimiter: default_delimiter(),
            strict: false,
        }
    }
}

fn default_markers() -> Vec<String> {
    vec!["TODO".to_string(), "FIXME".to_string()]
}

fn default_file_suffix() -> String {
    ".c".to_string()
}

fn default_delimiter() -> String {
    "//".to_string()
}
