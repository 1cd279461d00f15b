use crate::models::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo-audit")]
#[command(version, about = "Report TODO and FIXME comments in a directory", long_about = None)]
pub struct Cli {
    /// Directory to scan (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Marker to search for; repeat for several (replaces configured markers)
    #[arg(short, long = "marker", value_name = "MARKER")]
    pub markers: Vec<String>,

    /// Only scan files whose name ends with this suffix
    #[arg(short, long)]
    pub suffix: Option<String>,

    /// Comment delimiter that precedes annotation text
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Fail a file when a marker line has no comment delimiter
    #[arg(long)]
    pub strict: bool,

    /// Path to custom config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the resolved config to this file as TOML and exit
    #[arg(long, value_name = "FILE")]
    pub init_config: Option<PathBuf>,

    /// Output file (if not specified, writes to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if !self.markers.is_empty() {
            config.markers = self.markers.clone();
        }
        if let Some(ref suffix) = self.suffix {
            config.file_suffix = suffix.clone();
        }
        if let Some(ref delimiter) = self.delimiter {
            config.delimiter = delimiter.clone();
        }
        if self.strict {
            config.strict = true;
        }
        config
    }
}
