//! todo-audit - report annotation comments in source files
//!
//! Lists the files directly inside a directory, keeps those with a given
//! suffix (`.c` by default), and reports every line carrying one of the
//! configured markers (`TODO`, `FIXME` by default) together with the comment
//! text that follows the `//` delimiter.
//!
//! Line numbers in reports are 0-indexed.
//!
//! # Example
//!
//! ```rust,no_run
//! use todo_audit::*;
//! use std::path::Path;
//!
//! let config = Config::default();
//! let scanner = Scanner::new(&config).unwrap();
//!
//! let report = scanner.scan(Path::new("main.c")).unwrap();
//! for annotation in report.annotations_for("TODO").unwrap_or_default() {
//!     println!("{}: {}", annotation.line_number, annotation.text);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod models;
pub mod reporter;
pub mod scanner;

// Re-export commonly used types
pub use driver::{RunSummary, run};
pub use error::ScanError;
pub use models::{Annotation, Config, FileReport, MarkerBucket};
pub use scanner::Scanner;
