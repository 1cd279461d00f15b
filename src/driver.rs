use crate::models::Config;
use crate::reporter;
use crate::scanner::Scanner;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of a driver run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Files scanned and reported
    pub scanned: usize,

    /// Files that matched the suffix but could not be scanned
    pub skipped: usize,

    /// Annotations found across all reported files
    pub annotations: usize,
}

/// List entries directly inside `dir` whose name ends with `suffix`
///
/// Not recursive; directories are left out. Results are sorted by file name.
pub fn list_candidates(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to list directory {}", dir.display()))?;

        if !entry.file_name().to_string_lossy().ends_with(suffix) {
            continue;
        }

        // Broken symlinks are kept so the scan reports them
        let path = entry.path();
        if path.is_dir() {
            debug!("Skipping directory {}", path.display());
            continue;
        }

        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Scan every matching file in `dir` and write a report block for each to `out`
///
/// A file that cannot be scanned is logged and skipped.
pub fn run(dir: &Path, config: &Config, out: &mut dyn Write) -> Result<RunSummary> {
    let scanner = Scanner::new(config)?;
    let files = list_candidates(dir, &config.file_suffix)?;

    debug!(
        "Found {} file(s) ending in {:?} in {}",
        files.len(),
        config.file_suffix,
        dir.display()
    );

    report_files(&scanner, &files, out)
}

/// Scan `files` in order and write a report block for each to `out`
pub fn report_files(scanner: &Scanner, files: &[PathBuf], out: &mut dyn Write) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for path in files {
        let report = match scanner.scan(path) {
            Ok(report) => report,
            Err(err) => {
                warn!("Skipping {}: {}", path.display(), err);
                summary.skipped += 1;
                continue;
            }
        };

        reporter::write_file_report(out, &report)?;
        summary.scanned += 1;
        summary.annotations += report.total_annotations();
    }

    out.flush().context("Failed to flush report output")?;
    Ok(summary)
}

/// Drop `output` from `files` when it names the same file
///
/// Keeps a report written into the scanned directory from being scanned.
pub fn exclude_output(files: Vec<PathBuf>, output: &Path) -> Vec<PathBuf> {
    let Ok(output) = output.canonicalize() else {
        return files;
    };

    files
        .into_iter()
        .filter(|path| path.canonicalize().map_or(true, |p| p != output))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn run_to_string(dir: &Path, config: &Config) -> (String, RunSummary) {
        let mut out = Vec::new();
        let summary = run(dir, config, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_list_candidates_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        write(&dir, "c.c", "");
        write(&dir, "b.txt", "");
        write(&dir, "a.c", "");
        fs::create_dir(dir.path().join("sub.c")).unwrap();
        write(&dir, "sub.c/nested.c", "");

        let files = list_candidates(dir.path(), ".c").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.c", "c.c"]);
    }

    #[test]
    fn test_list_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(list_candidates(&dir.path().join("missing"), ".c").is_err());
    }

    #[test]
    fn test_run_only_reports_matching_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.c", "// TODO in a\n");
        write(&dir, "b.txt", "// TODO in b\n");
        write(&dir, "c.c", "int c;\n");

        let (output, summary) = run_to_string(dir.path(), &Config::default());

        assert!(output.contains("FILENAME: a.c  ---  1 lines"));
        assert!(output.contains("FILENAME: c.c  ---  1 lines"));
        assert!(!output.contains("b.txt"));
        assert!(!output.contains("in b"));
        assert!(output.find("a.c").unwrap() < output.find("c.c").unwrap());
        assert_eq!(
            summary,
            RunSummary {
                scanned: 2,
                skipped: 0,
                annotations: 1,
            }
        );
    }

    #[test]
    fn test_run_end_to_end() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "main.c",
            "int main() { // TODO: implement\n  return 0; // FIXME: handle errors\n}\n",
        );

        let (output, _) = run_to_string(dir.path(), &Config::default());

        assert_eq!(
            output,
            "FILENAME: main.c  ---  3 lines\n\
             --------- TODO ----------\n\
             0:  implement\n\
             \n\
             --------- FIXME ----------\n\
             1:  handle errors\n\
             \n"
        );
    }

    #[test]
    fn test_strict_failure_skips_file_and_continues() {
        let dir = TempDir::new().unwrap();
        write(&dir, "bad.c", "/* TODO no delimiter */\n");
        write(&dir, "good.c", "// FIXME fine\n");

        let config = Config {
            strict: true,
            ..Config::default()
        };
        let (output, summary) = run_to_string(dir.path(), &config);

        assert!(!output.contains("bad.c"));
        assert!(output.contains("FILENAME: good.c"));
        assert_eq!(summary.scanned, 1);
        assert_eq!(summary.skipped, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.c"), dir.path().join("broken.c"))
            .unwrap();
        write(&dir, "ok.c", "// TODO still here\n");

        let (output, summary) = run_to_string(dir.path(), &Config::default());

        assert!(!output.contains("broken.c"));
        assert!(output.contains("0:  still here"));
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.scanned, 1);
    }

    #[test]
    fn test_exclude_output() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.c", "");
        write(&dir, "report.c", "stale");

        let files = list_candidates(dir.path(), ".c").unwrap();
        assert_eq!(files.len(), 2);

        let files = exclude_output(files, &dir.path().join("report.c"));
        assert_eq!(files, vec![dir.path().join("a.c")]);

        let untouched = exclude_output(files.clone(), &dir.path().join("new.c"));
        assert_eq!(untouched, files);
    }

    #[test]
    fn test_run_with_custom_suffix() {
        let dir = TempDir::new().unwrap();
        write(&dir, "lib.rs", "// TODO rust\n");
        write(&dir, "main.c", "// TODO c\n");

        let config = Config {
            file_suffix: ".rs".to_string(),
            ..Config::default()
        };
        let (output, _) = run_to_string(dir.path(), &config);

        assert!(output.contains("FILENAME: lib.rs"));
        assert!(!output.contains("main.c"));
    }
}
