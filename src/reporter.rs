use crate::models::FileReport;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Open the report destination: a file if given, stdout otherwise
pub fn open_output(output_path: Option<&Path>) -> Result<Box<dyn Write>> {
    match output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Format one file's report as a text block
///
/// Marker sections with no annotations are left out.
pub fn format_file_report(report: &FileReport) -> String {
    let mut output = format!(
        "FILENAME: {}  ---  {} lines\n",
        report.filename(),
        report.lines
    );

    for bucket in &report.buckets {
        if bucket.annotations.is_empty() {
            continue;
        }

        output.push_str(&format!("--------- {} ----------\n", bucket.marker));
        for annotation in &bucket.annotations {
            output.push_str(&format!(
                "{}:  {}\n\n",
                annotation.line_number, annotation.text
            ));
        }
    }

    output
}

/// Write one file's report to `out`
pub fn write_file_report(out: &mut dyn Write, report: &FileReport) -> Result<()> {
    out.write_all(format_file_report(report).as_bytes())
        .with_context(|| format!("Failed to write report for {}", report.path.display()))
}
