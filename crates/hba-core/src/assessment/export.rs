use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::domain::AssessmentInput;
use super::evaluation::ScoreResult;
use super::report::format_report;

/// Raised when a report cannot be written to its destination.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Deterministic file stem derived from the project title: lower-cased, runs
/// of non-alphanumeric characters collapsed to single underscores, with
/// `"project"` as the fallback for an empty title.
pub fn report_file_stem(title: &str) -> String {
    let mut stem = String::new();
    let mut gap = false;

    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            if gap && !stem.is_empty() {
                stem.push('_');
            }
            gap = false;
            stem.push(ch.to_ascii_lowercase());
        } else {
            gap = true;
        }
    }

    if stem.is_empty() {
        "project".to_string()
    } else {
        stem
    }
}

/// Write the narrative report into `dir`, returning the path of the document.
///
/// The document is staged in a sibling temporary file and renamed into place
/// once fully flushed, so a failed write never leaves partial output behind.
pub fn export_report(
    input: &AssessmentInput,
    result: &ScoreResult,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let document = format_report(input, result);
    let stem = report_file_stem(&input.title);
    let path = dir.join(format!("{stem}.md"));
    let staging = dir.join(format!("{stem}.md.tmp"));

    let written = write_flushed(&staging, document.as_bytes())
        .and_then(|()| fs::rename(&staging, &path));
    if let Err(error) = written {
        let _ = fs::remove_file(&staging);
        return Err(error.into());
    }

    Ok(path)
}

fn write_flushed(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.flush()
}
