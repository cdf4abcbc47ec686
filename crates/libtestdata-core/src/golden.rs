//! Comparing a fixture runner's output against an expected ("golden") file.

use crate::MismatchError;
use std::path::Path;

/// Maximum number of differing lines included in a mismatch diagnostic.
const MAX_REPORTED_DIFFERENCES: usize = 20;

/// Compares `actual` against the contents of `expected_path`.
///
/// Both sides are normalized first: trailing whitespace is dropped from every
/// line, and trailing blank lines are ignored.
///
/// If `expected_path` does not exist yet it is written with `actual` and the
/// comparison still fails, so that the new golden file gets reviewed before
/// the next run passes.
pub fn assert_equals_to_file(expected_path: &Path, actual: &str) -> Result<(), MismatchError> {
    let actual = normalize(actual);

    if !expected_path.exists() {
        if let Some(parent) = expected_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(expected_path, format!("{actual}\n"))?;
        tracing::debug!(path = %expected_path.display(), "created missing golden file");
        return Err(MismatchError::new(format!(
            "Expected data file did not exist. Generating: {}",
            expected_path.display(),
        )));
    }

    let expected = normalize(&std::fs::read_to_string(expected_path)?);
    if expected == actual {
        return Ok(());
    }

    Err(MismatchError::new(format!(
        "Actual output differs from `{}`:\n{}",
        expected_path.display(),
        line_diff(&expected, &actual),
    )))
}

fn normalize(text: &str) -> String {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    lines.join("\n").trim_end_matches('\n').to_string()
}

fn line_diff(expected: &str, actual: &str) -> String {
    let expected: Vec<&str> = expected.lines().collect();
    let actual: Vec<&str> = actual.lines().collect();
    let line_count = expected.len().max(actual.len());

    let differing: Vec<usize> = (0..line_count)
        .filter(|&idx| expected.get(idx) != actual.get(idx))
        .collect();

    let mut diff = String::new();
    for &idx in differing.iter().take(MAX_REPORTED_DIFFERENCES) {
        let line_num = idx + 1;
        if let Some(line) = expected.get(idx) {
            diff.push_str(&format!("  {line_num:>4} - {line}\n"));
        }
        if let Some(line) = actual.get(idx) {
            diff.push_str(&format!("  {line_num:>4} + {line}\n"));
        }
    }
    if differing.len() > MAX_REPORTED_DIFFERENCES {
        let remaining = differing.len() - MAX_REPORTED_DIFFERENCES;
        diff.push_str(&format!("  ... and {remaining} more differing lines\n"));
    }

    diff
}
