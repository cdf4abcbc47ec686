use crate::golden::assert_equals_to_file;

#[test]
fn equal_output_passes() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().join("simple.txt");
    std::fs::write(&expected, "FUN box\nFUN main\n").unwrap();

    assert_eq!(assert_equals_to_file(&expected, "FUN box\nFUN main"), Ok(()));
}

#[test]
fn trailing_whitespace_and_blank_lines_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().join("simple.txt");
    std::fs::write(&expected, "FUN box   \nFUN main\n\n\n").unwrap();

    assert!(assert_equals_to_file(&expected, "FUN box\nFUN main\t\n").is_ok());
}

#[test]
fn mismatch_reports_differing_lines() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().join("simple.txt");
    std::fs::write(&expected, "FUN box\nFUN main\n").unwrap();

    let err = assert_equals_to_file(&expected, "FUN box\nFUN other\nFUN extra").unwrap_err();
    let message = err.message();
    assert!(message.contains("Actual output differs"), "{message}");
    assert!(message.contains("     2 - FUN main"), "{message}");
    assert!(message.contains("     2 + FUN other"), "{message}");
    assert!(message.contains("     3 + FUN extra"), "{message}");
    assert!(!message.contains("FUN box"), "{message}");
}

#[test]
fn long_mismatches_are_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().join("long.txt");
    let expected_text: String = (0..30).map(|i| format!("line {i}\n")).collect();
    std::fs::write(&expected, expected_text).unwrap();

    let actual: String = (0..30).map(|i| format!("other {i}\n")).collect();
    let err = assert_equals_to_file(&expected, &actual).unwrap_err();
    assert!(err.message().contains("... and 10 more differing lines"), "{}", err.message());
}

/// A missing golden file is generated from the actual output, and the
/// comparison fails once so the new file gets looked at.
#[test]
fn missing_expected_file_is_created_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().join("nested").join("new.txt");

    let err = assert_equals_to_file(&expected, "FUN box  \n").unwrap_err();
    assert!(err.message().contains("did not exist"), "{}", err.message());
    assert_eq!(std::fs::read_to_string(&expected).unwrap(), "FUN box\n");

    assert!(assert_equals_to_file(&expected, "FUN box").is_ok());
}
