use crate::run_all;
use crate::scan;
use crate::tests::utils;
use crate::MismatchError;
use std::path::Path;

fn fail_on_b(path: &Path) -> Result<(), MismatchError> {
    if path.ends_with("b.kt") {
        Err(MismatchError::new("line 1: expected FUN box\nline 2: got nothing"))
    } else {
        Ok(())
    }
}

#[test]
fn results_come_back_in_path_order() {
    let dir = utils::fixture_dir(&["c.kt", "a.kt", "b.kt"]);
    let fixtures = scan(dir.path(), &utils::kt_pattern()).unwrap();

    let results = run_all(&fixtures, &fail_on_b);
    let identifiers: Vec<&str> = results.results.iter().map(|r| r.identifier.as_str()).collect();
    assert_eq!(identifiers, vec!["a", "b", "c"]);
    assert_eq!(results.results[1].file_path, dir.path().join("b.kt"));
}

#[test]
fn summary_of_a_clean_run() {
    let dir = utils::fixture_dir(&["a.kt", "c.kt"]);
    let fixtures = scan(dir.path(), &utils::kt_pattern()).unwrap();

    let results = run_all(&fixtures, &fail_on_b);
    assert!(results.all_passed());

    let summary = results.summary();
    assert!(summary.contains("Total fixtures: 2"), "{summary}");
    assert!(summary.contains("All fixtures passed!"), "{summary}");
}

#[test]
fn failure_report_includes_every_diagnostic_line() {
    let dir = utils::fixture_dir(&["a.kt", "b.kt", "c.kt"]);
    let fixtures = scan(dir.path(), &utils::kt_pattern()).unwrap();

    let results = run_all(&fixtures, &fail_on_b);
    assert!(!results.all_passed());
    assert_eq!(results.failures().count(), 1);

    let report = results.failure_report();
    assert!(report.starts_with("1 of 3 fixtures failed"), "{report}");
    assert!(report.contains("❌ b\n"), "{report}");
    assert!(report.contains("   line 1: expected FUN box\n   line 2: got nothing"), "{report}");

    let summary = results.summary();
    assert!(summary.contains("Passed: 2\nFailed: 1"), "{summary}");
    assert!(summary.contains("  - b"), "{summary}");
    assert!(summary.contains("See the failure report for details."), "{summary}");
    assert!(!summary.contains("above"), "{summary}");
}
