use crate::dispatch;
use crate::FixtureRunner;
use crate::FixtureSet;
use crate::TestOutcome;
use rayon::prelude::IntoParallelRefIterator;
use rayon::prelude::ParallelIterator;
use std::path::PathBuf;

/// Result of dispatching a single fixture
#[derive(Debug)]
pub struct FixtureRunResult {
    pub identifier: String,
    pub file_path: PathBuf,
    pub outcome: TestOutcome,
}

/// Collection of fixture run results, in fixture (path) order
#[derive(Debug)]
pub struct FixtureRunResults {
    pub results: Vec<FixtureRunResult>,
}

impl FixtureRunResults {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.outcome.is_passed())
    }

    pub fn failures(&self) -> impl Iterator<Item = &FixtureRunResult> {
        self.results.iter().filter(|r| !r.outcome.is_passed())
    }

    pub fn failure_report(&self) -> String {
        let failures: Vec<_> = self.failures().collect();
        let failures_len = failures.len();
        let results_len = self.results.len();
        let failures_text = failures
            .iter()
            .map(|r| format_detailed_failure(r))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{failures_len} of {results_len} fixtures failed:\n\n{failures_text}")
    }

    pub fn summary(&self) -> String {
        let all_passed = self.all_passed();
        let emoji = if all_passed { "✅" } else { "❌" };
        let banner = format!("{emoji} ========================================");
        let header = format!("{emoji} FIXTURE RUN SUMMARY");
        let total = self.results.len();

        if all_passed {
            format!("{banner}\n{header}\n{banner}\nTotal fixtures: {total}\nPassed: {total}\nFailed: 0\n\nAll fixtures passed!\n{banner}")
        } else {
            let failures: Vec<_> = self.failures().collect();
            let failures_len = failures.len();
            let passed = total - failures_len;
            let failed_list = failures
                .iter()
                .map(|r| format!("  - {}", r.identifier))
                .collect::<Vec<_>>()
                .join("\n");

            format!("{banner}\n{header}\n{banner}\nTotal fixtures: {total}\nPassed: {passed}\nFailed: {failures_len}\n\nFailed fixtures:\n{failed_list}\n\nSee the failure report for details.\n{banner}")
        }
    }
}

fn format_detailed_failure(result: &FixtureRunResult) -> String {
    let mut output = String::new();
    let identifier = &result.identifier;
    let file_path = result.file_path.display();

    output.push_str(&format!("❌ {identifier}\n"));
    output.push_str(&format!("   File: {file_path}\n"));

    if let Some(diagnostic) = result.outcome.diagnostic() {
        for line in diagnostic.lines() {
            output.push_str(&format!("   {line}\n"));
        }
    }

    output
}

/// Dispatches every fixture in `fixtures` in parallel.
///
/// Fixtures are independent, so the outcomes are the same as dispatching
/// them one at a time in path order; results come back in that order.
pub fn run_all<R>(fixtures: &FixtureSet, runner: &R) -> FixtureRunResults
where
    R: FixtureRunner + ?Sized,
{
    let results = fixtures
        .records()
        .par_iter()
        .map(|record| FixtureRunResult {
            identifier: record.identifier().to_string(),
            file_path: fixtures.path_of(record),
            outcome: dispatch(record, fixtures.root(), runner),
        })
        .collect();

    FixtureRunResults { results }
}
