use crate::ConfigurationError;
use crate::FixtureSet;
use crate::FixtureSuite;
use crate::GeneratedManifest;
use std::path::Path;
use thiserror::Error;

/// A single test/fixture that only exists on one side of the comparison.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Discrepancy {
    pub identifier: String,
    pub relative_path: Option<String>,
}
impl std::fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.relative_path {
            Some(relative_path) => write!(f, "{} ({relative_path})", self.identifier),
            None => write!(f, "{}", self.identifier),
        }
    }
}

/// Fixture files and generated tests have drifted apart.
///
/// Carries every discrepancy found by one comparison so that a single run
/// tells the user everything that needs regenerating.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{}", format_report(.missing, .stale))]
pub struct CompletenessError {
    /// Fixtures on disk with no generated test, sorted by identifier.
    pub missing: Vec<Discrepancy>,

    /// Generated tests whose fixture no longer exists, sorted by identifier.
    pub stale: Vec<Discrepancy>,
}
impl CompletenessError {
    pub fn missing_identifiers(&self) -> Vec<&str> {
        self.missing.iter().map(|d| d.identifier.as_str()).collect()
    }

    pub fn stale_identifiers(&self) -> Vec<&str> {
        self.stale.iter().map(|d| d.identifier.as_str()).collect()
    }
}

fn format_report(missing: &[Discrepancy], stale: &[Discrepancy]) -> String {
    let mut report = format!(
        "Fixture files and generated tests are out of sync ({} missing, {} stale). \
        Rerun the test generator.",
        missing.len(),
        stale.len(),
    );

    if !missing.is_empty() {
        report.push_str("\n\nFixtures with no generated test:\n");
        report.push_str(
            &missing.iter()
                .map(|d| format!("  + {d}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    if !stale.is_empty() {
        report.push_str("\n\nGenerated tests whose fixture no longer exists:\n");
        report.push_str(
            &stale.iter()
                .map(|d| format!("  - {d}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    report
}

/// Compares a fresh scan against the tests that were generated.
///
/// Succeeds iff the set of identifiers in `current` equals the set of
/// identifiers in `known`.
pub fn verify(
    current: &FixtureSet,
    known: &GeneratedManifest,
) -> Result<(), CompletenessError> {
    let current_ids = current.identifiers();
    let known_ids = known.identifiers();

    let missing: Vec<Discrepancy> = current_ids
        .difference(&known_ids)
        .map(|identifier| Discrepancy {
            identifier: identifier.to_string(),
            relative_path: current
                .get(identifier)
                .map(|record| record.relative_path().to_string()),
        })
        .collect();

    let stale: Vec<Discrepancy> = known_ids
        .difference(&current_ids)
        .map(|identifier| Discrepancy {
            identifier: identifier.to_string(),
            relative_path: known
                .get(identifier)
                .and_then(|entry| entry.relative_path.clone()),
        })
        .collect();

    tracing::debug!(
        current = current_ids.len(),
        known = known_ids.len(),
        missing = missing.len(),
        stale = stale.len(),
        "verified fixture completeness"
    );

    if missing.is_empty() && stale.is_empty() {
        Ok(())
    } else {
        Err(CompletenessError { missing, stale })
    }
}

/// [`verify()`] against a bare list of identifiers.
pub fn verify_identifiers<'a, I>(current: &FixtureSet, known: I) -> Result<(), CompletenessError>
where
    I: IntoIterator<Item = &'a str>,
{
    verify(current, &GeneratedManifest::from_identifiers(known))
}

/// Rescans `suite` right now and checks the result against `known`.
///
/// This is what a completeness guard test calls. Every call performs a
/// fresh scan.
pub fn check_suite(
    suite: &FixtureSuite,
    base_dir: &Path,
    known: &GeneratedManifest,
) -> Result<(), GuardError> {
    let current = suite.scan(base_dir)?;
    verify(&current, known)?;
    Ok(())
}

#[derive(Debug, Error)]
pub enum GuardError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Incomplete(#[from] CompletenessError),
}
