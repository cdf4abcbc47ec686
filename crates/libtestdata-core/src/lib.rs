//! Core libraries provided by the `libtestdata` crate.
//!
//! A fixture suite is a directory of input files where each file is one test
//! scenario. This crate discovers those files ([`scan`]), derives a stable
//! test identifier for each one, checks that a previously generated set of
//! tests still matches what is on disk ([`verify`]), and hands individual
//! fixtures to an external [`FixtureRunner`] ([`dispatch`]).

#[doc(hidden)]
pub mod _macro_runtime;
mod command_runner;
mod completeness;
mod configuration_error;
pub mod directives;
mod dispatch;
mod fixture_index;
mod fixture_record;
mod fixture_set;
mod fixture_suite;
mod generated_manifest;
pub mod golden;
mod identifier;
mod match_pattern;
mod run_results;

pub use command_runner::CommandRunner;
pub use completeness::check_suite;
pub use completeness::verify;
pub use completeness::verify_identifiers;
pub use completeness::CompletenessError;
pub use completeness::Discrepancy;
pub use completeness::GuardError;
pub use configuration_error::ConfigurationError;
pub use dispatch::dispatch;
pub use dispatch::FixtureRunner;
pub use dispatch::MismatchError;
pub use dispatch::TestOutcome;
pub use fixture_index::scan;
pub use fixture_record::FixtureRecord;
pub use fixture_set::FixtureSet;
pub use fixture_suite::FixtureSuite;
pub use generated_manifest::GeneratedManifest;
pub use generated_manifest::ManifestEntry;
pub use generated_manifest::ManifestError;
pub use identifier::base_identifier;
pub use match_pattern::MatchPattern;
pub use match_pattern::MatchPatternSpec;
pub use run_results::run_all;
pub use run_results::FixtureRunResult;
pub use run_results::FixtureRunResults;
