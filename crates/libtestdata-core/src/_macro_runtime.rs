use crate::check_suite;
use crate::dispatch;
use crate::FixtureRecord;
use crate::FixtureRunner;
use crate::GeneratedManifest;
use crate::TestOutcome;
use std::path::Path;

pub fn manifest_from_macro_serialized(serialized_manifest: &[u8]) -> GeneratedManifest {
    bincode::serde::decode_from_slice::<GeneratedManifest, _>(
        serialized_manifest,
        bincode::config::standard()
    ).expect("Failed to deserialize generated fixture manifest").0
}

pub fn assert_all_fixtures_present(manifest: &GeneratedManifest, manifest_dir: &str) {
    let suite = manifest.suite()
        .expect("Generated fixture manifest is missing its suite definition");

    if let Err(err) = check_suite(suite, Path::new(manifest_dir), manifest) {
        panic!("{err}");
    }
}

pub fn run_generated_fixture<R: FixtureRunner>(
    manifest_dir: &str,
    root: &str,
    relative_path: &str,
    identifier: &str,
    runner: &R,
) {
    let record = FixtureRecord::new(relative_path, identifier);
    let root = Path::new(manifest_dir).join(root);

    if let TestOutcome::Failed { diagnostic } = dispatch(&record, &root, runner) {
        panic!("Fixture `{relative_path}` failed:\n{diagnostic}");
    }
}
