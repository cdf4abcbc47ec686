use crate::commands::CommandEnum;
use crate::Cli;
use crate::CommandResult;
use clap::Parser;
use libtestdata::FixtureSuite;
use libtestdata::GeneratedManifest;
use libtestdata::MatchPatternSpec;
use std::path::Path;

fn write_fixture(root: &Path, relative_path: &str, content: &str) {
    let path = root.join(relative_path);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Writes a manifest for `<dir>/fixtures` the way `testdata generate` would.
fn generate_manifest(dir: &Path) -> std::path::PathBuf {
    let suite = FixtureSuite::new(
        "fixtures",
        MatchPatternSpec::new(r"^(.+)\.kt$").exclude_path("skip.kt"),
    );
    let manifest_path = dir.join("manifest.json");
    suite.generate_manifest(dir).unwrap().write_json_file(&manifest_path).unwrap();
    manifest_path
}

async fn run_cli(args: &[&str]) -> CommandResult {
    let mut cli = Cli::try_parse_from(args).unwrap();
    let command = cli.cmd.take().unwrap();
    command.run(cli).await
}

#[test]
fn suite_flags_build_the_suite_definition() {
    let cli = Cli::try_parse_from([
        "testdata",
        "list",
        "--root", "testData",
        "--pattern", r"^(.+)\.kt$",
        "--exclude", "a.kt,sub/b.kt",
        "--exclude-pattern", r"\.fir\.kt$",
        "--non-recursive",
        "--target-backend", "JVM_IR",
    ]).unwrap();

    let Some(CommandEnum::List(cmd)) = cli.cmd else {
        panic!("Expected a `list` command");
    };
    assert_eq!(
        cmd.suite.to_suite(),
        FixtureSuite::new(
            "testData",
            MatchPatternSpec::new(r"^(.+)\.kt$")
                .exclude_path("a.kt")
                .exclude_path("sub/b.kt")
                .exclude_pattern(r"\.fir\.kt$")
                .recursive(false)
                .target_backend("JVM_IR"),
        ),
    );
}

#[test]
fn verbose_is_accepted_after_the_subcommand() {
    let cli = Cli::try_parse_from([
        "testdata", "check", "--manifest", "m.json", "-v",
    ]).unwrap();
    assert!(cli.verbose);
}

#[test]
fn run_requires_a_command() {
    assert!(Cli::try_parse_from(["testdata", "run", "--manifest", "m.json"]).is_err());
}

#[tokio::test]
async fn check_passes_for_an_up_to_date_manifest() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "fixtures/a.kt", "");
    write_fixture(dir.path(), "fixtures/skip.kt", "");
    let manifest_path = generate_manifest(dir.path());

    let result = run_cli(&[
        "testdata",
        "check",
        "--manifest", manifest_path.to_str().unwrap(),
        "--base-dir", dir.path().to_str().unwrap(),
    ]).await;

    assert!(result.stderr.is_none(), "{:?}", result.stderr);
    assert!(result.stdout.unwrap().contains("All 1 fixtures"));
}

#[tokio::test]
async fn check_reports_fixtures_added_after_generation() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "fixtures/a.kt", "");
    let manifest_path = generate_manifest(dir.path());
    write_fixture(dir.path(), "fixtures/b.kt", "");

    let result = run_cli(&[
        "testdata",
        "check",
        "--manifest", manifest_path.to_str().unwrap(),
        "--base-dir", dir.path().to_str().unwrap(),
    ]).await;

    let stderr = result.stderr.unwrap();
    assert!(stderr.contains("1 missing, 0 stale"), "{stderr}");
    assert!(stderr.contains("  + b (b.kt)"), "{stderr}");
}

#[tokio::test]
async fn check_reports_unreadable_manifests() {
    let dir = tempfile::tempdir().unwrap();
    let manifest_path = dir.path().join("nope.json");

    let result = run_cli(&[
        "testdata",
        "check",
        "--manifest", manifest_path.to_str().unwrap(),
    ]).await;

    let stderr = result.stderr.unwrap();
    assert!(stderr.contains("Failure while reading manifest"), "{stderr}");
}

#[cfg(unix)]
#[tokio::test]
async fn run_reports_each_failing_fixture() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "fixtures/good.kt", "OK\n");
    write_fixture(dir.path(), "fixtures/bad.kt", "nope\n");
    let manifest_path = generate_manifest(dir.path());

    let result = run_cli(&[
        "testdata",
        "run",
        "--manifest", manifest_path.to_str().unwrap(),
        "--base-dir", dir.path().to_str().unwrap(),
        "--",
        "sh", "-c", r#"grep -q OK "$0""#,
    ]).await;

    let stdout = result.stdout.unwrap();
    assert!(stdout.contains("Total fixtures: 2"), "{stdout}");
    let stderr = result.stderr.unwrap();
    assert!(stderr.contains("1 of 2 fixtures failed"), "{stderr}");
    assert!(stderr.contains("bad"), "{stderr}");
    assert!(!stderr.contains("good.kt"), "{stderr}");
}

#[cfg(unix)]
#[tokio::test]
async fn run_passes_when_every_fixture_passes() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path(), "fixtures/a.kt", "");
    write_fixture(dir.path(), "fixtures/sub/b.kt", "");
    let manifest_path = generate_manifest(dir.path());

    let result = run_cli(&[
        "testdata",
        "run",
        "--manifest", manifest_path.to_str().unwrap(),
        "--base-dir", dir.path().to_str().unwrap(),
        "--",
        "true",
    ]).await;

    assert!(result.stderr.is_none(), "{:?}", result.stderr);
    assert!(result.stdout.unwrap().contains("All fixtures passed!"));
}
