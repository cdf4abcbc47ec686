use crate::golden;
use crate::MismatchError;
use std::path::Path;

use crate as libtestdata;

/// A stand-in for a compiler pass: lists every top-level `fun` declared in
/// the fixture, one per line.
fn dump_functions(source: &str) -> String {
    source
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix("fun "))
        .filter_map(|rest| rest.split_once('('))
        .map(|(name, _)| format!("FUN {}", name.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn run_test(path: &Path) -> Result<(), MismatchError> {
    let source = std::fs::read_to_string(path)?;
    golden::assert_equals_to_file(&path.with_extension("txt"), &dump_functions(&source))
}

libtestdata::macros::fixture_tests! {
    root: "src/tests/fixtures/firLoadK2Compiled",
    pattern: r"^(.+)\.kt$",
    runner: run_test,
    exclude: ["notYetWired.kt"],
    target_backend: "JVM_IR",
}

#[test]
fn manifest_records_every_generated_test() {
    let manifest = libtestdata::_macro_runtime::manifest_from_macro_serialized(
        FIXTURE_MANIFEST,
    );

    assert_eq!(
        manifest.identifiers().into_iter().collect::<Vec<_>>(),
        vec![
            "annotationsGeneratedInBackend_MPP",
            "jvmOnly",
            "nested_simple",
            "simple",
            "simple_lang_ver_2_1",
        ],
    );
}

#[test]
fn manifest_remembers_its_suite() {
    let manifest = libtestdata::_macro_runtime::manifest_from_macro_serialized(
        FIXTURE_MANIFEST,
    );
    let suite = manifest.suite().unwrap();

    assert_eq!(suite.root, "src/tests/fixtures/firLoadK2Compiled");
    assert_eq!(suite.pattern.target_backend.as_deref(), Some("JVM_IR"));
    assert!(suite.pattern.excluded_paths.contains("notYetWired.kt"));
}

#[test]
fn excluded_and_foreign_backend_fixtures_are_skipped() {
    let manifest = libtestdata::_macro_runtime::manifest_from_macro_serialized(
        FIXTURE_MANIFEST,
    );

    assert!(manifest.get("notYetWired").is_none());
    assert!(manifest.get("wasmOnly").is_none());
}

#[test]
fn dump_functions_lists_declarations_in_order() {
    assert_eq!(
        dump_functions("fun a() {}\nval x = 1\n  fun b(x: Int) = x\n"),
        "FUN a\nFUN b",
    );
}
