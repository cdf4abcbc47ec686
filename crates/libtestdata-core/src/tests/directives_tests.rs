use crate::directives::is_compatible_target;
use crate::directives::target_backends;

#[test]
fn collects_backends_from_every_directive_line() {
    let content = "\
// TARGET_BACKEND: WASM
// RUN_THIRD_PARTY_OPTIMIZER
  // TARGET_BACKEND: JVM_IR, NATIVE ,
fun box() = \"OK\"
";
    assert_eq!(target_backends(content), vec!["WASM", "JVM_IR", "NATIVE"]);
}

#[test]
fn files_without_directives_apply_to_every_backend() {
    assert!(is_compatible_target("fun box() = \"OK\"", "JVM_IR"));
}

#[test]
fn listed_backend_is_compatible() {
    assert!(is_compatible_target("// TARGET_BACKEND: WASM, JVM_IR\n", "JVM_IR"));
}

#[test]
fn unlisted_backend_is_incompatible() {
    assert!(!is_compatible_target("// TARGET_BACKEND: WASM\n", "JVM_IR"));
}

#[test]
fn any_backend_is_compatible_with_everything() {
    assert!(is_compatible_target("// TARGET_BACKEND: ANY\n", "JS_IR"));
}

#[test]
fn other_directives_are_ignored() {
    assert!(target_backends("// IGNORE_BACKEND: JS_IR, JS_IR_ES6\n").is_empty());
}
