mod fixture_tests_expander;
mod fixture_tests_input;


use fixture_tests_input::FixtureTestsInput;
use quote::quote;
use std::path::PathBuf;
use syn::parse_macro_input;

/// Generates one `#[test]` per fixture file in a directory, plus a guard test
/// that fails when the directory no longer matches the generated tests.
///
/// Fixtures are discovered at compile time, relative to the invoking crate's
/// `CARGO_MANIFEST_DIR`. Each generated test is named `test_<identifier>`
/// and hands its fixture's path to `runner`, which must be a
/// [`FixtureRunner`](libtestdata::FixtureRunner) (e.g. a
/// `fn(&Path) -> Result<(), MismatchError>`).
///
/// Adding or removing a fixture does not by itself make Cargo re-expand this
/// macro. The generated `all_fixtures_present` test rescans the directory at
/// run time and fails, listing every added and removed fixture, until the
/// crate is rebuilt (e.g. `touch` the file containing the invocation).
///
/// Invoke it once per module; it defines a `FIXTURE_MANIFEST` static and an
/// `all_fixtures_present` test function.
///
/// Example usage:
///
/// ```rust,ignore
/// use libtestdata::MismatchError;
/// use std::path::Path;
///
/// fn run_test(path: &Path) -> Result<(), MismatchError> {
///     let source = std::fs::read_to_string(path)?;
///     let actual = my_compiler::dump_declarations(&source);
///     libtestdata::golden::assert_equals_to_file(&path.with_extension("txt"), &actual)
/// }
///
/// libtestdata::macros::fixture_tests! {
///     root: "testData/firLoadK2Compiled",
///     pattern: r"^(.+)\.kt$",
///     runner: run_test,
///     exclude: ["notYetWired.kt"],
///     target_backend: "JVM_IR",
/// }
/// ```
#[proc_macro]
pub fn fixture_tests(
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as FixtureTestsInput);

    let manifest_dir = match std::env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(err) => {
            let error_msg = format!("Failed to read `CARGO_MANIFEST_DIR`: {err}");
            return quote! {
                compile_error!(#error_msg);
            }.into();
        }
    };

    match fixture_tests_expander::expand_fixture_tests(&input, &manifest_dir) {
        Ok(output) => output.into(),
        Err(error_msg) => quote! {
            compile_error!(#error_msg);
        }.into(),
    }
}
