use crate::fixture_tests_input::FixtureTestsInput;
use libtestdata_core::ManifestEntry;
use proc_macro2::TokenStream;
use quote::format_ident;
use quote::quote;
use std::path::Path;

/// Scans the suite described by `input` (relative to `manifest_dir`) and
/// emits the completeness guard plus one `#[test]` per discovered fixture.
///
/// The scan result is baked into the output as a serialized
/// [`GeneratedManifest`](libtestdata_core::GeneratedManifest) so the guard
/// can compare it against a fresh scan when the tests actually run.
pub(crate) fn expand_fixture_tests(
    input: &FixtureTestsInput,
    manifest_dir: &Path,
) -> Result<TokenStream, String> {
    let suite = input.suite();
    let manifest = suite
        .generate_manifest(manifest_dir)
        .map_err(|err| format!("Failed to discover fixtures: {err}"))?;

    let serialized_manifest =
        bincode::serde::encode_to_vec(&manifest, bincode::config::standard())
            .map_err(|err| format!("Failed to serialize fixture manifest: {err}"))?;

    let root = suite.root.as_str();
    let runner = &input.runner;
    let fixture_tests = manifest
        .entries()
        .iter()
        .map(|entry| fixture_test_fn(entry, root, runner))
        .collect::<Result<Vec<_>, _>>()?;

    let manifest_bytes = serialized_manifest;
    Ok(quote! {
        #[allow(dead_code)]
        static FIXTURE_MANIFEST: &[u8] = &[#(#manifest_bytes),*];

        /// Fails if fixture files were added or removed since these tests
        /// were generated.
        #[test]
        fn all_fixtures_present() {
            let manifest = libtestdata::_macro_runtime::manifest_from_macro_serialized(
                FIXTURE_MANIFEST,
            );
            libtestdata::_macro_runtime::assert_all_fixtures_present(
                &manifest,
                env!("CARGO_MANIFEST_DIR"),
            );
        }

        #(#fixture_tests)*
    })
}

fn fixture_test_fn(
    entry: &ManifestEntry,
    root: &str,
    runner: &syn::Path,
) -> Result<TokenStream, String> {
    let identifier = entry.identifier.as_str();
    let relative_path = entry.relative_path.as_deref().ok_or_else(|| {
        format!("Generated manifest entry `{identifier}` has no fixture path")
    })?;

    let fn_name = format_ident!("test_{}", identifier);
    let doc = format!(" Runs fixture `{relative_path}`.");

    Ok(quote! {
        #[doc = #doc]
        #[test]
        #[allow(non_snake_case)]
        fn #fn_name() {
            libtestdata::_macro_runtime::run_generated_fixture(
                env!("CARGO_MANIFEST_DIR"),
                #root,
                #relative_path,
                #identifier,
                &#runner,
            );
        }
    })
}
