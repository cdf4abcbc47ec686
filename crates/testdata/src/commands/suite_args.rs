use anyhow::Context;
use libtestdata::FixtureSuite;
use libtestdata::GeneratedManifest;
use libtestdata::MatchPatternSpec;
use std::path::Path;
use std::path::PathBuf;

/// Flags that define a fixture suite on the command line.
#[derive(Debug, clap::Args)]
pub(crate) struct SuiteArgs {
    #[arg(
        help="Fixture root directory. Relative roots are resolved against the \
             current directory.",
        long,
    )]
    pub root: String,

    #[arg(
        help="Regex a fixture's file name must match. If it has a capture \
             group, group 1 is used as the fixture's stem.",
        long,
    )]
    pub pattern: String,

    #[arg(
        help="Paths (relative to the root) of fixtures to leave out.",
        long,
        value_delimiter = ',',
    )]
    pub exclude: Vec<String>,

    #[arg(
        help="Regex of file names to leave out.",
        long,
    )]
    pub exclude_pattern: Option<String>,

    #[arg(
        help="Only consider files directly inside the root.",
        long,
    )]
    pub non_recursive: bool,

    #[arg(
        help="Leave out fixtures whose `// TARGET_BACKEND:` directives do not \
             name this backend.",
        long,
    )]
    pub target_backend: Option<String>,
}
impl SuiteArgs {
    pub fn to_suite(&self) -> FixtureSuite {
        let mut pattern = self.exclude
            .iter()
            .fold(MatchPatternSpec::new(&self.pattern), |pattern, path| {
                pattern.exclude_path(path)
            })
            .recursive(!self.non_recursive);
        if let Some(exclude_pattern) = &self.exclude_pattern {
            pattern = pattern.exclude_pattern(exclude_pattern);
        }
        if let Some(target_backend) = &self.target_backend {
            pattern = pattern.target_backend(target_backend);
        }

        FixtureSuite::new(&self.root, pattern)
    }
}

pub(crate) fn current_dir() -> anyhow::Result<PathBuf> {
    std::env::current_dir().context("Failed to determine the current directory")
}

/// Reads a manifest written by `testdata generate`, along with the suite
/// definition it was generated from.
pub(crate) fn read_manifest(
    manifest_path: &Path,
) -> anyhow::Result<(GeneratedManifest, FixtureSuite)> {
    let manifest = GeneratedManifest::read_json_file(manifest_path)?;
    let suite = manifest.suite().cloned().with_context(|| format!(
        "Manifest `{}` does not record the suite it was generated from",
        manifest_path.display(),
    ))?;
    Ok((manifest, suite))
}
