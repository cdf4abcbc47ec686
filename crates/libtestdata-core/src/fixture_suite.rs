use crate::scan;
use crate::ConfigurationError;
use crate::FixtureSet;
use crate::GeneratedManifest;
use crate::MatchPatternSpec;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// The one shared definition of a fixture directory.
///
/// Both the generator (which decides what tests to emit) and the completeness
/// guard (which rescans at test time) are driven from the same
/// `FixtureSuite`, so they cannot disagree about which files are fixtures.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FixtureSuite {
    /// Fixture root. Relative roots are resolved against a caller-supplied
    /// base directory (the crate's manifest dir for generated tests, the
    /// working directory for the CLI).
    pub root: String,
    pub pattern: MatchPatternSpec,
}
impl FixtureSuite {
    pub fn new(root: impl Into<String>, pattern: MatchPatternSpec) -> Self {
        Self {
            root: root.into(),
            pattern,
        }
    }

    pub fn resolve_root(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.root)
    }

    pub fn scan(&self, base_dir: &Path) -> Result<FixtureSet, ConfigurationError> {
        let pattern = self.pattern.compile()?;
        scan(&self.resolve_root(base_dir), &pattern)
    }

    /// Scans the suite and freezes the result into a manifest that remembers
    /// this suite definition.
    pub fn generate_manifest(
        &self,
        base_dir: &Path,
    ) -> Result<GeneratedManifest, ConfigurationError> {
        let fixtures = self.scan(base_dir)?;
        Ok(GeneratedManifest::from_fixture_set(Some(self.clone()), &fixtures))
    }
}
