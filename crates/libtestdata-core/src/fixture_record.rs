use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// One discovered fixture file.
///
/// Ordering is by `relative_path` first, which is the order fixtures appear
/// in a [`FixtureSet`](crate::FixtureSet).
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct FixtureRecord {
    relative_path: String,
    identifier: String,
}
impl FixtureRecord {
    pub fn new(relative_path: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            identifier: identifier.into(),
        }
    }

    /// Path of the fixture relative to its suite root, `/`-separated on every
    /// platform.
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Joins this fixture's relative path onto `root` using the platform's
    /// separator.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        self.relative_path
            .split('/')
            .fold(root.to_path_buf(), |path, segment| path.join(segment))
    }
}
