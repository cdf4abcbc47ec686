use crate::MatchPattern;
use std::path::Path;
use tempfile::TempDir;

pub const KT_PATTERN: &str = r"^(.+)\.kt$";

pub fn kt_pattern() -> MatchPattern {
    MatchPattern::new(KT_PATTERN).unwrap()
}

/// Writes `content` to `relative_path` under `root`, creating parent
/// directories as needed.
pub fn write_fixture(root: &Path, relative_path: &str, content: &str) {
    let path = root.join(relative_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

/// Creates a temp dir containing an empty file for each of `relative_paths`.
pub fn fixture_dir(relative_paths: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for relative_path in relative_paths {
        write_fixture(dir.path(), relative_path, "fun box() = \"OK\"\n");
    }
    dir
}
