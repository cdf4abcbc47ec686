use crate::directives;
use crate::identifier;
use crate::ConfigurationError;
use crate::FixtureRecord;
use crate::FixtureSet;
use crate::MatchPattern;
use std::path::Path;
use walkdir::WalkDir;

/// Finds every fixture under `root` that `pattern` selects.
///
/// Only regular files are candidates (symlinks are followed); directories are
/// never matched themselves. The returned set is sorted by relative path and
/// each record carries an identifier that is unique within the set.
///
/// This reads the filesystem and nothing else, so two calls can return
/// different sets if files were added or removed in between. That is exactly
/// what the completeness check relies on.
pub fn scan(root: &Path, pattern: &MatchPattern) -> Result<FixtureSet, ConfigurationError> {
    if !root.exists() {
        return Err(ConfigurationError::RootNotFound {
            root: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(ConfigurationError::RootNotADirectory {
            root: root.to_path_buf(),
        });
    }

    let mut walker = WalkDir::new(root).follow_links(true).min_depth(1);
    if !pattern.recursive() {
        walker = walker.max_depth(1);
    }

    // (relative_path, stem)
    let mut candidates: Vec<(String, String)> = vec![];
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if is_dangling_link(&err) => {
                if let Some(path) = err.path() {
                    tracing::debug!(path = %path.display(), "skipping dangling symlink");
                }
                continue;
            },
            Err(err) => return Err(ConfigurationError::WalkError {
                root: root.to_path_buf(),
                err,
            }),
        };

        let path = entry.path();
        if !entry.file_type().is_file() {
            tracing::trace!(path = %path.display(), "skipping non-file");
            continue;
        }

        let lossy_file_name = entry.file_name().to_string_lossy();
        if !pattern.matches_file_name(&lossy_file_name) {
            continue;
        }
        let file_name = entry.file_name()
            .to_str()
            .ok_or_else(|| ConfigurationError::NonUtf8Path {
                path: path.to_path_buf(),
            })?;

        let relative_path = relative_path_string(root, path)?;
        if pattern.is_excluded(&relative_path, file_name) {
            tracing::debug!(relative_path = %relative_path, "skipping excluded fixture");
            continue;
        }

        if let Some(target) = pattern.target_backend() {
            let bytes = std::fs::read(path).map_err(|err| {
                ConfigurationError::DirectiveReadError {
                    path: path.to_path_buf(),
                    err,
                }
            })?;
            let content = String::from_utf8_lossy(&bytes);
            if !directives::is_compatible_target(&content, target) {
                tracing::debug!(relative_path = %relative_path, backend = target, "skipping fixture for another backend");
                continue;
            }
        }

        let stem = pattern.stem(file_name).to_string();
        candidates.push((relative_path, stem));
    }

    candidates.sort_by(|(a, _), (b, _)| a.cmp(b));

    let bases = candidates
        .iter()
        .map(|(relative_path, stem)| identifier::base_identifier(relative_path, stem))
        .collect();
    let identifiers = identifier::disambiguate(bases);

    let records: Vec<FixtureRecord> = candidates
        .into_iter()
        .zip(identifiers)
        .map(|((relative_path, _stem), identifier)| FixtureRecord::new(relative_path, identifier))
        .collect();

    tracing::debug!(
        root = %root.display(),
        fixtures = records.len(),
        "scanned fixture root"
    );

    Ok(FixtureSet::new(root.to_path_buf(), records))
}

/// A followed symlink whose target is gone. It can never be a fixture, so it
/// does not fail the scan. Link loops and permission errors still do.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.path().is_some()
        && err.io_error().map(std::io::Error::kind) == Some(std::io::ErrorKind::NotFound)
}

/// `path` relative to `root`, joined with `/` regardless of platform.
fn relative_path_string(root: &Path, path: &Path) -> Result<String, ConfigurationError> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let segments = relative
        .components()
        .map(|component| {
            component.as_os_str().to_str().ok_or_else(|| ConfigurationError::NonUtf8Path {
                path: path.to_path_buf(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(segments.join("/"))
}
