use crate::FixtureSet;
use crate::FixtureSuite;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, ManifestError>;

/// One test that was emitted at generation time.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ManifestEntry {
    pub identifier: String,

    #[serde(default)]
    pub relative_path: Option<String>,
}

/// The frozen set of tests a generator emitted.
///
/// A manifest is produced once per generator run and is never edited
/// afterwards; the only way to change one is to generate it again. When it
/// was produced from a [`FixtureSuite`] it remembers that suite, so the
/// completeness check can rescan with exactly the same definition.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GeneratedManifest {
    #[serde(default)]
    suite: Option<FixtureSuite>,
    entries: Vec<ManifestEntry>,
}
impl GeneratedManifest {
    pub fn from_fixture_set(suite: Option<FixtureSuite>, fixtures: &FixtureSet) -> Self {
        Self {
            suite,
            entries: fixtures
                .iter()
                .map(|record| ManifestEntry {
                    identifier: record.identifier().to_string(),
                    relative_path: Some(record.relative_path().to_string()),
                })
                .collect(),
        }
    }

    /// Builds a manifest from bare identifiers, e.g. a hand-maintained list of
    /// test names.
    pub fn from_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suite: None,
            entries: identifiers
                .into_iter()
                .map(|identifier| ManifestEntry {
                    identifier: identifier.into(),
                    relative_path: None,
                })
                .collect(),
        }
    }

    pub fn suite(&self) -> Option<&FixtureSuite> {
        self.suite.as_ref()
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn identifiers(&self) -> BTreeSet<&str> {
        self.entries.iter().map(|entry| entry.identifier.as_str()).collect()
    }

    pub fn get(&self, identifier: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|entry| entry.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ManifestError::EncodeError)
    }

    pub fn from_json_str(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn read_json_file<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let file_path = file_path.as_ref();
        let json = std::fs::read_to_string(file_path)
            .map_err(|err| ManifestError::FileReadError {
                file_path: file_path.to_path_buf(),
                err,
            })?;

        Self::from_json_str(&json).map_err(|err| ManifestError::DecodeError {
            file_path: file_path.to_path_buf(),
            err,
        })
    }

    pub fn write_json_file<P: AsRef<Path>>(&self, file_path: P) -> Result<()> {
        let file_path = file_path.as_ref();
        let mut json = self.to_json_string()?;
        json.push('\n');

        std::fs::write(file_path, json).map_err(|err| ManifestError::FileWriteError {
            file_path: file_path.to_path_buf(),
            err,
        })
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failure while decoding manifest `{}`: {err}", file_path.display())]
    DecodeError {
        file_path: PathBuf,
        err: serde_json::Error,
    },

    #[error("Failure while encoding manifest: {0}")]
    EncodeError(serde_json::Error),

    #[error("Failure while reading manifest `{}`: {err}", file_path.display())]
    FileReadError {
        file_path: PathBuf,
        err: std::io::Error,
    },

    #[error("Failure while writing manifest `{}`: {err}", file_path.display())]
    FileWriteError {
        file_path: PathBuf,
        err: std::io::Error,
    },
}
