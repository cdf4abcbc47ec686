use crate::ConfigurationError;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeSet;

/// Serializable description of which files under a suite root are fixtures.
///
/// This is the form a suite definition takes when it is persisted (in a
/// generated manifest, or baked into macro output). Use
/// [`MatchPatternSpec::compile()`] to get a [`MatchPattern`] that can be used
/// for scanning.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchPatternSpec {
    pub file_pattern: String,

    #[serde(default)]
    pub excluded_paths: BTreeSet<String>,

    #[serde(default)]
    pub exclude_pattern: Option<String>,

    #[serde(default = "default_recursive")]
    pub recursive: bool,

    #[serde(default)]
    pub target_backend: Option<String>,
}
impl MatchPatternSpec {
    pub fn new(file_pattern: impl Into<String>) -> Self {
        Self {
            file_pattern: file_pattern.into(),
            excluded_paths: BTreeSet::new(),
            exclude_pattern: None,
            recursive: true,
            target_backend: None,
        }
    }

    /// Excludes a single fixture, identified by its path relative to the
    /// suite root.
    pub fn exclude_path(mut self, relative_path: impl AsRef<str>) -> Self {
        self.excluded_paths.insert(normalize_separators(relative_path.as_ref()));
        self
    }

    /// Excludes every fixture whose file name matches `pattern`.
    pub fn exclude_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_pattern = Some(pattern.into());
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Only include fixtures whose `// TARGET_BACKEND:` directives (if any)
    /// are compatible with `backend`.
    pub fn target_backend(mut self, backend: impl Into<String>) -> Self {
        self.target_backend = Some(backend.into());
        self
    }

    pub fn compile(&self) -> Result<MatchPattern, ConfigurationError> {
        let file_pattern = compile_regex(&self.file_pattern)?;
        let exclude_pattern = self.exclude_pattern
            .as_deref()
            .map(compile_regex)
            .transpose()?;

        Ok(MatchPattern {
            file_pattern,
            excluded_paths: self.excluded_paths
                .iter()
                .map(|path| normalize_separators(path))
                .collect(),
            exclude_pattern,
            recursive: self.recursive,
            target_backend: self.target_backend.clone(),
        })
    }
}

fn default_recursive() -> bool {
    true
}

fn compile_regex(pattern: &str) -> Result<Regex, ConfigurationError> {
    Regex::new(pattern).map_err(|err| ConfigurationError::InvalidPattern {
        pattern: pattern.to_string(),
        err,
    })
}

fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// A compiled [`MatchPatternSpec`].
///
/// The file pattern is a regular expression matched (unanchored) against a
/// file's name. If it has a capture group, group 1 is taken as the fixture's
/// stem, e.g. `^(.+)\.kt$` yields `simple` for `simple.kt`. Without a capture
/// group the stem is the file name minus its final extension.
#[derive(Clone, Debug)]
pub struct MatchPattern {
    file_pattern: Regex,
    excluded_paths: BTreeSet<String>,
    exclude_pattern: Option<Regex>,
    recursive: bool,
    target_backend: Option<String>,
}
impl MatchPattern {
    /// Shorthand for `MatchPatternSpec::new(file_pattern).compile()`.
    pub fn new(file_pattern: &str) -> Result<Self, ConfigurationError> {
        MatchPatternSpec::new(file_pattern).compile()
    }

    pub fn matches_file_name(&self, file_name: &str) -> bool {
        self.file_pattern.is_match(file_name)
    }

    pub fn is_excluded(&self, relative_path: &str, file_name: &str) -> bool {
        self.excluded_paths.contains(relative_path)
            || self.exclude_pattern
                .as_ref()
                .is_some_and(|pattern| pattern.is_match(file_name))
    }

    pub fn stem<'a>(&self, file_name: &'a str) -> &'a str {
        if self.file_pattern.captures_len() > 1
            && let Some(group) = self.file_pattern
                .captures(file_name)
                .and_then(|captures| captures.get(1)) {
            return group.as_str();
        }

        match file_name.rsplit_once('.') {
            Some((stem, _ext)) if !stem.is_empty() => stem,
            _ => file_name,
        }
    }

    pub fn recursive(&self) -> bool {
        self.recursive
    }

    pub fn target_backend(&self) -> Option<&str> {
        self.target_backend.as_deref()
    }
}
