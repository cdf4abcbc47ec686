//! In-file directives that affect whether a fixture belongs to a suite.
//!
//! A fixture may restrict the backends it applies to with one or more lines
//! of the form:
//!
//! ```text
//! // TARGET_BACKEND: JVM_IR, WASM
//! ```
//!
//! A file with no such line applies to every backend.

pub const TARGET_BACKEND_DIRECTIVE: &str = "// TARGET_BACKEND:";

/// Backend name that is compatible with every target.
pub const ANY_BACKEND: &str = "ANY";

/// Collects every backend named by a `// TARGET_BACKEND:` directive in
/// `content`, in the order they appear.
pub fn target_backends(content: &str) -> Vec<&str> {
    content
        .lines()
        .filter_map(|line| line.trim_start().strip_prefix(TARGET_BACKEND_DIRECTIVE))
        .flat_map(|backends| backends.split(','))
        .map(str::trim)
        .filter(|backend| !backend.is_empty())
        .collect()
}

pub fn is_compatible_target(content: &str, target: &str) -> bool {
    let backends = target_backends(content);
    backends.is_empty()
        || backends.iter().any(|backend| *backend == target || *backend == ANY_BACKEND)
}
