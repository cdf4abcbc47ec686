use crate::FixtureRecord;
use std::panic::AssertUnwindSafe;
use std::path::Path;
use thiserror::Error;

/// Failure reported by a [`FixtureRunner`], usually because the produced
/// output did not match the expected (golden) output.
///
/// The message is opaque to this crate and is surfaced verbatim.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{message}")]
pub struct MismatchError {
    message: String,
}
impl MismatchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
impl std::convert::From<std::io::Error> for MismatchError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Executes a single fixture.
///
/// This is the seam to whatever pipeline is under test (a compiler, a
/// plugin, an analyzer). Implementations are called concurrently for
/// distinct fixtures and so must be `Sync`.
///
/// Any `Fn(&Path) -> Result<(), MismatchError> + Sync` is a runner:
///
/// ```rust
/// use libtestdata_core::FixtureRunner;
/// use libtestdata_core::MismatchError;
/// use std::path::Path;
///
/// fn run_test(path: &Path) -> Result<(), MismatchError> {
///     let source = std::fs::read_to_string(path)?;
///     if source.is_empty() {
///         return Err(MismatchError::new("empty fixture"));
///     }
///     Ok(())
/// }
///
/// fn assert_runner<R: FixtureRunner>(_: &R) {}
/// assert_runner(&run_test);
/// ```
pub trait FixtureRunner: Sync {
    fn execute(&self, path: &Path) -> Result<(), MismatchError>;
}

impl<F> FixtureRunner for F
where
    F: Fn(&Path) -> Result<(), MismatchError> + Sync,
{
    fn execute(&self, path: &Path) -> Result<(), MismatchError> {
        self(path)
    }
}

/// Terminal state of one dispatched fixture.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TestOutcome {
    Passed,
    Failed {
        diagnostic: String,
    },
}
impl TestOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            Self::Passed => None,
            Self::Failed { diagnostic } => Some(diagnostic),
        }
    }

    pub fn into_result(self) -> Result<(), MismatchError> {
        match self {
            Self::Passed => Ok(()),
            Self::Failed { diagnostic } => Err(MismatchError::new(diagnostic)),
        }
    }
}

/// Runs `runner` against one fixture and reports what happened.
///
/// The runner's verdict is passed through untouched: success is a silent
/// pass, and failure carries the runner's message. A panicking runner fails
/// this fixture only. Dispatch keeps no state between calls, so fixtures can
/// be dispatched in any order or from many threads at once.
pub fn dispatch<R>(fixture: &FixtureRecord, root: &Path, runner: &R) -> TestOutcome
where
    R: FixtureRunner + ?Sized,
{
    let path = fixture.resolve(root);
    tracing::debug!(
        fixture = fixture.identifier(),
        path = %path.display(),
        "dispatching fixture"
    );

    match std::panic::catch_unwind(AssertUnwindSafe(|| runner.execute(&path))) {
        Ok(Ok(())) => TestOutcome::Passed,
        Ok(Err(err)) => TestOutcome::Failed {
            diagnostic: err.to_string(),
        },
        Err(payload) => TestOutcome::Failed {
            diagnostic: format!("Fixture runner panicked: {}", panic_message(payload.as_ref())),
        },
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "<non-string panic payload>"
    }
}
