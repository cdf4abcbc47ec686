use crate::output_utils;
use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// Turns the outcome of a command body into what gets printed. Errors are
    /// reported on stderr with their full `anyhow` context chain.
    pub fn from_result(result: anyhow::Result<CommandResult>) -> Self {
        result.unwrap_or_else(|err| Self::stderr(format_args!(
            "{} {err:#}",
            output_utils::RED_X,
        )))
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// A failure that still has a report worth printing to stdout.
    pub fn failure(stdout: String, stderr: String) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(stderr),
            stdout: Some(stdout),
        }
    }
}
