use crate::FixtureRunner;
use crate::MismatchError;
use std::ffi::OsString;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

/// A [`FixtureRunner`] that shells out to an external program.
///
/// The fixture path is appended as the final argument. Exit status 0 is a
/// pass; anything else is a failure whose diagnostic includes whatever the
/// program wrote to stdout and stderr.
#[derive(Clone, Debug)]
pub struct CommandRunner {
    program: OsString,
    args: Vec<OsString>,
    current_dir: Option<PathBuf>,
}
impl CommandRunner {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: vec![],
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    fn display_program(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

impl FixtureRunner for CommandRunner {
    fn execute(&self, path: &Path) -> Result<(), MismatchError> {
        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(path);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|err| {
            MismatchError::new(format!(
                "Failed to run `{}` on `{}`: {err}",
                self.display_program(),
                path.display(),
            ))
        })?;

        if output.status.success() {
            return Ok(());
        }

        let mut message = format!(
            "`{}` exited with {} on `{}`",
            self.display_program(),
            output.status,
            path.display(),
        );
        for (label, bytes) in [("stdout", &output.stdout), ("stderr", &output.stderr)] {
            let text = String::from_utf8_lossy(bytes);
            let text = text.trim_end();
            if !text.is_empty() {
                message.push_str(&format!("\n--- {label} ---\n{text}"));
            }
        }

        Err(MismatchError::new(message))
    }
}
