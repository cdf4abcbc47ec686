use crate::commands::suite_args;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libtestdata::check_suite;
use libtestdata::run_all;
use libtestdata::CommandRunner;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct RunCmd {
    #[arg(
        help="Manifest previously written by `testdata generate`.",
        long,
        short='m',
    )]
    manifest: PathBuf,

    #[arg(
        help="Directory the manifest's fixture root is relative to. Defaults \
             to the current directory.",
        long,
    )]
    base_dir: Option<PathBuf>,

    #[arg(
        help="Command to run once per fixture. The fixture's path is appended \
             as its last argument; a non-zero exit fails that fixture.",
        last=true,
        name="COMMAND",
        required=true,
    )]
    command: Vec<OsString>,
}

#[inherent::inherent]
impl RunnableCommand for RunCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_result(self.run_fixtures().await)
    }
}

impl RunCmd {
    async fn run_fixtures(self) -> anyhow::Result<CommandResult> {
        let (manifest, suite) = suite_args::read_manifest(&self.manifest)?;
        let base_dir = match self.base_dir {
            Some(base_dir) => base_dir,
            None => suite_args::current_dir()?,
        };

        // Running a fixture set that drifted from its manifest would silently
        // skip (or invent) tests.
        check_suite(&suite, &base_dir, &manifest)?;
        let fixtures = suite.scan(&base_dir)?;

        let mut command = self.command.into_iter();
        let Some(program) = command.next() else {
            anyhow::bail!("No command given to run fixtures with");
        };
        let runner = CommandRunner::new(program).args(command);

        log::debug!("Running {} fixtures...", fixtures.len());
        let results = tokio::task::spawn_blocking(move || run_all(&fixtures, &runner)).await?;

        if results.all_passed() {
            return Ok(CommandResult::stdout(format_args!("{}", results.summary())));
        }
        Ok(CommandResult::failure(
            results.summary(),
            format!("{} {}", output_utils::RED_X, results.failure_report()),
        ))
    }
}
