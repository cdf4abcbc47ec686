use crate::commands::suite_args;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libtestdata::check_suite;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
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
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_result(self.check())
    }
}

impl CheckCmd {
    fn check(&self) -> anyhow::Result<CommandResult> {
        let (manifest, suite) = suite_args::read_manifest(&self.manifest)?;
        let base_dir = match &self.base_dir {
            Some(base_dir) => base_dir.clone(),
            None => suite_args::current_dir()?,
        };

        check_suite(&suite, &base_dir, &manifest)?;
        Ok(CommandResult::stdout(format_args!(
            "{} All {} fixtures under `{}` have generated tests.",
            output_utils::GREEN_CHECK,
            manifest.len(),
            suite.root,
        )))
    }
}
