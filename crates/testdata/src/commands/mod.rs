mod check;
mod generate;
mod list;
mod run;
mod suite_args;

use crate::Cli;
use crate::CommandResult;
pub(crate) use check::CheckCmd;
pub(crate) use generate::GenerateCmd;
pub(crate) use list::ListCmd;
pub(crate) use run::RunCmd;
pub(crate) use suite_args::SuiteArgs;

#[derive(Debug, clap::Parser)]
#[command(name = "testdata")]
pub(crate) enum CommandEnum {
    /// Scan a fixture directory and write the manifest of tests to generate.
    Generate(Box<GenerateCmd>),

    /// Fail if a fixture directory no longer matches a generated manifest.
    Check(Box<CheckCmd>),

    /// Run an external command once per fixture in a generated manifest.
    Run(Box<RunCmd>),

    /// Print the fixtures a suite definition currently matches.
    List(Box<ListCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Run(cmd) => cmd.run(cli).await,
            Self::List(cmd) => cmd.run(cli).await,
        }
    }
}
