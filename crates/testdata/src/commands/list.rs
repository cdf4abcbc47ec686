use crate::commands::suite_args;
use crate::commands::SuiteArgs;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct ListCmd {
    #[command(flatten)]
    pub(crate) suite: SuiteArgs,
}

#[inherent::inherent]
impl RunnableCommand for ListCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_result(self.list())
    }
}

impl ListCmd {
    fn list(&self) -> anyhow::Result<CommandResult> {
        let fixtures = self.suite.to_suite().scan(&suite_args::current_dir()?)?;
        let width = fixtures
            .iter()
            .map(|record| record.identifier().len())
            .max()
            .unwrap_or(0);

        let listing = fixtures
            .iter()
            .map(|record| format!(
                "{:<width$}  {}",
                record.identifier(),
                record.relative_path(),
            ))
            .collect::<Vec<_>>()
            .join("\n");
        Ok(CommandResult::stdout(format_args!("{listing}")))
    }
}
