use crate::commands::suite_args;
use crate::commands::SuiteArgs;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[command(flatten)]
    suite: SuiteArgs,

    #[arg(
        help="File to write the JSON manifest to. Prints to stdout if omitted.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_result(self.generate())
    }
}

impl GenerateCmd {
    fn generate(&self) -> anyhow::Result<CommandResult> {
        let suite = self.suite.to_suite();
        let base_dir = suite_args::current_dir()?;
        log::debug!(
            "Scanning fixture root `{}`...",
            suite.resolve_root(&base_dir).display(),
        );
        let manifest = suite.generate_manifest(&base_dir)?;
        log::debug!("Found {} fixtures.", manifest.len());

        Ok(match &self.output {
            Some(output) => {
                manifest.write_json_file(output)?;
                CommandResult::stdout(format_args!(
                    "{} Wrote {} fixtures to `{}`.",
                    output_utils::GREEN_CHECK,
                    manifest.len(),
                    output.display(),
                ))
            },
            None => CommandResult::stdout(format_args!("{}", manifest.to_json_string()?)),
        })
    }
}
