mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::burndown_cmd::burndown_command;
use crate::commands::completions_cmd::completions_command;
use crate::commands::get_burndown_cmd::get_burndown_command;
use crate::commands::get_issues_cmd::get_issues_command;
use crate::commands::plot_burndown_cmd::plot_burndown_command;
use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    args.log_level.init_logging();

    match args.command {
        cmd @ Commands::GetIssues { .. } => get_issues_command(cmd).await,
        cmd @ Commands::Burndown { .. } => burndown_command(cmd).await,
        cmd @ Commands::GetBurndown { .. } => get_burndown_command(cmd).await,
        cmd @ Commands::PlotBurndown { .. } => plot_burndown_command(cmd).await,
        Commands::Completions { shell } => {
            completions_command(shell);
            ExitCode::SUCCESS
        }
    }
}
