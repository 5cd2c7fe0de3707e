use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_burndown_summary;
use crate::services::burndown_run::{load_issue_snapshot, write_burndown_csv_file, BurndownRequest};

pub async fn burndown_command(cmd: Commands) -> ExitCode {
    let Commands::Burndown {
        input,
        output,
        priorities,
        start_date,
        end_date,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let request = match BurndownRequest::parse(priorities, &start_date, &end_date) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Invalid burndown arguments: {e}");
            return ExitCode::FAILURE;
        }
    };

    let snapshot = match load_issue_snapshot(&input).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Failed to load issue snapshot: {e}");
            return ExitCode::FAILURE;
        }
    };

    match write_burndown_csv_file(&snapshot, &request, &output).await {
        Ok(series) => {
            println!("{}", format_burndown_summary(&series));
            println!("Burndown data written to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to compute burndown: {e}");
            ExitCode::FAILURE
        }
    }
}
