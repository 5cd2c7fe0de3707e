use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_burndown_summary;
use crate::domain::snapshot::IssueSnapshot;
use crate::services::bugzilla_api::{BugzillaApiClient, BugzillaConfig};
use crate::services::burndown_run::{fetch_issue_records, write_burndown_csv_file, BurndownRequest};

pub async fn get_burndown_command(cmd: Commands) -> ExitCode {
    let Commands::GetBurndown {
        config,
        output,
        end_date,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let bugzilla_config = match BugzillaConfig::from_yaml_file(&config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to parse Bugzilla config: {e}");
            return ExitCode::FAILURE;
        }
    };
    let query = match bugzilla_config.query() {
        Ok(query) => query,
        Err(e) => {
            eprintln!("Failed to parse Bugzilla config: {e}");
            return ExitCode::FAILURE;
        }
    };
    let request = match BurndownRequest::parse(
        bugzilla_config.priorities.clone(),
        &bugzilla_config.start_date,
        &end_date,
    ) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Invalid burndown arguments: {e}");
            return ExitCode::FAILURE;
        }
    };
    let api_client = match BugzillaApiClient::new(&bugzilla_config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create BugzillaApiClient: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Fetch once; every day and priority is counted against this snapshot.
    let records = match fetch_issue_records(&api_client, query).await {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Failed to get issues: {e}");
            return ExitCode::FAILURE;
        }
    };
    let snapshot = match IssueSnapshot::from_records(&records) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            eprintln!("Failed to compute burndown: {e}");
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
