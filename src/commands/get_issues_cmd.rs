use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::services::bugzilla_api::{BugzillaApiClient, BugzillaConfig};
use crate::services::burndown_run::fetch_issue_records;
use crate::services::issues_yaml::serialize_issues_to_yaml;

pub async fn get_issues_command(cmd: Commands) -> ExitCode {
    let Commands::GetIssues { config, output } = cmd else {
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
    let api_client = match BugzillaApiClient::new(&bugzilla_config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create BugzillaApiClient: {e}");
            return ExitCode::FAILURE;
        }
    };

    let records = match fetch_issue_records(&api_client, query).await {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Failed to get issues: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut buffer = Vec::new();
    if let Err(e) = serialize_issues_to_yaml(&mut buffer, &records) {
        eprintln!("Failed to serialize issues to YAML: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = tokio::fs::write(&output, buffer).await {
        eprintln!("Failed to write output file: {e}");
        return ExitCode::FAILURE;
    }

    println!("Issue snapshot written to {output}");
    ExitCode::SUCCESS
}
