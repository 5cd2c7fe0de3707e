use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::burndown::BurndownSeries;
use crate::domain::issue::{IssueError, IssueRecord};
use crate::domain::snapshot::IssueSnapshot;
use crate::services::burndown::compute_all;
use crate::services::burndown_csv::{serialize_burndown_to_csv, BurndownCsvError};
use crate::services::data_source::{DataQuery, DataSourceError, IssueSource};
use crate::services::issues_yaml::{deserialize_issues_from_yaml_str, IssuesYamlError};

#[derive(Error, Debug)]
pub enum BurndownRunError {
    #[error(transparent)]
    Source(#[from] DataSourceError),
    #[error("failed to read issue snapshot: {0}")]
    ReadSnapshot(#[from] std::io::Error),
    #[error("failed to parse issue snapshot: {0}")]
    ParseSnapshot(#[from] IssuesYamlError),
    #[error(transparent)]
    Issue(#[from] IssueError),
    #[error("invalid {name}: {value} (expected YYYY-MM-DD)")]
    InvalidDate { name: &'static str, value: String },
    #[error("at least one priority is required")]
    NoPriorities,
    #[error(transparent)]
    WriteCsv(#[from] BurndownCsvError),
}

/// What to count: which priorities, from which day, up to (excluding) which day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurndownRequest {
    pub priorities: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl BurndownRequest {
    pub fn parse(priorities: Vec<String>, start_date: &str, end_date: &str) -> Result<Self, BurndownRunError> {
        if priorities.is_empty() {
            return Err(BurndownRunError::NoPriorities);
        }
        Ok(Self {
            priorities,
            start_date: parse_date_arg("start date", start_date)?,
            end_date: parse_date_arg("end date", end_date)?,
        })
    }
}

fn parse_date_arg(name: &'static str, value: &str) -> Result<NaiveDate, BurndownRunError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| BurndownRunError::InvalidDate {
        name,
        value: value.to_string(),
    })
}

pub async fn fetch_issue_records<S: IssueSource>(
    source: &S,
    query: DataQuery,
) -> Result<Vec<IssueRecord>, BurndownRunError> {
    Ok(source.get_issues(query).await?)
}

pub async fn load_issue_snapshot(snapshot_path: &str) -> Result<IssueSnapshot, BurndownRunError> {
    let snapshot_yaml = tokio::fs::read_to_string(snapshot_path).await?;
    let records = deserialize_issues_from_yaml_str(&snapshot_yaml)?;
    Ok(IssueSnapshot::from_records(&records)?)
}

/// Computes every requested series over the snapshot and writes them as CSV.
pub async fn write_burndown_csv_file(
    snapshot: &IssueSnapshot,
    request: &BurndownRequest,
    output_path: &str,
) -> Result<Vec<BurndownSeries>, BurndownRunError> {
    log::info!(
        "Computing burndown for {} issues, priorities {:?}, {} to {}",
        snapshot.len(),
        request.priorities,
        request.start_date,
        request.end_date
    );
    let series = compute_all(
        snapshot.issues(),
        &request.priorities,
        request.start_date,
        request.end_date,
    );

    let mut buffer = Vec::new();
    serialize_burndown_to_csv(&mut buffer, &series)?;
    tokio::fs::write(output_path, buffer)
        .await
        .map_err(BurndownCsvError::Write)?;
    Ok(series)
}
