use crate::domain::issue::IssueRecord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("failed to fetch issues: {0}")]
    FetchFailure(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataQuery {
    /// All issues blocking the given tracking issue.
    Blocks(u64),
}

/// Describes an interface for retrieving issue records in a single batch.
pub trait IssueSource {
    async fn get_issues(&self, query: DataQuery) -> Result<Vec<IssueRecord>, DataSourceError>;
}
