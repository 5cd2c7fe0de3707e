use crate::domain::issue::{Issue, IssueError, IssueRecord};

/// Issue collection fetched once and never mutated while counts are computed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueSnapshot {
    issues: Vec<Issue>,
}

impl IssueSnapshot {
    /// Parses every record up front. Fails on the first malformed timestamp,
    /// regardless of the issue's priority: a bad timestamp on an issue whose
    /// priority is never counted still aborts the whole run.
    pub fn from_records(records: &[IssueRecord]) -> Result<Self, IssueError> {
        let issues = records
            .iter()
            .map(Issue::from_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { issues })
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
