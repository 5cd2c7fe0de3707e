use std::io::{self, Write};

use thiserror::Error;

use crate::domain::issue::IssueRecord;

#[derive(Error, Debug)]
pub enum IssuesYamlError {
    #[error("failed to parse issue snapshot yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub fn serialize_issues_to_yaml<W: Write>(writer: &mut W, records: &[IssueRecord]) -> io::Result<()> {
    let yaml = serde_yaml::to_string(records).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

pub fn deserialize_issues_from_yaml_str(yaml: &str) -> Result<Vec<IssueRecord>, IssuesYamlError> {
    Ok(serde_yaml::from_str(yaml)?)
}
