use std::collections::HashMap;
use std::fs;

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::issue::IssueRecord;
use crate::services::data_source::{DataQuery, DataSourceError, IssueSource};

const INCLUDE_FIELDS: &str = "id,priority,last_change_time,status,creation_time";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BugzillaConfig {
    pub base_url: String,
    pub tracking_bug_id: Option<u64>,
    pub priorities: Vec<String>,
    pub start_date: String,
}

impl Default for BugzillaConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            tracking_bug_id: None,
            priorities: vec!["P1".to_string(), "P2".to_string(), "P3".to_string()],
            start_date: "2018-01-01".to_string(),
        }
    }
}

impl BugzillaConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, DataSourceError> {
        let contents = fs::read_to_string(filepath)
            .map_err(|err| DataSourceError::Other(format!("failed to read config: {err}")))?;
        serde_yaml::from_str(&contents)
            .map_err(|err| DataSourceError::Parse(format!("invalid config {filepath}: {err}")))
    }

    pub fn query(&self) -> Result<DataQuery, DataSourceError> {
        self.tracking_bug_id
            .map(DataQuery::Blocks)
            .ok_or_else(|| DataSourceError::Other("config is missing tracking_bug_id".to_string()))
    }
}

pub struct BugzillaApiClient {
    base_url: String,
    client: Client,
}

impl BugzillaApiClient {
    pub fn new(config: &BugzillaConfig) -> Result<Self, DataSourceError> {
        if config.base_url.is_empty() {
            return Err(DataSourceError::Other(
                "config is missing base_url".to_string(),
            ));
        }

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        })
    }

    async fn fetch_json(
        &self,
        url: &str,
        params: &HashMap<&str, String>,
    ) -> Result<Value, DataSourceError> {
        log::info!("Requesting {url}");
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|err| DataSourceError::FetchFailure(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DataSourceError::FetchFailure(format!(
                "server responded with {status}"
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| DataSourceError::Parse(err.to_string()))
    }

    async fn get_blocking_bugs(&self, tracking_bug_id: u64) -> Result<Vec<IssueRecord>, DataSourceError> {
        let url = format!("{}/bug", self.base_url);
        let mut params = HashMap::new();
        params.insert("blocks", tracking_bug_id.to_string());
        params.insert("include_fields", INCLUDE_FIELDS.to_string());

        let payload = self.fetch_json(&url, &params).await?;
        if payload.get("error").and_then(|value| value.as_bool()) == Some(true) {
            let message = payload
                .get("message")
                .and_then(|value| value.as_str())
                .unwrap_or("unknown error");
            return Err(DataSourceError::FetchFailure(message.to_string()));
        }

        let bugs = payload
            .get("bugs")
            .and_then(|value| value.as_array())
            .ok_or_else(|| DataSourceError::Parse("response has no bugs array".to_string()))?;

        let records = bugs
            .iter()
            .map(map_bug)
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("Fetched {} issues blocking {tracking_bug_id}", records.len());
        Ok(records)
    }
}

impl IssueSource for BugzillaApiClient {
    async fn get_issues(&self, query: DataQuery) -> Result<Vec<IssueRecord>, DataSourceError> {
        match query {
            DataQuery::Blocks(tracking_bug_id) => self.get_blocking_bugs(tracking_bug_id).await,
        }
    }
}

fn map_bug(bug: &Value) -> Result<IssueRecord, DataSourceError> {
    let fields = bug
        .as_object()
        .ok_or_else(|| DataSourceError::Parse("bug entry is not an object".to_string()))?;

    let id = match fields.get("id") {
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::String(text)) => text.clone(),
        _ => return Err(DataSourceError::Parse("bug entry has no id".to_string())),
    };

    Ok(IssueRecord {
        priority: get_field_string(fields, &id, "priority")?,
        status: get_field_string(fields, &id, "status")?,
        creation_time: get_field_string(fields, &id, "creation_time")?,
        last_change_time: get_field_string(fields, &id, "last_change_time")?,
        id,
    })
}

fn get_field_string(
    fields: &serde_json::Map<String, Value>,
    id: &str,
    key: &str,
) -> Result<String, DataSourceError> {
    fields
        .get(key)
        .and_then(|value| value.as_str())
        .map(str::to_string)
        .ok_or_else(|| DataSourceError::Parse(format!("bug {id} has no {key}")))
}
