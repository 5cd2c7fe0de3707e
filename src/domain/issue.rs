use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Status values that mark an issue as no longer active work.
pub const CLOSED_STATUSES: [&str; 2] = ["RESOLVED", "VERIFIED"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampField {
	CreationTime,
	LastChangeTime,
}

impl fmt::Display for TimestampField {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TimestampField::CreationTime => write!(f, "creation_time"),
			TimestampField::LastChangeTime => write!(f, "last_change_time"),
		}
	}
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IssueError {
	#[error("issue {issue_id} has a malformed {field}: {value:?}")]
	MalformedTimestamp {
		issue_id: String,
		field: TimestampField,
		value: String,
	},
}

/// An issue exactly as the issue source reports it, timestamps still as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
	#[serde(deserialize_with = "id_from_text_or_number")]
	pub id: String,
	pub priority: String,
	pub status: String,
	pub creation_time: String,
	pub last_change_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
	pub id: String,
	pub priority: String,
	pub status: String,
	pub creation_date: NaiveDate,
	pub last_change_date: NaiveDate,
}

impl Issue {
	pub fn from_record(record: &IssueRecord) -> Result<Self, IssueError> {
		let creation_date = parse_timestamp(record, TimestampField::CreationTime)?;
		let last_change_date = parse_timestamp(record, TimestampField::LastChangeTime)?;
		Ok(Self {
			id: record.id.clone(),
			priority: record.priority.clone(),
			status: record.status.clone(),
			creation_date,
			last_change_date,
		})
	}

	pub fn is_closed(&self) -> bool {
		CLOSED_STATUSES.contains(&self.status.as_str())
	}
}

fn parse_timestamp(record: &IssueRecord, field: TimestampField) -> Result<NaiveDate, IssueError> {
	let value = match field {
		TimestampField::CreationTime => &record.creation_time,
		TimestampField::LastChangeTime => &record.last_change_time,
	};
	parse_day(value).ok_or_else(|| IssueError::MalformedTimestamp {
		issue_id: record.id.clone(),
		field,
		value: value.clone(),
	})
}

/// Parses the calendar day of a timestamp such as `2018-01-01T10:00:00Z`,
/// discarding the time of day.
pub fn parse_day(text: &str) -> Option<NaiveDate> {
	let text = text.trim();
	let date_part = text.split(['T', ' ']).next().unwrap_or(text);
	NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
	Number(u64),
	Text(String),
}

fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Ok(match RawId::deserialize(deserializer)? {
		RawId::Number(number) => number.to_string(),
		RawId::Text(text) => text,
	})
}
