use chrono::NaiveDate;

use crate::domain::issue::{Issue, IssueRecord};

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn build_issue(
    id: &str,
    priority: &str,
    status: &str,
    created: NaiveDate,
    last_changed: NaiveDate,
) -> Issue {
    Issue {
        id: id.to_string(),
        priority: priority.to_string(),
        status: status.to_string(),
        creation_date: created,
        last_change_date: last_changed,
    }
}

pub fn build_record(
    id: &str,
    priority: &str,
    status: &str,
    creation_time: &str,
    last_change_time: &str,
) -> IssueRecord {
    IssueRecord {
        id: id.to_string(),
        priority: priority.to_string(),
        status: status.to_string(),
        creation_time: creation_time.to_string(),
        last_change_time: last_change_time.to_string(),
    }
}
