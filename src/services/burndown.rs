use chrono::NaiveDate;

use crate::domain::burndown::{BurndownSeries, DailyCount};
use crate::domain::issue::Issue;

/// An issue is open on `day` when it already existed and its closing
/// transition, if it is currently closed, had not happened yet.
///
/// Only the current status and the latest change date are known, so an issue
/// that was resolved and later reopened counts as open for its whole life.
pub fn is_open_on(issue: &Issue, day: NaiveDate) -> bool {
    issue.creation_date <= day && !(issue.is_closed() && issue.last_change_date <= day)
}

/// Counts the open issues with the given priority for every day in
/// `start_date..end_date`.
pub fn compute(
    issues: &[Issue],
    priority: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> BurndownSeries {
    let with_priority: Vec<&Issue> = issues
        .iter()
        .filter(|issue| issue.priority == priority)
        .collect();

    let mut counts = Vec::new();
    let mut current_date = start_date;
    while current_date < end_date {
        let count = with_priority
            .iter()
            .filter(|issue| is_open_on(issue, current_date))
            .count();
        counts.push(DailyCount {
            day: current_date,
            count,
        });
        current_date = match current_date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    log::debug!(
        "Computed {} days for priority {priority} from {} matching issues",
        counts.len(),
        with_priority.len()
    );

    BurndownSeries {
        priority: priority.to_string(),
        counts,
    }
}

/// One series per priority, in the order given. The scan ends the day before
/// `today`.
pub fn compute_all<S: AsRef<str>>(
    issues: &[Issue],
    priorities: &[S],
    start_date: NaiveDate,
    today: NaiveDate,
) -> Vec<BurndownSeries> {
    priorities
        .iter()
        .map(|priority| compute(issues, priority.as_ref(), start_date, today))
        .collect()
}
