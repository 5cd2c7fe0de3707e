use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::burndown::{BurndownSeries, DailyCount};

#[derive(Error, Debug)]
pub enum BurndownCsvError {
    #[error("failed to process burndown csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write burndown csv: {0}")]
    Write(#[from] std::io::Error),
    #[error("invalid day in burndown csv row {row}: {value} (expected YYYY-MM-DD)")]
    InvalidDay { row: usize, value: String },
}

#[derive(Debug, Serialize, Deserialize)]
struct BurndownRow {
    #[serde(rename = "Day")]
    day: String,
    #[serde(rename = "Count")]
    count: usize,
    #[serde(rename = "Priority")]
    priority: String,
}

/// Writes one `Day,Count,Priority` row per day of every series, series after
/// series.
pub fn serialize_burndown_to_csv<W: Write>(
    writer: W,
    series: &[BurndownSeries],
) -> Result<(), BurndownCsvError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    // The header is written even when there are no rows.
    csv_writer.write_record(["Day", "Count", "Priority"])?;
    for item in series {
        for daily in &item.counts {
            csv_writer.serialize(BurndownRow {
                day: daily.day.format("%Y-%m-%d").to_string(),
                count: daily.count,
                priority: item.priority.clone(),
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Reads rows back into series, grouped by priority in first-seen order.
pub fn deserialize_burndown_from_csv_str(csv_text: &str) -> Result<Vec<BurndownSeries>, BurndownCsvError> {
    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let mut series: Vec<BurndownSeries> = Vec::new();

    for (index, row) in reader.deserialize::<BurndownRow>().enumerate() {
        let row = row?;
        let day = NaiveDate::parse_from_str(&row.day, "%Y-%m-%d").map_err(|_| {
            BurndownCsvError::InvalidDay {
                row: index + 1,
                value: row.day.clone(),
            }
        })?;
        let daily = DailyCount {
            day,
            count: row.count,
        };

        match series.iter_mut().find(|item| item.priority == row.priority) {
            Some(item) => item.counts.push(daily),
            None => series.push(BurndownSeries {
                priority: row.priority,
                counts: vec![daily],
            }),
        }
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::on_date;

    fn sample_series() -> Vec<BurndownSeries> {
        vec![
            BurndownSeries {
                priority: "P1".to_string(),
                counts: vec![
                    DailyCount { day: on_date(2018, 1, 1), count: 1 },
                    DailyCount { day: on_date(2018, 1, 2), count: 0 },
                ],
            },
            BurndownSeries {
                priority: "P2".to_string(),
                counts: vec![
                    DailyCount { day: on_date(2018, 1, 1), count: 3 },
                    DailyCount { day: on_date(2018, 1, 2), count: 2 },
                ],
            },
        ]
    }

    #[test]
    fn serialize_writes_header_and_one_row_per_day() {
        let mut buf = Vec::new();
        serialize_burndown_to_csv(&mut buf, &sample_series()).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(
            output,
            "Day,Count,Priority\n2018-01-01,1,P1\n2018-01-02,0,P1\n2018-01-01,3,P2\n2018-01-02,2,P2\n"
        );
    }

    #[test]
    fn serialize_writes_header_for_empty_series() {
        let series = vec![BurndownSeries {
            priority: "P1".to_string(),
            counts: vec![],
        }];

        let mut buf = Vec::new();
        serialize_burndown_to_csv(&mut buf, &series).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert_eq!(output, "Day,Count,Priority\n");
        assert!(deserialize_burndown_from_csv_str(&output).unwrap().is_empty());
    }

    #[test]
    fn deserialize_groups_interleaved_rows_by_priority() {
        let csv_text = "Day,Count,Priority\n2018-01-01,3,P2\n2018-01-01,1,P1\n2018-01-02,2,P2\n2018-01-02,0,P1\n";

        let series = deserialize_burndown_from_csv_str(csv_text).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].priority, "P2");
        assert_eq!(series[0].counts.len(), 2);
        assert_eq!(series[1].priority, "P1");
        assert_eq!(series[1].last_count(), Some(0));
    }

    #[test]
    fn deserialize_reports_invalid_day() {
        let csv_text = "Day,Count,Priority\n2018-01-01,3,P2\n01/02/2018,2,P2\n";

        let error = deserialize_burndown_from_csv_str(csv_text).unwrap_err();
        assert!(matches!(error, BurndownCsvError::InvalidDay { row: 2, .. }));
    }

    #[test]
    fn deserialize_rejects_negative_count() {
        let csv_text = "Day,Count,Priority\n2018-01-01,-1,P2\n";
        assert!(matches!(
            deserialize_burndown_from_csv_str(csv_text),
            Err(BurndownCsvError::Csv(_))
        ));
    }
}
