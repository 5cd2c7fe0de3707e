use crate::domain::burndown::BurndownSeries;

pub fn format_burndown_summary(series: &[BurndownSeries]) -> String {
    let mut lines = Vec::new();
    lines.push("Burndown Summary".to_string());
    lines.push(format!("Range: {}", format_range(series)));
    lines.push(String::new());
    lines.push("Priority | First | Last | Peak".to_string());
    lines.push("---------|-------|------|-----".to_string());
    for item in series {
        lines.push(format!(
            "{} | {} | {} | {}",
            item.priority,
            format_count(item.first_count()),
            format_count(item.last_count()),
            format_count(item.peak_count()),
        ));
    }

    lines.join("\n")
}

fn format_range(series: &[BurndownSeries]) -> String {
    let counts = series.first().map(|item| item.counts.as_slice()).unwrap_or(&[]);
    match (counts.first(), counts.last()) {
        (Some(first), Some(last)) => format!("{} to {} ({} days)", first.day, last.day, counts.len()),
        _ => "empty".to_string(),
    }
}

fn format_count(count: Option<usize>) -> String {
    match count {
        Some(value) => value.to_string(),
        None => "n/a".to_string(),
    }
}
