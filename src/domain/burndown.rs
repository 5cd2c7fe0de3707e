use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub day: NaiveDate,
    pub count: usize,
}

/// Open-issue counts for one priority, one entry per day in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BurndownSeries {
    pub priority: String,
    pub counts: Vec<DailyCount>,
}

impl BurndownSeries {
    pub fn first_count(&self) -> Option<usize> {
        self.counts.first().map(|daily| daily.count)
    }

    pub fn last_count(&self) -> Option<usize> {
        self.counts.last().map(|daily| daily.count)
    }

    pub fn peak_count(&self) -> Option<usize> {
        self.counts.iter().map(|daily| daily.count).max()
    }
}
