use chrono::NaiveDate;

use crate::model::{CaseCount, CaseDelta, Report};

/// One point of the cumulative cases/deaths chart pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativePoint {
    pub date: NaiveDate,
    pub cases: CaseCount,
    pub deaths: CaseCount,
}

/// One bar of the daily new cases/deaths chart pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub cases: CaseDelta,
    pub deaths: CaseDelta,
}

pub fn cumulative_series<'a, I>(reports: I) -> Vec<CumulativePoint>
where
    I: IntoIterator<Item = &'a Report>,
{
    reports
        .into_iter()
        .map(|report| CumulativePoint {
            date: report.date(),
            cases: report.cumulative_cases(),
            deaths: report.cumulative_deaths(),
        })
        .collect()
}

pub fn daily_series<'a, I>(reports: I) -> Vec<DailyPoint>
where
    I: IntoIterator<Item = &'a Report>,
{
    reports
        .into_iter()
        .map(|report| DailyPoint {
            date: report.date(),
            cases: report.new_cases(),
            deaths: report.new_deaths(),
        })
        .collect()
}
