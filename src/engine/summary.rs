use crate::model::{CaseCount, CaseDelta, Report};

/// The four headline metrics over a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    total_cases: CaseCount,
    total_deaths: CaseCount,
    latest_new_cases: CaseDelta,
    latest_new_deaths: CaseDelta,
}

impl Summary {
    #[inline]
    pub fn total_cases(&self) -> CaseCount {
        self.total_cases
    }

    #[inline]
    pub fn total_deaths(&self) -> CaseCount {
        self.total_deaths
    }

    #[inline]
    pub fn latest_new_cases(&self) -> CaseDelta {
        self.latest_new_cases
    }

    #[inline]
    pub fn latest_new_deaths(&self) -> CaseDelta {
        self.latest_new_deaths
    }
}

/// Folds a view into its headline metrics.
///
/// Totals take the maximum of the cumulative columns, so a decreasing
/// correction in the feed can't drag the headline numbers down. The latest
/// deltas come from the positionally last report — the feed is sorted
/// ascending by date (loader precondition), so last means most recent.
///
/// An empty view folds to `None`; callers render a no-data state instead.
pub fn summarize<'a, I>(reports: I) -> Option<Summary>
where
    I: IntoIterator<Item = &'a Report>,
{
    let mut summary: Option<Summary> = None;

    for report in reports {
        summary = Some(match summary {
            None => Summary {
                total_cases: report.cumulative_cases(),
                total_deaths: report.cumulative_deaths(),
                latest_new_cases: report.new_cases(),
                latest_new_deaths: report.new_deaths(),
            },
            Some(prev) => Summary {
                total_cases: CaseCount::max(prev.total_cases, report.cumulative_cases()),
                total_deaths: CaseCount::max(prev.total_deaths, report.cumulative_deaths()),
                latest_new_cases: report.new_cases(),
                latest_new_deaths: report.new_deaths(),
            },
        });
    }

    summary
}
