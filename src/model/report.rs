use chrono::NaiveDate;

/// Cumulative counter value: a running total up to and including a date.
pub type CaseCount = u64;

/// Daily delta. Signed: raw feeds occasionally publish negative corrections.
pub type CaseDelta = i64;

/// One reporting observation from the daily feed.
///
/// Passthrough column values are carried verbatim, in the file's column
/// order, and are never interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    date: NaiveDate,
    new_cases: CaseDelta,
    cumulative_cases: CaseCount,
    new_deaths: CaseDelta,
    cumulative_deaths: CaseCount,
    extra: Vec<String>,
}

impl Report {
    pub fn new(
        date: NaiveDate,
        new_cases: CaseDelta,
        cumulative_cases: CaseCount,
        new_deaths: CaseDelta,
        cumulative_deaths: CaseCount,
        extra: Vec<String>,
    ) -> Self {
        Self {
            date,
            new_cases,
            cumulative_cases,
            new_deaths,
            cumulative_deaths,
            extra,
        }
    }

    #[inline]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    pub fn new_cases(&self) -> CaseDelta {
        self.new_cases
    }

    #[inline]
    pub fn cumulative_cases(&self) -> CaseCount {
        self.cumulative_cases
    }

    #[inline]
    pub fn new_deaths(&self) -> CaseDelta {
        self.new_deaths
    }

    #[inline]
    pub fn cumulative_deaths(&self) -> CaseCount {
        self.cumulative_deaths
    }

    #[inline]
    pub fn extra(&self) -> &[String] {
        &self.extra
    }
}
