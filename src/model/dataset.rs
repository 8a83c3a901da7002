use chrono::NaiveDate;

use super::report::Report;
use crate::utils::time::DateRange;

/// Parsed report file: reports in file order plus passthrough column names.
///
/// The feed is expected to come sorted ascending by report date. The loader
/// neither verifies nor re-sorts; summaries read the positionally last
/// report as the latest one.
#[derive(Debug, Clone)]
pub struct Dataset {
    extra_columns: Vec<String>,
    reports: Vec<Report>,
}

impl Dataset {
    pub fn new(extra_columns: Vec<String>, reports: Vec<Report>) -> Self {
        Self {
            extra_columns,
            reports,
        }
    }

    #[inline]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    #[inline]
    pub fn extra_columns(&self) -> &[String] {
        &self.extra_columns
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// First and last report dates, in file order.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.reports.first(), self.reports.last()) {
            (Some(first), Some(last)) => Some((first.date(), last.date())),
            _ => None,
        }
    }

    pub fn select(&self, range: DateRange) -> FilteredView {
        FilteredView {
            dataset: self,
            range,
        }
    }
}

/// Lazy view over the reports whose date falls into a range.
///
/// Building the view costs nothing; iteration is restartable and preserves
/// the dataset order. An empty view is a valid outcome (including for an
/// inverted range) that callers must handle, not an error.
#[derive(Debug, Clone, Copy)]
pub struct FilteredView<'d> {
    dataset: &'d Dataset,
    range: DateRange,
}

impl<'d> FilteredView<'d> {
    pub fn iter(&self) -> impl Iterator<Item = &'d Report> {
        let dataset: &'d Dataset = self.dataset;
        let range = self.range;
        dataset
            .reports
            .iter()
            .filter(move |report| range.contains(report.date()))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    #[inline]
    pub fn range(&self) -> DateRange {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
    }

    fn report(day: u32) -> Report {
        Report::new(date(day), day as i64, 10 * day as u64, 0, day as u64, vec![])
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![], (1..=5).map(report).collect())
    }

    fn dates<'a>(reports: impl Iterator<Item = &'a Report>) -> Vec<NaiveDate> {
        reports.map(|r| r.date()).collect()
    }

    #[test]
    fn test_select_inclusive_bounds() {
        let dataset = dataset();
        let view = dataset.select(DateRange::new(Some(date(2)), Some(date(4))));

        assert_eq!(dates(view.iter()), vec![date(2), date(3), date(4)]);
    }

    #[test]
    fn test_select_preserves_order_and_restarts() {
        let dataset = dataset();
        let view = dataset.select(DateRange::infinity());

        let first_pass = dates(view.iter());
        let second_pass = dates(view.iter());

        assert_eq!(first_pass, (1..=5).map(date).collect::<Vec<_>>());
        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn test_select_inverted_range_is_empty() {
        let dataset = dataset();
        let view = dataset.select(DateRange::new(Some(date(4)), Some(date(2))));

        assert!(view.is_empty());
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn test_select_no_match_is_empty() {
        let dataset = dataset();
        let view = dataset.select(DateRange::new(
            Some(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()),
            None,
        ));

        assert!(view.is_empty());
    }

    #[test]
    fn test_select_twice_is_a_noop() {
        let dataset = dataset();
        let range = DateRange::new(Some(date(2)), Some(date(4)));

        let once: Vec<Report> = dataset.select(range).iter().cloned().collect();

        let refiltered = Dataset::new(vec![], once.clone());
        let twice: Vec<Report> = refiltered.select(range).iter().cloned().collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_date_span() {
        assert_eq!(dataset().date_span(), Some((date(1), date(5))));
        assert_eq!(Dataset::new(vec![], vec![]).date_span(), None);
    }
}
