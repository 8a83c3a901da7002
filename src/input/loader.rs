use std::io;
use std::path::Path;

use super::decoder::ReportDecoder;
use super::reader::{self, CsvReader};
use crate::error::Result;
use crate::model::Dataset;

/// Reads a whole report file into a dataset.
///
/// Fail-fast: a missing file, a bad header, or a single malformed row
/// aborts the parse — no partial dataset is ever produced. The feed is
/// expected to be sorted ascending by report date; that is a precondition,
/// not a checked property.
pub fn load(path: &Path) -> Result<Dataset> {
    read(reader::from_path(path)?)
}

pub fn read<R: io::Read>(mut reader: CsvReader<R>) -> Result<Dataset> {
    let headers = reader.headers()?;
    let decoder = ReportDecoder::from_headers(&headers)?;

    let mut reports = Vec::new();
    let mut row_no = 1; // the header occupies row 1
    while let Some(row) = reader.next() {
        row_no += 1;
        let report = decoder
            .decode(&row?)
            .map_err(|e| (format!("row {}: decoding failed", row_no), e))?;
        reports.push(report);
    }

    Ok(Dataset::new(decoder.extra_columns(), reports))
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    const WHO_SAMPLE: &str = "\
Date_reported,Country_code,Country,New_cases,Cumulative_cases,New_deaths,Cumulative_deaths
2021-01-01,AF,Afghanistan,5,10,0,1
2021-01-02,AF,Afghanistan,5,15,1,2
";

    #[test]
    fn test_read_round_trip() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dataset = read(CsvReader::new(WHO_SAMPLE.as_bytes()))?;

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.extra_columns(), ["Country_code", "Country"]);

        let first = &dataset.reports()[0];
        assert_eq!(first.date(), NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(first.date().format("%Y-%m-%d").to_string(), "2021-01-01");
        assert_eq!(first.new_cases(), 5);
        assert_eq!(first.cumulative_cases(), 10);
        assert_eq!(first.new_deaths(), 0);
        assert_eq!(first.cumulative_deaths(), 1);
        assert_eq!(first.extra(), ["AF", "Afghanistan"]);

        let last = &dataset.reports()[1];
        assert_eq!(last.cumulative_cases(), 15);
        assert_eq!(last.cumulative_deaths(), 2);

        Ok(())
    }

    #[test]
    fn test_read_header_only() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let header = WHO_SAMPLE.lines().next().unwrap();
        let dataset = read(CsvReader::new(header.as_bytes()))?;

        assert!(dataset.is_empty());
        assert_eq!(dataset.date_span(), None);

        Ok(())
    }

    #[test]
    fn test_read_is_fail_fast() {
        let csv = "\
Date_reported,Country_code,Country,New_cases,Cumulative_cases,New_deaths,Cumulative_deaths
2021-01-01,AF,Afghanistan,5,10,0,1
2021-01-02,AF,Afghanistan,not-a-number,15,1,2
";

        let err = read(CsvReader::new(csv.as_bytes())).unwrap_err();
        assert_eq!(err.message(), "row 3: decoding failed");
    }

    #[test]
    fn test_read_rejects_bad_header() {
        let err = read(CsvReader::new("Date_reported,Stuff\n".as_bytes())).unwrap_err();
        assert_eq!(err.message(), "missing required column 'New_cases'");
    }
}
