use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::model::{CaseCount, CaseDelta, Report};
use crate::utils::time::try_parse_date;

pub const DATE_REPORTED: &str = "Date_reported";
pub const NEW_CASES: &str = "New_cases";
pub const CUMULATIVE_CASES: &str = "Cumulative_cases";
pub const NEW_DEATHS: &str = "New_deaths";
pub const CUMULATIVE_DEATHS: &str = "Cumulative_deaths";

/// Decodes CSV rows into reports.
///
/// Column positions are resolved from the header once, up front: the five
/// required columns are matched by exact name, every other column is carried
/// through untouched, in file order.
#[derive(Debug)]
pub struct ReportDecoder {
    date: usize,
    new_cases: usize,
    cumulative_cases: usize,
    new_deaths: usize,
    cumulative_deaths: usize,
    extra: Vec<(usize, String)>,
}

impl ReportDecoder {
    pub fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let mut positions = HashMap::new();
        for (pos, name) in headers.iter().enumerate() {
            if positions.insert(name.to_string(), pos).is_some() {
                return Err(format!("duplicate column '{}'", name).into());
            }
        }

        let required = |name: &str| -> Result<usize> {
            positions
                .get(name)
                .copied()
                .ok_or_else(|| format!("missing required column '{}'", name).into())
        };

        let date = required(DATE_REPORTED)?;
        let new_cases = required(NEW_CASES)?;
        let cumulative_cases = required(CUMULATIVE_CASES)?;
        let new_deaths = required(NEW_DEATHS)?;
        let cumulative_deaths = required(CUMULATIVE_DEATHS)?;

        let claimed = [
            date,
            new_cases,
            cumulative_cases,
            new_deaths,
            cumulative_deaths,
        ];
        let extra = headers
            .iter()
            .enumerate()
            .filter(|(pos, _)| !claimed.contains(pos))
            .map(|(pos, name)| (pos, name.to_string()))
            .collect();

        Ok(Self {
            date,
            new_cases,
            cumulative_cases,
            new_deaths,
            cumulative_deaths,
            extra,
        })
    }

    pub fn decode(&self, row: &csv::StringRecord) -> Result<Report> {
        let date_str = cell(row, self.date, DATE_REPORTED)?;
        let date = try_parse_date(date_str).ok_or_else(|| {
            Error::from(format!(
                "couldn't parse {} value '{}'",
                DATE_REPORTED, date_str
            ))
        })?;

        let new_cases = parse_delta(row, self.new_cases, NEW_CASES)?;
        let cumulative_cases = parse_count(row, self.cumulative_cases, CUMULATIVE_CASES)?;
        let new_deaths = parse_delta(row, self.new_deaths, NEW_DEATHS)?;
        let cumulative_deaths = parse_count(row, self.cumulative_deaths, CUMULATIVE_DEATHS)?;

        let extra = self
            .extra
            .iter()
            .map(|(pos, _)| row.get(*pos).unwrap_or("").to_string())
            .collect();

        Ok(Report::new(
            date,
            new_cases,
            cumulative_cases,
            new_deaths,
            cumulative_deaths,
            extra,
        ))
    }

    /// Passthrough column names, in file order.
    pub fn extra_columns(&self) -> Vec<String> {
        self.extra.iter().map(|(_, name)| name.clone()).collect()
    }
}

fn cell<'a>(row: &'a csv::StringRecord, pos: usize, name: &str) -> Result<&'a str> {
    row.get(pos)
        .ok_or_else(|| format!("row is too short, no {} column", name).into())
}

fn parse_count(row: &csv::StringRecord, pos: usize, name: &str) -> Result<CaseCount> {
    cell(row, pos, name)?
        .parse::<CaseCount>()
        .map_err(|e| (format!("couldn't parse {} value", name), e).into())
}

fn parse_delta(row: &csv::StringRecord, pos: usize, name: &str) -> Result<CaseDelta> {
    cell(row, pos, name)?
        .parse::<CaseDelta>()
        .map_err(|e| (format!("couldn't parse {} value", name), e).into())
}
