use super::encoder::{Encodable, Encoder};
use crate::engine::{CumulativePoint, DailyPoint, Summary};
use crate::error::Result;
use crate::input::decoder::{
    CUMULATIVE_CASES, CUMULATIVE_DEATHS, DATE_REPORTED, NEW_CASES, NEW_DEATHS,
};
use crate::model::Report;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Terminal-oriented report: headline metrics with digit grouping, plain
/// series lines, a tab-separated table.
pub struct HumanReadableEncoder {}

impl HumanReadableEncoder {
    pub fn new() -> Self {
        Self {}
    }

    fn encode_summary(&self, summary: &Summary) -> Vec<u8> {
        let lines = vec![
            format!("Total cases: {}", group_digits(summary.total_cases())),
            format!("Total deaths: {}", group_digits(summary.total_deaths())),
            format!("New cases (latest): {}", group_digits(summary.latest_new_cases())),
            format!(
                "New deaths (latest): {}",
                group_digits(summary.latest_new_deaths())
            ),
        ];

        String::into_bytes(lines.join("\n"))
    }

    fn encode_cumulative(&self, points: &[CumulativePoint]) -> Vec<u8> {
        let mut lines = vec!["Cumulative cases and deaths over time".to_string()];
        for point in points {
            lines.push(format!(
                "{} {} {}",
                point.date.format(DATE_FORMAT),
                point.cases,
                point.deaths
            ));
        }

        String::into_bytes(lines.join("\n"))
    }

    fn encode_daily(&self, points: &[DailyPoint]) -> Vec<u8> {
        let mut lines = vec!["Daily new cases and deaths".to_string()];
        for point in points {
            lines.push(format!(
                "{} {} {}",
                point.date.format(DATE_FORMAT),
                point.cases,
                point.deaths
            ));
        }

        String::into_bytes(lines.join("\n"))
    }

    fn encode_table(&self, extra_columns: &[String], reports: &[Report]) -> Vec<u8> {
        let mut header = vec![
            DATE_REPORTED.to_string(),
            NEW_CASES.to_string(),
            CUMULATIVE_CASES.to_string(),
            NEW_DEATHS.to_string(),
            CUMULATIVE_DEATHS.to_string(),
        ];
        header.extend(extra_columns.iter().cloned());

        let mut lines = vec![header.join("\t")];
        for report in reports {
            let mut row = vec![
                report.date().format(DATE_FORMAT).to_string(),
                report.new_cases().to_string(),
                report.cumulative_cases().to_string(),
                report.new_deaths().to_string(),
                report.cumulative_deaths().to_string(),
            ];
            row.extend(report.extra().iter().cloned());
            lines.push(row.join("\t"));
        }

        String::into_bytes(lines.join("\n"))
    }
}

impl Encoder for HumanReadableEncoder {
    fn encode(&self, value: &Encodable) -> Result<Vec<u8>> {
        Ok(match value {
            Encodable::Summary(summary) => self.encode_summary(summary),
            Encodable::CumulativeSeries(points) => self.encode_cumulative(points),
            Encodable::DailySeries(points) => self.encode_daily(points),
            Encodable::Table {
                extra_columns,
                reports,
            } => self.encode_table(extra_columns, reports),
            Encodable::NoData(_) => b"No data available for the selected date range.".to_vec(),
        })
    }
}

/// 1234567 -> "1,234,567", matching the dashboard's metric formatting.
fn group_digits<T: ToString>(n: T) -> String {
    let s = n.to_string();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", &s[..]),
    };

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}", sign, grouped)
}
