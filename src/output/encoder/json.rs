use std::collections::BTreeMap;

use serde::Serialize;

use super::encoder::{Encodable, Encoder};
use crate::engine::{CumulativePoint, DailyPoint, Summary};
use crate::error::Result;
use crate::model::{CaseCount, CaseDelta, Report};

const DATE_FORMAT: &str = "%Y-%m-%d";

// Every section is a single-line JSON document tagged by resultType:
//
//   {"resultType":"summary","result":{"totalCases":...,"totalDeaths":...,...}}
//   {"resultType":"cumulative","result":[{"date":"2021-01-01","cases":10,"deaths":1},...]}
//   {"resultType":"daily","result":[{"date":"2021-01-01","cases":5,"deaths":0},...]}
//   {"resultType":"table","result":[{"date":...,"newCases":...,"extra":{...}},...]}
//   {"resultType":"empty"}
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Doc<T: Serialize> {
    result_type: &'static str,
    result: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmptyDoc {
    result_type: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryRepr {
    total_cases: CaseCount,
    total_deaths: CaseCount,
    latest_new_cases: CaseDelta,
    latest_new_deaths: CaseDelta,
}

#[derive(Serialize)]
struct PointRepr<T: Serialize> {
    date: String,
    cases: T,
    deaths: T,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RowRepr<'a> {
    date: String,
    new_cases: CaseDelta,
    cumulative_cases: CaseCount,
    new_deaths: CaseDelta,
    cumulative_deaths: CaseCount,
    extra: BTreeMap<&'a str, &'a str>,
}

pub struct JsonEncoder {}

impl JsonEncoder {
    pub fn new() -> Self {
        Self {}
    }

    fn encode_summary(&self, summary: &Summary) -> Result<Vec<u8>> {
        serialize(&Doc {
            result_type: "summary",
            result: SummaryRepr {
                total_cases: summary.total_cases(),
                total_deaths: summary.total_deaths(),
                latest_new_cases: summary.latest_new_cases(),
                latest_new_deaths: summary.latest_new_deaths(),
            },
        })
    }

    fn encode_cumulative(&self, points: &[CumulativePoint]) -> Result<Vec<u8>> {
        let points: Vec<PointRepr<CaseCount>> = points
            .iter()
            .map(|point| PointRepr {
                date: point.date.format(DATE_FORMAT).to_string(),
                cases: point.cases,
                deaths: point.deaths,
            })
            .collect();

        serialize(&Doc {
            result_type: "cumulative",
            result: points,
        })
    }

    fn encode_daily(&self, points: &[DailyPoint]) -> Result<Vec<u8>> {
        let points: Vec<PointRepr<CaseDelta>> = points
            .iter()
            .map(|point| PointRepr {
                date: point.date.format(DATE_FORMAT).to_string(),
                cases: point.cases,
                deaths: point.deaths,
            })
            .collect();

        serialize(&Doc {
            result_type: "daily",
            result: points,
        })
    }

    fn encode_table(&self, extra_columns: &[String], reports: &[Report]) -> Result<Vec<u8>> {
        let rows: Vec<RowRepr> = reports
            .iter()
            .map(|report| RowRepr {
                date: report.date().format(DATE_FORMAT).to_string(),
                new_cases: report.new_cases(),
                cumulative_cases: report.cumulative_cases(),
                new_deaths: report.new_deaths(),
                cumulative_deaths: report.cumulative_deaths(),
                extra: extra_columns
                    .iter()
                    .map(|name| name.as_str())
                    .zip(report.extra().iter().map(|value| value.as_str()))
                    .collect(),
            })
            .collect();

        serialize(&Doc {
            result_type: "table",
            result: rows,
        })
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, value: &Encodable) -> Result<Vec<u8>> {
        match value {
            Encodable::Summary(summary) => self.encode_summary(summary),
            Encodable::CumulativeSeries(points) => self.encode_cumulative(points),
            Encodable::DailySeries(points) => self.encode_daily(points),
            Encodable::Table {
                extra_columns,
                reports,
            } => self.encode_table(extra_columns, reports),
            Encodable::NoData(_) => serialize(&EmptyDoc {
                result_type: "empty",
            }),
        }
    }
}

fn serialize<T: Serialize>(doc: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(doc).map_err(|e| ("JSON serialization failed", e).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 1, day).unwrap()
    }

    fn encode(value: &Encodable) -> String {
        let buf = JsonEncoder::new().encode(value).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_encode_summary() {
        let reports = [
            Report::new(date(1), 5, 10, 0, 1, vec![]),
            Report::new(date(2), 5, 15, 1, 2, vec![]),
        ];
        let summary = crate::engine::summarize(&reports).unwrap();

        assert_eq!(
            encode(&Encodable::Summary(summary)),
            r#"{"resultType":"summary","result":{"totalCases":15,"totalDeaths":2,"latestNewCases":5,"latestNewDeaths":1}}"#
        );
    }

    #[test]
    fn test_encode_series() {
        let points = vec![CumulativePoint {
            date: date(1),
            cases: 10,
            deaths: 1,
        }];

        assert_eq!(
            encode(&Encodable::CumulativeSeries(points)),
            r#"{"resultType":"cumulative","result":[{"date":"2021-01-01","cases":10,"deaths":1}]}"#
        );

        let bars = vec![DailyPoint {
            date: date(2),
            cases: -2,
            deaths: 0,
        }];

        assert_eq!(
            encode(&Encodable::DailySeries(bars)),
            r#"{"resultType":"daily","result":[{"date":"2021-01-02","cases":-2,"deaths":0}]}"#
        );
    }

    #[test]
    fn test_encode_table_keys_extras_by_column_name() {
        let value = Encodable::Table {
            extra_columns: vec!["Country_code".to_string(), "Country".to_string()],
            reports: vec![Report::new(
                date(1),
                5,
                10,
                0,
                1,
                vec!["AF".to_string(), "Afghanistan".to_string()],
            )],
        };

        assert_eq!(
            encode(&value),
            r#"{"resultType":"table","result":[{"date":"2021-01-01","newCases":5,"cumulativeCases":10,"newDeaths":0,"cumulativeDeaths":1,"extra":{"Country":"Afghanistan","Country_code":"AF"}}]}"#
        );
    }

    #[test]
    fn test_encode_no_data() {
        let value = Encodable::NoData(crate::utils::time::DateRange::infinity());
        assert_eq!(encode(&value), r#"{"resultType":"empty"}"#);
    }
}
