use crate::engine::{CumulativePoint, DailyPoint, Summary};
use crate::error::Result;
use crate::model::Report;
use crate::utils::time::DateRange;

/// One renderable section of the dashboard output.
#[derive(Debug)]
pub enum Encodable {
    Summary(Summary),
    CumulativeSeries(Vec<CumulativePoint>),
    DailySeries(Vec<DailyPoint>),
    Table {
        extra_columns: Vec<String>,
        reports: Vec<Report>,
    },
    NoData(DateRange),
}

pub trait Encoder {
    fn encode(&self, value: &Encodable) -> Result<Vec<u8>>;
}
