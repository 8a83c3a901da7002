use std::rc::Rc;
use std::str::FromStr;

use crate::engine::{cumulative_series, daily_series, summarize};
use crate::error::{Error, Result};
use crate::model::Dataset;
use crate::output::{Encodable, Encoder, Writer};
use crate::utils::time::DateRange;

// Dataset -> FilteredView -> (Summary | series | table) -> Encoder -> Writer
//
// One run is one user interaction: filter once, aggregate once, render every
// requested section, stop. An empty view short-circuits into a single
// no-data chunk.

/// Renderable sections, listed in page order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section {
    Summary,
    Cumulative,
    Daily,
    Table,
}

impl Section {
    fn all() -> Vec<Section> {
        vec![
            Section::Summary,
            Section::Cumulative,
            Section::Daily,
            Section::Table,
        ]
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "summary" => Ok(Section::Summary),
            "cumulative" => Ok(Section::Cumulative),
            "daily" => Ok(Section::Daily),
            "table" => Ok(Section::Table),
            _ => Err(format!("unknown section '{}'", s).into()),
        }
    }
}

pub struct Runner {
    dataset: Rc<Dataset>,
    range: DateRange,
    sections: Vec<Section>,
    consumer: Consumer,
}

impl Runner {
    pub fn new(
        dataset: Rc<Dataset>,
        range: DateRange,
        writer: Box<dyn Writer>,
        encoder: Box<dyn Encoder>,
        sections: Vec<Section>,
    ) -> Self {
        let sections = if sections.is_empty() {
            Section::all()
        } else {
            sections
        };

        Self {
            dataset,
            range,
            sections,
            consumer: Consumer::new(writer, encoder),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let view = self.dataset.select(self.range);

        let summary = match summarize(view.iter()) {
            Some(summary) => summary,
            None => return self.consumer.write(&Encodable::NoData(self.range)),
        };

        for section in self.sections.clone() {
            let encodable = match section {
                Section::Summary => Encodable::Summary(summary.clone()),
                Section::Cumulative => Encodable::CumulativeSeries(cumulative_series(view.iter())),
                Section::Daily => Encodable::DailySeries(daily_series(view.iter())),
                Section::Table => Encodable::Table {
                    extra_columns: self.dataset.extra_columns().to_vec(),
                    reports: view.iter().cloned().collect(),
                },
            };
            self.consumer.write(&encodable)?;
        }

        Ok(())
    }
}

struct Consumer {
    writer: Box<dyn Writer>,
    encoder: Box<dyn Encoder>,
}

impl Consumer {
    fn new(writer: Box<dyn Writer>, encoder: Box<dyn Encoder>) -> Self {
        Self { writer, encoder }
    }

    fn write(&mut self, value: &Encodable) -> Result<()> {
        let buf = self.encoder.encode(value)?;

        self.writer
            .write(&buf)
            .map_err(|e| ("writer failed", e))?;

        Ok(())
    }
}
