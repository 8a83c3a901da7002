use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;

/// CSV record reader over an arbitrary byte source.
///
/// The header row is consumed separately via `headers()`; iteration yields
/// data records only.
#[derive(Debug)]
pub struct CsvReader<R> {
    inner: csv::Reader<R>,
}

impl<R: io::Read> CsvReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner: csv::ReaderBuilder::new()
                .has_headers(true)
                .from_reader(inner),
        }
    }

    pub fn headers(&mut self) -> Result<csv::StringRecord> {
        self.inner
            .headers()
            .map(|headers| headers.clone())
            .map_err(|e| ("couldn't read CSV header", e).into())
    }
}

pub fn from_path(path: &Path) -> Result<CsvReader<io::BufReader<fs::File>>> {
    let file = fs::File::open(path)
        .map_err(|e| (format!("couldn't open report file {}", path.display()), e))?;
    Ok(CsvReader::new(io::BufReader::new(file)))
}

impl<R: io::Read> std::iter::Iterator for CsvReader<R> {
    type Item = Result<csv::StringRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = csv::StringRecord::new();
        match self.inner.read_record(&mut record) {
            Ok(true) => Some(Ok(record)),
            Ok(false) => None, // EOF
            Err(e) => Some(Err(("couldn't read CSV record", e).into())),
        }
    }
}
