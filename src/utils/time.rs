use chrono::prelude::*;

use crate::error::Result;

/// Inclusive [start, end] calendar date range; an open end matches
/// everything on that side.
///
/// An inverted range (start after end) is representable and simply matches
/// nothing — an empty selection is an ordinary outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn infinity() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    #[inline]
    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    try_parse_date(s).ok_or_else(|| format!("couldn't parse date '{}'", s).into())
}

/// Date formats observed in deployed report exports. First match wins.
pub fn try_parse_date(s: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => return Some(d),
        Err(_) => (),
    }

    match NaiveDate::parse_from_str(s, "%Y/%m/%d") {
        Ok(d) => return Some(d),
        Err(_) => (),
    }

    // Early snapshots: 1/22/20
    match NaiveDate::parse_from_str(s, "%m/%d/%y") {
        Ok(d) => return Some(d),
        Err(_) => (),
    }

    // Some exports stamp a midnight time onto the report date.
    match NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        Ok(dt) => return Some(dt.date()),
        Err(_) => (),
    }

    match NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        Ok(dt) => return Some(dt.date()),
        Err(_) => (),
    }

    None
}
