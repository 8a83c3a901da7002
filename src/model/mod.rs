mod dataset;
mod report;

pub use dataset::{Dataset, FilteredView};
pub use report::{CaseCount, CaseDelta, Report};
