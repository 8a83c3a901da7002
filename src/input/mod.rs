pub mod decoder;
pub mod loader;
pub mod reader;

pub use decoder::ReportDecoder;
pub use loader::{load, read};
pub use reader::CsvReader;
