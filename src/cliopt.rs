use std::path::PathBuf;

use chrono::NaiveDate;
use structopt::StructOpt;

use crate::runner::Section;
use crate::utils::time::parse_date;

#[derive(Debug, StructOpt)]
#[structopt(name = "epidash", about = "epidash command line arguments")]
pub struct CliOpt {
    /// Path to the daily report CSV file.
    pub file: PathBuf,

    #[structopt(long = "since", short = "s", parse(try_from_str = parse_date))]
    pub since: Option<NaiveDate>,

    #[structopt(long = "until", short = "u", parse(try_from_str = parse_date))]
    pub until: Option<NaiveDate>,

    #[structopt(long = "encode", short = "e")]
    pub encode: Option<String>,

    #[structopt(long = "section", short = "c")]
    pub sections: Vec<Section>,

    #[structopt(long = "verbose", short = "v")]
    pub verbose: bool,
}
