use std::io;

use structopt::StructOpt;

use epidash::cache::DatasetCache;
use epidash::cliopt::CliOpt;
use epidash::output::{HumanReadableEncoder, JsonEncoder, LineWriter};
use epidash::runner::Runner;
use epidash::utils::time::DateRange;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    let mut cache = DatasetCache::new();
    let dataset = cache.load(&opt.file)?;

    if opt.verbose {
        match dataset.date_span() {
            Some((first, last)) => eprintln!(
                "loaded {} reports spanning {} to {}",
                dataset.len(),
                first,
                last
            ),
            None => eprintln!("loaded an empty report file"),
        }
    }

    let mut runner = Runner::new(
        dataset,
        DateRange::new(opt.since, opt.until),
        Box::new(LineWriter::new(io::stdout())),
        match opt.encode {
            None => Box::new(HumanReadableEncoder::new()),
            Some(e) if e == "j" => Box::new(JsonEncoder::new()),
            _ => unimplemented!(),
        },
        opt.sections,
    );
    runner.run()?;

    Ok(())
}
