use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::SystemTime;

use crate::error::Result;
use crate::input;
use crate::model::Dataset;

/// Single-slot memoization of the parse step.
///
/// The slot is keyed by canonical path and file modification time; a key
/// mismatch or an explicit invalidation replaces the whole slot. One slot,
/// no eviction policy — the hosting model re-filters one dataset many
/// times and re-parses it almost never.
pub struct DatasetCache {
    slot: Option<Slot>,
}

struct Slot {
    path: PathBuf,
    modified: SystemTime,
    dataset: Rc<Dataset>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self { slot: None }
    }

    pub fn load(&mut self, path: &Path) -> Result<Rc<Dataset>> {
        let (path, modified) = identity(path)?;

        if let Some(slot) = &self.slot {
            if slot.path == path && slot.modified == modified {
                return Ok(Rc::clone(&slot.dataset));
            }
        }

        let dataset = Rc::new(input::load(&path)?);
        self.slot = Some(Slot {
            path,
            modified,
            dataset: Rc::clone(&dataset),
        });

        Ok(dataset)
    }

    /// Drops the slot; the next load re-parses.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

fn identity(path: &Path) -> Result<(PathBuf, SystemTime)> {
    let path = fs::canonicalize(path)
        .map_err(|e| (format!("couldn't resolve report file {}", path.display()), e))?;
    let modified = fs::metadata(&path)
        .and_then(|meta| meta.modified())
        .map_err(|e| (format!("couldn't stat report file {}", path.display()), e))?;

    Ok((path, modified))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;
    use std::time::Duration;

    use tempfile::TempDir;

    const HEADER: &str =
        "Date_reported,Country_code,Country,New_cases,Cumulative_cases,New_deaths,Cumulative_deaths";

    fn write_reports(path: &Path, rows: &[&str]) {
        let mut contents = String::from(HEADER);
        for row in rows {
            contents.push('\n');
            contents.push_str(row);
        }
        contents.push('\n');
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_load_reuses_the_slot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports.csv");
        write_reports(&path, &["2021-01-01,AF,Afghanistan,5,10,0,1"]);

        let mut cache = DatasetCache::new();
        let first = cache.load(&path).unwrap();
        let second = cache.load(&path).unwrap();

        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_invalidate_forces_a_reparse() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports.csv");
        write_reports(&path, &["2021-01-01,AF,Afghanistan,5,10,0,1"]);

        let mut cache = DatasetCache::new();
        let first = cache.load(&path).unwrap();
        cache.invalidate();
        let second = cache.load(&path).unwrap();

        assert!(!Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_modified_file_is_reparsed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports.csv");
        write_reports(&path, &["2021-01-01,AF,Afghanistan,5,10,0,1"]);

        let mut cache = DatasetCache::new();
        let first = cache.load(&path).unwrap();
        assert_eq!(first.len(), 1);

        // Make sure the rewrite lands on a different mtime.
        thread::sleep(Duration::from_millis(50));
        write_reports(
            &path,
            &[
                "2021-01-01,AF,Afghanistan,5,10,0,1",
                "2021-01-02,AF,Afghanistan,5,15,1,2",
            ],
        );

        let second = cache.load(&path).unwrap();
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn test_switching_paths_replaces_the_slot() {
        let dir = TempDir::new().unwrap();
        let one = dir.path().join("one.csv");
        let two = dir.path().join("two.csv");
        write_reports(&one, &["2021-01-01,AF,Afghanistan,5,10,0,1"]);
        write_reports(
            &two,
            &[
                "2021-01-01,AF,Afghanistan,5,10,0,1",
                "2021-01-02,AF,Afghanistan,5,15,1,2",
            ],
        );

        let mut cache = DatasetCache::new();
        assert_eq!(cache.load(&one).unwrap().len(), 1);
        assert_eq!(cache.load(&two).unwrap().len(), 2);
        assert_eq!(cache.load(&one).unwrap().len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let mut cache = DatasetCache::new();

        let err = cache.load(Path::new("no/such/reports.csv")).unwrap_err();
        assert!(err.message().starts_with("couldn't resolve report file"));
    }
}
