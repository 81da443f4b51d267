//! Input file selection.
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::Error;
use crate::extract::{file_stem, list_files};

/// File numbers of a test run of the full pipeline.
pub const TEST_RUN: [&str; 2] = ["75", "130"];
/// File numbers of a test run of the alignment stage.
pub const TEST_ALIGN: [&str; 3] = ["1", "10", "75"];

/// Which `N.txt` files of a folder are processed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Every `.txt` file.
    #[default]
    All,
    /// Only the given file numbers (test mode).
    Numbers(Vec<String>),
}

impl Selection {
    /// Build a selection from a `--test [N..]` option.
    ///
    /// No option selects every file, an option without numbers selects `defaults`.
    pub fn from_test_option(test: Option<Vec<String>>, defaults: &[&str]) -> Self {
        match test {
            None => Selection::All,
            Some(numbers) if numbers.is_empty() => {
                Selection::Numbers(defaults.iter().map(|n| n.to_string()).collect())
            }
            Some(numbers) => Selection::Numbers(numbers),
        }
    }

    /// Resolve the selection in `folder`, returning `(file number, path)` tuples sorted by path.
    ///
    /// Selected numbers with no file are logged and left out.
    pub fn files(&self, folder: &Path) -> Result<Vec<(String, PathBuf)>, Error> {
        let mut files = match self {
            Selection::All => list_files(folder, "txt", 0)?
                .into_iter()
                .map(|path| Ok((file_stem(&path)?, path)))
                .collect::<Result<Vec<_>, Error>>()?,
            Selection::Numbers(numbers) => numbers
                .iter()
                .filter_map(|number| {
                    let path = folder.join(format!("{}.txt", number));
                    if path.is_file() {
                        Some((number.clone(), path))
                    } else {
                        warn!("[{}] file {:?} not found", number, path);
                        None
                    }
                })
                .collect(),
        };
        files.sort_by(|a, b| a.1.cmp(&b.1));
        files.dedup_by(|a, b| a.1 == b.1);
        Ok(files)
    }
}
