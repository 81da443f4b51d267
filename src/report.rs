//! Per-stage processing report.
use std::fmt;
use std::path::{Path, PathBuf};

use log::{error, info, warn};

use crate::error::Error;

/// Outcome of processing one input file.
#[derive(Debug)]
pub enum Outcome {
    /// Output written at the given path.
    Written(PathBuf),
    /// Input ignored, with the reason.
    Skipped(String),
}

/// Counts of processed/skipped/failed files for a stage, along with the written files.
#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<PathBuf>,
    pub skipped: usize,
    pub failed: usize,
}

impl Report {
    /// Account for the result of processing `input`, logging skips and errors.
    pub fn record(&mut self, input: &str, result: Result<Outcome, Error>) {
        match result {
            Ok(Outcome::Written(path)) => {
                info!("[{}] created {:?}", input, path);
                self.written.push(path);
            }
            Ok(Outcome::Skipped(reason)) => {
                warn!("[{}] skipped: {}", input, reason);
                self.skipped += 1;
            }
            Err(e) => {
                error!("[{}] {}", input, e);
                self.failed += 1;
            }
        }
    }

    pub fn processed(&self) -> usize {
        self.written.len()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} written, {} skipped, {} failed",
            self.processed(),
            self.skipped,
            self.failed
        )
    }
}

/// File name of a path, used to prefix log messages.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
