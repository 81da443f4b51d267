/*! Aligned files to XML conversion

Each `aligned_N.txt` file becomes a `<ID>_NNN.xml` corpus file,
`ID` being the metadata identifier and `NNN` the zero-padded file number.
!*/
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use log::{debug, info};
use rayon::prelude::*;
use regex::Regex;

use crate::align::read_aligned;
use crate::error::Error;
use crate::metadata::Metadata;
use crate::report::{display_name, Outcome, Report};
use crate::xml::document::build_document;
use crate::xml::writer::render;

lazy_static! {
    static ref ALIGNED_NAME: Regex = Regex::new(r"aligned_(\d+)\.txt").unwrap();
}

/// Extract the file number of an aligned file from its name.
///
/// Numbers that do not fit a `u64` are [None].
pub fn aligned_file_number(path: &Path) -> Option<u64> {
    let name = path.file_name()?.to_str()?;
    ALIGNED_NAME
        .captures(name)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Path of the XML file for a given file number.
pub fn xml_path(dst: &Path, metadata: &Metadata, file_number: u64) -> PathBuf {
    dst.join(format!("{}_{:03}.xml", metadata.id(), file_number))
}

/// Convert a single aligned file into an XML file in `dst`.
///
/// Files with no file number in their name or with no pairs are skipped.
pub fn convert_aligned_file(
    path: &Path,
    metadata: &Metadata,
    dst: &Path,
) -> Result<Outcome, Error> {
    let file_number = match aligned_file_number(path) {
        Some(n) => n,
        None if ALIGNED_NAME.is_match(&display_name(path)) => {
            return Ok(Outcome::Skipped(format!(
                "file number out of range in {:?}",
                path
            )))
        }
        None => {
            return Ok(Outcome::Skipped(format!(
                "could not extract file number from {:?}",
                path
            )))
        }
    };

    let pairs = read_aligned(path)?;
    if pairs.is_empty() {
        return Ok(Outcome::Skipped(format!(
            "no aligned data found in {:?}",
            path
        )));
    }
    debug!("[{}] {} pairs", file_number, pairs.len());

    let doc = build_document(file_number, &pairs, metadata);
    let xml = render(&doc)?;

    let output = xml_path(dst, metadata, file_number);
    std::fs::write(&output, xml)?;
    Ok(Outcome::Written(output))
}

/// Convert the provided aligned files concurrently.
///
/// Errors on a file are logged and counted, they do not stop the conversion.
pub fn convert_files(paths: &[PathBuf], metadata: &Metadata, dst: &Path) -> Report {
    let results: Vec<(String, Result<Outcome, Error>)> = paths
        .par_iter()
        .map(|path| (display_name(path), convert_aligned_file(path, metadata, dst)))
        .collect();

    let mut report = Report::default();
    for (name, result) in results {
        report.record(&name, result);
    }
    report
}

/// List `aligned_*.txt` files of a folder, sorted.
pub fn list_aligned(src: &Path) -> Result<Vec<PathBuf>, Error> {
    let pattern = src.join("aligned_*.txt");
    let pattern = pattern
        .to_str()
        .ok_or_else(|| Error::Custom(format!("invalid source folder: {:?}", src)))?;

    let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
    paths.sort();
    Ok(paths)
}

/// Convert every aligned file of `src` into `dst`, creating `dst` if needed.
pub fn convert_dir(src: &Path, metadata: &Metadata, dst: &Path) -> Result<Report, Error> {
    std::fs::create_dir_all(dst)?;
    let paths = list_aligned(src)?;
    info!("found {} aligned files", paths.len());
    Ok(convert_files(&paths, metadata, dst))
}
