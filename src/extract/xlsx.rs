/*! Spreadsheet text extraction

Chinese sources come as one workbook by volume, named after the volume (`…卷12….xlsx`).
The content column of the first worksheet is dumped into `<volume>.txt`, one cell by line.

Workbooks are read with [calamine], which handles both `.xlsx` and legacy `.xls` (BIFF8) files.
!*/
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use itertools::Itertools;
use lazy_static::lazy_static;
use log::{debug, info};
use rayon::prelude::*;
use regex::Regex;

use crate::error::Error;
use crate::extract::list_dir;
use crate::report::{display_name, Outcome, Report};

lazy_static! {
    static ref VOLUME: Regex = Regex::new(r"卷(\d+)").unwrap();
}

/// A worksheet row, empty cells being [None].
pub type Row = Vec<Option<String>>;

/// Get the volume number (digits following `卷`) of a file name.
pub fn volume_number(file_name: &str) -> Option<String> {
    VOLUME
        .captures(file_name)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Find the first column whose header contains `content` (case insensitive) or `内容`.
pub fn find_content_column(header: &[Option<String>]) -> Option<usize> {
    header.iter().position(|cell| {
        cell.as_deref()
            .map(|h| h.to_lowercase().contains("content") || h.contains("内容"))
            .unwrap_or(false)
    })
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Read the rows of the first worksheet of a workbook.
///
/// Rows start at the first used row of the sheet, and cells at its first used column.
pub fn read_sheet(path: &Path) -> Result<Vec<Row>, Error> {
    let mut workbook = open_workbook_auto(path)?;
    debug!("{:?}: sheets {:?}", path, workbook.sheet_names());

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Vec::new()),
    };

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

/// Dump the content column of a workbook into `<volume>.txt` in `dst`.
pub fn process_workbook(path: &Path, dst: &Path) -> Result<Outcome, Error> {
    let name = display_name(path);
    let volume = match volume_number(&name) {
        Some(v) => v,
        None => return Ok(Outcome::Skipped("no volume number found".to_string())),
    };

    let rows = read_sheet(path)?;
    let (header, records) = match rows.split_first() {
        Some(split) => split,
        None => return Ok(Outcome::Skipped("empty worksheet".to_string())),
    };
    let column = match find_content_column(header) {
        Some(c) => c,
        None => return Ok(Outcome::Skipped("no content column found".to_string())),
    };

    let content = records
        .iter()
        .filter_map(|row| row.get(column).and_then(|cell| cell.as_deref()))
        .join("\n");
    debug!("[{}] {} bytes of content", volume, content.len());

    let output = dst.join(format!("{}.txt", volume));
    std::fs::write(&output, content)?;
    Ok(Outcome::Written(output))
}

/// Process every `.xlsx`/`.xls` workbook of `src` whose name contains `卷`.
pub fn extract_xlsx_dir(src: &Path, dst: &Path) -> Result<Report, Error> {
    std::fs::create_dir_all(dst)?;

    let paths: Vec<_> = list_dir(src)?
        .into_iter()
        .filter(|p| {
            let name = display_name(p);
            name.contains('卷') && (name.ends_with(".xlsx") || name.ends_with(".xls"))
        })
        .collect();
    info!("found {} files matching the pattern", paths.len());

    let results: Vec<(String, Result<Outcome, Error>)> = paths
        .par_iter()
        .map(|path| (display_name(path), process_workbook(path, dst)))
        .collect();

    let mut report = Report::default();
    for (name, result) in results {
        report.record(&name, result);
    }
    Ok(report)
}
