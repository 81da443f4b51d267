/*! Source text extraction

- [pdf]: Vietnamese PDFs, either as a plain text dump or split into chapters,
- [xlsx]: Chinese spreadsheets, by volume.
!*/
use std::path::{Path, PathBuf};

use crate::error::Error;

pub mod pdf;
pub mod xlsx;

pub use pdf::{chapters_dir, extract_pdf_dir, extract_pdf_file, extract_text};
pub use xlsx::{extract_xlsx_dir, process_workbook, read_sheet};

/// List files of a folder, sorted by path.
pub(crate) fn list_dir(src: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(src)? {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// List files of a folder with the given extension (case insensitive), sorted,
/// leaving out the first `skip` ones.
pub(crate) fn list_files(src: &Path, ext: &str, skip: usize) -> Result<Vec<PathBuf>, Error> {
    Ok(list_dir(src)?
        .into_iter()
        .filter(|p| {
            p.extension()
                .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
                .unwrap_or(false)
        })
        .skip(skip)
        .collect())
}

pub(crate) fn file_stem(path: &Path) -> Result<String, Error> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or_else(|| Error::Custom(format!("no file name in {:?}", path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn listing() {
        let dir = tempdir().unwrap();
        for name in ["b.pdf", "a.PDF", "c.pdf", "notes.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("d.pdf")).unwrap();

        let names = |paths: Vec<PathBuf>| -> Vec<String> {
            paths
                .iter()
                .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
                .collect()
        };

        assert_eq!(
            names(list_files(dir.path(), "pdf", 0).unwrap()),
            vec!["a.PDF", "b.pdf", "c.pdf"]
        );
        assert_eq!(
            names(list_files(dir.path(), "pdf", 2).unwrap()),
            vec!["c.pdf"]
        );
        assert_eq!(list_dir(dir.path()).unwrap().len(), 4);
    }

    #[test]
    fn stems() {
        assert_eq!(file_stem(Path::new("vn/sach 1.pdf")).unwrap(), "sach 1");
        assert!(file_stem(Path::new("/")).is_err());
    }
}
