/*! PDF text extraction

Vietnamese sources come as PDFs. Text is extracted page by page with [lopdf],
then either dumped as one text file per PDF (one line per non-blank line),
or split into chapters written as CSV files.
!*/
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use log::{debug, info, warn};
use lopdf::Document;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::Error;
use crate::extract::{file_stem, list_files};
use crate::report::{display_name, Outcome, Report};

/// A chapter: its title (a line of the page) and the full page text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Chapter {
    pub title: String,
    pub content: String,
}

/// Extract the text of each page, in page order.
///
/// Pages whose text cannot be extracted are logged and returned empty.
pub fn extract_text(path: &Path) -> Result<Vec<String>, Error> {
    let doc = Document::load(path)?;
    let pages = doc.get_pages();
    debug!("{:?}: {} pages", path, pages.len());

    let texts = pages
        .keys()
        .map(|&page_number| match doc.extract_text(&[page_number]) {
            Ok(text) => text,
            Err(e) => {
                warn!("{:?}: could not extract page {}: {}", path, page_number, e);
                String::new()
            }
        })
        .collect();

    Ok(texts)
}

/// `true` if the line has at least one cased character and no lowercase one.
fn is_upper(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Find chapters in page texts.
///
/// The first line of a non-blank page that starts with `Chapter` or that is uppercase
/// is the title of a chapter whose content is the whole page.
pub fn chapters_from_pages(pages: &[String]) -> Vec<Chapter> {
    pages
        .iter()
        .filter(|text| !text.trim().is_empty())
        .filter_map(|text| {
            text.lines()
                .find(|line| line.starts_with("Chapter") || is_upper(line))
                .map(|line| Chapter {
                    title: line.trim().to_string(),
                    content: text.clone(),
                })
        })
        .collect()
}

/// Extract the chapters of a PDF file.
pub fn extract_chapters(path: &Path) -> Result<Vec<Chapter>, Error> {
    let pages = extract_text(path)?;
    Ok(chapters_from_pages(&pages))
}

/// Forge a file name stem from a chapter title.
///
/// Titles containing `QUYỂN_` (volume) are cut to start at `QUYỂN`.
/// Spaces and `/` are replaced by `_`.
pub fn chapter_file_stem(title: &str) -> String {
    let title = match title.find("QUYỂN_") {
        Some(start) => &title[start..],
        None => title,
    };
    title.replace([' ', '/'], "_")
}

/// Write one `<base>_<title>.csv` file by chapter, holding a `Title,Content` header and a single row.
///
/// Chapters that end up with the same file name get a `_2`, `_3`… suffix.
pub fn write_chapters_csv(
    chapters: &[Chapter],
    base: &str,
    dst: &Path,
) -> Result<Vec<PathBuf>, Error> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut paths = Vec::with_capacity(chapters.len());

    for chapter in chapters {
        let stem = chapter_file_stem(&chapter.title);
        let count = seen.entry(stem.clone()).or_insert(0);
        *count += 1;
        let filename = if *count == 1 {
            format!("{}_{}.csv", base, stem)
        } else {
            format!("{}_{}_{}.csv", base, stem, count)
        };

        let path = dst.join(filename);
        let mut writer = csv::Writer::from_path(&path)?;
        writer.serialize(chapter)?;
        writer.flush()?;
        paths.push(path);
    }

    Ok(paths)
}

/// Dump the text of a PDF as `<stem>.txt` in `dst`, one non-blank trimmed line by line.
pub fn extract_pdf_file(path: &Path, dst: &Path) -> Result<Outcome, Error> {
    let stem = file_stem(path)?;
    let pages = extract_text(path)?;

    let text = pages
        .iter()
        .flat_map(|page| page.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .join("\n");

    if text.is_empty() {
        return Ok(Outcome::Skipped(format!("no text found in {:?}", path)));
    }

    let output = dst.join(format!("{}.txt", stem));
    std::fs::write(&output, text)?;
    Ok(Outcome::Written(output))
}

/// Extract the text of every PDF of `src` into `dst`, skipping the first `skip` files.
pub fn extract_pdf_dir(src: &Path, dst: &Path, skip: usize) -> Result<Report, Error> {
    std::fs::create_dir_all(dst)?;
    let paths = list_files(src, "pdf", skip)?;
    info!("found {} pdf files", paths.len());

    let results: Vec<(String, Result<Outcome, Error>)> = paths
        .par_iter()
        .map(|path| (display_name(path), extract_pdf_file(path, dst)))
        .collect();

    let mut report = Report::default();
    for (name, result) in results {
        report.record(&name, result);
    }
    Ok(report)
}

/// Write chapters of every PDF of `src` as CSV files into `dst`, skipping the first `skip` files.
pub fn chapters_dir(src: &Path, dst: &Path, skip: usize) -> Result<Report, Error> {
    std::fs::create_dir_all(dst)?;
    let paths = list_files(src, "pdf", skip)?;
    info!("found {} pdf files", paths.len());

    let results: Vec<(String, Result<Vec<PathBuf>, Error>)> = paths
        .par_iter()
        .map(|path| {
            let result = file_stem(path).and_then(|base| {
                let chapters = extract_chapters(path)?;
                debug!("[{}] {} chapters", base, chapters.len());
                write_chapters_csv(&chapters, &base, dst)
            });
            (display_name(path), result)
        })
        .collect();

    let mut report = Report::default();
    for (name, result) in results {
        match result {
            Ok(written) if written.is_empty() => {
                report.record(&name, Ok(Outcome::Skipped("no chapter found".to_string())))
            }
            Ok(written) => {
                for path in written {
                    report.record(&name, Ok(Outcome::Written(path)));
                }
            }
            Err(e) => report.record(&name, Err(e)),
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};
    use tempfile::tempdir;

    /// Build a PDF where each page is a list of lines.
    fn write_pdf(path: &Path, pages: &[&[&str]]) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        });

        let mut kids: Vec<Object> = Vec::new();
        for lines in pages {
            let mut operations = Vec::new();
            for (idx, line) in lines.iter().enumerate() {
                operations.push(Operation::new("BT", vec![]));
                operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
                operations.push(Operation::new(
                    "Td",
                    vec![50.into(), (800 - 20 * idx as i64).into()],
                ));
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(line.to_string())],
                ));
                operations.push(Operation::new("ET", vec![]));
            }
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    #[test]
    fn upper() {
        assert!(is_upper("QUYỂN MỘT"));
        assert!(is_upper("I. 2"));
        assert!(!is_upper("123"));
        assert!(!is_upper("Quyển một"));
        assert!(!is_upper(""));
    }

    #[test]
    fn chapters() {
        let pages = vec![
            "some intro\nPREFACE\ntext".to_string(),
            "   \n".to_string(),
            "Chapter 1 The Road\nit begins".to_string(),
            "nothing to see".to_string(),
        ];
        let chapters = chapters_from_pages(&pages);
        assert_eq!(
            chapters,
            vec![
                Chapter {
                    title: "PREFACE".to_string(),
                    content: pages[0].clone()
                },
                Chapter {
                    title: "Chapter 1 The Road".to_string(),
                    content: pages[2].clone()
                },
            ]
        );
    }

    #[test]
    fn stems() {
        assert_eq!(chapter_file_stem("Chapter 1/2 a"), "Chapter_1_2_a");
        assert_eq!(chapter_file_stem("HỒI QUYỂN_3 X"), "QUYỂN_3_X");
        assert_eq!(chapter_file_stem("QUYỂN 3"), "QUYỂN_3");
    }

    #[test]
    fn csv_files() {
        let dst = tempdir().unwrap();
        let chapters = vec![
            Chapter {
                title: "PREFACE".to_string(),
                content: "PREFACE\nhello, \"world\"".to_string(),
            },
            Chapter {
                title: "PREFACE".to_string(),
                content: "PREFACE\nagain".to_string(),
            },
        ];

        let paths = write_chapters_csv(&chapters, "book", dst.path()).unwrap();
        assert_eq!(
            paths,
            vec![
                dst.path().join("book_PREFACE.csv"),
                dst.path().join("book_PREFACE_2.csv")
            ]
        );

        let mut reader = csv::Reader::from_path(&paths[0]).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["Title", "Content"]);
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "PREFACE");
        assert_eq!(&rows[0][1], "PREFACE\nhello, \"world\"");
    }

    #[test]
    fn pdf_text() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("12.pdf");
        write_pdf(
            &path,
            &[&["INTRODUCTION", "Some text here"], &["Chapter 2", "more text"]],
        );

        let pages = extract_text(&path).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains("INTRODUCTION"));
        assert!(pages[1].contains("more text"));

        let chapters = extract_chapters(&path).unwrap();
        let titles: Vec<&str> = chapters.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["INTRODUCTION", "Chapter 2"]);
    }

    #[test]
    fn pdf_dir() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        write_pdf(&src.path().join("1.pdf"), &[&["Hello there"], &["Second page"]]);
        std::fs::write(src.path().join("2.pdf"), b"not a pdf").unwrap();
        std::fs::write(src.path().join("notes.txt"), b"ignored").unwrap();

        let report = extract_pdf_dir(src.path(), dst.path(), 0).unwrap();
        assert_eq!(report.processed(), 1);
        assert_eq!(report.failed, 1);

        let text = std::fs::read_to_string(dst.path().join("1.txt")).unwrap();
        assert_eq!(text, "Hello there\nSecond page");
    }

    #[test]
    fn pdf_dir_skip() {
        let src = tempdir().unwrap();
        let dst = tempdir().unwrap();
        write_pdf(&src.path().join("a.pdf"), &[&["A"]]);
        write_pdf(&src.path().join("b.pdf"), &[&["B"]]);

        let report = extract_pdf_dir(src.path(), dst.path(), 1).unwrap();
        assert_eq!(report.processed(), 1);
        assert!(dst.path().join("b.txt").exists());
        assert!(!dst.path().join("a.txt").exists());
    }
}
