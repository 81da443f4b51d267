//! Corpus document tree.
use crate::align::AlignedPair;
use crate::metadata::Metadata;

/// Maximum number of sentence pairs in a page.
pub const PAGE_SIZE: usize = 50;

/// Value of the `LANGUAGE` meta element.
pub const LANGUAGE: &str = "Hán-Việt";

/// Meta element names, in document order. `LANGUAGE` is not read from metadata.
pub const META_KEYS: [&str; 7] = [
    "TITLE",
    "VOLUME",
    "AUTHOR",
    "PERIOD",
    "LANGUAGE",
    "TRANSLATOR",
    "SOURCE",
];

/// Trim and collapse whitespace runs into a single space.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `FILE` element.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusFile {
    pub id: String,
    /// (element name, text) couples of the `meta` element.
    pub meta: Vec<(&'static str, String)>,
    pub section: Section,
}

/// `SECT` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub pages: Vec<Page>,
}

/// `PAGE` element.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: String,
    pub sentences: Vec<Sentence>,
}

/// `STC` element, holding `C` and `V`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    pub id: String,
    pub chinese: String,
    pub vietnamese: String,
}

/// Build the document tree for a file number.
///
/// Ids are hierarchical and zero-padded to three digits:
/// `FILE` is the metadata id, `SECT` is `<file>.<file_number>`,
/// pages are numbered from 1 inside the section and sentences from 1 inside each page.
pub fn build_document(file_number: u64, pairs: &[AlignedPair], metadata: &Metadata) -> CorpusFile {
    let id = metadata.id();
    let title = metadata.get("TITLE");

    let meta = META_KEYS
        .iter()
        .map(|&key| {
            let value = if key == "LANGUAGE" {
                LANGUAGE.to_string()
            } else {
                metadata.get(key)
            };
            (key, value)
        })
        .collect();

    let sect_id = format!("{}.{:03}", id, file_number);
    let pages = pairs
        .chunks(PAGE_SIZE)
        .enumerate()
        .map(|(page_idx, chunk)| {
            let page_id = format!("{}.{:03}", sect_id, page_idx + 1);
            let sentences = chunk
                .iter()
                .enumerate()
                .map(|(idx, pair)| Sentence {
                    id: format!("{}.{:03}", page_id, idx + 1),
                    chinese: clean_text(&pair.chinese),
                    vietnamese: clean_text(&pair.vietnamese),
                })
                .collect();
            Page {
                id: page_id,
                sentences,
            }
        })
        .collect();

    CorpusFile {
        id,
        meta,
        section: Section {
            id: sect_id,
            name: title,
            pages,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(nb: usize) -> Vec<AlignedPair> {
        (0..nb)
            .map(|x| AlignedPair::new(&format!("句{}", x + 1), &format!("câu {}", x + 1)))
            .collect()
    }

    #[test]
    fn clean() {
        assert_eq!(clean_text("  a \t b\n\nc  "), "a b c");
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn pagination() {
        let metadata = Metadata::from_yaml_str("ID: HCS_002\nTITLE: T").unwrap();
        for (nb, expected_pages) in [(1, 1), (49, 1), (50, 1), (51, 2), (120, 3)] {
            let doc = build_document(7, &pairs(nb), &metadata);
            let pages = &doc.section.pages;
            assert_eq!(pages.len(), expected_pages, "{} pairs", nb);

            let total: usize = pages.iter().map(|p| p.sentences.len()).sum();
            assert_eq!(total, nb);
            assert!(pages.iter().all(|p| p.sentences.len() <= PAGE_SIZE));
            assert!(pages[..pages.len() - 1]
                .iter()
                .all(|p| p.sentences.len() == PAGE_SIZE));
        }
    }

    #[test]
    fn no_pairs_no_pages() {
        let doc = build_document(1, &[], &Metadata::default());
        assert!(doc.section.pages.is_empty());
    }

    #[test]
    fn ids() {
        let metadata = Metadata::from_yaml_str("ID: HCS_001\nTITLE: Title").unwrap();
        let doc = build_document(75, &pairs(52), &metadata);

        assert_eq!(doc.id, "HCS_001");
        assert_eq!(doc.section.id, "HCS_001.075");
        assert_eq!(doc.section.name, "Title");
        assert_eq!(doc.section.pages[0].id, "HCS_001.075.001");
        assert_eq!(doc.section.pages[1].id, "HCS_001.075.002");
        assert_eq!(doc.section.pages[0].sentences[49].id, "HCS_001.075.001.050");
        assert_eq!(doc.section.pages[1].sentences[0].id, "HCS_001.075.002.001");
        assert_eq!(doc.section.pages[1].sentences[1].chinese, "句52");
        assert_eq!(doc.section.pages[1].sentences[1].vietnamese, "câu 52");
    }

    #[test]
    fn wide_file_number() {
        let doc = build_document(1234, &pairs(1), &Metadata::default());
        assert_eq!(doc.section.id, "HCS_001.1234");
    }

    #[test]
    fn meta_order() {
        let metadata =
            Metadata::from_yaml_str("AUTHOR: A\nTIITLE: T\nVOLUME: 2\nLANGUAGE: ignored").unwrap();
        let doc = build_document(1, &pairs(1), &metadata);
        assert_eq!(
            doc.meta,
            vec![
                ("TITLE", "T".to_string()),
                ("VOLUME", "2".to_string()),
                ("AUTHOR", "A".to_string()),
                ("PERIOD", String::new()),
                ("LANGUAGE", LANGUAGE.to_string()),
                ("TRANSLATOR", String::new()),
                ("SOURCE", String::new()),
            ]
        );
    }
}
