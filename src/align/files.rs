/*! Aligned pairs files

Aligned files are tab-separated, one `chinese\tvietnamese` pair per line.
Both sides are single-line: embedded newlines are replaced by spaces on both writing and reading.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};

use crate::align::Aligner;
use crate::error::Error;
use crate::sentence;

/// An aligned (chinese, vietnamese) sentence pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedPair {
    pub chinese: String,
    pub vietnamese: String,
}

impl AlignedPair {
    /// Build a pair, flattening newlines and trimming both sides.
    pub fn new(chinese: &str, vietnamese: &str) -> Self {
        Self {
            chinese: single_line(chinese),
            vietnamese: single_line(vietnamese),
        }
    }

    /// Parse a line of an aligned file.
    ///
    /// Returns [None] for blank lines and lines that do not have exactly two tab-separated fields.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let mut parts = line.split('\t');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(chinese), Some(vietnamese), None) => Some(Self::new(chinese, vietnamese)),
            _ => None,
        }
    }
}

fn single_line(s: &str) -> String {
    s.replace('\n', " ").trim().to_string()
}

/// Align a chinese and a vietnamese text file and write pairs to `output`.
///
/// Beads that have an empty side are not written.
/// Returns the number of pairs written.
pub fn align_files(
    aligner: &dyn Aligner,
    chinese: &Path,
    vietnamese: &Path,
    output: &Path,
) -> Result<usize, Error> {
    let src = std::fs::read_to_string(chinese)?;
    let tgt = std::fs::read_to_string(vietnamese)?;

    let han = sentence::han_ratio(&src);
    if han < 0.5 {
        warn!(
            "{:?} has a low ratio of han characters ({:.2}), files may be swapped",
            chinese,
            han
        );
    }

    info!(
        "aligning {:?} with {:?}",
        chinese.file_name().unwrap_or_default(),
        vietnamese.file_name().unwrap_or_default()
    );
    let alignment = aligner.align(&src, &tgt)?;
    debug!(
        "{} beads ({} sentences/{} sentences)",
        alignment.beads.len(),
        alignment.src_sents.len(),
        alignment.tgt_sents.len()
    );

    let pairs: Vec<AlignedPair> = alignment
        .pairs()
        .map(|(c, v)| AlignedPair::new(&c, &v))
        .filter(|p| !p.chinese.is_empty() && !p.vietnamese.is_empty())
        .collect();

    write_aligned(output, &pairs)?;
    info!("alignment saved to {:?}", output);
    Ok(pairs.len())
}

/// Write pairs to a tab-separated file, one pair by line.
pub fn write_aligned(path: &Path, pairs: &[AlignedPair]) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);
    for pair in pairs {
        writeln!(w, "{}\t{}", pair.chinese, pair.vietnamese)?;
    }
    w.flush()?;
    Ok(())
}

/// Read pairs from a tab-separated file, skipping malformed lines.
pub fn read_aligned(path: &Path) -> Result<Vec<AlignedPair>, Error> {
    let reader = BufReader::new(File::open(path)?);
    let mut pairs = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match AlignedPair::from_line(&line) {
            Some(pair) => pairs.push(pair),
            None if !line.trim().is_empty() => {
                debug!("{:?}:{}: not a pair, skipping", path, idx + 1)
            }
            None => (),
        }
    }
    Ok(pairs)
}
