//! Aligner trait and alignment results.
use crate::error::Error;

/// Alignment unit pairing a span of source sentences with a span of target sentences.
///
/// Indices are contiguous and ascending. Either side can be empty
/// (the sentence(s) on the other side have no counterpart).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Bead {
    pub src: Vec<usize>,
    pub tgt: Vec<usize>,
}

impl Bead {
    pub fn new(src: Vec<usize>, tgt: Vec<usize>) -> Self {
        Self { src, tgt }
    }

    /// `true` if both sides have at least one sentence.
    pub fn is_pair(&self) -> bool {
        !self.src.is_empty() && !self.tgt.is_empty()
    }

    /// Number of sentences, both sides included.
    pub fn len(&self) -> usize {
        self.src.len() + self.tgt.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Result of an alignment: both sentence lists and the beads over them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Alignment {
    pub src_sents: Vec<String>,
    pub tgt_sents: Vec<String>,
    pub beads: Vec<Bead>,
}

impl Alignment {
    /// Iterate over beads that have text on both sides, as (source, target) text.
    pub fn pairs(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.beads.iter().filter(|b| b.is_pair()).map(|b| {
            (
                bead_text(&b.src, &self.src_sents),
                bead_text(&b.tgt, &self.tgt_sents),
            )
        })
    }
}

/// Get the text of one side of a bead.
///
/// Sentences from the first to the last index are joined by a single space.
/// An empty span yields an empty string.
pub fn bead_text(indices: &[usize], sentences: &[String]) -> String {
    match (indices.first(), indices.last()) {
        (Some(&first), Some(&last)) => sentences[first..=last].join(" "),
        _ => String::new(),
    }
}

/// All sentence aligners implement [Aligner] to be useable in pipelines.
pub trait Aligner: Send + Sync {
    /// Split `src` and `tgt` into sentences and align them.
    fn align(&self, src: &str, tgt: &str) -> Result<Alignment, Error>;
}
