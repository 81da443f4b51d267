/*! Sentence alignment

Holds an [Aligner] trait for implementing other aligners,
along with reading/writing of aligned pairs files.

The current aligner is [LengthAligner], a length-based bead search.
!*/
mod aligner;
mod files;
mod length;

pub use aligner::{bead_text, Aligner, Alignment, Bead};
pub use files::{align_files, read_aligned, write_aligned, AlignedPair};
pub use length::LengthAligner;
