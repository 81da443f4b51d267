//! Pipelines.
//!
//! Each stage of the corpus generation is a [pipeline::Pipeline],
//! and [FullPipeline] chains the alignment and XML stages.
pub mod align;
pub mod convert;
pub mod full;
#[allow(clippy::module_inception)]
pub mod pipeline;
pub mod selection;

pub use align::AlignStage;
pub use convert::{AlignedInput, ConvertStage};
pub use full::{FullPipeline, FullReport};
pub use pipeline::Pipeline;
pub use selection::{Selection, TEST_ALIGN, TEST_RUN};
