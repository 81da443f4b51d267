//! XML conversion stage.
use std::path::PathBuf;

use log::info;

use crate::error::Error;
use crate::metadata::Metadata;
use crate::pipelines::pipeline::Pipeline;
use crate::report::Report;
use crate::xml::convert::{convert_files, list_aligned};

/// Aligned files to convert.
#[derive(Debug, Clone)]
pub enum AlignedInput {
    /// Every `aligned_*.txt` file of a folder.
    Dir(PathBuf),
    /// An explicit list of files.
    Files(Vec<PathBuf>),
}

pub struct ConvertStage {
    input: AlignedInput,
    metadata: Metadata,
    dst: PathBuf,
}

impl ConvertStage {
    pub fn new(input: AlignedInput, metadata: Metadata, dst: PathBuf) -> Self {
        Self {
            input,
            metadata,
            dst,
        }
    }

    pub fn from_dir(src: PathBuf, metadata: Metadata, dst: PathBuf) -> Self {
        Self::new(AlignedInput::Dir(src), metadata, dst)
    }

    pub fn from_files(files: Vec<PathBuf>, metadata: Metadata, dst: PathBuf) -> Self {
        Self::new(AlignedInput::Files(files), metadata, dst)
    }
}

impl Pipeline<Report> for ConvertStage {
    fn run(&self) -> Result<Report, Error> {
        std::fs::create_dir_all(&self.dst)?;

        let mut files = match &self.input {
            AlignedInput::Dir(src) => list_aligned(src)?,
            AlignedInput::Files(files) => files.clone(),
        };
        files.sort();
        info!("converting {} aligned files", files.len());

        let report = convert_files(&files, &self.metadata, &self.dst);
        info!("output XML files saved to {:?}", self.dst);
        Ok(report)
    }
}
