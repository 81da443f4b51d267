/*! Full pipeline

Aligns the selected chinese/vietnamese pairs, then converts exactly the files that were aligned into XML.

Metadata is read before any alignment is done, so that an invalid metadata file fails fast.
!*/
use std::fmt;
use std::path::PathBuf;

use log::{info, warn};

use crate::error::Error;
use crate::metadata::Metadata;
use crate::pipelines::align::AlignStage;
use crate::pipelines::convert::ConvertStage;
use crate::pipelines::pipeline::Pipeline;
use crate::report::Report;

/// Reports of both stages.
#[derive(Debug, Default)]
pub struct FullReport {
    pub align: Report,
    pub convert: Report,
}

impl fmt::Display for FullReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alignment: {}, xml: {}", self.align, self.convert)
    }
}

pub struct FullPipeline {
    align: AlignStage,
    metadata: PathBuf,
    xml_dst: PathBuf,
}

impl FullPipeline {
    pub fn new(align: AlignStage, metadata: PathBuf, xml_dst: PathBuf) -> Self {
        Self {
            align,
            metadata,
            xml_dst,
        }
    }
}

impl Pipeline<FullReport> for FullPipeline {
    fn run(&self) -> Result<FullReport, Error> {
        let metadata = Metadata::from_path(&self.metadata)?;
        std::fs::create_dir_all(&self.xml_dst)?;

        let align = self.align.run()?;
        if align.written.is_empty() {
            warn!("no file pairs were aligned");
            return Ok(FullReport {
                align,
                convert: Report::default(),
            });
        }

        let convert =
            ConvertStage::from_files(align.written.clone(), metadata, self.xml_dst.clone())
                .run()?;

        info!("all files processed, output XML files saved to {:?}", self.xml_dst);
        Ok(FullReport { align, convert })
    }
}
