/*! Alignment stage

Matches `N.txt` in the chinese folder with `N.txt` in the vietnamese folder,
and aligns each pair into `aligned_N.txt` in the destination folder.
!*/
use std::path::{Path, PathBuf};

use log::info;
use rayon::prelude::*;

use crate::align::{align_files, Aligner};
use crate::error::Error;
use crate::pipelines::pipeline::Pipeline;
use crate::pipelines::selection::Selection;
use crate::report::{Outcome, Report};

pub struct AlignStage {
    chinese: PathBuf,
    vietnamese: PathBuf,
    dst: PathBuf,
    selection: Selection,
    aligner: Box<dyn Aligner>,
}

impl AlignStage {
    pub fn new(
        chinese: PathBuf,
        vietnamese: PathBuf,
        dst: PathBuf,
        aligner: Box<dyn Aligner>,
    ) -> Self {
        Self {
            chinese,
            vietnamese,
            dst,
            selection: Selection::All,
            aligner,
        }
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Path of the aligned file for a file number.
    pub fn aligned_path(&self, number: &str) -> PathBuf {
        self.dst.join(format!("aligned_{}.txt", number))
    }

    fn align_one(&self, number: &str, chinese: &Path) -> Result<Outcome, Error> {
        let vietnamese = self.vietnamese.join(format!("{}.txt", number));
        if !vietnamese.is_file() {
            return Ok(Outcome::Skipped(format!(
                "no matching vietnamese file found for {:?}",
                chinese
            )));
        }

        let output = self.aligned_path(number);
        let nb_pairs = align_files(self.aligner.as_ref(), chinese, &vietnamese, &output)?;
        info!("[{}] {} pairs", number, nb_pairs);
        Ok(Outcome::Written(output))
    }
}

impl Pipeline<Report> for AlignStage {
    /// Align every selected pair.
    /// The returned report holds the aligned files, sorted.
    fn run(&self) -> Result<Report, Error> {
        std::fs::create_dir_all(&self.dst)?;

        let files = self.selection.files(&self.chinese)?;
        info!("processing {} files", files.len());

        let results: Vec<(String, Result<Outcome, Error>)> = files
            .par_iter()
            .map(|(number, chinese)| (number.clone(), self.align_one(number, chinese)))
            .collect();

        let mut report = Report::default();
        for (number, result) in results {
            report.record(&number, result);
        }
        report.written.sort();

        info!("successfully aligned {} file pairs", report.processed());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{read_aligned, LengthAligner};
    use tempfile::tempdir;

    #[test]
    fn align_stage() {
        let zh = tempdir().unwrap();
        let vi = tempdir().unwrap();
        let dst = tempdir().unwrap();
        let dst = dst.path().join("aligned");

        std::fs::write(zh.path().join("1.txt"), "天地玄黃。\n宇宙洪荒。").unwrap();
        std::fs::write(
            vi.path().join("1.txt"),
            "Trời đất huyền hoàng.\nVũ trụ hồng hoang.",
        )
        .unwrap();
        std::fs::write(zh.path().join("2.txt"), "日月盈昃。").unwrap();

        let stage = AlignStage::new(
            zh.path().to_path_buf(),
            vi.path().to_path_buf(),
            dst.clone(),
            Box::<LengthAligner>::default(),
        );
        let report = stage.run().unwrap();

        assert_eq!(report.written, vec![dst.join("aligned_1.txt")]);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.failed, 0);

        let pairs = read_aligned(&dst.join("aligned_1.txt")).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].chinese, "天地玄黃。");
        assert_eq!(pairs[1].vietnamese, "Vũ trụ hồng hoang.");
    }

    #[test]
    fn align_selection() {
        let zh = tempdir().unwrap();
        let vi = tempdir().unwrap();
        let dst = tempdir().unwrap();

        for n in ["1", "2"] {
            std::fs::write(zh.path().join(format!("{}.txt", n)), "天。").unwrap();
            std::fs::write(vi.path().join(format!("{}.txt", n)), "Trời.").unwrap();
        }

        let report = AlignStage::new(
            zh.path().to_path_buf(),
            vi.path().to_path_buf(),
            dst.path().to_path_buf(),
            Box::<LengthAligner>::default(),
        )
        .with_selection(Selection::Numbers(vec!["2".to_string(), "3".to_string()]))
        .run()
        .unwrap();

        assert_eq!(report.written, vec![dst.path().join("aligned_2.txt")]);
        assert_eq!(report.skipped, 0);
        assert!(!dst.path().join("aligned_1.txt").exists());
    }
}
