//! # hanviet
//!
//! Pipeline for the Hán-Việt bilingual corpus: chinese and vietnamese sources are extracted,
//! sentence-aligned and written as paginated XML files.
//!
//! ## Getting started
//!
//! ```sh
//! hanviet 0.1.0
//! Hán-Việt bilingual corpus generation tool.
//!
//! USAGE:
//!     hanviet <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     align           Align chinese and vietnamese text files
//!     chapters        Split vietnamese PDFs into chapter CSV files
//!     convert         Convert aligned files to XML
//!     extract-pdf     Extract the text of vietnamese PDFs
//!     extract-xlsx    Extract the content column of chinese workbooks
//!     help            Prints this message or the help of the given subcommand(s)
//!     run             Align then convert to XML
//! ```
//!
//! Logging is done through `env_logger`: use `RUST_LOG=info` (or `debug`) to follow progress.
use hanviet::align::LengthAligner;
use hanviet::error::Error;
use hanviet::extract::{chapters_dir, extract_pdf_dir, extract_xlsx_dir};
use hanviet::metadata::Metadata;
use hanviet::pipelines::{
    AlignStage, ConvertStage, FullPipeline, Pipeline, Selection, TEST_ALIGN, TEST_RUN,
};
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn align_stage(opt: cli::Align, test_defaults: &[&str]) -> AlignStage {
    let aligner = LengthAligner::default()
        .with_max_align(opt.max_align)
        .with_is_split(opt.is_split);
    AlignStage::new(opt.chinese, opt.vietnamese, opt.aligned, Box::new(aligner))
        .with_selection(Selection::from_test_option(opt.test, test_defaults))
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Hanviet::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Hanviet::ExtractPdf(e) => {
            let report = extract_pdf_dir(&e.src, &e.dst, e.skip)?;
            info!("pdf extraction: {}", report);
        }
        cli::Hanviet::Chapters(c) => {
            let report = chapters_dir(&c.src, &c.dst, c.skip)?;
            info!("chapter extraction: {}", report);
        }
        cli::Hanviet::ExtractXlsx(e) => {
            let report = extract_xlsx_dir(&e.src, &e.dst)?;
            info!("workbook extraction: {}", report);
        }
        cli::Hanviet::Align(a) => {
            let report = align_stage(a, &TEST_ALIGN).run()?;
            info!("alignment: {}", report);
        }
        cli::Hanviet::Convert(c) => {
            let metadata = Metadata::from_path(&c.metadata)?;
            let report = ConvertStage::from_dir(c.src, metadata, c.dst).run()?;
            info!("xml conversion: {}", report);
        }
        cli::Hanviet::Run(r) => {
            let p = FullPipeline::new(align_stage(r.align, &TEST_RUN), r.metadata, r.xml);
            let report = p.run()?;
            info!("{}", report);
        }
    };
    Ok(())
}
