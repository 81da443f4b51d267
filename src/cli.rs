//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "hanviet", about = "Hán-Việt bilingual corpus generation tool.")]
/// Holds every command that is callable by the `hanviet` command.
pub enum Hanviet {
    #[structopt(about = "Extract the text of vietnamese PDFs")]
    ExtractPdf(ExtractPdf),
    #[structopt(about = "Split vietnamese PDFs into chapter CSV files")]
    Chapters(Chapters),
    #[structopt(about = "Extract the content column of chinese workbooks")]
    ExtractXlsx(ExtractXlsx),
    #[structopt(about = "Align chinese and vietnamese text files")]
    Align(Align),
    #[structopt(about = "Convert aligned files to XML")]
    Convert(Convert),
    #[structopt(about = "Align then convert to XML")]
    Run(Run),
}

#[derive(Debug, StructOpt)]
pub struct ExtractPdf {
    #[structopt(
        parse(from_os_str),
        help = "folder containing PDF files",
        default_value = "./vn/"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "text files destination",
        default_value = "./data_ingestion_vn/"
    )]
    pub dst: PathBuf,
    #[structopt(
        long = "skip",
        help = "number of PDF files (sorted by name) to skip",
        default_value = "0"
    )]
    pub skip: usize,
}

#[derive(Debug, StructOpt)]
pub struct Chapters {
    #[structopt(
        parse(from_os_str),
        help = "folder containing PDF files",
        default_value = "./vn/"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "CSV files destination",
        default_value = "./output/"
    )]
    pub dst: PathBuf,
    #[structopt(
        long = "skip",
        help = "number of PDF files (sorted by name) to skip",
        default_value = "0"
    )]
    pub skip: usize,
}

#[derive(Debug, StructOpt)]
pub struct ExtractXlsx {
    #[structopt(
        parse(from_os_str),
        help = "folder containing 卷N workbooks",
        default_value = "./chinese/"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "text files destination",
        default_value = "./data_ingestion_chinese/"
    )]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Alignment parameters, shared by `align` and `run`.
///
/// ```sh
/// hanviet-align 0.1.0
/// Align chinese and vietnamese text files
///
/// USAGE:
///     hanviet align [FLAGS] [OPTIONS]
///
/// FLAGS:
///         --is-split    input files hold one sentence by line
///
/// OPTIONS:
///         --chinese <chinese>        [default: ./data_ingestion_chinese/]
///         --vietnamese <vietnamese>  [default: ./data_ingestion_vn/]
///         --aligned <aligned>        [default: ./aligned_output/]
///         --max-align <max-align>    [default: 5]
///         --test <test>...           only process the given file numbers
/// ```
pub struct Align {
    #[structopt(
        parse(from_os_str),
        long = "chinese",
        help = "folder containing chinese N.txt files",
        default_value = "./data_ingestion_chinese/"
    )]
    pub chinese: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "vietnamese",
        help = "folder containing vietnamese N.txt files",
        default_value = "./data_ingestion_vn/"
    )]
    pub vietnamese: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "aligned",
        help = "aligned files destination",
        default_value = "./aligned_output/"
    )]
    pub aligned: PathBuf,
    #[structopt(
        long = "max-align",
        help = "maximum number of sentences in a bead (2 to 10)",
        default_value = "5"
    )]
    pub max_align: usize,
    #[structopt(long = "is-split", help = "input files hold one sentence by line")]
    pub is_split: bool,
    #[structopt(
        long = "test",
        min_values = 0,
        help = "only process the given file numbers (a few sample files if none is given)"
    )]
    pub test: Option<Vec<String>>,
}

#[derive(Debug, StructOpt)]
pub struct Convert {
    #[structopt(
        parse(from_os_str),
        help = "folder containing aligned_N.txt files",
        default_value = "./aligned_output/"
    )]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "XML files destination",
        default_value = "./xml_output/"
    )]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "metadata",
        help = "YAML metadata file",
        default_value = "./meta_data.yaml"
    )]
    pub metadata: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Run {
    #[structopt(flatten)]
    pub align: Align,
    #[structopt(
        parse(from_os_str),
        long = "xml",
        help = "XML files destination",
        default_value = "./xml_output/"
    )]
    pub xml: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "metadata",
        help = "YAML metadata file",
        default_value = "./meta_data.yaml"
    )]
    pub metadata: PathBuf,
}
