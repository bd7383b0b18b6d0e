//! Defines the command-line interface for the application.

use clap::builder::TypedValueParser;
use clap::Parser;
use std::path::PathBuf;

use crate::page::PageMode;

#[derive(Parser, Debug)]
#[command(
    name = "mdpage",
    version,
    about = "Render Markdown documents into a standalone HTML page with a table of contents."
)]
pub struct Cli {
    /// Write the rendered page to this file. Use '-' for stdout.
    #[arg(
        short,
        long,
        value_name = "OUTPUT_PATH",
        default_value = "-",
        value_parser = clap::builder::OsStringValueParser::new().map(PathBuf::from)
    )]
    pub output: PathBuf,

    /// Markdown snippet rendered before the table of contents.
    #[arg(short, long, value_name = "FRONT_MATTER_PATH")]
    pub front_matter: Option<PathBuf>,

    /// Title of the generated HTML document.
    #[arg(short, long, default_value = "Untitled Document")]
    pub title: String,

    /// Lowest heading level included in the table of contents.
    #[arg(short = 'M', long, value_name = "LEVEL", default_value_t = 1)]
    pub min_depth: u8,

    /// Highest heading level included in the table of contents.
    #[arg(short = 'm', long, value_name = "LEVEL", default_value_t = 2)]
    pub max_depth: u8,

    /// Emit only the rendered content, without the HTML document shell.
    #[arg(long)]
    pub fragment: bool,

    /// A single Markdown input file. Use '-' to read from stdin.
    #[arg(short, long, value_name = "INPUT_PATH", conflicts_with = "files")]
    pub input: Option<PathBuf>,

    /// Markdown input files, concatenated in order. [default: reads from stdin]
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Effective input list: `--input` if given, else the positional files,
    /// else the stdin sentinel.
    pub fn inputs(&self) -> Vec<PathBuf> {
        if let Some(input) = &self.input {
            vec![input.clone()]
        } else if self.files.is_empty() {
            vec![PathBuf::from("-")]
        } else {
            self.files.clone()
        }
    }

    pub fn mode(&self) -> PageMode {
        if self.fragment {
            PageMode::Fragment
        } else {
            PageMode::Full
        }
    }
}
