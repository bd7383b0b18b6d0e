//! Core library for mdpage: renders Markdown documents into a standalone
//! HTML page with a table of contents.

pub mod cli;
pub mod error;
pub mod page;
pub mod reader;
pub mod render;
pub mod toc;

use anyhow::Context;
use clap::Parser;

use crate::cli::Cli;
use crate::error::PageError;
use crate::page::{write_page, Page};
use crate::toc::Toc;

/// The main entry point for the application logic.
pub fn run() -> anyhow::Result<()> {
    // Initialize the logger. This will be configured by the RUST_LOG environment variable.
    env_logger::init();

    // 1. Parse CLI args into one immutable configuration value.
    let cli = Cli::parse();

    if cli.output.as_os_str().is_empty() {
        return Err(PageError::OutputPathRequired.into());
    }

    // 2. Read the front-matter buffer and assemble the body buffer from the
    // inputs, in command-line order.
    let inputs = cli.inputs();
    let sources = reader::assemble(cli.front_matter.as_deref(), &inputs)?;

    // 3. Parse and render: front matter with the baseline configuration,
    // body with the extended one.
    let front_matter_html = render::render_front_matter(&sources.front_matter);
    let body = render::render_body(&sources.body);

    // 4. Build the table of contents, bounded by the configured depth range.
    let toc = Toc::build(&body.headings, cli.min_depth, cli.max_depth)
        .context("while preparing table of contents")?;
    let toc_html = toc.to_html();

    // 5. Open the output sink and write front matter, TOC, and body in that
    // fixed order. The sink is only opened once everything has rendered, so
    // a failed run never creates or truncates the destination.
    let mut out = page::open_output(&cli.output)?;
    let page = Page {
        title: &cli.title,
        front_matter: &front_matter_html,
        toc: &toc_html,
        body: &body.html,
    };
    write_page(out.as_mut(), cli.mode(), &page)
        .with_context(|| format!("failed to write output: {}", cli.output.display()))?;
    out.flush()
        .with_context(|| format!("failed to write output: {}", cli.output.display()))?;

    Ok(())
}
