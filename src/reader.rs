//! Reads Markdown sources and assembles them into the buffers the renderer
//! consumes: one optional front-matter buffer and one concatenated body
//! buffer.

use anyhow::Context;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::PageError;

/// The two source buffers of a run. The body is the concatenation of all
/// primary inputs in command-line order, with no separator.
#[derive(Debug)]
pub struct Sources {
    pub front_matter: String,
    pub body: String,
}

/// Whether a path is the stdin/stdout sentinel `-`.
pub fn is_sentinel(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn display_name(path: &Path) -> String {
    if is_sentinel(path) {
        "(stdin)".to_owned()
    } else {
        path.display().to_string()
    }
}

/// Read one source to completion. `-` drains stdin; anything else is opened
/// and fully read, with the handle released on every exit path.
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    if is_sentinel(path) {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read from stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read input file: {}", path.display()))
    }
}

/// Assemble the front-matter and body buffers. An absent front-matter path
/// yields an empty buffer; an empty primary input is fatal.
pub fn assemble(front_matter: Option<&Path>, inputs: &[PathBuf]) -> anyhow::Result<Sources> {
    let front_matter = match front_matter {
        Some(path) => read_source(path)?,
        None => String::new(),
    };

    let mut body = String::new();
    for path in inputs {
        let source = read_source(path)?;
        if source.is_empty() {
            return Err(PageError::EmptyInput(display_name(path)).into());
        }
        body.push_str(&source);
    }

    log::debug!(
        "assembled {} front-matter bytes and {} body bytes from {} input(s)",
        front_matter.len(),
        body.len(),
        inputs.len()
    );

    Ok(Sources { front_matter, body })
}
