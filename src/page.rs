//! Writes the rendered page to its destination, either as a complete HTML
//! document or as a bare fragment.

use anyhow::Context;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::reader::is_sentinel;
use crate::render::escape_html;

/// Output framing: a complete HTML document with a titled shell, or the
/// rendered content alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageMode {
    Full,
    Fragment,
}

/// The rendered pieces of a page, written in this fixed order: front matter,
/// table of contents, body.
#[derive(Debug)]
pub struct Page<'a> {
    pub title: &'a str,
    pub front_matter: &'a str,
    pub toc: &'a str,
    pub body: &'a str,
}

/// Open the destination sink. `-` is stdout; anything else is created,
/// truncating an existing file. The sink is closed by drop on every exit
/// path.
pub fn open_output(path: &Path) -> anyhow::Result<Box<dyn Write>> {
    if is_sentinel(path) {
        Ok(Box::new(io::stdout().lock()))
    } else {
        let file = File::create(path)
            .with_context(|| format!("failed to create output file: {}", path.display()))?;
        Ok(Box::new(BufWriter::new(file)))
    }
}

/// Write the page. In `Full` mode the content is wrapped in a fixed HTML
/// shell embedding the configured title.
pub fn write_page(out: &mut dyn Write, mode: PageMode, page: &Page) -> io::Result<()> {
    if mode == PageMode::Full {
        write!(
            out,
            "<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n",
            escape_html(page.title)
        )?;
    }

    out.write_all(page.front_matter.as_bytes())?;
    out.write_all(page.toc.as_bytes())?;
    out.write_all(page.body.as_bytes())?;

    if mode == PageMode::Full {
        out.write_all(b"</body></html>\n")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_page<'a>() -> Page<'a> {
        Page {
            title: "Notes & Plans",
            front_matter: "<p>meta</p>\n",
            toc: "<ul>\n<li><a href=\"#hi\">Hi</a></li>\n</ul>\n",
            body: "<h1 id=\"hi\">Hi</h1>\n",
        }
    }

    #[test]
    fn full_mode_wraps_content_in_shell() {
        let mut out = Vec::new();
        write_page(&mut out, PageMode::Full, &sample_page()).unwrap();
        let html = String::from_utf8(out).unwrap();

        assert!(html.starts_with("<html>\n<head>\n"));
        assert!(html.contains("<title>Notes &amp; Plans</title>"));
        assert!(html.ends_with("</body></html>\n"));

        // Fixed content order: front matter, TOC, body.
        let fm = html.find("<p>meta</p>").unwrap();
        let toc = html.find("<ul>").unwrap();
        let body = html.find("<h1 id=\"hi\">").unwrap();
        assert!(fm < toc && toc < body);
    }

    #[test]
    fn fragment_mode_emits_content_only() {
        let mut out = Vec::new();
        write_page(&mut out, PageMode::Fragment, &sample_page()).unwrap();
        let html = String::from_utf8(out).unwrap();

        assert!(html.starts_with("<p>meta</p>"));
        assert!(!html.contains("<html>"));
        assert!(!html.contains("<title>"));
        assert!(html.ends_with("<h1 id=\"hi\">Hi</h1>\n"));
    }
}
