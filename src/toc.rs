//! Builds the table of contents from the body headings and renders it as a
//! nested HTML list.

use crate::error::PageError;
use crate::render::{escape_html, Heading};

/// One entry in the table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
    pub id: String,
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    fn new(heading: &Heading) -> Self {
        Self {
            level: heading.level,
            text: heading.text.clone(),
            id: heading.id.clone(),
            children: Vec::new(),
        }
    }
}

/// Table of contents bounded by an inclusive heading level range.
#[derive(Debug, Default)]
pub struct Toc {
    entries: Vec<TocEntry>,
}

impl Toc {
    /// Build the TOC from the body headings. Headings outside
    /// `min_depth..=max_depth` are excluded; a kept heading nests under the
    /// nearest preceding kept heading with a smaller level.
    pub fn build(headings: &[Heading], min_depth: u8, max_depth: u8) -> Result<Self, PageError> {
        if min_depth < 1 || max_depth > 6 || min_depth > max_depth {
            return Err(PageError::InvalidDepthRange {
                min: min_depth,
                max: max_depth,
            });
        }

        let mut entries = Vec::new();
        for heading in headings {
            if heading.level < min_depth || heading.level > max_depth {
                continue;
            }
            attach(&mut entries, heading);
        }

        log::debug!(
            "table of contents holds {} top-level entr(ies) for depth range {}..={}",
            entries.len(),
            min_depth,
            max_depth
        );

        Ok(Self { entries })
    }

    /// Render the TOC as nested `<ul>` lists; an empty TOC renders as the
    /// empty string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        if !self.entries.is_empty() {
            render_list(&mut out, &self.entries);
        }
        out
    }
}

fn attach(entries: &mut Vec<TocEntry>, heading: &Heading) {
    if let Some(last) = entries.last_mut() {
        if heading.level > last.level {
            attach(&mut last.children, heading);
            return;
        }
    }
    entries.push(TocEntry::new(heading));
}

fn render_list(out: &mut String, entries: &[TocEntry]) {
    out.push_str("<ul>\n");
    for entry in entries {
        out.push_str(&format!(
            r##"<li><a href="#{}">{}</a>"##,
            entry.id,
            escape_html(&entry.text)
        ));
        if !entry.children.is_empty() {
            out.push('\n');
            render_list(out, &entry.children);
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
}
