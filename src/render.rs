//! Markdown parsing and HTML rendering via pulldown-cmark.
//!
//! Front matter is parsed with a baseline CommonMark configuration; the body
//! gets the extended feature set plus a pass over the event stream that
//! assigns every heading a stable, de-duplicated identifier derived from its
//! text. The same pass records the headings the TOC builder consumes.

use pulldown_cmark::{html, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use std::collections::HashSet;

/// One body heading, in document order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// Heading level (1-6).
    pub level: u8,
    /// Plain text of the heading.
    pub text: String,
    /// Anchor ID carried by the rendered heading element.
    pub id: String,
}

/// Rendered body HTML plus the headings encountered while rendering.
#[derive(Debug)]
pub struct RenderedBody {
    pub html: String,
    pub headings: Vec<Heading>,
}

fn body_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_GFM
}

/// Render the front-matter snippet. Plain structural Markdown only: no GFM
/// extensions, no heading identifiers.
pub fn render_front_matter(source: &str) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, Parser::new_ext(source, Options::empty()));
    out
}

/// Render the document body with the extended feature set and automatic
/// heading identifiers.
pub fn render_body(source: &str) -> RenderedBody {
    let mut events: Vec<Event> = Parser::new_ext(source, body_options()).collect();
    let mut headings = Vec::new();
    let mut slugs = Slugger::default();

    for i in 0..events.len() {
        let level = match &events[i] {
            Event::Start(Tag::Heading { level, .. }) => heading_level_to_num(*level),
            _ => continue,
        };
        let text = heading_text(&events[i + 1..]);
        let id = slugs.assign(&text);
        if let Event::Start(Tag::Heading { id: slot, .. }) = &mut events[i] {
            *slot = Some(CowStr::from(id.clone()));
        }
        headings.push(Heading { level, text, id });
    }

    log::debug!("rendered body with {} heading(s)", headings.len());

    let mut out = String::with_capacity(source.len() * 2);
    html::push_html(&mut out, events.into_iter());
    RenderedBody { html: out, headings }
}

/// Plain text of a heading: everything up to the matching end tag, with line
/// breaks collapsed to spaces.
fn heading_text(events: &[Event]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            _ => {}
        }
    }
    text.trim().to_owned()
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Assigns unique heading identifiers: a taken slug gets a `-1`, `-2`, ...
/// suffix, retried until the candidate is unused by any earlier heading.
#[derive(Default)]
struct Slugger {
    issued: HashSet<String>,
}

impl Slugger {
    fn assign(&mut self, text: &str) -> String {
        let mut base = slugify(text);
        if base.is_empty() {
            base = "section".to_owned();
        }
        let mut candidate = base.clone();
        let mut suffix = 1;
        while !self.issued.insert(candidate.clone()) {
            candidate = format!("{base}-{suffix}");
            suffix += 1;
        }
        candidate
    }
}

/// Convert heading text to a URL-safe slug.
fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true; // Prevents leading dash

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Escape HTML special characters.
pub(crate) fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
