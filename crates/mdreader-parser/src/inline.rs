//! Inline markdown transformer.
//!
//! This module turns the text of a single line into HTML. Spans are resolved
//! in a fixed order: inline code first, then bold (`**` before `__`), then
//! italic (`*` before `_`). Each stage works on a sequence of units where
//! spans produced by an earlier stage are opaque atoms, so markup characters
//! inside a code or bold span are never looked at again.

use crate::escape::push_escaped;

/// Result of parsing inline content.
///
/// Text is kept unescaped; escaping happens once in [`InlineElement::write_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineElement {
    /// Plain text
    Text(String),
    /// Inline code
    Code(String),
    /// Bold span
    Strong(Vec<InlineElement>),
    /// Italic span
    Emphasis(Vec<InlineElement>),
}

impl InlineElement {
    /// Append the HTML form of this element to `out`.
    pub fn write_html(&self, out: &mut String) {
        match self {
            InlineElement::Text(s) => push_escaped(out, s),
            InlineElement::Code(s) => {
                out.push_str("<code>");
                push_escaped(out, s);
                out.push_str("</code>");
            }
            InlineElement::Strong(children) => write_wrapped(out, "strong", children),
            InlineElement::Emphasis(children) => write_wrapped(out, "em", children),
        }
    }
}

fn write_wrapped(out: &mut String, tag: &str, children: &[InlineElement]) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    for child in children {
        child.write_html(out);
    }
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// One position in the line being transformed: a source character, or a
/// span that an earlier stage already closed.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Unit {
    Char(char),
    Atom(InlineElement),
}

#[derive(Debug, Clone, Copy)]
enum SpanKind {
    Strong,
    Emphasis,
}

/// A symmetric delimiter such as `**` or `_`.
#[derive(Debug, Clone, Copy)]
struct Delimiter {
    marker: char,
    width: usize,
    /// Reject a match when the marker run is extended on either side.
    guarded: bool,
    kind: SpanKind,
}

const STRONG_ASTERISK: Delimiter = Delimiter {
    marker: '*',
    width: 2,
    guarded: false,
    kind: SpanKind::Strong,
};

const STRONG_UNDERSCORE: Delimiter = Delimiter {
    marker: '_',
    width: 2,
    guarded: false,
    kind: SpanKind::Strong,
};

const EMPHASIS_ASTERISK: Delimiter = Delimiter {
    marker: '*',
    width: 1,
    guarded: false,
    kind: SpanKind::Emphasis,
};

const EMPHASIS_UNDERSCORE: Delimiter = Delimiter {
    marker: '_',
    width: 1,
    guarded: true,
    kind: SpanKind::Emphasis,
};

fn is_marker(unit: Option<&Unit>, marker: char) -> bool {
    matches!(unit, Some(Unit::Char(c)) if *c == marker)
}

/// Parse a line of markdown into inline elements.
pub fn parse_inline(text: &str) -> Vec<InlineElement> {
    let units = split_code_spans(text);
    let units = pair_delimiters(&units, STRONG_ASTERISK);
    let units = pair_delimiters(&units, STRONG_UNDERSCORE);
    let units = emphasize(units);
    collect_elements(&units)
}

/// Transform a line of markdown into an HTML string.
pub fn format_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    for element in parse_inline(text) {
        element.write_html(&mut out);
    }
    out
}

/// Resolve `` `code` `` spans. The first backtick after an opening one closes
/// it; an empty pair leaves the opening backtick as text.
fn split_code_spans(text: &str) -> Vec<Unit> {
    let mut units = Vec::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('`') {
        let after = &rest[open + 1..];
        match after.find('`') {
            Some(0) => {
                units.extend(rest[..=open].chars().map(Unit::Char));
                rest = after;
            }
            Some(close) => {
                units.extend(rest[..open].chars().map(Unit::Char));
                units.push(Unit::Atom(InlineElement::Code(after[..close].to_string())));
                rest = &after[close + 1..];
            }
            None => break,
        }
    }

    units.extend(rest.chars().map(Unit::Char));
    units
}

/// Wrap every leftmost, non-overlapping `marker content marker` run, where the
/// content is non-empty and contains no marker character.
fn pair_delimiters(units: &[Unit], delimiter: Delimiter) -> Vec<Unit> {
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;

    while i < units.len() {
        if let Some(close) = find_closing(units, i, delimiter) {
            let inner = collect_elements(&units[i + delimiter.width..close]);
            let element = match delimiter.kind {
                SpanKind::Strong => InlineElement::Strong(inner),
                SpanKind::Emphasis => InlineElement::Emphasis(inner),
            };
            out.push(Unit::Atom(element));
            i = close + delimiter.width;
        } else {
            out.push(units[i].clone());
            i += 1;
        }
    }

    out
}

fn find_closing(units: &[Unit], start: usize, delimiter: Delimiter) -> Option<usize> {
    let Delimiter {
        marker,
        width,
        guarded,
        ..
    } = delimiter;

    if !(start..start + width).all(|k| is_marker(units.get(k), marker)) {
        return None;
    }
    if guarded && start > 0 && is_marker(units.get(start - 1), marker) {
        return None;
    }

    let content_start = start + width;
    let close = content_start
        + units[content_start..]
            .iter()
            .position(|u| is_marker(Some(u), marker))?;

    if close == content_start {
        return None;
    }
    if !(close..close + width).all(|k| is_marker(units.get(k), marker)) {
        return None;
    }
    if guarded && is_marker(units.get(close + width), marker) {
        return None;
    }

    Some(close)
}

/// Italic pass. Only runs of plain characters between code and bold atoms are
/// considered, so emphasis never crosses or enters those spans.
fn emphasize(units: Vec<Unit>) -> Vec<Unit> {
    let mut out = Vec::with_capacity(units.len());
    let mut run: Vec<Unit> = Vec::new();

    for unit in units {
        match unit {
            Unit::Char(_) => run.push(unit),
            Unit::Atom(_) => {
                out.extend(emphasize_run(&run));
                run.clear();
                out.push(unit);
            }
        }
    }
    out.extend(emphasize_run(&run));

    out
}

fn emphasize_run(run: &[Unit]) -> Vec<Unit> {
    if run.is_empty() {
        return Vec::new();
    }
    let run = pair_delimiters(run, EMPHASIS_ASTERISK);
    pair_delimiters(&run, EMPHASIS_UNDERSCORE)
}

fn collect_elements(units: &[Unit]) -> Vec<InlineElement> {
    let mut elements = Vec::new();
    let mut buffer = String::new();

    for unit in units {
        match unit {
            Unit::Char(c) => buffer.push(*c),
            Unit::Atom(element) => {
                if !buffer.is_empty() {
                    elements.push(InlineElement::Text(std::mem::take(&mut buffer)));
                }
                elements.push(element.clone());
            }
        }
    }

    if !buffer.is_empty() {
        elements.push(InlineElement::Text(buffer));
    }

    elements
}
