//! Line-oriented directive matching.
//!
//! Only lines shaped like a directive are considered, so the keyword
//! appearing inside a comment or another instruction's arguments is
//! never touched. An instruction continued with a trailing `\` is
//! treated as one unit spanning all of its physical lines.

use kube_dock_core::Directive;

const BOM: char = '\u{feff}';

/// A directive found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveSpan<'a> {
    /// Byte offset of the keyword
    pub start: usize,
    /// Byte offset one past the last content byte of the instruction's
    /// final physical line (line terminator excluded)
    pub end: usize,
    /// Argument text after the keyword, trimmed; continuations kept verbatim
    pub args: &'a str,
}

/// One physical line, without its terminator.
struct Line<'a> {
    start: usize,
    content: &'a str,
}

fn physical_lines(document: &str) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for raw in document.split_inclusive('\n') {
        lines.push(Line {
            start: offset,
            content: strip_terminator(raw),
        });
        offset += raw.len();
    }
    lines
}

fn strip_terminator(raw: &str) -> &str {
    let Some(line) = raw.strip_suffix('\n') else {
        return raw;
    };
    match line.strip_suffix('\r') {
        Some(line) => line,
        None => line,
    }
}

fn is_continued(content: &str) -> bool {
    content.trim_end().ends_with('\\')
}

/// Byte length of a leading UTF-8 byte order mark, or 0.
pub fn bom_len(document: &str) -> usize {
    if document.starts_with(BOM) {
        BOM.len_utf8()
    } else {
        0
    }
}

/// Line terminator used by the document's first line; `\n` when it has none.
pub fn line_ending(document: &str) -> &'static str {
    match document.find('\n') {
        Some(pos) if document[..pos].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

/// Find every instruction of `document` that is a `directive` with a
/// non-empty argument.
pub fn find_directives(document: &str, directive: Directive) -> Vec<DirectiveSpan<'_>> {
    let keyword = directive.keyword();
    let lines = physical_lines(document);
    let mut spans = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = &lines[index];
        let lead = if line.start == 0 { bom_len(line.content) } else { 0 };
        let body = line.content[lead..].trim_start_matches([' ', '\t']);
        let keyword_at = line.start + line.content.len() - body.len();

        // Comment lines never continue.
        let mut last = index;
        if !body.starts_with('#') {
            while last + 1 < lines.len() && is_continued(lines[last].content) {
                last += 1;
            }
        }
        index = last + 1;

        let Some(rest) = body.strip_prefix(keyword) else {
            continue;
        };
        if !rest.starts_with([' ', '\t']) {
            continue;
        }

        let end = lines[last].start + lines[last].content.len();
        let args = document[keyword_at + keyword.len()..end].trim();
        if args.is_empty() {
            continue;
        }

        spans.push(DirectiveSpan {
            start: keyword_at,
            end,
            args,
        });
    }

    spans
}

/// Replace the bytes covered by `span` with `replacement`.
pub fn splice(document: &str, span: &DirectiveSpan<'_>, replacement: &str) -> String {
    let mut out = String::with_capacity(document.len() + replacement.len());
    out.push_str(&document[..span.start]);
    out.push_str(replacement);
    out.push_str(&document[span.end..]);
    out
}
