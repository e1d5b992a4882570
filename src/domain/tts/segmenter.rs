use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Separator placed between paragraphs merged into one segment.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";
const SEPARATOR_CHARS: usize = 2;

/// A newline, optional blank characters, and another newline.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n\s*\n").expect("paragraph break pattern is valid"));

/// One synthesis unit: a trimmed, non-empty run of whole paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub index: usize,
    pub text: String,
}

impl Segment {
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Split `text` into segments of whole paragraphs.
///
/// Paragraphs are accumulated while the segment stays strictly below
/// `soft_limit` characters. A paragraph longer than the limit becomes its
/// own segment and is never cut. Blank input yields no segments.
pub fn segment(text: &str, soft_limit: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    let paragraphs = PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty());

    for paragraph in paragraphs {
        let paragraph_chars = paragraph.chars().count();

        if current.is_empty() {
            current.push_str(paragraph);
            current_chars = paragraph_chars;
            continue;
        }

        let grown = current_chars + SEPARATOR_CHARS + paragraph_chars;
        if grown < soft_limit {
            current.push_str(PARAGRAPH_SEPARATOR);
            current.push_str(paragraph);
            current_chars = grown;
        } else {
            push_segment(&mut segments, std::mem::take(&mut current));
            current.push_str(paragraph);
            current_chars = paragraph_chars;
        }
    }

    if !current.is_empty() {
        push_segment(&mut segments, current);
    }

    segments
}

fn push_segment(segments: &mut Vec<Segment>, text: String) {
    segments.push(Segment {
        index: segments.len(),
        text,
    });
}

/// Keep at most `max_chars` characters of `text`.
///
/// Returns the accepted prefix and whether anything was cut.
pub fn clamp_input(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (&text[..byte_index], true),
        None => (text, false),
    }
}
