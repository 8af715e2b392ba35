//! Line classifier
//!
//! Tags each raw input line (trailing newline already stripped) with exactly
//! one [`LineClass`] variant. The rules are ordered and first match wins, so
//! they are mutually exclusive by construction; a line that matches none of
//! the patterns is a plain paragraph.
//!
//! The only state carried between lines is [`ParseState`]: whether we are
//! inside a fenced code block, plus the pending lines of that block. The
//! classifier is a pure fold step (state in, state out) so every rule can be
//! tested in isolation.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{1,6})\s*(.*)").expect("valid heading pattern"));
static RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-{3,}$").expect("valid rule pattern"));
static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^!\[(.*?)\]\((.*?)\)").expect("valid image pattern"));
static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-*+]\s+(.+)").expect("valid bullet pattern"));
static NUMBERED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.\s+(.+)").expect("valid numbered pattern"));

/// Maximum heading level in the output document. Deeper markers clamp here.
pub const MAX_HEADING_LEVEL: usize = 4;

/// Classification of one input line.
///
/// Exactly one variant per line. `FenceOpen`, `CodeLine` and `EmptyHeading`
/// emit no block; everything else maps to one block in the output document.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    /// Opening fence; starts buffering raw lines.
    FenceOpen,
    /// Closing fence; carries the buffered lines joined by newline.
    FenceClose(String),
    /// A raw line inside an open fence, buffered verbatim.
    CodeLine,
    /// Heading with its marker count clamped to [`MAX_HEADING_LEVEL`].
    Heading { level: usize, text: String },
    /// Heading marker with no text after trimming; produces no block.
    EmptyHeading,
    /// Three or more hyphens alone on the line.
    HorizontalRule,
    /// `![alt](path)` reference; resolution happens in the sink.
    ImageRef { alt: String, path: String },
    /// Bullet list item with the marker stripped.
    BulletItem(String),
    /// Numbered list item with the marker stripped.
    NumberedItem(String),
    /// Line that is empty after trimming.
    Blank,
    /// Anything else, kept verbatim.
    Paragraph(String),
}

/// State threaded through the line-by-line fold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseState {
    in_code: bool,
    pending: Vec<String>,
}

impl ParseState {
    pub fn in_code(&self) -> bool {
        self.in_code
    }
}

/// Classify one line given the current state, returning the tag and the
/// state for the next line.
pub fn classify(line: &str, mut state: ParseState) -> (LineClass, ParseState) {
    let trimmed = line.trim();

    // Fence markers toggle code-block membership and short-circuit every
    // other rule, including while inside a block.
    if trimmed.starts_with("```") {
        if state.in_code {
            let code = state.pending.join("\n");
            state.in_code = false;
            state.pending.clear();
            return (LineClass::FenceClose(code), state);
        }
        state.in_code = true;
        state.pending.clear();
        return (LineClass::FenceOpen, state);
    }

    if state.in_code {
        state.pending.push(line.to_string());
        return (LineClass::CodeLine, state);
    }

    if let Some(caps) = HEADING.captures(line) {
        let text = caps[2].trim().to_string();
        if text.is_empty() {
            return (LineClass::EmptyHeading, state);
        }
        let level = caps[1].len().min(MAX_HEADING_LEVEL);
        return (LineClass::Heading { level, text }, state);
    }

    if RULE.is_match(trimmed) {
        return (LineClass::HorizontalRule, state);
    }

    if let Some(caps) = IMAGE.captures(trimmed) {
        return (
            LineClass::ImageRef {
                alt: caps[1].to_string(),
                path: caps[2].to_string(),
            },
            state,
        );
    }

    if let Some(caps) = BULLET.captures(line) {
        return (LineClass::BulletItem(caps[1].to_string()), state);
    }

    if let Some(caps) = NUMBERED.captures(line) {
        return (LineClass::NumberedItem(caps[1].to_string()), state);
    }

    if trimmed.is_empty() {
        return (LineClass::Blank, state);
    }

    (LineClass::Paragraph(line.to_string()), state)
}

/// Consume the final state. Returns the buffered lines of an unterminated
/// fence, joined by newline, so the sink can flush them as a code block
/// instead of silently dropping them.
pub fn flush(state: ParseState) -> Option<String> {
    if state.in_code {
        Some(state.pending.join("\n"))
    } else {
        None
    }
}
