//! Regex-anchored input buffer.
//!
//! The tokenizer works by repeatedly testing a fixed set of patterns against
//! the front of the remaining input. `Buffer` owns that remaining input and
//! keeps a line/column position up to date for error reporting.

use std::fmt;

use regex::Regex;

/// A line/column position inside one section body.
///
/// Both coordinates are 1-based. Positions are relative to the section the
/// tokenizer is working on, not to the whole document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,

    /// Character offset on the current line (1-based).
    pub column: u32,
}

impl Position {
    /// The position at the start of the input.
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, char {}", self.line, self.column)
    }
}

/// A string cursor with pattern-at-cursor matching.
///
/// All patterns handed to [`peek`](Buffer::peek) and
/// [`consume`](Buffer::consume) must be anchored (`\A...`); a match anywhere
/// other than the cursor itself is treated as no match.
///
/// # Example
///
/// ```
/// use lps_lex::Buffer;
/// use regex::Regex;
///
/// let digits = Regex::new(r"\A[0-9]+").unwrap();
/// let mut buf = Buffer::new("42 x");
///
/// assert!(buf.peek(&digits));
/// assert_eq!(buf.consume(&digits), Some("42".to_string()));
/// assert!(!buf.peek(&digits));
/// ```
#[derive(Clone, Debug)]
pub struct Buffer {
    /// Input not yet consumed.
    rest: String,

    /// Position of the cursor.
    pos: Position,
}

impl Buffer {
    /// Creates a buffer over the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            rest: input.into(),
            pos: Position::start(),
        }
    }

    /// Returns true iff `pattern` matches at the cursor. Does not advance.
    pub fn peek(&self, pattern: &Regex) -> bool {
        pattern.find(&self.rest).is_some_and(|m| m.start() == 0)
    }

    /// If `pattern` matches at the cursor, advances past the match and
    /// returns the matched text. Returns `None` otherwise.
    ///
    /// Consumed newlines bump the line counter and reset the column to the
    /// length of the text that followed the last newline.
    pub fn consume(&mut self, pattern: &Regex) -> Option<String> {
        let m = pattern.find(&self.rest)?;
        if m.start() != 0 {
            return None;
        }

        let text = m.as_str().to_string();
        match text.rfind('\n') {
            Some(last) => {
                self.pos.line += text.matches('\n').count() as u32;
                self.pos.column = (text.len() - last) as u32;
            }
            None => {
                self.pos.column += text.len() as u32;
            }
        }

        self.rest.drain(..text.len());
        Some(text)
    }

    /// Current cursor position.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Human-readable cursor position for diagnostics.
    pub fn report(&self) -> String {
        self.pos.to_string()
    }

    /// First `n` characters of the unconsumed input, for error previews.
    pub fn preview(&self, n: usize) -> String {
        self.rest.chars().take(n).collect()
    }

    /// True when the cursor is at end-of-input.
    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }
}
