//! De-commenting and section splitting.
//!
//! An LP document is a sequence of sections, each introduced by a header
//! keyword at the start of a line. Headers are matched as prefixes, so
//! anything after the keyword on the same line is discarded.

use lazy_static::lazy_static;
use lps_ir::Mode;
use regex::Regex;

use crate::error::ParseError;

/// Which builder a section's phrases belong to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Objective(Mode),
    Constraints,
    Bounds,
    Generals,
    Binaries,
}

/// One section: its kind and the raw lines belonging to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    /// Body text; every line is preceded by its newline.
    pub body: String,
}

lazy_static! {
    /// `\` comments run to end of line.
    static ref COMMENT: Regex = Regex::new(r"(?m)\\.*$").unwrap();

    static ref MAXIMIZE: Regex = Regex::new(r"(?i)\A\s*max(imize|imum)?").unwrap();
    static ref MINIMIZE: Regex = Regex::new(r"(?i)\A\s*min(imize|imum)?").unwrap();
    static ref CONSTRAINTS: Regex =
        Regex::new(r"(?i)\A\s*(subject\s+to|such\s+that|st|s\.t\.)").unwrap();
    static ref BOUNDS: Regex = Regex::new(r"(?i)\A\s*bounds?").unwrap();
    static ref GENERALS: Regex = Regex::new(r"(?i)\A\s*gen(eral|erals)?").unwrap();
    static ref BINARIES: Regex = Regex::new(r"(?i)\A\s*bin(aries|ary)?").unwrap();
    static ref END: Regex = Regex::new(r"(?i)\A\s*end").unwrap();
    static ref BLANK: Regex = Regex::new(r"\A\s*\z").unwrap();
}

enum LineKind {
    Header(SectionKind),
    End,
    Blank,
    Content,
}

fn classify(line: &str) -> LineKind {
    if MAXIMIZE.is_match(line) {
        LineKind::Header(SectionKind::Objective(Mode::Max))
    } else if MINIMIZE.is_match(line) {
        LineKind::Header(SectionKind::Objective(Mode::Min))
    } else if CONSTRAINTS.is_match(line) {
        LineKind::Header(SectionKind::Constraints)
    } else if BOUNDS.is_match(line) {
        LineKind::Header(SectionKind::Bounds)
    } else if GENERALS.is_match(line) {
        LineKind::Header(SectionKind::Generals)
    } else if BINARIES.is_match(line) {
        LineKind::Header(SectionKind::Binaries)
    } else if END.is_match(line) {
        LineKind::End
    } else if BLANK.is_match(line) {
        LineKind::Blank
    } else {
        LineKind::Content
    }
}

/// Splits a whole document into sections, stripping comments first.
///
/// Blank lines and the `end` terminator are dropped. A content line before
/// the first header is fatal, as is a document without any section.
pub fn split_sections(input: &str) -> Result<Vec<Section>, ParseError> {
    let stripped = COMMENT.replace_all(input, "");

    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;

    for (i, line) in stripped.lines().enumerate() {
        match classify(line) {
            LineKind::Header(kind) => {
                if let Some(finished) = current.take() {
                    sections.push(finished);
                }
                current = Some(Section {
                    kind,
                    body: String::new(),
                });
            }
            LineKind::End | LineKind::Blank => {}
            LineKind::Content => match current.as_mut() {
                Some(section) => {
                    section.body.push('\n');
                    section.body.push_str(line);
                }
                None => {
                    return Err(ParseError::OutsideSection {
                        line: i + 1,
                        text: line.trim().to_string(),
                    });
                }
            },
        }
    }

    if let Some(finished) = current.take() {
        sections.push(finished);
    }

    if sections.is_empty() {
        return Err(ParseError::EmptyDocument);
    }

    Ok(sections)
}
