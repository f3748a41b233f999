//! Tokenizer for one section body of an LP document.
//!
//! The section splitter hands each section's raw text to [`tokenise`], which
//! walks a [`Buffer`] with a fixed, ordered set of anchored patterns. Pattern
//! order is load-bearing: `free` must be tried before identifiers, two-char
//! relations before one-char ones, and the newline before general whitespace.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::buffer::{Buffer, Position};
use crate::token::{Op, Relation, Token};

lazy_static! {
    /// Integer with optional fraction and exponent, or a signed infinity.
    static ref NUMBER: Regex =
        Regex::new(r"\A([0-9]+(\.[0-9]+)?(e[0-9]+(\.[0-9]+)?)?|(\+|-)inf(inity)?)").unwrap();

    /// The `free` bound marker.
    static ref FREE: Regex = Regex::new(r"\Afree").unwrap();

    /// Identifier. The start set excludes digits, `+`, `-`, `.` and `e`/`E`
    /// (so exponents and infinities stay unambiguous); the continuation set
    /// adds digits, `e` and `.`.
    static ref IDENT: Regex = Regex::new(
        r##"\A[a-df-zA-DF-Z!"#$%&()/,;?@_`'{}|~][a-zA-Z0-9!"#$%&()/,;?@_`'{}|~.]*"##,
    )
    .unwrap();

    /// Expression sign.
    static ref OPERATOR: Regex = Regex::new(r"\A(\+|-)").unwrap();

    /// Comparison relation; two-character spellings listed first.
    static ref RELATION: Regex = Regex::new(r"\A(<=|=<|>=|=>|=|<|>)").unwrap();

    /// Line separator.
    static ref NEWLINE: Regex = Regex::new(r"\A\n").unwrap();

    /// Label separator, with optional whitespace on either side.
    static ref NAME_SEP: Regex = Regex::new(r"\A\s*:\s*").unwrap();

    /// Horizontal whitespace, discarded. Newlines are not included: they
    /// terminate statements and must survive as tokens.
    static ref WHITESPACE: Regex = Regex::new(r"\A[ \t\r]+").unwrap();
}

/// Errors produced while tokenizing a section body.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LexError {
    /// No pattern matched at the cursor.
    #[error("unknown token at {at}: {preview:?}")]
    UnknownToken { at: Position, preview: String },

    /// A number-shaped lexeme that does not denote a real value, such as a
    /// fractional exponent (`1e2.5`).
    #[error("malformed number {text:?} at {at}")]
    MalformedNumber { text: String, at: Position },
}

/// Tokenizes one section body.
///
/// Positions in errors are relative to the start of `body`.
pub fn tokenise(body: &str) -> Result<Vec<Token>, LexError> {
    let mut buf = Buffer::new(body);
    let mut tokens = Vec::new();

    while !buf.is_empty() {
        let at = buf.position();

        if let Some(text) = buf.consume(&NUMBER) {
            tokens.push(Token::Number(parse_number(&text, at)?));
        } else if buf.consume(&FREE).is_some() {
            tokens.push(Token::Free);
        } else if let Some(text) = buf.consume(&IDENT) {
            tokens.push(Token::Ident(text));
        } else if let Some(text) = buf.consume(&OPERATOR) {
            let op = if text == "-" { Op::Minus } else { Op::Plus };
            tokens.push(Token::Operator(op));
        } else if let Some(text) = buf.consume(&RELATION) {
            match Relation::parse(&text) {
                Some(rel) => tokens.push(Token::Relation(rel)),
                None => {
                    return Err(LexError::UnknownToken { at, preview: text });
                }
            }
        } else if buf.consume(&NEWLINE).is_some() {
            tokens.push(Token::Newline);
        } else if buf.consume(&NAME_SEP).is_some() {
            tokens.push(Token::NameSep);
        } else if buf.consume(&WHITESPACE).is_some() {
            // Discarded.
        } else {
            return Err(LexError::UnknownToken {
                at,
                preview: buf.preview(10),
            });
        }
    }

    Ok(tokens)
}

/// Coerces a matched number lexeme to a real value.
fn parse_number(text: &str, at: Position) -> Result<f64, LexError> {
    match text {
        "+inf" | "+infinity" => Ok(f64::INFINITY),
        "-inf" | "-infinity" => Ok(f64::NEG_INFINITY),
        _ => text.parse().map_err(|_| LexError::MalformedNumber {
            text: text.to_string(),
            at,
        }),
    }
}
