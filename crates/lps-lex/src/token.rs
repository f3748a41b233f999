//! Token types shared by the tokenizer and the phrase grouper.

use std::fmt;

/// A `+` or `-` sign inside a linear expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Plus => write!(f, "+"),
            Op::Minus => write!(f, "-"),
        }
    }
}

/// A comparison between an expression and a constant.
///
/// `=<` and `=>` are accepted as aliases of `<=` and `>=`; the alias spelling
/// is not preserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    /// `<=` (or `=<`)
    Le,
    /// `>=` (or `=>`)
    Ge,
    /// `=`
    Eq,
    /// `<`
    Lt,
    /// `>`
    Gt,
}

impl Relation {
    /// Parses a relation from its textual form. Two-character forms are the
    /// tokenizer's concern; this accepts any of the seven spellings.
    pub fn parse(text: &str) -> Option<Relation> {
        match text {
            "<=" | "=<" => Some(Relation::Le),
            ">=" | "=>" => Some(Relation::Ge),
            "=" => Some(Relation::Eq),
            "<" => Some(Relation::Lt),
            ">" => Some(Relation::Gt),
            _ => None,
        }
    }

    /// Mirror inversion, used when swapping the two sides of a bound:
    /// `a < b` holds iff `b > a`.
    pub fn mirrored(self) -> Relation {
        match self {
            Relation::Le => Relation::Ge,
            Relation::Ge => Relation::Le,
            Relation::Lt => Relation::Gt,
            Relation::Gt => Relation::Lt,
            Relation::Eq => Relation::Eq,
        }
    }

    /// True for `>` and `>=`.
    pub fn is_greater(self) -> bool {
        matches!(self, Relation::Gt | Relation::Ge)
    }

    /// True for `<` and `<=`.
    pub fn is_less(self) -> bool {
        matches!(self, Relation::Lt | Relation::Le)
    }

    /// True for the forms without an `=`: `<` and `>`.
    pub fn is_strict(self) -> bool {
        matches!(self, Relation::Lt | Relation::Gt)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Relation::Le => "<=",
            Relation::Ge => ">=",
            Relation::Eq => "=",
            Relation::Lt => "<",
            Relation::Gt => ">",
        };
        write!(f, "{text}")
    }
}

/// One token of a section body.
///
/// `PhraseLabel` and `EndPhrase` never come out of the tokenizer itself; the
/// phrase grouper rewrites the raw stream into them.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// A numeric literal, including the `+inf`/`-infinity` family.
    Number(f64),
    /// The `free` keyword.
    Free,
    /// A variable or label name.
    Ident(String),
    /// `+` or `-`.
    Operator(Op),
    /// One of `<=`, `=<`, `>=`, `=>`, `=`, `<`, `>`.
    Relation(Relation),
    /// A line break.
    Newline,
    /// A `:` with optional surrounding whitespace.
    NameSep,
    /// The name attached to the statement that follows (post-lex only).
    PhraseLabel(String),
    /// End of a statement (post-lex only).
    EndPhrase,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(v) if v.is_infinite() => {
                write!(f, "{}inf", if *v > 0.0 { "+" } else { "-" })
            }
            Token::Number(v) => write!(f, "{v}"),
            Token::Free => write!(f, "free"),
            Token::Ident(name) => write!(f, "{name}"),
            Token::Operator(op) => write!(f, "{op}"),
            Token::Relation(rel) => write!(f, "{rel}"),
            Token::Newline => writeln!(f),
            Token::NameSep => write!(f, ":"),
            Token::PhraseLabel(name) => write!(f, "{name}:"),
            Token::EndPhrase => Ok(()),
        }
    }
}
