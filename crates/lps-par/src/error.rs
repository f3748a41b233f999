//! Parse errors.

use lps_lex::LexError;
use thiserror::Error;

/// Everything that can go wrong between raw text and a finished
/// [`Problem`](lps_ir::Problem). All variants are fatal; the parser never
/// recovers or retries.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A non-blank line appeared before any section header.
    #[error("statement outside of any section at line {line}: {text:?}")]
    OutsideSection { line: usize, text: String },

    /// The document contained no sections at all.
    #[error("no sections found in document")]
    EmptyDocument,

    /// An objective section with no expression in it.
    #[error("objective section contains no expression")]
    MissingObjective,

    /// More than one statement in the objective section.
    #[error("too many objective expressions; only one is supported")]
    MultipleObjectives,

    /// A constraint with fewer than three tokens cannot hold an expression,
    /// a relation and a constant.
    #[error("constraint {name:?} is too short to form `expression relation constant`")]
    ConstraintTooShort { name: String },

    /// The final token of a constraint was not a number.
    #[error("expected a number on the right-hand side of constraint {name:?}")]
    MissingConstant { name: String },

    /// The penultimate token of a constraint was not a relation.
    #[error("expected a relation before the right-hand side of constraint {name:?}")]
    MissingRelation { name: String },

    /// A bounds statement that is neither `ident rel num`, `num rel ident`
    /// nor `num rel ident rel num`.
    #[error("malformed bounds statement {name:?}")]
    MalformedBound { name: String },

    /// A generals/binaries statement that does not start with a variable.
    #[error("expected a variable name in statement {name:?}")]
    ExpectedVariable { name: String },

    /// A token with no business being inside a linear expression.
    #[error("unexpected token {token:?} in expression {phrase:?}")]
    UnexpectedToken { phrase: String, token: String },
}
