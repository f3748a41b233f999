//! lps-lex - tokenization for the CPLEX LP text format.
//!
//! This crate turns the body of one LP section (objective, constraints,
//! bounds, ...) into a flat token stream. It knows nothing about sections or
//! statements; the parser crate layers phrase grouping and IR construction
//! on top of these tokens.

pub mod buffer;
pub mod lexer;
pub mod token;

pub use buffer::{Buffer, Position};
pub use lexer::{tokenise, LexError};
pub use token::{Op, Relation, Token};
