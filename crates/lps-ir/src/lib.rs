//! lps-ir - intermediate representation of a linear program.
//!
//! The parser builds a [`Problem`] out of these types; the presolver rewrites
//! it into standard form; the simplex engine reads it into a tableau and
//! produces a [`Solution`]. Everything here is plain data plus the handful of
//! symbolic operations (expression scaling, constraint inversion) the
//! presolver needs.

pub mod constraint;
pub mod expr;
pub mod problem;
pub mod solution;
pub mod symbol;
pub mod variable;

pub use constraint::Constraint;
pub use expr::{Expression, Term};
pub use problem::{Mode, Problem};
pub use solution::Solution;
pub use symbol::SymbolTable;
pub use variable::Variable;
