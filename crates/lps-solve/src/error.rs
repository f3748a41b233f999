//! Solver errors.

use thiserror::Error;

/// Terminal failures of the simplex engine.
///
/// Running out of iterations is not an error: the driver returns a
/// [`Solution`](lps_ir::Solution) with `optimal = false` in that case.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SolveError {
    /// A tableau cannot be built without an objective row.
    #[error("problem has no objective expression")]
    MissingObjective,

    /// The slack-only starting basis is not feasible: a negative
    /// right-hand side, or an equation the origin does not satisfy.
    /// One-phase primal simplex cannot repair such a start, so the solve
    /// is refused rather than reported as a false optimum. `name` is the
    /// violated column or constraint row.
    #[error("no feasible solution from the starting basis: {name:?} is violated")]
    Infeasible { name: String },

    /// An entering column had no row limiting its increase.
    #[error("problem is unbounded: {column:?} can increase without limit")]
    Unbounded { column: String },
}

/// Error for heuristic names the CLI does not know.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("unknown heuristic {0:?} (expected \"lowest\" or \"bland\")")]
pub struct UnknownHeuristic(pub String);
