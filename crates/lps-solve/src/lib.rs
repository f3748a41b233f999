//! lps-solve - presolve and primal simplex engine.
//!
//! Consumes a parsed [`Problem`](lps_ir::Problem): `to_standard_form`
//! rewrites it symbolically, then [`solve`] checks that the starting basis
//! is feasible, builds a dense tableau and iterates pivots until the
//! optimality test holds, the iteration limit is reached, or the problem
//! turns out to be unbounded.

pub mod error;
pub mod presolve;
pub mod tableau;

pub use error::{SolveError, UnknownHeuristic};
pub use presolve::to_standard_form;
pub use tableau::{Heuristic, Tableau, DEFAULT_FLOAT_TOLERANCE};

use lps_ir::{Problem, Solution};
use tracing::{debug, info};

/// Runs the driver loop on a problem in standard form.
///
/// Terminal outcomes:
/// - `Ok` with `optimal = true` - the optimality test held;
/// - `Ok` with `optimal = false` - the iteration limit was reached first;
/// - `Err(SolveError::Infeasible)` - the starting basis violates a bound
///   or constraint, which this one-phase iteration cannot repair;
/// - `Err(SolveError::Unbounded)` - some entering column had no leaving row.
pub fn solve(
    problem: &Problem,
    iteration_limit: u32,
    heuristic: Heuristic,
) -> Result<Solution, SolveError> {
    info!("building initial tableau");
    let mut tableau = Tableau::new(problem)?;
    debug!("initial tableau:\n{tableau}");

    // The optimality test reads only the objective row, so an infeasible
    // start would otherwise sail through it and come back as a certified
    // optimum of all zeros.
    if let Some(name) = tableau.infeasibility() {
        return Err(SolveError::Infeasible { name });
    }

    let mut iterations = 0;
    while !tableau.optimal() && iterations < iteration_limit {
        iterations += 1;
        info!("iteration {iterations}/{iteration_limit}");

        match tableau.select_pivot(heuristic)? {
            Some((row, column)) => {
                debug!("pivoting on row {row}, column {column}");
                tableau.apply_pivot(row, column);
                debug!("resulting tableau:\n{tableau}");
            }
            // No improvable column even though the optimality test fails
            // (negative constant cell); nothing more the pivot rules can do.
            None => break,
        }
    }

    let optimal = tableau.optimal();
    if optimal {
        info!("exited in optimal condition after {iterations} iterations");
    } else {
        info!("exited after {iterations} iterations without certifying optimality");
    }

    Ok(Solution::new(
        tableau.extract(problem),
        tableau.objective_value(),
        optimal,
    ))
}
