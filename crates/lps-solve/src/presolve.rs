//! Symbolic rewriting into simplex standard form.
//!
//! Standard form means: a maximised objective, every constraint an equality
//! `expression = constant`, and every variable non-negative. The steps run
//! in a fixed order and each is idempotent against input that already
//! satisfies its post-condition.

use lps_ir::{Constraint, Expression, Mode, Problem, Term};
use tracing::{debug, info};

/// Rewrites `problem` in place into standard form.
pub fn to_standard_form(problem: &mut Problem) {
    invert_objective(problem);
    ensure_upper_bounded_constraints(problem);
    insert_upper_bound_constraints(problem);
    insert_slack_variables(problem);
    ensure_variables_non_negative(problem);
}

/// Turns a minimisation objective into a maximisation of its negation.
fn invert_objective(problem: &mut Problem) {
    if problem.mode != Mode::Min {
        return;
    }
    info!("converting minimise objective into maximise");
    if let Some(objective) = problem.objective.as_mut() {
        objective.multiply(-1.0);
    }
    problem.mode = Mode::Max;
}

/// Flips every `>=`-style inequality so that all inequalities bound their
/// expression from above.
fn ensure_upper_bounded_constraints(problem: &mut Problem) {
    for (name, constraint) in problem.constraints.iter_mut() {
        if let Constraint::Inequality {
            greater_than: true, ..
        } = constraint
        {
            debug!("inverting constraint {name}");
            constraint.invert();
        }
    }
}

/// Materialises finite variable upper bounds as `x <= upper` rows so the
/// tableau can enforce them. Lower bounds are handled (coarsely) by the
/// non-negativity step instead.
fn insert_upper_bound_constraints(problem: &mut Problem) {
    let bounded: Vec<(String, f64)> = problem
        .symbols
        .iter()
        .filter(|(_, variable)| variable.has_upper_bound())
        .map(|(name, variable)| (name.clone(), variable.upper_bound))
        .collect();

    for (name, upper) in bounded {
        let row_name = format!("_ub_{name}");
        if problem.constraints.contains_key(&row_name) {
            continue;
        }
        debug!("bounding {name} above by {upper}");
        let expression = Expression::new(row_name.clone(), vec![Term::new(1.0, name)]);
        problem.add_constraint(
            row_name,
            Constraint::Inequality {
                expression,
                greater_than: false,
                strict: false,
                constant: upper,
            },
        );
    }
}

/// Converts every inequality `expr <= c` into the equation
/// `expr + _s_name = c` by appending a fresh slack variable.
fn insert_slack_variables(problem: &mut Problem) {
    let names: Vec<String> = problem.constraints.keys().cloned().collect();

    for name in names {
        let Some(constraint) = problem.constraints.get(&name) else {
            continue;
        };
        let Constraint::Inequality {
            expression,
            constant,
            ..
        } = constraint
        else {
            continue;
        };

        let mut expression = expression.clone();
        let constant = *constant;

        let slack = format!("_s_{name}");
        debug!("inserting slack variable {slack}");
        problem.symbols.create(&slack);
        problem.mark_synthetic(slack.clone());
        expression.push_term(1.0, slack);

        // Same key, same position: the row order is part of the tableau
        // layout contract.
        problem.constraints.insert(
            name,
            Constraint::Equation {
                expression,
                constant,
            },
        );
    }
}

/// Resets every lower bound to 0, non-strictly. Pre-existing lower bounds,
/// including negative ones from `free`, are overridden rather than shifted
/// or split; the solver works in the resulting non-negative space.
fn ensure_variables_non_negative(problem: &mut Problem) {
    for (_, variable) in problem.symbols.iter_mut() {
        variable.set_lower_bound(0.0, false);
    }
}
