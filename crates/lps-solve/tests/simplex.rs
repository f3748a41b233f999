//! End-to-end solver tests over hand-built problems.

use lps_ir::{Constraint, Expression, Mode, Problem, Term};
use lps_solve::{solve, to_standard_form, Heuristic, SolveError};

fn inequality(name: &str, terms: Vec<Term>, greater_than: bool, constant: f64) -> Constraint {
    Constraint::Inequality {
        expression: Expression::new(name, terms),
        greater_than,
        strict: false,
        constant,
    }
}

/// max 3x + 5y s.t. x + y <= 4, x <= 3.
fn two_variable_max() -> Problem {
    let mut problem = Problem::new();
    problem.symbols.get_or_create("x");
    problem.symbols.get_or_create("y");
    problem.set_objective(
        Expression::new("obj", vec![Term::new(3.0, "x"), Term::new(5.0, "y")]),
        Mode::Max,
    );
    problem.add_constraint(
        "c1",
        inequality(
            "c1",
            vec![Term::new(1.0, "x"), Term::new(1.0, "y")],
            false,
            4.0,
        ),
    );
    problem.add_constraint(
        "c2",
        inequality("c2", vec![Term::new(1.0, "x")], false, 3.0),
    );
    problem
}

#[test]
fn solves_the_two_variable_maximisation() {
    let mut problem = two_variable_max();
    to_standard_form(&mut problem);

    let solution = solve(&problem, 20, Heuristic::Lowest).unwrap();
    assert!(solution.optimal);
    assert_eq!(solution.value_of("x"), Some(0.0));
    assert_eq!(solution.value_of("y"), Some(4.0));
    assert_eq!(solution.objective_value, 20.0);
    // Slack columns stay internal.
    assert!(solution.value_of("_s_c1").is_none());
}

#[test]
fn both_heuristics_agree_on_a_non_degenerate_problem() {
    let mut problem = two_variable_max();
    to_standard_form(&mut problem);

    let lowest = solve(&problem, 20, Heuristic::Lowest).unwrap();
    let bland = solve(&problem, 20, Heuristic::Bland).unwrap();
    assert!(lowest.optimal && bland.optimal);
    assert_eq!(lowest.objective_value, bland.objective_value);
}

#[test]
fn optimal_value_matches_the_objective_at_the_extracted_point() {
    let mut problem = two_variable_max();
    to_standard_form(&mut problem);
    let solution = solve(&problem, 20, Heuristic::Lowest).unwrap();

    let objective = problem.objective.as_ref().unwrap();
    let value = objective.evaluate(|name| solution.value_of(name).unwrap_or(0.0));
    assert!((value - solution.objective_value).abs() < 1e-9);
}

#[test]
fn an_unbounded_direction_is_surfaced() {
    // max x s.t. x >= 0: after inversion the only row is -x <= 0, which
    // never limits x.
    let mut problem = Problem::new();
    problem.symbols.get_or_create("x");
    problem.set_objective(Expression::new("obj", vec![Term::new(1.0, "x")]), Mode::Max);
    problem.add_constraint("c1", inequality("c1", vec![Term::new(1.0, "x")], true, 0.0));

    to_standard_form(&mut problem);
    assert_eq!(
        solve(&problem, 20, Heuristic::Lowest).unwrap_err(),
        SolveError::Unbounded {
            column: "x".to_string()
        }
    );
}

#[test]
fn a_greater_than_constraint_with_positive_rhs_refuses_to_start() {
    // max x s.t. x >= 2: inversion gives -x + _s_c1 = -2, so the slack
    // basis starts below zero and no primal pivot can repair it.
    let mut problem = Problem::new();
    problem.symbols.get_or_create("x");
    problem.set_objective(Expression::new("obj", vec![Term::new(1.0, "x")]), Mode::Max);
    problem.add_constraint("c1", inequality("c1", vec![Term::new(1.0, "x")], true, 2.0));

    to_standard_form(&mut problem);
    assert_eq!(
        solve(&problem, 20, Heuristic::Lowest).unwrap_err(),
        SolveError::Infeasible {
            name: "_s_c1".to_string()
        }
    );
}

#[test]
fn upper_bounds_limit_the_optimum() {
    // max x s.t. x <= 10, 2 <= x <= 5: the variable bound binds first.
    let mut problem = Problem::new();
    {
        let x = problem.symbols.get_or_create("x");
        x.set_lower_bound(2.0, false);
        x.set_upper_bound(5.0, false);
    }
    problem.set_objective(Expression::new("obj", vec![Term::new(1.0, "x")]), Mode::Max);
    problem.add_constraint("c1", inequality("c1", vec![Term::new(1.0, "x")], false, 10.0));

    to_standard_form(&mut problem);
    let solution = solve(&problem, 20, Heuristic::Lowest).unwrap();
    assert!(solution.optimal);
    assert_eq!(solution.value_of("x"), Some(5.0));
    assert_eq!(solution.objective_value, 5.0);
}

#[test]
fn minimisation_solves_through_inversion() {
    // min 2x - y s.t. x + y <= 3: optimum at x = 0, y = 3, objective -3.
    let mut problem = Problem::new();
    problem.symbols.get_or_create("x");
    problem.symbols.get_or_create("y");
    problem.set_objective(
        Expression::new("obj", vec![Term::new(2.0, "x"), Term::new(-1.0, "y")]),
        Mode::Min,
    );
    problem.add_constraint(
        "c1",
        inequality(
            "c1",
            vec![Term::new(1.0, "x"), Term::new(1.0, "y")],
            false,
            3.0,
        ),
    );

    to_standard_form(&mut problem);
    assert_eq!(problem.mode, Mode::Max);

    let solution = solve(&problem, 20, Heuristic::Lowest).unwrap();
    assert!(solution.optimal);
    assert_eq!(solution.value_of("x"), Some(0.0));
    assert_eq!(solution.value_of("y"), Some(3.0));
    // Maximised sense: max -(2x - y) = 3, i.e. min 2x - y = -3.
    assert_eq!(solution.objective_value, 3.0);
}

#[test]
fn iteration_limit_returns_an_uncertified_solution() {
    let mut problem = two_variable_max();
    to_standard_form(&mut problem);
    let solution = solve(&problem, 0, Heuristic::Lowest).unwrap();
    assert!(!solution.optimal);
}
