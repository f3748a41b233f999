//! Dense simplex tableau.
//!
//! Rows are the constraints in insertion order with the objective row last;
//! columns are the variables in symbol-table order with the constant column
//! last. The objective enters in z-row form (`z - objective = 0`), so a
//! negative cell in the objective row marks a column whose increase would
//! still improve the objective.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use lps_ir::Problem;

use crate::error::{SolveError, UnknownHeuristic};

/// Default tolerance used when rounding extracted values.
pub const DEFAULT_FLOAT_TOLERANCE: f64 = 1e-5;

/// Pivot column selection strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// Most negative objective-row entry. Fast in practice but can cycle on
    /// degenerate problems.
    #[default]
    Lowest,

    /// Bland's rule: first eligible column in column order. Never cycles.
    Bland,
}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.to_ascii_lowercase().as_str() {
            "lowest" => Ok(Heuristic::Lowest),
            "bland" => Ok(Heuristic::Bland),
            other => Err(UnknownHeuristic(other.to_string())),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Lowest => write!(f, "lowest"),
            Heuristic::Bland => write!(f, "bland"),
        }
    }
}

/// The dense tableau: one row per constraint plus the objective row, one
/// column per variable plus the constant column.
#[derive(Clone, Debug)]
pub struct Tableau {
    float_tolerance: f64,

    /// Variable names in column order. The constant column is implicit and
    /// sits at index `columns.len()`.
    columns: Vec<String>,

    /// Constraint names in row order. The objective row is implicit and
    /// sits at index `rows.len()`.
    rows: Vec<String>,

    /// `(rows.len() + 1) x (columns.len() + 1)` cells.
    table: Vec<Vec<f64>>,
}

impl Tableau {
    /// Builds the initial tableau for a problem in standard form.
    pub fn new(problem: &Problem) -> Result<Self, SolveError> {
        Self::with_tolerance(problem, DEFAULT_FLOAT_TOLERANCE)
    }

    /// As [`new`](Tableau::new), with an explicit rounding tolerance.
    pub fn with_tolerance(problem: &Problem, float_tolerance: f64) -> Result<Self, SolveError> {
        let objective = problem
            .objective
            .as_ref()
            .ok_or(SolveError::MissingObjective)?;

        let columns: Vec<String> = problem.symbols.names().map(str::to_string).collect();
        let rows: Vec<String> = problem.constraints.keys().cloned().collect();

        let mut table = Vec::with_capacity(rows.len() + 1);
        for constraint in problem.constraints.values() {
            let mut row: Vec<f64> = columns
                .iter()
                .map(|column| constraint.expression().coefficient_for(column, 0.0))
                .collect();
            row.push(constraint.constant());
            table.push(row);
        }

        // z-row: negated objective coefficients, constant 0.
        let mut objective_row: Vec<f64> = columns
            .iter()
            .map(|column| -objective.coefficient_for(column, 0.0))
            .collect();
        objective_row.push(0.0);
        table.push(objective_row);

        Ok(Self {
            float_tolerance,
            columns,
            rows,
            table,
        })
    }

    /// `(rows, columns)` including the objective row and constant column.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len() + 1, self.columns.len() + 1)
    }

    /// Raw cell value.
    pub fn cell(&self, row: usize, column: usize) -> f64 {
        self.table[row][column]
    }

    /// Column index of a variable.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Constant cell of the objective row: the current objective value.
    pub fn objective_value(&self) -> f64 {
        self.table[self.rows.len()][self.columns.len()]
    }

    /// The stopping rule: every objective-row entry, the constant column
    /// included, is non-negative.
    pub fn optimal(&self) -> bool {
        self.table[self.rows.len()].iter().all(|&value| value >= 0.0)
    }

    /// Chooses a pivot. `Ok(None)` means no column can improve the
    /// objective (the caller is expected to have consulted
    /// [`optimal`](Tableau::optimal) already); an entering column with no
    /// valid leaving row is an unbounded problem.
    pub fn select_pivot(&self, heuristic: Heuristic) -> Result<Option<(usize, usize)>, SolveError> {
        let entering = match heuristic {
            Heuristic::Lowest => self.entering_lowest(),
            Heuristic::Bland => self.entering_bland(),
        };
        let Some(column) = entering else {
            return Ok(None);
        };

        match self.leaving_row(column) {
            Some(row) => Ok(Some((row, column))),
            None => Err(SolveError::Unbounded {
                column: self.columns[column].clone(),
            }),
        }
    }

    /// Most negative objective-row entry; ties go to the first column.
    fn entering_lowest(&self) -> Option<usize> {
        let objective = &self.table[self.rows.len()];
        let mut best: Option<(usize, f64)> = None;
        for (j, &value) in objective.iter().take(self.columns.len()).enumerate() {
            if value < 0.0 && best.map_or(true, |(_, lowest)| value < lowest) {
                best = Some((j, value));
            }
        }
        best.map(|(j, _)| j)
    }

    /// First column with a negative objective-row entry.
    fn entering_bland(&self) -> Option<usize> {
        self.table[self.rows.len()]
            .iter()
            .take(self.columns.len())
            .position(|&value| value < 0.0)
    }

    /// Smallest non-negative ratio `constant / coefficient` over rows whose
    /// entering-column coefficient is positive; ties go to the first row.
    /// Zero ratios stay eligible: degenerate pivots are what Bland's rule
    /// needs to escape.
    fn leaving_row(&self, column: usize) -> Option<usize> {
        let constant = self.columns.len();
        let mut best: Option<(usize, f64)> = None;
        for (i, row) in self.table.iter().take(self.rows.len()).enumerate() {
            let coefficient = row[column];
            if coefficient <= 0.0 {
                continue;
            }
            let ratio = row[constant] / coefficient;
            if ratio >= 0.0 && best.map_or(true, |(_, lowest)| ratio < lowest) {
                best = Some((i, ratio));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Pivots on `(pivot_row, pivot_column)`: scales the pivot row to a unit
    /// pivot, then eliminates the pivot column from every other row. Works
    /// on a fresh table so old values are never read after being written.
    pub fn apply_pivot(&mut self, pivot_row: usize, pivot_column: usize) {
        let width = self.columns.len() + 1;
        let mut next = self.table.clone();
        let pivot = self.table[pivot_row][pivot_column];

        for k in 0..width {
            next[pivot_row][k] = self.table[pivot_row][k] / pivot;
        }

        for r in 0..self.table.len() {
            if r == pivot_row {
                continue;
            }
            let factor = self.table[r][pivot_column];
            for k in 0..width {
                next[r][k] = self.table[r][k] - factor * next[pivot_row][k];
            }
            // Zeroed explicitly for numeric cleanliness.
            next[r][pivot_column] = 0.0;
        }

        self.table = next;
    }

    /// Reads the basic solution out of the tableau.
    ///
    /// A column is basic when, after tolerance rounding, it holds a single 1
    /// and zeros elsewhere; the variable's value is then the constant cell
    /// of the 1's row. Non-basic variables are 0. Synthesized columns are
    /// skipped.
    pub fn extract(&self, problem: &Problem) -> IndexMap<String, f64> {
        let mut values = IndexMap::new();
        for (j, name) in self.columns.iter().enumerate() {
            if problem.is_synthetic(name) {
                continue;
            }
            values.insert(name.clone(), self.basic_value(j));
        }
        values
    }

    /// Value the current basic solution assigns to one column: the constant
    /// cell of the row holding the column's single 1, or 0 when the column
    /// is not basic.
    fn basic_value(&self, column: usize) -> f64 {
        let constant = self.columns.len();
        let cells: Vec<f64> = self.table.iter().map(|row| self.round(row[column])).collect();
        let ones = cells.iter().filter(|&&v| v == 1.0).count();
        let zeros = cells.iter().filter(|&&v| v == 0.0).count();

        if ones == 1 && zeros == cells.len() - 1 {
            if let Some(basic_row) = cells.iter().position(|&v| v == 1.0) {
                return self.table[basic_row][constant];
            }
        }
        0.0
    }

    /// Checks the basic solution the tableau currently encodes against the
    /// non-negativity of every column and the equation of every constraint
    /// row. Returns the name of the first violated column or row, `None`
    /// when the solution is feasible.
    ///
    /// Run against the initial tableau this spots a starting basis the
    /// primal iteration cannot work from: a `>=` constraint whose inversion
    /// left a negative right-hand side, or an equation the origin does not
    /// satisfy.
    pub fn infeasibility(&self) -> Option<String> {
        let values: Vec<f64> = (0..self.columns.len())
            .map(|j| self.basic_value(j))
            .collect();

        for (j, value) in values.iter().enumerate() {
            if *value < -self.float_tolerance {
                return Some(self.columns[j].clone());
            }
        }

        let constant = self.columns.len();
        for (i, row) in self.table.iter().take(self.rows.len()).enumerate() {
            let lhs: f64 = values
                .iter()
                .enumerate()
                .map(|(j, value)| row[j] * value)
                .sum();
            if (lhs - row[constant]).abs() > self.float_tolerance {
                return Some(self.rows[i].clone());
            }
        }

        None
    }

    /// Snaps values within tolerance of 0 or 1 onto them.
    fn round(&self, value: f64) -> f64 {
        if value.abs() < self.float_tolerance {
            0.0
        } else if (value - 1.0).abs() < self.float_tolerance {
            1.0
        } else {
            value
        }
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>16}", "row")?;
        for name in &self.columns {
            write!(f, "{name:>12}")?;
        }
        writeln!(f, "{:>12}", "const")?;

        for (i, row) in self.table.iter().enumerate() {
            let label = if i < self.rows.len() {
                self.rows[i].as_str()
            } else {
                "objective"
            };
            write!(f, "{label:>16}")?;
            for value in row {
                write!(f, "{value:>12.4}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use lps_ir::{Constraint, Expression, Mode, Term};

    use super::*;

    /// max 3x + 5y subject to x + y = 4 (slack s1), x = 3 (slack s2),
    /// already in standard form.
    fn standard_problem() -> Problem {
        let mut problem = Problem::new();
        problem.symbols.get_or_create("x");
        problem.symbols.get_or_create("y");
        problem.symbols.create("s1");
        problem.symbols.create("s2");
        problem.mark_synthetic("s1");
        problem.mark_synthetic("s2");
        problem.set_objective(
            Expression::new("obj", vec![Term::new(3.0, "x"), Term::new(5.0, "y")]),
            Mode::Max,
        );
        problem.add_constraint(
            "c1",
            Constraint::Equation {
                expression: Expression::new(
                    "c1",
                    vec![
                        Term::new(1.0, "x"),
                        Term::new(1.0, "y"),
                        Term::new(1.0, "s1"),
                    ],
                ),
                constant: 4.0,
            },
        );
        problem.add_constraint(
            "c2",
            Constraint::Equation {
                expression: Expression::new(
                    "c2",
                    vec![Term::new(1.0, "x"), Term::new(1.0, "s2")],
                ),
                constant: 3.0,
            },
        );
        problem
    }

    #[test]
    fn layout_follows_symbol_and_constraint_order() {
        let tableau = Tableau::new(&standard_problem()).unwrap();
        assert_eq!(tableau.shape(), (3, 5));
        assert_eq!(tableau.column_index("x"), Some(0));
        assert_eq!(tableau.column_index("s2"), Some(3));
        // c1 row.
        assert_eq!(tableau.cell(0, 0), 1.0);
        assert_eq!(tableau.cell(0, 1), 1.0);
        assert_eq!(tableau.cell(0, 4), 4.0);
        // Objective row holds negated coefficients and a zero constant.
        assert_eq!(tableau.cell(2, 0), -3.0);
        assert_eq!(tableau.cell(2, 1), -5.0);
        assert_eq!(tableau.cell(2, 4), 0.0);
    }

    #[test]
    fn missing_objective_is_an_error() {
        let mut problem = standard_problem();
        problem.objective = None;
        assert_eq!(
            Tableau::new(&problem).unwrap_err(),
            SolveError::MissingObjective
        );
    }

    #[test]
    fn optimality_checks_the_whole_objective_row() {
        let mut tableau = Tableau::new(&standard_problem()).unwrap();
        assert!(!tableau.optimal());

        // Make every variable cell non-negative: optimal.
        let width = tableau.columns.len();
        for j in 0..width {
            tableau.table[2][j] = tableau.table[2][j].abs();
        }
        assert!(tableau.optimal());

        // A negative constant cell also defeats the test.
        tableau.table[2][width] = -1.0;
        assert!(!tableau.optimal());
    }

    #[test]
    fn lowest_picks_most_negative_entry() {
        let tableau = Tableau::new(&standard_problem()).unwrap();
        let (row, column) = tableau
            .select_pivot(Heuristic::Lowest)
            .unwrap()
            .expect("a pivot exists");
        assert_eq!(column, tableau.column_index("y").unwrap());
        // Only c1 involves y.
        assert_eq!(row, 0);
    }

    #[test]
    fn bland_picks_first_negative_entry() {
        let tableau = Tableau::new(&standard_problem()).unwrap();
        let (row, column) = tableau
            .select_pivot(Heuristic::Bland)
            .unwrap()
            .expect("a pivot exists");
        assert_eq!(column, tableau.column_index("x").unwrap());
        // x: ratios 4/1 and 3/1; c2 is tighter.
        assert_eq!(row, 1);
    }

    #[test]
    fn leaving_row_ignores_non_positive_coefficients() {
        let mut problem = Problem::new();
        problem.symbols.get_or_create("x");
        problem.set_objective(Expression::new("obj", vec![Term::new(1.0, "x")]), Mode::Max);
        problem.add_constraint(
            "c1",
            Constraint::Equation {
                expression: Expression::new("c1", vec![Term::new(-1.0, "x")]),
                constant: 0.0,
            },
        );
        let tableau = Tableau::new(&problem).unwrap();
        assert_eq!(
            tableau.select_pivot(Heuristic::Lowest).unwrap_err(),
            SolveError::Unbounded {
                column: "x".to_string()
            }
        );
    }

    #[test]
    fn pivot_preserves_shape_and_makes_the_column_basic() {
        let mut tableau = Tableau::new(&standard_problem()).unwrap();
        let before = tableau.shape();
        let (row, column) = tableau
            .select_pivot(Heuristic::Lowest)
            .unwrap()
            .expect("a pivot exists");

        tableau.apply_pivot(row, column);

        assert_eq!(tableau.shape(), before);
        for r in 0..tableau.table.len() {
            let expected = if r == row { 1.0 } else { 0.0 };
            assert!((tableau.cell(r, column) - expected).abs() < DEFAULT_FLOAT_TOLERANCE);
        }
    }

    #[test]
    fn extraction_reads_basic_columns_and_skips_synthetic_ones() {
        let problem = standard_problem();
        let mut tableau = Tableau::new(&problem).unwrap();

        // Pivot y into the basis: the known optimum of this problem.
        let (row, column) = tableau
            .select_pivot(Heuristic::Lowest)
            .unwrap()
            .expect("a pivot exists");
        tableau.apply_pivot(row, column);
        assert!(tableau.optimal());

        let values = tableau.extract(&problem);
        assert_eq!(values.get("x"), Some(&0.0));
        assert_eq!(values.get("y"), Some(&4.0));
        assert!(values.get("s1").is_none());
        assert!(values.get("s2").is_none());
        assert_eq!(tableau.objective_value(), 20.0);
    }

    #[test]
    fn a_feasible_start_has_no_infeasibility() {
        let tableau = Tableau::new(&standard_problem()).unwrap();
        assert_eq!(tableau.infeasibility(), None);
    }

    #[test]
    fn a_negative_right_hand_side_is_infeasible() {
        // x + y + s1 = -2 puts the basic slack below zero.
        let mut problem = standard_problem();
        if let Some(Constraint::Equation { constant, .. }) = problem.constraints.get_mut("c1") {
            *constant = -2.0;
        }
        let tableau = Tableau::new(&problem).unwrap();
        assert_eq!(tableau.infeasibility(), Some("s1".to_string()));
    }

    #[test]
    fn an_equation_unmet_at_the_origin_is_infeasible() {
        // x = 1 with no slack column: nothing is basic in that row and the
        // origin violates it.
        let mut problem = Problem::new();
        problem.symbols.get_or_create("x");
        problem.set_objective(Expression::new("obj", vec![Term::new(1.0, "x")]), Mode::Min);
        problem.add_constraint(
            "c1",
            Constraint::Equation {
                expression: Expression::new("c1", vec![Term::new(1.0, "x")]),
                constant: 1.0,
            },
        );
        let tableau = Tableau::new(&problem).unwrap();
        assert_eq!(tableau.infeasibility(), Some("c1".to_string()));
    }

    #[test]
    fn rounding_snaps_near_integers() {
        let tableau = Tableau::new(&standard_problem()).unwrap();
        assert_eq!(tableau.round(1e-9), 0.0);
        assert_eq!(tableau.round(1.0 - 1e-9), 1.0);
        assert_eq!(tableau.round(0.5), 0.5);
        assert_eq!(tableau.round(-1.0), -1.0);
    }

    #[test]
    fn heuristic_parsing() {
        assert_eq!("lowest".parse::<Heuristic>(), Ok(Heuristic::Lowest));
        assert_eq!("Bland".parse::<Heuristic>(), Ok(Heuristic::Bland));
        assert!("fastest".parse::<Heuristic>().is_err());
    }
}
