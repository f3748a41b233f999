//! The assembled LP problem.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;

use crate::constraint::Constraint;
use crate::expr::Expression;
use crate::symbol::SymbolTable;

/// Optimisation direction of the objective.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    Min,
    #[default]
    Max,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Min => write!(f, "min"),
            Mode::Max => write!(f, "max"),
        }
    }
}

/// Everything the parser learned about one LP document.
///
/// Constraint order and symbol order are both preserved: together they fix
/// the row and column layout of the tableau built later.
#[derive(Clone, Debug, Default)]
pub struct Problem {
    pub symbols: SymbolTable,
    pub objective: Option<Expression>,
    pub mode: Mode,
    pub constraints: IndexMap<String, Constraint>,

    /// Names of columns synthesized by the presolver. These take part in the
    /// solve but are left out of the reported solution.
    synthetic: FxHashSet<String>,
}

impl Problem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the objective expression and the optimisation direction.
    pub fn set_objective(&mut self, expression: Expression, mode: Mode) {
        self.objective = Some(expression);
        self.mode = mode;
    }

    /// Adds a constraint under its (user-given or generated) name.
    pub fn add_constraint(&mut self, name: impl Into<String>, constraint: Constraint) {
        self.constraints.insert(name.into(), constraint);
    }

    /// Marks a variable as presolver-synthesized.
    pub fn mark_synthetic(&mut self, name: impl Into<String>) {
        self.synthetic.insert(name.into());
    }

    /// True for slack columns and other presolver inventions.
    pub fn is_synthetic(&self, name: &str) -> bool {
        self.synthetic.contains(name)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.objective {
            Some(objective) => writeln!(f, "objective: {} {}", self.mode, objective)?,
            None => writeln!(f, "objective: (none)")?,
        }
        writeln!(f, "subject to:")?;
        for (name, constraint) in &self.constraints {
            writeln!(f, "  {name}: {constraint}")?;
        }
        writeln!(f, "across variables:")?;
        for (name, variable) in self.symbols.iter() {
            writeln!(f, "  {name}: {variable}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Term;

    #[test]
    fn constraints_keep_insertion_order() {
        let mut problem = Problem::new();
        for name in ["c2", "c1", "c3"] {
            problem.add_constraint(
                name,
                Constraint::Equation {
                    expression: Expression::new(name, vec![Term::new(1.0, "x")]),
                    constant: 0.0,
                },
            );
        }
        let names: Vec<_> = problem.constraints.keys().cloned().collect();
        assert_eq!(names, vec!["c2", "c1", "c3"]);
    }

    #[test]
    fn synthetic_marking() {
        let mut problem = Problem::new();
        problem.symbols.get_or_create("x");
        problem.symbols.create("_s_c1");
        problem.mark_synthetic("_s_c1");
        assert!(problem.is_synthetic("_s_c1"));
        assert!(!problem.is_synthetic("x"));
    }

    #[test]
    fn display_includes_mode_and_rows() {
        let mut problem = Problem::new();
        problem.symbols.get_or_create("x");
        problem.set_objective(
            Expression::new("obj", vec![Term::new(1.0, "x")]),
            Mode::Min,
        );
        problem.add_constraint(
            "c1",
            Constraint::Equation {
                expression: Expression::new("c1", vec![Term::new(1.0, "x")]),
                constant: 2.0,
            },
        );
        let text = problem.to_string();
        assert!(text.contains("objective: min x"));
        assert!(text.contains("c1: x = 2"));
    }
}
