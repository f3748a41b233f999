//! Solver output.

use std::fmt;

use indexmap::IndexMap;

/// The result of a solve: one value per decision variable, plus whether the
/// driver stopped because the optimality test held (as opposed to running
/// out of iterations).
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Values of the original (non-synthesized) variables, in symbol order.
    pub values: IndexMap<String, f64>,

    /// Value of the objective row's constant cell when the solve stopped.
    /// This is in the maximised sense; callers solving a minimisation
    /// problem negate it for display.
    pub objective_value: f64,

    /// True when the solve terminated via the optimality test.
    pub optimal: bool,
}

impl Solution {
    pub fn new(values: IndexMap<String, f64>, objective_value: f64, optimal: bool) -> Self {
        Self {
            values,
            objective_value,
            optimal,
        }
    }

    /// Value assigned to a variable, if it was part of the problem.
    pub fn value_of(&self, variable: &str) -> Option<f64> {
        self.values.get(variable).copied()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.values {
            writeln!(f, "  {name} = {value}")?;
        }
        writeln!(
            f,
            "optimality certified: {}",
            if self.optimal { "yes" } else { "no" }
        )
    }
}
