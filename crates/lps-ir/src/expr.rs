//! Linear expressions as ordered term lists.

use std::fmt;

/// One term of a linear expression: a coefficient applied to a variable.
#[derive(Clone, Debug, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub variable: String,
}

impl Term {
    pub fn new(coefficient: f64, variable: impl Into<String>) -> Self {
        Self {
            coefficient,
            variable: variable.into(),
        }
    }
}

/// A named, ordered sequence of terms.
///
/// A variable may appear in more than one term; the list is kept exactly as
/// parsed and [`coefficient_for`](Expression::coefficient_for) answers with
/// the first occurrence.
#[derive(Clone, Debug, PartialEq)]
pub struct Expression {
    pub name: String,
    pub terms: Vec<Term>,
}

impl Expression {
    pub fn new(name: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            terms,
        }
    }

    /// Appends a term.
    pub fn push_term(&mut self, coefficient: f64, variable: impl Into<String>) {
        self.terms.push(Term::new(coefficient, variable));
    }

    /// Scales every coefficient by `factor`.
    pub fn multiply(&mut self, factor: f64) {
        for term in &mut self.terms {
            term.coefficient *= factor;
        }
    }

    /// Coefficient of `variable`, or `default` when the expression does not
    /// reference it. The first matching term wins.
    pub fn coefficient_for(&self, variable: &str, default: f64) -> f64 {
        self.terms
            .iter()
            .find(|term| term.variable == variable)
            .map_or(default, |term| term.coefficient)
    }

    /// Evaluates the expression under a variable assignment.
    pub fn evaluate(&self, mut value_of: impl FnMut(&str) -> f64) -> f64 {
        self.terms
            .iter()
            .map(|term| term.coefficient * value_of(&term.variable))
            .sum()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .terms
            .iter()
            .map(|term| {
                if term.coefficient == 1.0 {
                    term.variable.clone()
                } else {
                    format!("{} {}", term.coefficient, term.variable)
                }
            })
            .collect();
        write!(f, "{}", rendered.join(" + "))
    }
}
