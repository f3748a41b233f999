//! Constraints: inequalities and equations.

use std::fmt;

use crate::expr::Expression;

/// A single constraint row.
///
/// The two shapes are distinct on purpose: the presolver turns every
/// `Inequality` into an `Equation` by slack insertion, and the tableau only
/// ever sees equations.
#[derive(Clone, Debug, PartialEq)]
pub enum Constraint {
    /// `expression (< | <= | > | >=) constant`
    Inequality {
        expression: Expression,
        /// True for the `>`/`>=` family.
        greater_than: bool,
        /// True for the forms without `=` (`<`, `>`).
        strict: bool,
        constant: f64,
    },

    /// `expression = constant`
    Equation {
        expression: Expression,
        constant: f64,
    },
}

impl Constraint {
    pub fn expression(&self) -> &Expression {
        match self {
            Constraint::Inequality { expression, .. } => expression,
            Constraint::Equation { expression, .. } => expression,
        }
    }

    pub fn expression_mut(&mut self) -> &mut Expression {
        match self {
            Constraint::Inequality { expression, .. } => expression,
            Constraint::Equation { expression, .. } => expression,
        }
    }

    pub fn constant(&self) -> f64 {
        match self {
            Constraint::Inequality { constant, .. } => *constant,
            Constraint::Equation { constant, .. } => *constant,
        }
    }

    pub fn is_equation(&self) -> bool {
        matches!(self, Constraint::Equation { .. })
    }

    /// Flips an inequality to the opposite direction: `x < y` becomes
    /// `-x > -y`. Equations are left untouched.
    pub fn invert(&mut self) {
        if let Constraint::Inequality {
            expression,
            greater_than,
            constant,
            ..
        } = self
        {
            expression.multiply(-1.0);
            *constant = -*constant;
            *greater_than = !*greater_than;
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Inequality {
                expression,
                greater_than,
                strict,
                constant,
            } => {
                let relation = match (greater_than, strict) {
                    (true, true) => ">",
                    (true, false) => ">=",
                    (false, true) => "<",
                    (false, false) => "<=",
                };
                write!(f, "{expression} {relation} {constant}")
            }
            Constraint::Equation {
                expression,
                constant,
            } => write!(f, "{expression} = {constant}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Term;

    fn le(constant: f64) -> Constraint {
        Constraint::Inequality {
            expression: Expression::new("c", vec![Term::new(2.0, "x"), Term::new(1.0, "y")]),
            greater_than: false,
            strict: false,
            constant,
        }
    }

    #[test]
    fn invert_flips_direction_and_signs() {
        let mut c = le(4.0);
        c.invert();
        match &c {
            Constraint::Inequality {
                expression,
                greater_than,
                strict,
                constant,
            } => {
                assert!(*greater_than);
                assert!(!*strict);
                assert_eq!(*constant, -4.0);
                assert_eq!(expression.coefficient_for("x", 0.0), -2.0);
                assert_eq!(expression.coefficient_for("y", 0.0), -1.0);
            }
            other => panic!("expected inequality, got {other:?}"),
        }
    }

    #[test]
    fn invert_twice_is_identity() {
        let mut c = le(4.0);
        c.invert();
        c.invert();
        assert_eq!(c, le(4.0));
    }

    #[test]
    fn invert_leaves_equations_alone() {
        let mut c = Constraint::Equation {
            expression: Expression::new("c", vec![Term::new(1.0, "x")]),
            constant: 3.0,
        };
        let before = c.clone();
        c.invert();
        assert_eq!(c, before);
    }

    #[test]
    fn display_renders_relation() {
        assert_eq!(le(4.0).to_string(), "2 x + y <= 4");
    }
}
