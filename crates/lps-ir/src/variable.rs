//! Decision variables and their bounds.

use std::fmt;

/// A decision variable.
///
/// Variables come into existence the first time the parser sees their name;
/// until a bounds section says otherwise they are non-negative and unbounded
/// above. The binary flag records `binary` section membership but does not
/// influence the solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    name: String,

    /// Lower bound, default 0.
    pub lower_bound: f64,

    /// Upper bound, default +inf.
    pub upper_bound: f64,

    /// True when the lower bound came from a strict `<`/`>` relation.
    pub lower_strict: bool,

    /// True when the upper bound came from a strict `<`/`>` relation.
    pub upper_strict: bool,

    /// True when the variable was listed in a binaries section.
    pub binary: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lower_bound: 0.0,
            upper_bound: f64::INFINITY,
            lower_strict: false,
            upper_strict: false,
            binary: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_lower_bound(&mut self, bound: f64, strict: bool) {
        self.lower_bound = bound;
        self.lower_strict = strict;
    }

    pub fn set_upper_bound(&mut self, bound: f64, strict: bool) {
        self.upper_bound = bound;
        self.upper_strict = strict;
    }

    pub fn set_binary(&mut self, binary: bool) {
        self.binary = binary;
    }

    /// True when the bounds pin the variable to a single value.
    pub fn is_fixed(&self) -> bool {
        self.lower_bound == self.upper_bound && !self.lower_strict && !self.upper_strict
    }

    /// True when the upper bound is finite.
    pub fn has_upper_bound(&self) -> bool {
        self.upper_bound.is_finite()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower = if self.lower_strict { "<" } else { "<=" };
        let upper = if self.upper_strict { "<" } else { "<=" };
        write!(
            f,
            "{} {} {} {} {}{}",
            self.lower_bound,
            lower,
            self.name,
            upper,
            self.upper_bound,
            if self.binary { " (binary)" } else { "" },
        )
    }
}
