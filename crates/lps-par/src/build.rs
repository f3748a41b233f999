//! Section-to-IR translation.
//!
//! Each section kind consumes its phrases and mutates the shared
//! [`Problem`]: the objective section installs the objective expression and
//! optimisation mode, constraints become IR constraints keyed by phrase
//! name, bounds mutate variables, and the integrality sections toggle the
//! binary flag.

use lps_ir::{Constraint, Expression, Mode, Problem, Term};
use lps_lex::{Op, Relation, Token};

use crate::error::ParseError;
use crate::phrase::Phrases;
use crate::section::SectionKind;

/// Applies one section's phrases to the problem.
pub fn build_section(
    problem: &mut Problem,
    kind: SectionKind,
    phrases: &Phrases,
) -> Result<(), ParseError> {
    match kind {
        SectionKind::Objective(mode) => build_objective(problem, mode, phrases),
        SectionKind::Constraints => build_constraints(problem, phrases),
        SectionKind::Bounds => build_bounds(problem, phrases),
        SectionKind::Generals => build_integrality(problem, phrases, false),
        SectionKind::Binaries => build_integrality(problem, phrases, true),
    }
}

/// The shared expression reducer: a two-state scan over sign and
/// coefficient. `- 3 x`, `-3 x`, `- 3x` and `3 x - 2 y` all reduce the same
/// way.
fn reduce_terms(
    problem: &mut Problem,
    phrase: &str,
    tokens: &[Token],
) -> Result<Vec<Term>, ParseError> {
    let mut terms = Vec::new();
    let mut coefficient = 1.0;
    let mut negative = false;

    for token in tokens {
        match token {
            Token::Number(value) => coefficient = *value,
            Token::Operator(Op::Minus) => negative = !negative,
            Token::Operator(Op::Plus) => {}
            Token::Ident(name) => {
                problem.symbols.get_or_create(name);
                let sign = if negative { -1.0 } else { 1.0 };
                terms.push(Term::new(coefficient * sign, name.clone()));
                coefficient = 1.0;
                negative = false;
            }
            other => {
                return Err(ParseError::UnexpectedToken {
                    phrase: phrase.to_string(),
                    token: other.to_string(),
                });
            }
        }
    }

    Ok(terms)
}

fn build_objective(
    problem: &mut Problem,
    mode: Mode,
    phrases: &Phrases,
) -> Result<(), ParseError> {
    if phrases.len() > 1 {
        return Err(ParseError::MultipleObjectives);
    }
    let (name, tokens) = phrases.iter().next().ok_or(ParseError::MissingObjective)?;

    let terms = reduce_terms(problem, name, tokens)?;
    problem.set_objective(Expression::new(name.clone(), terms), mode);
    Ok(())
}

fn build_constraints(problem: &mut Problem, phrases: &Phrases) -> Result<(), ParseError> {
    for (name, tokens) in phrases {
        if tokens.len() < 3 {
            return Err(ParseError::ConstraintTooShort { name: name.clone() });
        }

        // A `- 3` tail is unary negation of the right-hand side.
        let mut tokens = tokens.clone();
        if let [.., Token::Operator(Op::Minus), Token::Number(value)] = tokens.as_slice() {
            let negated = -*value;
            tokens.truncate(tokens.len() - 2);
            tokens.push(Token::Number(negated));
        }

        let constant = match tokens.last() {
            Some(Token::Number(value)) => *value,
            _ => return Err(ParseError::MissingConstant { name: name.clone() }),
        };
        let relation = match tokens.get(tokens.len().saturating_sub(2)) {
            Some(Token::Relation(relation)) => *relation,
            _ => return Err(ParseError::MissingRelation { name: name.clone() }),
        };

        let terms = reduce_terms(problem, name, &tokens[..tokens.len() - 2])?;
        let expression = Expression::new(name.clone(), terms);

        let constraint = if relation == Relation::Eq {
            Constraint::Equation {
                expression,
                constant,
            }
        } else {
            Constraint::Inequality {
                expression,
                greater_than: relation.is_greater(),
                strict: relation.is_strict(),
                constant,
            }
        };
        problem.add_constraint(name.clone(), constraint);
    }
    Ok(())
}

fn build_bounds(problem: &mut Problem, phrases: &Phrases) -> Result<(), ParseError> {
    for (name, tokens) in phrases {
        match tokens.as_slice() {
            // x <= 4
            [Token::Ident(var), Token::Relation(relation), Token::Number(value)] => {
                set_variable_bounds(problem, var, *relation, *value);
            }
            // 4 <= x, normalised by mirroring the relation.
            [Token::Number(value), Token::Relation(relation), Token::Ident(var)] => {
                set_variable_bounds(problem, var, relation.mirrored(), *value);
            }
            // 0 <= x <= 40: the single-bound rule applied twice.
            [Token::Number(lower), Token::Relation(lower_relation), Token::Ident(var), Token::Relation(upper_relation), Token::Number(upper)] =>
            {
                set_variable_bounds(problem, var, lower_relation.mirrored(), *lower);
                set_variable_bounds(problem, var, *upper_relation, *upper);
            }
            _ => return Err(ParseError::MalformedBound { name: name.clone() }),
        }
    }
    Ok(())
}

/// Applies one `variable relation value` bound. `>`-family relations set the
/// lower bound, `<`-family the upper, `=` fixes both.
fn set_variable_bounds(problem: &mut Problem, var: &str, relation: Relation, value: f64) {
    let variable = problem.symbols.get_or_create(var);
    match relation {
        Relation::Gt | Relation::Ge => variable.set_lower_bound(value, relation.is_strict()),
        Relation::Lt | Relation::Le => variable.set_upper_bound(value, relation.is_strict()),
        Relation::Eq => {
            variable.set_lower_bound(value, false);
            variable.set_upper_bound(value, false);
        }
    }
}

/// Generals and binaries both list variables one per phrase; only the flag
/// value differs. Integrality itself never reaches the solver.
fn build_integrality(
    problem: &mut Problem,
    phrases: &Phrases,
    binary: bool,
) -> Result<(), ParseError> {
    for (name, tokens) in phrases {
        match tokens.first() {
            Some(Token::Ident(var)) => {
                problem.symbols.get_or_create(var).set_binary(binary);
            }
            _ => return Err(ParseError::ExpectedVariable { name: name.clone() }),
        }
    }
    Ok(())
}
