//! Phrase grouping.
//!
//! The tokenizer's output is a flat stream with explicit newlines. This pass
//! rewrites that stream into named statements ("phrases"): labels are
//! recognised, `free` markers are expanded into a two-sided infinite bound,
//! newlines adjacent to an operator or relation become line continuations,
//! and every other newline ends the current phrase.

use indexmap::IndexMap;
use lps_lex::{Relation, Token};

/// Named statements in section order.
pub type Phrases = IndexMap<String, Vec<Token>>;

/// Groups a section's token stream into named phrases.
///
/// Unlabelled phrases are named `rule_{n}`, where `n` counts phrases emitted
/// so far in this section (1-based).
pub fn group_phrases(tokens: &[Token]) -> Phrases {
    slice_phrases(normalise(tokens))
}

fn adjoins_continuation(token: Option<&Token>) -> bool {
    matches!(token, Some(Token::Operator(_)) | Some(Token::Relation(_)))
}

/// The token-stream rewrite described above. Always appends a final
/// [`Token::EndPhrase`] so the slicer closes the last statement.
fn normalise(tokens: &[Token]) -> Vec<Token> {
    let mut out = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let prev = if i == 0 { None } else { tokens.get(i - 1) };
        let next = tokens.get(i + 1);

        match token {
            // The body assembly puts a newline before the first line.
            Token::Newline if i == 0 => {}

            // An identifier at the start of a line followed by `:` labels
            // the phrase; the separator itself is dropped below.
            Token::Ident(name)
                if (prev.is_none() || matches!(prev, Some(Token::Newline)))
                    && matches!(next, Some(Token::NameSep)) =>
            {
                out.push(Token::PhraseLabel(name.clone()));
            }
            Token::NameSep => {}

            // `x free` becomes `-inf <= x <= +inf` so the bounds builder
            // sees one uniform shape.
            Token::Ident(_) if matches!(next, Some(Token::Free)) => {
                out.push(Token::Number(f64::NEG_INFINITY));
                out.push(Token::Relation(Relation::Le));
                out.push(token.clone());
                out.push(Token::Relation(Relation::Le));
                out.push(Token::Number(f64::INFINITY));
            }
            Token::Free => {}

            // A newline next to an operator or relation continues the line.
            Token::Newline if adjoins_continuation(prev) || adjoins_continuation(next) => {}
            Token::Newline => out.push(Token::EndPhrase),

            other => out.push(other.clone()),
        }
    }

    if !out.is_empty() {
        out.push(Token::EndPhrase);
    }

    out
}

fn slice_phrases(tokens: Vec<Token>) -> Phrases {
    let mut phrases = Phrases::new();
    let mut label: Option<String> = None;
    let mut current: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::PhraseLabel(name) => label = Some(name),
            Token::EndPhrase => {
                let name = label
                    .take()
                    .unwrap_or_else(|| format!("rule_{}", phrases.len() + 1));
                phrases.insert(name, std::mem::take(&mut current));
            }
            other => current.push(other),
        }
    }

    phrases
}
