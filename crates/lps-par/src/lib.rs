//! lps-par - parser for the CPLEX LP text format.
//!
//! The pipeline is: strip comments and split the document into sections,
//! tokenize each section body with `lps-lex`, group the tokens into named
//! phrases, then let each section kind's builder translate its phrases into
//! the shared [`Problem`] IR.

pub mod build;
pub mod error;
pub mod phrase;
pub mod section;

pub use error::ParseError;
pub use phrase::{group_phrases, Phrases};
pub use section::{split_sections, Section, SectionKind};

use lps_ir::Problem;

/// Parses a whole LP document into a [`Problem`].
pub fn parse_str(input: &str) -> Result<Problem, ParseError> {
    let sections = split_sections(input)?;

    let mut problem = Problem::new();
    for section in sections {
        let tokens = lps_lex::tokenise(&section.body)?;
        let phrases = group_phrases(&tokens);
        build::build_section(&mut problem, section.kind, &phrases)?;
    }

    Ok(problem)
}
