//! Data model types for parsed folder and file titles.
//!
//! This module contains the output record of a parse and the tags that
//! describe which season or year rule produced a value.

mod title;
mod token;

pub use title::ParsedTitle;
pub use token::{MatchedToken, SeasonForm, YearForm};

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}
