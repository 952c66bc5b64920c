//! The parse output record.

use super::{MatchedToken, SeasonForm, YearForm};

/// Metadata extracted from a single folder or file title.
///
/// The record is built once per parse and never modified afterwards, so all
/// fields are read through accessors.
///
/// # Example
/// ```
/// use mediatitle_parser::parse;
///
/// let parsed = parse("Breaking Bad S01");
/// assert_eq!(parsed.clean_title(), "Breaking Bad");
/// assert_eq!(parsed.season_number(), Some(1));
/// assert_eq!(parsed.year(), None);
/// assert_eq!(parsed.original_title(), "Breaking Bad S01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedTitle {
    clean_title: String,
    season_number: Option<u32>,
    year: Option<u16>,
    original_title: String,
    season_token: Option<MatchedToken<SeasonForm>>,
    year_token: Option<MatchedToken<YearForm>>,
}

impl ParsedTitle {
    pub(crate) fn new(
        original_title: &str,
        clean_title: String,
        season: Option<(u32, MatchedToken<SeasonForm>)>,
        year: Option<(u16, MatchedToken<YearForm>)>,
    ) -> Self {
        let (season_number, season_token) = match season {
            Some((number, token)) => (Some(number), Some(token)),
            None => (None, None),
        };
        let (year, year_token) = match year {
            Some((value, token)) => (Some(value), Some(token)),
            None => (None, None),
        };

        Self {
            clean_title,
            season_number,
            year,
            original_title: original_title.to_string(),
            season_token,
            year_token,
        }
    }

    /// Title with season, year and decorative leftovers removed. May be empty.
    pub fn clean_title(&self) -> &str {
        &self.clean_title
    }

    /// Season number, always at least 1 when present.
    pub fn season_number(&self) -> Option<u32> {
        self.season_number
    }

    /// Release year within the configured calendar range.
    pub fn year(&self) -> Option<u16> {
        self.year
    }

    /// The input exactly as it was given.
    pub fn original_title(&self) -> &str {
        &self.original_title
    }

    /// The season marker that was removed, if any.
    pub fn season_token(&self) -> Option<&MatchedToken<SeasonForm>> {
        self.season_token.as_ref()
    }

    /// The year marker that was removed, if any.
    pub fn year_token(&self) -> Option<&MatchedToken<YearForm>> {
        self.year_token.as_ref()
    }

    /// True when neither a season nor a year was recognized.
    pub fn is_bare(&self) -> bool {
        self.season_number.is_none() && self.year.is_none()
    }
}
