//! Regex-driven extraction pipeline.
//!
//! A parse is a single linear pass: normalize, cut the season marker, cut
//! the year marker, clean up what is left. Rule tables are compiled once and
//! shared by every call.

mod normalize;
mod season;
mod year;

pub use normalize::{clean_title, normalize_title};
pub use season::{extract_season, SeasonMatch};
pub use year::{extract_year, YearMatch};

use crate::config::ParserConfig;
use crate::model::ParsedTitle;

/// Parse a title with custom configuration.
///
/// The underscore pass runs first so that `Movie_S01` is seen as
/// `Movie S01` by the word-boundary rules.
pub fn parse_with_config(input: &str, config: &ParserConfig) -> ParsedTitle {
    let normalized = normalize_title(input, config);
    let (season, title) = extract_season(&normalized, config);
    let (year, title) = extract_year(&title, config);
    let clean = clean_title(&title);

    ParsedTitle::new(input, clean, season, year)
}
