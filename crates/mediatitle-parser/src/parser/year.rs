//! Release year extraction.

use std::sync::LazyLock;

use regex::{Match, Regex};
use tracing::{debug, trace};

use crate::config::{ParserConfig, YearScanMode};
use crate::model::{MatchedToken, YearForm};

/// A recognized year and the marker it came from.
pub type YearMatch = (u16, MatchedToken<YearForm>);

struct YearRule {
    form: YearForm,
    pattern: Regex,
}

impl YearRule {
    fn new(form: YearForm, pattern: &str) -> Self {
        Self {
            form,
            pattern: Regex::new(pattern).expect("year pattern"),
        }
    }

    /// Occurrences of this rule in `title`, left to right.
    ///
    /// Each item is the token to cut and its four digits. The bare pattern
    /// consumes the non-digit on either side, so the search restarts at the
    /// end of the token rather than the end of the whole match.
    fn occurrences<'t>(&'t self, title: &'t str) -> impl Iterator<Item = (Match<'t>, &'t str)> {
        let mut start = 0;
        std::iter::from_fn(move || {
            let captures = self.pattern.captures_at(title, start)?;
            let token = captures.name("token")?;
            let digits = captures.name("year")?;
            start = token.end();
            Some((token, digits.as_str()))
        })
    }
}

static YEAR_RULES: LazyLock<Vec<YearRule>> = LazyLock::new(|| {
    vec![
        YearRule::new(YearForm::Bracketed, r"(?P<token>\[(?P<year>[0-9]{4})\])"),
        YearRule::new(YearForm::Parenthesized, r"(?P<token>\((?P<year>[0-9]{4})\))"),
        YearRule::new(
            YearForm::Bare,
            r"(?:^|[^0-9])(?P<token>(?P<year>[0-9]{4}))(?:[^0-9]|$)",
        ),
    ]
});

/// Finds a release year in `title` and returns it with the reduced title.
///
/// Patterns are tried in order: `[2023]`, `(2023)`, then a bare run of
/// exactly four digits. Under [`YearScanMode::PatternClass`] each pattern
/// only considers its first occurrence, so an out-of-range run seen first
/// hides a valid one further along. Under [`YearScanMode::FirstValid`] every
/// occurrence is considered.
///
/// Only the accepted token is removed.
///
/// # Example
/// ```
/// use mediatitle_parser::config::ParserConfig;
/// use mediatitle_parser::extract_year;
///
/// let (year, rest) = extract_year("[2023] Some Movie", &ParserConfig::default());
/// assert_eq!(year.map(|(y, _)| y), Some(2023));
/// assert_eq!(rest, " Some Movie");
/// ```
pub fn extract_year(title: &str, config: &ParserConfig) -> (Option<YearMatch>, String) {
    let per_rule = match config.year_scan {
        YearScanMode::PatternClass => 1,
        YearScanMode::FirstValid => usize::MAX,
    };

    for rule in YEAR_RULES.iter() {
        for (token, digits) in rule.occurrences(title).take(per_rule) {
            let Ok(year) = digits.parse::<u16>() else {
                continue;
            };
            if !config.accepts_year(year) {
                debug!(form = %rule.form, year, "year out of range");
                continue;
            }

            trace!(form = %rule.form, year, "year rule matched");
            let mut reduced = title.to_string();
            reduced.replace_range(token.range(), "");
            return (Some((year, MatchedToken::new(rule.form, token.as_str()))), reduced);
        }
    }

    (None, title.to_string())
}
