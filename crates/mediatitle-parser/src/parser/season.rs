//! Season marker extraction.
//!
//! The rule table is ordered: bracketed markers before bare ones, Latin
//! before Chinese. The first rule with an accepted capture wins and every
//! match of its pattern is cut from the title.
//!
//! Bare Latin markers use ASCII word boundaries, so a marker written
//! straight after CJK text (`权力的游戏S01`) is still found.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::model::{MatchedToken, SeasonForm};
use crate::numeral::{numeral_or_default, parse_numeral};

/// A recognized season number and the marker it came from.
pub type SeasonMatch = (u32, MatchedToken<SeasonForm>);

type Extractor = fn(&str, &ParserConfig) -> Option<u32>;

struct SeasonRule {
    form: SeasonForm,
    pattern: Regex,
    extract: Extractor,
}

impl SeasonRule {
    fn new(form: SeasonForm, pattern: &str, extract: Extractor) -> Self {
        Self {
            form,
            pattern: Regex::new(pattern).expect("season pattern"),
            extract,
        }
    }
}

static SEASON_RULES: LazyLock<Vec<SeasonRule>> = LazyLock::new(|| {
    vec![
        SeasonRule::new(SeasonForm::BracketedLatin, r"\[[Ss]([0-9]{1,2})\]", latin),
        SeasonRule::new(SeasonForm::Latin, r"(?-u:\b)[Ss]([0-9]{1,2})(?-u:\b)", latin),
        SeasonRule::new(
            SeasonForm::BracketedWord,
            r"(?i)\[season\s*([0-9]{1,2})\]",
            latin,
        ),
        SeasonRule::new(
            SeasonForm::Word,
            r"(?i)(?-u:\b)season\s*([0-9]{1,2})(?-u:\b)",
            latin,
        ),
        SeasonRule::new(
            SeasonForm::BracketedChineseSeason,
            r"\[第([一二三四五六七八九十0-9]{1,2})季\]",
            chinese,
        ),
        SeasonRule::new(
            SeasonForm::ChineseSeason,
            r"第([一二三四五六七八九十0-9]{1,2})季",
            chinese,
        ),
        SeasonRule::new(
            SeasonForm::BracketedChinesePart,
            r"\[第([一二三四五六七八九十0-9]{1,2})部\]",
            chinese,
        ),
        SeasonRule::new(
            SeasonForm::ChinesePart,
            r"第([一二三四五六七八九十0-9]{1,2})部",
            chinese,
        ),
    ]
});

fn latin(digits: &str, _config: &ParserConfig) -> Option<u32> {
    digits.parse().ok()
}

fn chinese(numeral: &str, config: &ParserConfig) -> Option<u32> {
    if config.lenient_numerals {
        Some(numeral_or_default(numeral))
    } else {
        parse_numeral(numeral)
    }
}

/// Finds the highest-priority season marker in `title`.
///
/// Returns the season with its marker and the title with every match of
/// the winning rule removed. A capture that reads as 0, or a Chinese
/// numeral rejected in strict mode, does not count as a match; the next
/// rule is tried instead.
///
/// # Example
/// ```
/// use mediatitle_parser::config::ParserConfig;
/// use mediatitle_parser::{extract_season, SeasonForm};
///
/// let (season, rest) = extract_season("[S02] Show S01", &ParserConfig::default());
/// let (number, token) = season.unwrap();
/// assert_eq!(number, 2);
/// assert_eq!(token.form, SeasonForm::BracketedLatin);
/// assert_eq!(rest, " Show S01");
/// ```
pub fn extract_season(title: &str, config: &ParserConfig) -> (Option<SeasonMatch>, String) {
    for rule in SEASON_RULES.iter() {
        let Some(captures) = rule.pattern.captures(title) else {
            continue;
        };
        let raw = captures.get(0).map_or("", |m| m.as_str());
        let value = captures.get(1).map_or("", |m| m.as_str());

        match (rule.extract)(value, config) {
            Some(0) => {
                debug!(form = %rule.form, raw, "ignoring season zero");
            }
            None => {
                debug!(form = %rule.form, raw, "unrecognized season numeral");
            }
            Some(season) => {
                trace!(form = %rule.form, raw, season, "season rule matched");
                let reduced = rule.pattern.replace_all(title, "").into_owned();
                return (Some((season, MatchedToken::new(rule.form, raw))), reduced);
            }
        }
    }

    (None, title.to_string())
}
