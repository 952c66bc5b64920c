//! Pre- and post-passes over the working title.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::ParserConfig;

static EMPTY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*\]").expect("empty bracket pattern"));

static EMPTY_PARENS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)").expect("empty paren pattern"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

// Middle dot, hyphen, underscore and whitespace left dangling at the end.
static TRAILING_DECORATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[·\-_\s]+$").expect("trailing decoration pattern"));

/// Replaces underscores with spaces so `Movie_Title_2021` tokenizes like
/// `Movie Title 2021`.
pub fn normalize_title(title: &str, config: &ParserConfig) -> String {
    if config.normalize_underscores {
        title.replace('_', " ")
    } else {
        title.to_string()
    }
}

/// Tidies a title after season and year tokens were cut out of it.
///
/// Removes empty `[]` and `()` pairs, collapses whitespace, strips trailing
/// `·`, `-` and `_` runs, and trims.
pub fn clean_title(title: &str) -> String {
    let title = EMPTY_BRACKETS.replace_all(title, "");
    let title = EMPTY_PARENS.replace_all(&title, "");
    let title = WHITESPACE_RUN.replace_all(&title, " ");
    let title = TRAILING_DECORATION.replace(&title, "");
    title.trim().to_string()
}
