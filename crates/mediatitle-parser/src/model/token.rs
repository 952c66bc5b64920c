//! Tags for the season and year tokens removed from a title.

use super::ParseError;

/// The shape of a season marker, listed in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SeasonForm {
    /// `[S01]`
    BracketedLatin,
    /// `S01`
    Latin,
    /// `[Season 1]`
    BracketedWord,
    /// `Season 1`
    Word,
    /// `[第一季]`
    BracketedChineseSeason,
    /// `第一季`
    ChineseSeason,
    /// `[第一部]`
    BracketedChinesePart,
    /// `第一部`
    ChinesePart,
}

impl SeasonForm {
    fn as_str(&self) -> &'static str {
        match self {
            SeasonForm::BracketedLatin => "bracketed_latin",
            SeasonForm::Latin => "latin",
            SeasonForm::BracketedWord => "bracketed_word",
            SeasonForm::Word => "word",
            SeasonForm::BracketedChineseSeason => "bracketed_chinese_season",
            SeasonForm::ChineseSeason => "chinese_season",
            SeasonForm::BracketedChinesePart => "bracketed_chinese_part",
            SeasonForm::ChinesePart => "chinese_part",
        }
    }
}

impl std::fmt::Display for SeasonForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SeasonForm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "bracketed_latin" => Ok(SeasonForm::BracketedLatin),
            "latin" => Ok(SeasonForm::Latin),
            "bracketed_word" => Ok(SeasonForm::BracketedWord),
            "word" => Ok(SeasonForm::Word),
            "bracketed_chinese_season" => Ok(SeasonForm::BracketedChineseSeason),
            "chinese_season" => Ok(SeasonForm::ChineseSeason),
            "bracketed_chinese_part" => Ok(SeasonForm::BracketedChinesePart),
            "chinese_part" => Ok(SeasonForm::ChinesePart),
            _ => Err(ParseError(format!("invalid season form: {}", s))),
        }
    }
}

/// The shape of a year marker, listed in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum YearForm {
    /// `[2023]`
    Bracketed,
    /// `(2023)`
    Parenthesized,
    /// `2023`
    Bare,
}

impl std::fmt::Display for YearForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YearForm::Bracketed => write!(f, "bracketed"),
            YearForm::Parenthesized => write!(f, "parenthesized"),
            YearForm::Bare => write!(f, "bare"),
        }
    }
}

impl std::str::FromStr for YearForm {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bracketed" => Ok(YearForm::Bracketed),
            "parenthesized" | "paren" => Ok(YearForm::Parenthesized),
            "bare" => Ok(YearForm::Bare),
            _ => Err(ParseError(format!("invalid year form: {}", s))),
        }
    }
}

/// A token that was recognized and removed from the working title.
///
/// `raw` is the exact text that was cut, brackets included.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchedToken<K> {
    /// Which rule produced the token.
    pub form: K,
    /// Text removed from the title.
    pub raw: String,
}

impl<K> MatchedToken<K> {
    /// Creates a new matched token.
    pub fn new(form: K, raw: impl Into<String>) -> Self {
        Self {
            form,
            raw: raw.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEASON_FORMS: [SeasonForm; 8] = [
        SeasonForm::BracketedLatin,
        SeasonForm::Latin,
        SeasonForm::BracketedWord,
        SeasonForm::Word,
        SeasonForm::BracketedChineseSeason,
        SeasonForm::ChineseSeason,
        SeasonForm::BracketedChinesePart,
        SeasonForm::ChinesePart,
    ];

    #[test]
    fn season_form_display_fromstr_roundtrip() {
        for form in SEASON_FORMS {
            let parsed: SeasonForm = form.to_string().parse().expect("should parse");
            assert_eq!(form, parsed);
        }
    }

    #[test]
    fn season_form_accepts_kebab_case() {
        assert_eq!(
            "bracketed-chinese-part".parse::<SeasonForm>(),
            Ok(SeasonForm::BracketedChinesePart)
        );
    }

    #[test]
    fn season_form_rejects_unknown() {
        let err = "episode".parse::<SeasonForm>().unwrap_err();
        assert_eq!(err.to_string(), "parse error: invalid season form: episode");
    }

    #[test]
    fn year_form_fromstr() {
        assert_eq!("paren".parse::<YearForm>(), Ok(YearForm::Parenthesized));
        assert_eq!("BARE".parse::<YearForm>(), Ok(YearForm::Bare));
        assert!("curly".parse::<YearForm>().is_err());
    }
}
