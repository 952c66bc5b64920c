//! Parser configuration.

use std::ops::RangeInclusive;

use crate::model::ParseError;

/// Earliest year accepted by default.
pub const DEFAULT_MIN_YEAR: u16 = 1900;

/// Latest year accepted by default.
pub const DEFAULT_MAX_YEAR: u16 = 2100;

/// How the year extractor walks the title.
///
/// Controls whether "Movie [1080] 2021" yields a year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum YearScanMode {
    /// Each year pattern only looks at its first occurrence.
    /// An out-of-range run found first hides any later valid run, so
    /// "Movie [1080] 2021" has no year.
    /// This is the long-standing behavior and the default.
    #[default]
    PatternClass,
    /// Each year pattern checks every occurrence and accepts the first
    /// in-range one, so "Movie [1080] 2021" has year 2021.
    FirstValid,
}

impl std::fmt::Display for YearScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YearScanMode::PatternClass => write!(f, "pattern_class"),
            YearScanMode::FirstValid => write!(f, "first_valid"),
        }
    }
}

impl std::str::FromStr for YearScanMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "pattern_class" => Ok(YearScanMode::PatternClass),
            "first_valid" => Ok(YearScanMode::FirstValid),
            _ => Err(ParseError(format!("invalid year scan mode: {}", s))),
        }
    }
}

/// Configuration for the parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use mediatitle_parser::config::{ParserConfig, YearScanMode};
///
/// let config = ParserConfig::builder()
///     .year_scan(YearScanMode::FirstValid)
///     .lenient_numerals(false)
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Replace `_` with a space before matching.
    /// Default: true
    pub normalize_underscores: bool,

    /// Fall back to 1 for Chinese numerals that cannot be read.
    /// When false, such a capture does not fire its season rule.
    /// Default: true
    pub lenient_numerals: bool,

    /// How the year extractor walks the title.
    /// Default: PatternClass
    pub year_scan: YearScanMode,

    /// Inclusive range of accepted years.
    /// Default: 1900..=2100
    pub year_range: RangeInclusive<u16>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            normalize_underscores: true,
            lenient_numerals: true,
            year_scan: YearScanMode::default(),
            year_range: DEFAULT_MIN_YEAR..=DEFAULT_MAX_YEAR,
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }

    /// Whether `year` falls inside the accepted range.
    pub fn accepts_year(&self, year: u16) -> bool {
        self.year_range.contains(&year)
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    normalize_underscores: Option<bool>,
    lenient_numerals: Option<bool>,
    year_scan: Option<YearScanMode>,
    year_range: Option<RangeInclusive<u16>>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether underscores are treated as spaces.
    ///
    /// Default: true
    pub fn normalize_underscores(mut self, enabled: bool) -> Self {
        self.normalize_underscores = Some(enabled);
        self
    }

    /// Set whether unreadable Chinese numerals fall back to 1.
    ///
    /// Default: true
    pub fn lenient_numerals(mut self, enabled: bool) -> Self {
        self.lenient_numerals = Some(enabled);
        self
    }

    /// Set how the year extractor walks the title.
    ///
    /// - `PatternClass` (default): first occurrence per pattern only
    /// - `FirstValid`: first in-range occurrence per pattern
    pub fn year_scan(mut self, mode: YearScanMode) -> Self {
        self.year_scan = Some(mode);
        self
    }

    /// Set the inclusive range of accepted years.
    ///
    /// The range is clamped to 1900..=2100 on build.
    ///
    /// Default: 1900..=2100
    pub fn year_range(mut self, range: RangeInclusive<u16>) -> Self {
        self.year_range = Some(range);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            normalize_underscores: self.normalize_underscores.unwrap_or(true),
            lenient_numerals: self.lenient_numerals.unwrap_or(true),
            year_scan: self.year_scan.unwrap_or_default(),
            year_range: clamp_year_range(
                self.year_range.unwrap_or(DEFAULT_MIN_YEAR..=DEFAULT_MAX_YEAR),
            ),
        }
    }
}

/// Narrow `range` to the window a release year can ever take.
fn clamp_year_range(range: RangeInclusive<u16>) -> RangeInclusive<u16> {
    let (start, end) = range.into_inner();
    start.max(DEFAULT_MIN_YEAR)..=end.min(DEFAULT_MAX_YEAR)
}
