//! # mediatitle-parser
//!
//! Extracts a season number, a release year and a clean search title from
//! free-form media folder and file names.
//!
//! Season markers are recognized in Latin (`S01`, `Season 1`) and Chinese
//! (`第一季`, `第二部`) conventions, bracketed or bare. Years are recognized
//! as `[2023]`, `(2023)` or a bare four-digit run within 1900-2100.
//!
//! ## Quick Start
//!
//! ```
//! use mediatitle_parser::parse;
//!
//! let result = parse("权力的游戏 第一季");
//!
//! assert_eq!(result.clean_title(), "权力的游戏");
//! assert_eq!(result.season_number(), Some(1));
//! assert_eq!(result.year(), None);
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use mediatitle_parser::Parser;
//! use mediatitle_parser::config::{ParserConfig, YearScanMode};
//!
//! let config = ParserConfig::builder()
//!     .year_scan(YearScanMode::FirstValid)
//!     .build();
//!
//! let parser = Parser::new(config);
//! let result = parser.parse("Movie 1080p 2021");
//! assert_eq!(result.year(), Some(2021));
//! ```

pub mod config;
pub mod model;
pub mod numeral;

mod parser;

// Re-export main types for convenience
pub use model::{MatchedToken, ParseError, ParsedTitle, SeasonForm, YearForm};
pub use parser::{
    clean_title, extract_season, extract_year, normalize_title, SeasonMatch, YearMatch,
};

use config::ParserConfig;
pub use config::YearScanMode;

/// Parse a title into structured metadata using default settings.
///
/// This is the simplest way to parse a title. For more control,
/// use [`Parser`] with a custom [`ParserConfig`].
///
/// # Examples
///
/// ```
/// use mediatitle_parser::parse;
///
/// let result = parse("Movie_Title_2021");
/// assert_eq!(result.clean_title(), "Movie Title");
/// assert_eq!(result.year(), Some(2021));
/// assert_eq!(result.season_number(), None);
/// ```
pub fn parse(input: &str) -> ParsedTitle {
    Parser::default().parse(input)
}

/// A configurable title parser.
///
/// The parser holds only its configuration; the rule tables are shared
/// statics, so a `Parser` can be cloned freely or shared across threads.
///
/// ```
/// use mediatitle_parser::Parser;
/// use mediatitle_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .lenient_numerals(false)
///     .build();
///
/// let parser = Parser::new(config);
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration this parser was built with.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a title into structured metadata.
    ///
    /// # Arguments
    /// * `input` - The folder or file title to parse
    ///
    /// # Returns
    /// A [`ParsedTitle`] with every recognized field filled in. Parsing
    /// never fails; unrecognized fields are simply absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediatitle_parser::Parser;
    ///
    /// let parser = Parser::default();
    /// let result = parser.parse("Game of Thrones Season 1");
    /// assert_eq!(result.clean_title(), "Game of Thrones");
    /// assert_eq!(result.season_number(), Some(1));
    /// ```
    pub fn parse(&self, input: &str) -> ParsedTitle {
        parser::parse_with_config(input, &self.config)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}
