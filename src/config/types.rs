use mediatitle_parser::config::{ParserConfig, DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};
use mediatitle_parser::YearScanMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserSettings,

    #[serde(default)]
    pub scan: ScanConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ParserSettings {
    /// Treat `_` as a space before matching (default: true)
    #[serde(default = "default_true")]
    pub normalize_underscores: bool,

    /// Read unrecognized Chinese numerals as 1 instead of ignoring the marker
    /// (default: true)
    #[serde(default = "default_true")]
    pub lenient_numerals: bool,

    /// "pattern_class" (default) or "first_valid"
    #[serde(default)]
    pub year_scan: YearScanMode,

    #[serde(default = "default_min_year")]
    pub min_year: u16,

    #[serde(default = "default_max_year")]
    pub max_year: u16,
}

fn default_true() -> bool {
    true
}

fn default_min_year() -> u16 {
    DEFAULT_MIN_YEAR
}

fn default_max_year() -> u16 {
    DEFAULT_MAX_YEAR
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            normalize_underscores: true,
            lenient_numerals: true,
            year_scan: YearScanMode::default(),
            min_year: default_min_year(),
            max_year: default_max_year(),
        }
    }
}

impl From<&ParserSettings> for ParserConfig {
    fn from(settings: &ParserSettings) -> Self {
        ParserConfig::builder()
            .normalize_underscores(settings.normalize_underscores)
            .lenient_numerals(settings.lenient_numerals)
            .year_scan(settings.year_scan)
            .year_range(settings.min_year..=settings.max_year)
            .build()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// How many directory levels below the root to visit (default: 1)
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Parse file names as well as directory names (default: false)
    #[serde(default)]
    pub include_files: bool,

    /// File extensions to keep when `include_files` is set, without the dot.
    /// Empty keeps every file.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Skip entries whose name starts with a dot (default: true)
    #[serde(default = "default_true")]
    pub skip_hidden: bool,
}

fn default_max_depth() -> usize {
    1
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            include_files: false,
            extensions: Vec::new(),
            skip_hidden: true,
        }
    }
}
