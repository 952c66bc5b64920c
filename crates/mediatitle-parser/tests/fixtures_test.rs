//! Fixture tests for mediatitle-parser.
//!
//! Each case in `tests/fixtures/titles.json` lists an input title and the
//! fields expected after parsing with the default configuration.

use mediatitle_parser::config::{ParserConfig, YearScanMode};
use mediatitle_parser::{parse, Parser, SeasonForm, YearForm};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A single test case from a fixture file.
#[derive(Debug, Deserialize)]
struct TestCase {
    input: String,
    expected: Expected,
}

/// Expected values for a test case.
#[derive(Debug, Deserialize)]
struct Expected {
    clean_title: String,
    season: Option<u32>,
    year: Option<u16>,
    #[serde(default)]
    season_form: Option<String>,
    #[serde(default)]
    year_form: Option<String>,
}

fn load_fixtures(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
}

#[test]
fn all_title_fixtures() {
    let cases = load_fixtures("titles.json");
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        let result = parse(&case.input);
        let expected = &case.expected;

        if result.clean_title() != expected.clean_title {
            failures.push(format!(
                "{:?}: clean_title {:?} != {:?}",
                case.input,
                result.clean_title(),
                expected.clean_title
            ));
        }
        if result.season_number() != expected.season {
            failures.push(format!(
                "{:?}: season {:?} != {:?}",
                case.input,
                result.season_number(),
                expected.season
            ));
        }
        if result.year() != expected.year {
            failures.push(format!(
                "{:?}: year {:?} != {:?}",
                case.input,
                result.year(),
                expected.year
            ));
        }
        if let Some(form) = &expected.season_form {
            let form: SeasonForm = form.parse().expect("valid season form in fixture");
            if result.season_token().map(|t| t.form) != Some(form) {
                failures.push(format!("{:?}: season form != {}", case.input, form));
            }
        }
        if let Some(form) = &expected.year_form {
            let form: YearForm = form.parse().expect("valid year form in fixture");
            if result.year_token().map(|t| t.form) != Some(form) {
                failures.push(format!("{:?}: year form != {}", case.input, form));
            }
        }
        assert_eq!(result.original_title(), case.input);
    }

    assert!(
        failures.is_empty(),
        "{} fixture mismatches:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn accepted_years_stay_in_range() {
    let inputs = [
        "Movie 1899",
        "Movie 1900",
        "Movie [2100]",
        "Movie (2101)",
        "Movie 0000",
        "Movie 9999",
        "Movie 1955 2200",
    ];
    let first_valid = Parser::new(
        ParserConfig::builder()
            .year_scan(YearScanMode::FirstValid)
            .build(),
    );

    for input in inputs {
        for result in [parse(input), first_valid.parse(input)] {
            if let Some(year) = result.year() {
                assert!((1900..=2100).contains(&year), "{}: {}", input, year);
            }
        }
    }
}

#[test]
fn first_valid_mode_reaches_later_years() {
    let parser = Parser::new(
        ParserConfig::builder()
            .year_scan(YearScanMode::FirstValid)
            .build(),
    );

    let result = parser.parse("Movie 1080p 2021");
    assert_eq!(result.year(), Some(2021));
    assert_eq!(result.clean_title(), "Movie 1080p");
}

#[test]
fn strict_numerals_leave_unreadable_markers() {
    let parser = Parser::new(ParserConfig::builder().lenient_numerals(false).build());

    let result = parser.parse("剧集 第一二季");
    assert_eq!(result.season_number(), None);
    assert_eq!(result.clean_title(), "剧集 第一二季");

    let lenient = parse("剧集 第一二季");
    assert_eq!(lenient.season_number(), Some(1));
    assert_eq!(lenient.clean_title(), "剧集");
}
