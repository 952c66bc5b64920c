//! Chinese numeral conversion.
//!
//! Season markers such as `第二季` or `第十二季` carry their number in the basic
//! Chinese vocabulary (一 through 十) or in ASCII digits. Values above nine are
//! composed around 十: `十二` is 10 + 2, `三十` is 3 × 10 and `三十二` is
//! 3 × 10 + 2.
//!
//! Two entry points exist. [`parse_numeral`] reports tokens it cannot read as
//! `None`. [`numeral_or_default`] keeps the historical behavior of reading
//! anything unrecognized as 1, so a result of 1 does not prove the token was
//! understood.

use phf::phf_map;

/// The character for ten.
pub const TEN: char = '十';

static DIGITS: phf::Map<char, u32> = phf_map! {
    '一' => 1,
    '二' => 2,
    '三' => 3,
    '四' => 4,
    '五' => 5,
    '六' => 6,
    '七' => 7,
    '八' => 8,
    '九' => 9,
};

/// Value of a single digit character, Chinese or ASCII.
fn digit_value(c: char) -> Option<u32> {
    DIGITS.get(&c).copied().or_else(|| c.to_digit(10))
}

/// Value of a part that must be exactly one digit character.
fn single_digit(part: &str) -> Option<u32> {
    let mut chars = part.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => digit_value(c),
        _ => None,
    }
}

/// Converts a numeral token to its value, or `None` if it cannot be read.
///
/// # Examples
/// ```
/// use mediatitle_parser::numeral::parse_numeral;
///
/// assert_eq!(parse_numeral("12"), Some(12));
/// assert_eq!(parse_numeral("十"), Some(10));
/// assert_eq!(parse_numeral("十二"), Some(12));
/// assert_eq!(parse_numeral("三十"), Some(30));
/// assert_eq!(parse_numeral("三十二"), Some(32));
/// assert_eq!(parse_numeral("七"), Some(7));
/// assert_eq!(parse_numeral("百"), None);
/// ```
pub fn parse_numeral(token: &str) -> Option<u32> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(value) = token.parse::<u32>() {
            return Some(value);
        }
    }

    let chars: Vec<char> = token.chars().collect();
    match chars.as_slice() {
        [TEN] => return Some(10),
        [TEN, unit] => {
            if let Some(unit) = digit_value(*unit) {
                return Some(10 + unit);
            }
        }
        [tens, TEN] => {
            if let Some(tens) = digit_value(*tens) {
                return Some(tens * 10);
            }
        }
        _ => {}
    }

    if let Some((tens, units)) = token.split_once(TEN) {
        if !tens.is_empty() && !units.is_empty() {
            if let (Some(tens), Some(units)) = (single_digit(tens), single_digit(units)) {
                return Some(tens * 10 + units);
            }
        }
    }

    let looked_up = match chars.as_slice() {
        [single] => DIGITS.get(single).copied(),
        _ => None,
    };
    looked_up.or_else(|| token.parse::<u32>().ok())
}

/// Converts a numeral token to its value, reading anything unrecognized as 1.
///
/// # Examples
/// ```
/// use mediatitle_parser::numeral::numeral_or_default;
///
/// assert_eq!(numeral_or_default("五"), 5);
/// assert_eq!(numeral_or_default("二十"), 20);
/// assert_eq!(numeral_or_default("一二"), 1);
/// ```
pub fn numeral_or_default(token: &str) -> u32 {
    parse_numeral(token).unwrap_or(1)
}
