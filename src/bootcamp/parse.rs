//! Coordinate extraction from free-form responses.
//!
//! A move is written `(row,col)` with non-negative decimal integers and
//! optional whitespace after the comma, e.g. `(7,7)` or `(3, 12)`. The
//! first such occurrence anywhere in the text wins.
//!
//! Digits are any Unicode decimal digit (general category `Nd`), so
//! full-width `(７,８)` and Arabic-Indic `(٣,٤)` replies are moves too.
//! Digits from different scripts may be mixed within one number.

use thiserror::Error;

/// No `(row,col)` pair found in the response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no (row,col) coordinate pair found in response")]
pub struct ParseError;

/// Extract the first `(row,col)` pair from `text`.
///
/// Values too large for `i64` saturate to `i64::MAX`, which is never on the
/// board, so such moves are scored as out of bounds rather than unparsable.
pub fn parse_move(text: &str) -> Result<(i64, i64), ParseError> {
    text.match_indices('(')
        .find_map(|(start, _)| parse_pair(&text[start + 1..]))
        .ok_or(ParseError)
}

/// Parse `digits , ws* digits )` at the start of `rest`.
fn parse_pair(rest: &str) -> Option<(i64, i64)> {
    let (row, rest) = take_number(rest)?;
    let rest = rest.strip_prefix(',')?.trim_start();
    let (col, rest) = take_number(rest)?;
    rest.starts_with(')').then_some((row, col))
}

fn take_number(s: &str) -> Option<(i64, &str)> {
    let mut value: Option<i64> = Some(0);
    let mut end = 0;
    for (i, c) in s.char_indices() {
        let Some(digit) = decimal_value(c) else { break };
        value = value
            .and_then(|v| v.checked_mul(10))
            .and_then(|v| v.checked_add(i64::from(digit)));
        end = i + c.len_utf8();
    }
    if end == 0 {
        return None;
    }
    Some((value.unwrap_or(i64::MAX), &s[end..]))
}

/// First code point of every ten-digit run in Unicode category `Nd`.
const DECIMAL_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6,
    0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0,
    0x1810, 0x1946, 0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620,
    0xA8D0, 0xA900, 0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0,
    0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8,
    0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of a decimal digit in any script.
fn decimal_value(c: char) -> Option<u32> {
    if let Some(digit) = c.to_digit(10) {
        return Some(digit);
    }
    let cp = u32::from(c);
    DECIMAL_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&cp))
        .map(|&zero| cp - zero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pair() {
        assert_eq!(parse_move("(7,7)"), Ok((7, 7)));
        assert_eq!(parse_move("(0, 14)"), Ok((0, 14)));
        assert_eq!(parse_move("(3,\t 12)"), Ok((3, 12)));
    }

    #[test]
    fn test_pair_in_prose() {
        let text = "I will block the open three. My move is (6, 8). Good luck!";
        assert_eq!(parse_move(text), Ok((6, 8)));
    }

    #[test]
    fn test_first_valid_pair_wins() {
        assert_eq!(parse_move("(a,b) then (1,2) or (3,4)"), Ok((1, 2)));
        assert_eq!(parse_move("((5,6))"), Ok((5, 6)));
    }

    #[test]
    fn test_rejects_malformed() {
        assert_eq!(parse_move("7,7"), Err(ParseError));
        assert_eq!(parse_move("(7 ,7)"), Err(ParseError));
        assert_eq!(parse_move("(7,7"), Err(ParseError));
        assert_eq!(parse_move("(-1,3)"), Err(ParseError));
        assert_eq!(parse_move("(1.5,3)"), Err(ParseError));
        assert_eq!(parse_move(""), Err(ParseError));
    }

    #[test]
    fn test_huge_numbers_saturate() {
        assert_eq!(
            parse_move("(99999999999999999999999,2)"),
            Ok((i64::MAX, 2))
        );
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(parse_move("落子坐标：(7,8)。"), Ok((7, 8)));
    }

    #[test]
    fn test_unicode_decimal_digits() {
        assert_eq!(parse_move("(７,８)"), Ok((7, 8)));
        assert_eq!(parse_move("(１２,３)"), Ok((12, 3)));
        assert_eq!(parse_move("(٣,4)"), Ok((3, 4)));
        // Ideographic space after the comma.
        assert_eq!(parse_move("(٣,\u{3000}4)"), Ok((3, 4)));
        assert_eq!(parse_move("(१०,۵)"), Ok((10, 5)));
    }

    #[test]
    fn test_other_numerals_are_not_digits() {
        assert_eq!(parse_move("(²,3)"), Err(ParseError));
        assert_eq!(parse_move("(Ⅶ,3)"), Err(ParseError));
        assert_eq!(parse_move("(七,八)"), Err(ParseError));
        assert_eq!(parse_move("(① ,3)"), Err(ParseError));
    }

    #[test]
    fn test_decimal_value() {
        assert_eq!(decimal_value('0'), Some(0));
        assert_eq!(decimal_value('９'), Some(9));
        assert_eq!(decimal_value('\u{0669}'), Some(9));
        assert_eq!(decimal_value('\u{096F}'), Some(9));
        assert_eq!(decimal_value('\u{1D7FF}'), Some(9));
        assert_eq!(decimal_value('\u{19DA}'), None);
        assert_eq!(decimal_value('a'), None);
    }
}
