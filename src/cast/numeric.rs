//! Loose numeric-string test
//!
//! Follows the permissive rules scripting runtimes use when coercing a string
//! to a number, so that `.env` values behave the way users expect:
//!
//! - surrounding whitespace (including line terminators and U+FEFF) is ignored
//! - an empty or whitespace-only string is the number `0`
//! - decimal literals take an optional sign, optional fraction and exponent
//!   (`"+1.5e3"`, `".5"`, `"5."`)
//! - `0x`, `0o` and `0b` prefixes are accepted without a sign (`"0x1F"`,
//!   but not `"-0x1F"`)
//! - `Infinity`, `+Infinity` and `-Infinity` are numeric
//! - anything else, including `"NaN"`, `"inf"`, `"1_000"` and `"1,5"`, is not

/// Parse `raw` as a loose numeric string, returning its value.
pub fn loose_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return Some(0.0);
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return Some(value);
    }

    let (sign, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (-1.0, &trimmed[1..]),
        b'+' => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };

    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }

    if !is_decimal_literal(unsigned) {
        return None;
    }
    unsigned.parse::<f64>().ok().map(|value| sign * value)
}

/// Whether `raw` passes the loose numeric test.
pub fn is_loose_numeric(raw: &str) -> bool {
    loose_number(raw).is_some()
}

fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    // Accumulate in f64 so long literals degrade in precision instead of overflowing
    s[2..]
        .chars()
        .try_fold(0.0_f64, |acc, c| c.to_digit(radix).map(|d| acc * radix as f64 + d as f64))
}

/// `digits [. digits] [e[+-]digits]` where at least one side of the dot has digits.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        mantissa_digits += i - frac_start;
    }

    if mantissa_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_integers_and_decimals() {
        assert_eq!(loose_number("42"), Some(42.0));
        assert_eq!(loose_number("-7"), Some(-7.0));
        assert_eq!(loose_number("+3.25"), Some(3.25));
        assert_eq!(loose_number("007"), Some(7.0));
    }

    #[test]
    fn test_empty_and_whitespace_are_zero() {
        assert_eq!(loose_number(""), Some(0.0));
        assert_eq!(loose_number("   "), Some(0.0));
        assert_eq!(loose_number("\t\n"), Some(0.0));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(loose_number(" 42 "), Some(42.0));
        assert_eq!(loose_number("\u{FEFF}1\r\n"), Some(1.0));
        assert_eq!(loose_number("4 2"), None);
    }

    #[test]
    fn test_fraction_and_exponent_forms() {
        assert_eq!(loose_number(".5"), Some(0.5));
        assert_eq!(loose_number("5."), Some(5.0));
        assert_eq!(loose_number("1e3"), Some(1000.0));
        assert_eq!(loose_number("2.5E-1"), Some(0.25));
        assert_eq!(loose_number("."), None);
        assert_eq!(loose_number("1e"), None);
        assert_eq!(loose_number("e5"), None);
        assert_eq!(loose_number("1.2.3"), None);
    }

    #[test]
    fn test_radix_prefixes() {
        assert_eq!(loose_number("0x1F"), Some(31.0));
        assert_eq!(loose_number("0XfF"), Some(255.0));
        assert_eq!(loose_number("0o17"), Some(15.0));
        assert_eq!(loose_number("0b101"), Some(5.0));
        assert_eq!(loose_number("-0x1"), None);
        assert_eq!(loose_number("0x"), None);
        assert_eq!(loose_number("0b102"), None);
    }

    #[test]
    fn test_infinity_spellings() {
        assert_eq!(loose_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(loose_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(loose_number("inf"), None);
        assert_eq!(loose_number("infinity"), None);
    }

    #[test]
    fn test_non_numbers() {
        for raw in ["NaN", "nan", "abc", "1_000", "1,5", "--1", "+", "-", "true", "12px"] {
            assert!(!is_loose_numeric(raw), "{raw:?} should not be numeric");
        }
    }
}
