//! Korean phone number formatting.
//!
//! Inquiry phone numbers arrive as free text. For spreadsheet exports they are
//! normalized into the hyphenated form used domestically (`010-1234-5678`,
//! `02-123-4567`, ...). Anything that does not look like a domestic number is
//! passed through untouched.

/// Seoul metropolitan area code. Numbers starting with it use a two-digit prefix.
const SEOUL_AREA_CODE: &str = "02";

/// Formats a phone number into its hyphenated domestic representation.
///
/// The function is total: input that does not match a known digit layout is
/// returned verbatim.
///
/// ```
/// use shared::phone::format_phone_number;
///
/// assert_eq!(format_phone_number("01012345678"), "010-1234-5678");
/// assert_eq!(format_phone_number("+1-555-0100"), "+1-555-0100");
/// ```
pub fn format_phone_number(input: &str) -> String {
    let mut digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    // A mobile number stored as an integer loses its leading zero. This has to
    // be repaired before the length checks below.
    if digits.len() == 10 && digits.starts_with('1') {
        digits.insert(0, '0');
    }

    match digits.len() {
        11 => format!("{}-{}-{}", &digits[..3], &digits[3..7], &digits[7..]),
        10 if digits.starts_with(SEOUL_AREA_CODE) => {
            format!("{}-{}-{}", &digits[..2], &digits[2..6], &digits[6..])
        }
        10 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        9 if digits.starts_with(SEOUL_AREA_CODE) => {
            format!("{}-{}-{}", &digits[..2], &digits[2..5], &digits[5..])
        }
        _ => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_number() {
        assert_eq!(format_phone_number("01012345678"), "010-1234-5678");
    }

    #[test]
    fn test_mobile_number_missing_leading_zero() {
        assert_eq!(format_phone_number("1012345678"), "010-1234-5678");
    }

    #[test]
    fn test_seoul_ten_digits() {
        assert_eq!(format_phone_number("0212345678"), "02-1234-5678");
    }

    #[test]
    fn test_seoul_nine_digits() {
        assert_eq!(format_phone_number("021234567"), "02-123-4567");
    }

    #[test]
    fn test_regional_ten_digits() {
        assert_eq!(format_phone_number("0311234567"), "031-123-4567");
    }

    #[test]
    fn test_international_number_unchanged() {
        assert_eq!(format_phone_number("+1-555-0100"), "+1-555-0100");
    }

    #[test]
    fn test_separators_are_stripped() {
        assert_eq!(format_phone_number("010 1234 5678"), "010-1234-5678");
        assert_eq!(format_phone_number("(02) 123-4567"), "02-123-4567");
        assert_eq!(format_phone_number("010.1234.5678"), "010-1234-5678");
    }

    #[test]
    fn test_already_formatted() {
        assert_eq!(format_phone_number("010-1234-5678"), "010-1234-5678");
        assert_eq!(format_phone_number("02-1234-5678"), "02-1234-5678");
    }

    #[test]
    fn test_nine_digits_not_seoul_unchanged() {
        assert_eq!(format_phone_number("031123456"), "031123456");
    }

    #[test]
    fn test_empty_and_garbage_unchanged() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("연락처 없음"), "연락처 없음");
        assert_eq!(format_phone_number("12345"), "12345");
    }

    #[test]
    fn test_too_many_digits_unchanged() {
        assert_eq!(format_phone_number("821012345678"), "821012345678");
    }

    #[test]
    fn test_formatting_is_idempotent_on_digits() {
        for suffix in ["00000000", "12345678", "98765432", "55501234"] {
            let raw = format!("010{}", suffix);
            let formatted = format_phone_number(&raw);
            let digits_only: String = formatted.chars().filter(char::is_ascii_digit).collect();
            assert_eq!(format_phone_number(&digits_only), formatted);
            assert_eq!(format_phone_number(&formatted), formatted);
        }
    }
}
