//! Leading-integer scanning for directive and edge lines.
//!
//! Mirrors `%d` conversion: optional leading whitespace, an optional sign,
//! then at least one decimal digit. Whatever follows the digits is returned
//! untouched so callers can scan the next field or ignore trailing content.

/// Scans one integer from the start of `input`.
///
/// Returns the value and the unconsumed remainder, or `None` if no digits are
/// present or the value does not fit in an `i64`.
pub(crate) fn scan_int(input: &str) -> Option<(i64, &str)> {
    let s = input.trim_start();
    let bytes = s.as_bytes();

    let (negative, digits_start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let mut end = digits_start;
    let mut value: i64 = 0;
    while let Some(&b) = bytes.get(end) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    Some((if negative { -value } else { value }, &s[end..]))
}

/// Scans two integers from the start of `input`.
pub(crate) fn scan_pair(input: &str) -> Option<(i64, i64)> {
    let (a, rest) = scan_int(input)?;
    let (b, _) = scan_int(rest)?;
    Some((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_int_basic() {
        assert_eq!(scan_int("42"), Some((42, "")));
        assert_eq!(scan_int("  7 rest"), Some((7, " rest")));
        assert_eq!(scan_int("-3"), Some((-3, "")));
        assert_eq!(scan_int("+5x"), Some((5, "x")));
    }

    #[test]
    fn test_scan_int_rejects_non_numeric() {
        assert_eq!(scan_int(""), None);
        assert_eq!(scan_int("   "), None);
        assert_eq!(scan_int("foo"), None);
        assert_eq!(scan_int("-"), None);
        assert_eq!(scan_int("99999999999999999999"), None);
    }

    #[test]
    fn test_scan_pair() {
        assert_eq!(scan_pair("1 2\n"), Some((1, 2)));
        assert_eq!(scan_pair("\t3\t4 1.5\r\n"), Some((3, 4)));
        assert_eq!(scan_pair("1 2abc"), Some((1, 2)));
        assert_eq!(scan_pair("12"), None);
        assert_eq!(scan_pair("1,2"), None);
        assert_eq!(scan_pair("foo bar"), None);
        assert_eq!(scan_pair("*Arcs"), None);
    }
}
