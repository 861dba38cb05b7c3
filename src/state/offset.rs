// Lossy transform-string parse shared by the view binding.

/// Extracts the first signed integer from an inline transform value, e.g.
/// `"translateX(-120px)"` -> `Some(-120)`.
///
/// Every character that is not an ASCII digit or `-` is discarded, then the
/// leading `-?[0-9]+` prefix of the remainder is parsed. Returns `None` when
/// no digits survive; callers substitute 0 ("no offset written yet"). The
/// parse does not validate that the string encodes a horizontal translation;
/// the caller reads back a value it wrote itself.
pub fn parse_offset(value: &str) -> Option<i32> {
    let filtered: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect();
    let (negative, digits) = match filtered.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, filtered.as_str()),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i32 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
