//! Lenient parsing of raw form field text
//!
//! Form fields arrive as typed strings. These helpers read the leading number
//! the way a browser number parse does and ignore whatever follows.

/// Leading integer of `text` (`"12 pages"` → 12), `None` when there is none
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate absurdly long inputs rather than failing
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * value)
}

/// Leading decimal number of `text` (`"2.5MB"` → 2.5), `None` when there is none
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    trimmed[..end].trim_end_matches('.').parse().ok()
}

/// Page count field value; anything without a positive leading integer means 1
pub fn page_count_from_field(text: &str) -> i64 {
    match parse_int_prefix(text) {
        Some(n) if n != 0 => n,
        _ => 1,
    }
}
