/// Normalize a raw document number.
///
/// Removes every whitespace character (not just leading and trailing) and
/// upper-cases ASCII letters, so `" h 1234 5678 "` becomes `"H12345678"`.
/// Applying it twice gives the same result as applying it once.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

pub(crate) fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn all_letters(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Numeric value of an ASCII digit string. Callers check `all_digits` first.
pub(crate) fn digits_value(s: &str) -> u32 {
    s.bytes()
        .fold(0u32, |acc, b| acc.saturating_mul(10).saturating_add(u32::from(b - b'0')))
}
