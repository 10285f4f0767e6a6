//! Weighted-sum check digits.
//!
//! The 18-character resident identity card and the new foreign permanent
//! resident ID card both end in an ISO 7064 MOD 11-2 check character
//! computed over the first 17 digits. The legacy 15-character foreign
//! permit uses a separate MOD 10 scheme in which its three letters count
//! as the numbers 10 to 35.

use super::normalize::all_digits;

/// A MOD 11 check-digit scheme: 17 weights and an 11-entry code table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckScheme {
    /// Weight applied to each of the 17 leading digits.
    pub weights: [u32; 17],
    /// Check character for each possible `sum % 11`.
    pub codes: [char; 11],
}

impl CheckScheme {
    /// Resident identity card (GB 11643).
    pub const NATIONAL_ID: Self = Self {
        weights: [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2],
        codes: ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'],
    };

    /// Foreign permanent resident ID card, 2023 edition.
    ///
    /// Published with the same constants as [`Self::NATIONAL_ID`]; kept as
    /// a separate value so the two schemes can diverge independently.
    pub const FOREIGN_PERMIT: Self = Self {
        weights: [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2],
        codes: ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'],
    };

    /// Compute the check character for exactly 17 ASCII digits.
    ///
    /// Returns `None` for any other input.
    pub fn compute(&self, digits17: &str) -> Option<char> {
        if digits17.len() != 17 || !all_digits(digits17) {
            return None;
        }
        let sum: u32 = digits17
            .bytes()
            .zip(self.weights)
            .map(|(b, w)| u32::from(b - b'0') * w)
            .sum();
        Some(self.codes[(sum % 11) as usize])
    }

    /// Check `provided` against the computed check character. `x` and `X`
    /// are equivalent.
    pub fn verify(&self, digits17: &str, provided: char) -> bool {
        self.compute(digits17)
            .is_some_and(|expected| expected == provided.to_ascii_uppercase())
    }
}

/// Check character of an 18-character resident identity card number.
pub fn compute_check_digit(digits17: &str) -> Option<char> {
    CheckScheme::NATIONAL_ID.compute(digits17)
}

/// Verify the check character of an 18-character resident identity card number.
pub fn verify_check_digit(digits17: &str, provided: char) -> bool {
    CheckScheme::NATIONAL_ID.verify(digits17, provided)
}

const LEGACY_FOREIGN_WEIGHTS: [u32; 3] = [7, 3, 1];

/// Check digit of a legacy 15-character foreign permanent resident ID.
///
/// `first14` is three uppercase ASCII letters followed by 11 digits.
/// Letters count as `A = 10` through `Z = 35`; weights cycle `7, 3, 1`;
/// the check digit is the weighted sum modulo 10.
pub fn legacy_foreign_check_digit(first14: &str) -> Option<char> {
    if first14.len() != 14 || !first14.is_ascii() {
        return None;
    }
    let (letters, digits) = first14.split_at(3);
    if !letters.bytes().all(|b| b.is_ascii_uppercase()) || !all_digits(digits) {
        return None;
    }
    let sum: u32 = first14
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let value = if b.is_ascii_uppercase() {
                u32::from(b - b'A') + 10
            } else {
                u32::from(b - b'0')
            };
            LEGACY_FOREIGN_WEIGHTS[i % 3] * value
        })
        .sum();
    char::from_digit(sum % 10, 10)
}
