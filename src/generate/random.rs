//! Random building blocks for generated numbers.

use chrono::NaiveDate;
use rand::Rng;

use crate::core::{BirthDate, Sex};

const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `len` uniformly random ASCII digits.
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// `len` uniformly random uppercase ASCII letters.
pub fn random_letters<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    random_from(rng, UPPERCASE, len)
}

/// `len` characters drawn uniformly from `alphabet` (ASCII).
pub fn random_from<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], len: usize) -> String {
    (0..len)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}

/// A uniformly random calendar date with year in `start_year..=end_year`.
///
/// Month and day are drawn so that every day of the chosen month is
/// possible, including the 29th of February in leap years. Returns `None`
/// when the year range is empty or outside the calendar chrono supports.
pub fn random_birth_date<R: Rng + ?Sized>(
    rng: &mut R,
    start_year: i32,
    end_year: i32,
) -> Option<BirthDate> {
    if start_year > end_year {
        return None;
    }
    let year = rng.gen_range(start_year..=end_year);
    let month = rng.gen_range(1..=12);
    let day = rng.gen_range(1..=days_in_month(year, month));
    BirthDate::new(year, month, day)
}

/// Sequence digit whose parity encodes `sex`: odd for men, even for women,
/// any digit otherwise.
pub fn sex_digit<R: Rng + ?Sized>(rng: &mut R, sex: Option<Sex>) -> char {
    let digit = match sex {
        Some(Sex::Male) => rng.gen_range(0..5u8) * 2 + 1,
        Some(Sex::Female) => rng.gen_range(0..5u8) * 2,
        Some(Sex::Unknown) | None => rng.gen_range(0..10u8),
    };
    char::from(b'0' + digit)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(28)
}
