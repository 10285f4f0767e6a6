//! Format validators, one per document family.
//!
//! Every public predicate normalizes its input (see [`normalize`]) and is
//! total: any `&str`, including multi-byte text, yields `true` or `false`.
//! Inner `fn`s take already-normalized input so the classifier can run
//! them in sequence without re-normalizing.

use chrono::{Datelike, Local};

use super::checksum::{CheckScheme, legacy_foreign_check_digit};
use super::classify::classify_normalized;
use super::normalize::{all_digits, all_letters, digits_value, normalize};
use super::types::{BirthDate, DocumentType};

/// Validate a document number against the type the classifier detects.
///
/// Returns `false` for empty or unrecognized input.
pub fn validate(input: &str) -> bool {
    let s = normalize(input);
    let detected = classify_normalized(&s);
    detected != DocumentType::Unknown && detected.matches_normalized(&s)
}

/// Validate a document number against any of `types` (logical OR).
///
/// An empty `types` slice never matches.
pub fn validate_as(input: &str, types: &[DocumentType]) -> bool {
    let s = normalize(input);
    types.iter().any(|t| t.matches_normalized(&s))
}

impl DocumentType {
    /// Whether `input` satisfies this type's format rules.
    ///
    /// [`DocumentType::ForeignResidentPermit`] accepts both the new
    /// 18-character and the legacy 15-character card;
    /// [`DocumentType::ForeignerOldPermit`] accepts only the legacy one.
    pub fn matches(&self, input: &str) -> bool {
        self.matches_normalized(&normalize(input))
    }

    pub(crate) fn matches_normalized(&self, s: &str) -> bool {
        match self {
            Self::NationalId => national_id_18(s) || national_id_15(s),
            Self::ForeignResidentPermit => foreign_permit_18(s) || foreign_permit_15(s),
            Self::HkTwResidencePermit => residence_permit(s),
            Self::HkPermit => travel_permit(s, b'H'),
            Self::MacaoPermit => travel_permit(s, b'M'),
            Self::ChineseOverseasPassport => chinese_passport(s),
            Self::TaiwanPermit => taiwan_permit(s),
            Self::ForeignerOldPermit => foreign_permit_15(s),
            Self::GenericPassport => generic_passport(s),
            Self::Unknown => false,
        }
    }
}

// --- Public predicates ---

/// 18-digit or legacy 15-digit resident identity card number.
pub fn is_national_id(input: &str) -> bool {
    DocumentType::NationalId.matches(input)
}

/// 18-character resident identity card number: valid birth date and check digit.
pub fn is_national_id_18(input: &str) -> bool {
    national_id_18(&normalize(input))
}

/// Legacy 15-digit resident identity card number: valid `19YYMMDD` birth date.
pub fn is_national_id_15(input: &str) -> bool {
    national_id_15(&normalize(input))
}

/// Foreign permanent resident ID card, either era.
pub fn is_foreign_permit(input: &str) -> bool {
    DocumentType::ForeignResidentPermit.matches(input)
}

/// New 18-character foreign permanent resident ID card (leading `9`).
pub fn is_foreign_permit_18(input: &str) -> bool {
    foreign_permit_18(&normalize(input))
}

/// Legacy 15-character foreign permanent resident ID card (3 letters + 12 digits).
pub fn is_foreign_permit_15(input: &str) -> bool {
    foreign_permit_15(&normalize(input))
}

/// Mainland travel permit for Hong Kong or Macao residents.
pub fn is_hk_macao_permit(input: &str) -> bool {
    let s = normalize(input);
    travel_permit(&s, b'H') || travel_permit(&s, b'M')
}

/// Mainland travel permit for Hong Kong residents.
pub fn is_hk_permit(input: &str) -> bool {
    travel_permit(&normalize(input), b'H')
}

/// Mainland travel permit for Macao residents.
pub fn is_macao_permit(input: &str) -> bool {
    travel_permit(&normalize(input), b'M')
}

/// Residence permit for Hong Kong, Macao and Taiwan residents.
pub fn is_residence_permit(input: &str) -> bool {
    residence_permit(&normalize(input))
}

/// Mainland travel permit for Taiwan residents.
pub fn is_taiwan_permit(input: &str) -> bool {
    taiwan_permit(&normalize(input))
}

/// Passport issued by the PRC, Hong Kong SAR or Macao SAR.
pub fn is_chinese_passport(input: &str) -> bool {
    chinese_passport(&normalize(input))
}

/// Broad passport shape check for any issuing country.
pub fn is_generic_passport(input: &str) -> bool {
    generic_passport(&normalize(input))
}

/// Loose check for a document outside the modeled set.
///
/// Accepts 1 to 20 characters drawn from ASCII letters, digits and ASCII
/// or full-width parentheses. The input is not normalized, so spaces,
/// quotes and slashes are rejected.
pub fn is_other_document(input: &str) -> bool {
    let count = input.chars().count();
    (1..=20).contains(&count)
        && input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '(' | ')' | '（' | '）'))
}

// --- Normalized-input predicates ---

/// Leading digit `1`–`9`, 16 digits and a check character, with a
/// `18`/`19`/`20` century and a real calendar date. The check character is
/// not verified.
pub(crate) fn national_id_18_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 18
        && (b'1'..=b'9').contains(&b[0])
        && check_char_shape(s)
        && matches!(&s[6..8], "18" | "19" | "20")
        && date_yyyymmdd(&s[6..14]).is_some()
}

pub(crate) fn national_id_18(s: &str) -> bool {
    national_id_18_shape(s)
        && CheckScheme::NATIONAL_ID.verify(&s[..17], char::from(s.as_bytes()[17]))
}

pub(crate) fn national_id_15(s: &str) -> bool {
    s.len() == 15 && all_digits(s) && date_yymmdd(&s[6..12]).is_some()
}

/// `9` followed by 16 digits and a check character. Shape only.
pub(crate) fn foreign_permit_18_shape(s: &str) -> bool {
    s.len() == 18 && s.starts_with('9') && check_char_shape(s)
}

pub(crate) fn foreign_permit_18(s: &str) -> bool {
    foreign_permit_18_shape(s)
        && date_yyyymmdd(&s[6..14]).is_some()
        && CheckScheme::FOREIGN_PERMIT.verify(&s[..17], char::from(s.as_bytes()[17]))
}

pub(crate) fn foreign_permit_15(s: &str) -> bool {
    if s.len() != 15 || !s.is_ascii() {
        return false;
    }
    let (letters, digits) = s.split_at(3);
    if !letters.bytes().all(|b| b.is_ascii_uppercase()) || !all_digits(digits) {
        return false;
    }
    date_yymmdd(&s[7..13]).is_some()
        && legacy_foreign_check_digit(&s[..14]) == Some(char::from(s.as_bytes()[14]))
}

/// `prefix` + 8 or 10 digits (current), or `prefix` + letter + 6–7 digits (pre-2013).
pub(crate) fn travel_permit(s: &str, prefix: u8) -> bool {
    if s.as_bytes().first() != Some(&prefix) || !s.is_ascii() {
        return false;
    }
    let rest = &s[1..];
    if all_digits(rest) {
        return rest.len() == 8 || rest.len() == 10;
    }
    let (head, tail) = rest.split_at(rest.len().min(1));
    all_letters(head) && all_digits(tail) && (6..=7).contains(&tail.len())
}

pub(crate) fn residence_permit(s: &str) -> bool {
    if s.len() != 18 || !matches!(s.get(..2), Some("81" | "82" | "83")) || !check_char_shape(s) {
        return false;
    }
    let year = digits_value(&s[6..10]) as i32;
    (1900..=Local::now().year()).contains(&year) && date_yyyymmdd(&s[6..14]).is_some()
}

pub(crate) fn taiwan_permit(s: &str) -> bool {
    if all_digits(s) {
        return matches!(s.len(), 8 | 10 | 18);
    }
    if !s.is_ascii() || s.is_empty() {
        return false;
    }
    let (head, tail) = s.split_at(1);
    all_letters(head) && all_digits(tail) && (7..=9).contains(&tail.len())
}

pub(crate) fn chinese_passport(s: &str) -> bool {
    if !s.is_ascii() || s.len() < 2 {
        return false;
    }
    type PassportRule = fn(&str) -> bool;
    let rules: &[(&str, PassportRule)] = &[
        // Ordinary, pre-2012
        ("G", |n| digits_len(n, 8)),
        // Ordinary e-passport
        ("E", |n| digits_len(n, 8)),
        ("E", |n| matches!(n.as_bytes()[0], b'A'..=b'F') && digits_len(&n[1..], 7)),
        // Service
        ("D", |n| digits_len(n, 8)),
        // Diplomatic
        ("DE", |n| digits_len(n, 7)),
        // Hong Kong SAR
        ("H", letter_or_digit_7),
        ("K", letter_or_digit_7),
        // Macao SAR
        ("MA", |n| digits_len(n, 7)),
    ];
    rules
        .iter()
        .any(|&(prefix, rule)| s.strip_prefix(prefix).is_some_and(|n| !n.is_empty() && rule(n)))
}

pub(crate) fn generic_passport(s: &str) -> bool {
    if !s.is_ascii() {
        return false;
    }
    let letters = s.bytes().take_while(u8::is_ascii_alphabetic).count();
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    let alnum = s.bytes().all(|b| b.is_ascii_alphanumeric());

    type GenericRule = fn(&str, usize, usize, bool) -> bool;
    let rules: &[GenericRule] = &[
        // 5-20 alphanumerics
        |s, _, _, alnum| alnum && (5..=20).contains(&s.len()),
        // 1-3 letters, then 5-9 digits
        |s, l, _, _| (1..=3).contains(&l) && (5..=9).contains(&(s.len() - l)) && all_digits(&s[l..]),
        // 5-9 digits, then 1-3 letters
        |s, _, d, _| (5..=9).contains(&d) && (1..=3).contains(&(s.len() - d)) && all_letters(&s[d..]),
        // letter, digits, letter
        |s, l, _, _| {
            l == 1 && s.len() >= 3 && s.as_bytes()[s.len() - 1].is_ascii_alphabetic()
                && all_digits(&s[1..s.len() - 1])
        },
        // 5-14 digits
        |s, _, d, _| d == s.len() && (5..=14).contains(&d),
    ];
    rules.iter().any(|rule| rule(s, letters, digits, alnum))
}

// --- Helpers ---

/// 16 ASCII digits after the first character, then a digit or `X`.
/// Only meaningful for 18-byte input.
fn check_char_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 18
        && b[..17].iter().all(u8::is_ascii_digit)
        && (b[17].is_ascii_digit() || b[17] == b'X')
}

fn digits_len(s: &str, n: usize) -> bool {
    s.len() == n && all_digits(s)
}

/// 7 digits, or a letter and 6 digits.
pub(crate) fn letter_or_digit_7(n: &str) -> bool {
    digits_len(n, 7) || (n.len() == 7 && n.as_bytes()[0].is_ascii_alphabetic() && all_digits(&n[1..]))
}

/// `YYYYMMDD` as a real calendar date.
pub(crate) fn date_yyyymmdd(s: &str) -> Option<BirthDate> {
    if s.len() != 8 || !all_digits(s) {
        return None;
    }
    BirthDate::new(
        digits_value(&s[..4]) as i32,
        digits_value(&s[4..6]),
        digits_value(&s[6..]),
    )
}

/// `YYMMDD` read as `19YYMMDD`.
pub(crate) fn date_yymmdd(s: &str) -> Option<BirthDate> {
    if s.len() != 6 || !all_digits(s) {
        return None;
    }
    BirthDate::new(
        1900 + digits_value(&s[..2]) as i32,
        digits_value(&s[2..4]),
        digits_value(&s[4..]),
    )
}
