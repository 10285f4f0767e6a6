use chrono::{Local, NaiveDate};

use super::classify::classify_normalized;
use super::error::ParseFailure;
use super::normalize::{all_digits, normalize};
use super::provinces::province_name;
use super::types::{BirthDate, DocumentType, ParsedIdentity, Sex};
use super::validators::{date_yymmdd, date_yyyymmdd};

/// Parse a document number, computing age against today's local date.
///
/// See [`parse_at`].
pub fn parse(input: &str) -> ParsedIdentity {
    parse_at(input, Local::now().date_naive())
}

/// Parse a document number, computing age as of `today`.
///
/// Any document that [`validate`](super::validate) accepts parses as
/// valid. Sex, birth date, age and province are only filled in for
/// resident identity cards.
///
/// ```
/// use chrono::NaiveDate;
/// use zhengjian::core::*;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let parsed = parse_at("110101199003071233", today);
/// assert!(parsed.valid);
/// assert_eq!(parsed.sex, Sex::Male);
/// assert_eq!(parsed.age, 34);
/// assert_eq!(parsed.province, "Beijing");
/// ```
pub fn parse_at(input: &str, today: NaiveDate) -> ParsedIdentity {
    let s = normalize(input);
    if s.is_empty() {
        return ParsedIdentity::invalid(ParseFailure::Empty);
    }

    let doc_type = classify_normalized(&s);
    if doc_type == DocumentType::Unknown || !doc_type.matches_normalized(&s) {
        tracing::debug!(?doc_type, "document number failed validation");
        return ParsedIdentity::invalid(ParseFailure::FormatInvalid);
    }

    let mut parsed = ParsedIdentity::valid(doc_type);
    if doc_type == DocumentType::NationalId {
        parsed.sex = sex_of(&s);
        parsed.birth_date = birth_date_of(&s);
        parsed.age = parsed.birth_date.map_or(0, |birth| birth.age_on(today));
        parsed.province = s.get(..2).map(province_name).unwrap_or_default().to_string();
    }
    tracing::debug!(?doc_type, "parsed document number");
    parsed
}

/// Sex from a 15- or 18-character resident identity card number.
///
/// The second-to-last character is odd for men and even for women. Other
/// lengths, or a non-digit in that position, give [`Sex::Unknown`].
pub fn sex_of(input: &str) -> Sex {
    let s = normalize(input);
    if !matches!(s.len(), 15 | 18) || !s.is_ascii() {
        return Sex::Unknown;
    }
    match s.as_bytes()[s.len() - 2] {
        b @ b'0'..=b'9' if (b - b'0') % 2 == 1 => Sex::Male,
        b'0'..=b'9' => Sex::Female,
        _ => Sex::Unknown,
    }
}

/// Birth date embedded in a 15- or 18-character resident identity card number.
///
/// Returns `None` for any other shape or an impossible date.
pub fn birth_date_of(input: &str) -> Option<BirthDate> {
    let s = normalize(input);
    match s.len() {
        18 if all_digits(s.get(..17)?) => date_yyyymmdd(&s[6..14]),
        15 if all_digits(&s) => date_yymmdd(&s[6..12]),
        _ => None,
    }
}

/// Age in whole years on `today` for a `YYYYMMDD` birthday string.
///
/// Returns 0 when `birthday` is not a real date.
pub fn age_on(birthday: &str, today: NaiveDate) -> u32 {
    date_yyyymmdd(birthday).map_or(0, |birth| birth.age_on(today))
}
