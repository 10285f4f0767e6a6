//! Document type detection.
//!
//! Several families share shapes: an 18-digit string can be a resident
//! identity card, a new foreign permanent resident card, a residence
//! permit or a Taiwan permit; `H` + 7 digits fits both the SAR passport and
//! the Taiwan permit letter form. Resident identity cards are claimed by
//! shape and birth date, so a wrong check character still classifies as
//! [`DocumentType::NationalId`] and then fails validation. [`CLASSIFICATION_RULES`] fixes the order
//! in which families are tried. The first match wins, so moving a rule
//! changes results for every input that more than one rule accepts.

use super::normalize::normalize;
use super::types::DocumentType;
use super::validators::{
    chinese_passport, foreign_permit_15, foreign_permit_18_shape, letter_or_digit_7,
    national_id_15, national_id_18_shape, residence_permit, taiwan_permit, travel_permit,
};

type Rule = fn(&str) -> bool;

/// Ordered classification rules. A rule mapping to
/// [`DocumentType::Unknown`] stops the cascade without a match.
static CLASSIFICATION_RULES: &[(DocumentType, Rule)] = &[
    // Claims every `9` + 17 shape, so such numbers never reach the national ID rule.
    (DocumentType::ForeignResidentPermit, foreign_permit_18_shape),
    (DocumentType::ForeignerOldPermit, foreign_permit_15),
    // Before national ID: `81`/`82`/`83` + 16 is also a national ID shape.
    (DocumentType::HkTwResidencePermit, residence_permit),
    (DocumentType::HkPermit, |s| travel_permit(s, b'H')),
    (DocumentType::MacaoPermit, |s| travel_permit(s, b'M')),
    // `H` + 7 is a HK SAR passport and a Taiwan permit letter form at once.
    (DocumentType::Unknown, |s| s.strip_prefix('H').is_some_and(letter_or_digit_7)),
    // Before the Taiwan permit, whose letter form overlaps `G`/`E`/`D`/`K` passports.
    (DocumentType::ChineseOverseasPassport, chinese_passport),
    // Shape only; the check character is left to validation.
    (DocumentType::NationalId, national_id_18_shape),
    (DocumentType::NationalId, national_id_15),
    // Most permissive rule, so it goes last.
    (DocumentType::TaiwanPermit, taiwan_permit),
];

/// Detect the document type of `input`.
///
/// Returns [`DocumentType::Unknown`] for empty or unrecognized input.
/// [`DocumentType::GenericPassport`] is never returned: its shape accepts
/// nearly any short alphanumeric string. Use
/// [`validate_as`](super::validate_as) to test for it explicitly.
pub fn classify(input: &str) -> DocumentType {
    let detected = classify_normalized(&normalize(input));
    tracing::trace!(?detected, "classified document number");
    detected
}

pub(crate) fn classify_normalized(s: &str) -> DocumentType {
    if s.is_empty() {
        return DocumentType::Unknown;
    }
    CLASSIFICATION_RULES
        .iter()
        .find(|(_, rule)| rule(s))
        .map_or(DocumentType::Unknown, |&(doc_type, _)| doc_type)
}

/// The order in which [`classify`] tries document types.
pub fn classification_order() -> impl Iterator<Item = DocumentType> {
    CLASSIFICATION_RULES.iter().map(|&(doc_type, _)| doc_type)
}
