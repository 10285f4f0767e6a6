//! Edge cases: overlapping shapes, calendar boundaries, hostile input.

#![cfg(feature = "core")]

use zhengjian::core::*;

// ---------------------------------------------------------------------------
// Overlapping shapes
// ---------------------------------------------------------------------------

#[test]
fn eighteen_digit_families() {
    assert_eq!(classify("110101199003071233"), DocumentType::NationalId);
    assert_eq!(classify("911010199003071234"), DocumentType::ForeignResidentPermit);
    assert_eq!(classify("811010199003071234"), DocumentType::HkTwResidencePermit);
    // No resident card birth date, so only the Taiwan permit fits
    assert_eq!(classify("123456789012345678"), DocumentType::TaiwanPermit);
}

#[test]
fn national_id_with_bad_check_digit_is_rejected() {
    for id in ["110101199003074515", "110101199003071234"] {
        assert_eq!(classify(id), DocumentType::NationalId, "{id}");
        assert!(!validate(id), "{id}");
        assert!(!validate_as(id, &[DocumentType::NationalId]), "{id}");
        let p = parse(id);
        assert!(!p.valid, "{id}");
        assert_eq!(p.error, Some(ParseFailure::FormatInvalid), "{id}");
    }
}

#[test]
fn foreign_shape_with_bad_check_digit_is_not_a_national_id() {
    let n = "911010199003071235";
    assert_eq!(classify(n), DocumentType::ForeignResidentPermit);
    assert!(!validate(n));
    assert!(!is_national_id(n));
}

#[test]
fn residence_permit_with_future_birth_year() {
    assert!(!is_residence_permit("811010299903071234"));
}

#[test]
fn legacy_foreign_vs_generic_passport() {
    assert_eq!(classify("ABC123485010108"), DocumentType::ForeignerOldPermit);
    // Bad check digit: no family claims it
    assert_eq!(classify("ABC123485010109"), DocumentType::Unknown);
    assert!(validate_as("ABC123485010109", &[DocumentType::GenericPassport]));
}

#[test]
fn macao_passport_shape_is_a_macao_permit() {
    assert_eq!(classify("MA1234567"), DocumentType::MacaoPermit);
    assert!(is_chinese_passport("MA1234567"));
}

#[test]
fn sar_passport_with_h_prefix_is_unknown() {
    assert_eq!(classify("H1234567"), DocumentType::Unknown);
    assert!(is_chinese_passport("H1234567"));
    assert!(!validate("H1234567"));
}

#[test]
fn h_and_m_numbers_outside_permit_and_passport_shapes() {
    for n in ["M1234567", "H123456789"] {
        assert_eq!(classify(n), DocumentType::TaiwanPermit, "{n}");
        assert!(validate(n), "{n}");
    }
}

#[test]
fn diplomatic_and_service_passports() {
    assert_eq!(classify("DE1234567"), DocumentType::ChineseOverseasPassport);
    assert_eq!(classify("D12345678"), DocumentType::ChineseOverseasPassport);
    assert_eq!(classify("EF1234567"), DocumentType::ChineseOverseasPassport);
    // EG is outside the e-passport series
    assert_eq!(classify("EG1234567"), DocumentType::Unknown);
}

#[test]
fn fifteen_digit_national_id_vs_taiwan_permit() {
    assert_eq!(classify("110101900307123"), DocumentType::NationalId);
    assert_eq!(sex_of("110101900307123"), Sex::Female);
    assert_eq!(sex_of("110101900307131"), Sex::Male);
    // Month 13: not a legacy ID, and 15 digits is no Taiwan permit length
    assert_eq!(classify("110101901307123"), DocumentType::Unknown);
}

// ---------------------------------------------------------------------------
// Calendar boundaries
// ---------------------------------------------------------------------------

#[test]
fn leap_days() {
    assert!(is_national_id("110101200002290018"));
    assert!(!is_national_id("110101190002290011"));
    assert!(!is_foreign_permit("PAK555599022902"));
}

#[test]
fn impossible_dates_with_valid_check_digits() {
    for id in ["110101199013071237", "110101199003321239", "110101199002301236"] {
        assert!(!is_national_id(id), "{id}");
        assert!(!validate_as(id, &[DocumentType::NationalId]), "{id}");
    }
}

#[test]
fn birth_date_of_rejects_impossible_dates() {
    assert_eq!(birth_date_of("110101199002301236"), None);
    assert_eq!(birth_date_of("110101200002290018"), BirthDate::new(2000, 2, 29));
}

// ---------------------------------------------------------------------------
// Hostile input
// ---------------------------------------------------------------------------

#[test]
fn non_ascii_input() {
    for s in [
        "１１０１０１１９９００３０７１２３３",
        "Ｈ12345678",
        "H1234567８",
        "ÄBC123485010108",
        "身份证",
        "\u{0}\u{0}\u{0}",
    ] {
        assert!(!validate(s), "{s:?}");
        assert_eq!(classify(s), DocumentType::Unknown, "{s:?}");
        assert!(!parse(s).valid, "{s:?}");
    }
}

#[test]
fn unicode_whitespace_is_stripped() {
    assert!(validate("\u{3000}H12345678\u{00a0}"));
}

#[test]
fn very_long_input() {
    let s = "1".repeat(10_000);
    assert!(!validate(&s));
    assert_eq!(classify(&s), DocumentType::Unknown);
    assert!(!is_other_document(&s));
}

#[test]
fn empty_type_list() {
    assert!(!validate_as("110101199003071233", &[]));
}
