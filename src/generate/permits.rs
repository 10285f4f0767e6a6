use chrono::{Datelike, Local};
use rand::Rng;

use super::options::{GenerationOptions, TaiwanPermitFormat};
use super::random::{random_digits, random_from, random_letters};
use crate::core::{CheckScheme, DocumentError, compute_check_digit, legacy_foreign_check_digit};

/// Letters that may start a Taiwan permit without colliding with the
/// passport (`D E G K`) or HK/Macao permit (`H M`) prefixes.
const TAIWAN_PERMIT_LETTERS: &[u8] = b"ABCFIJLNOPQRSTUVWXYZ";

/// New foreign permanent resident ID card: `9` + 5 digits + `YYYYMMDD` +
/// 3 digits + check character.
pub(super) fn foreign_permit<R: Rng + ?Sized>(
    rng: &mut R,
    opts: &GenerationOptions,
) -> Result<String, DocumentError> {
    if opts.is_legacy() {
        return Err(DocumentError::InvalidOption(
            "legacy foreign permanent resident cards are generated as ForeignerOldPermit".into(),
        ));
    }
    let birth = opts.birth_date(rng, (1950, 2005), 1900..=2099)?;

    let mut number = String::with_capacity(18);
    number.push('9');
    number.push_str(&random_digits(rng, 5));
    number.push_str(&birth.compact());
    number.push_str(&random_digits(rng, 3));
    let check = CheckScheme::FOREIGN_PERMIT
        .compute(&number)
        .ok_or_else(|| DocumentError::InvalidOption("birth date out of range".into()))?;
    number.push(check);
    Ok(number)
}

/// Legacy foreign permanent resident ID card: country code (3 letters) + 4
/// digits + `YYMMDD` + 1 digit + check digit.
pub(super) fn foreigner_old_permit<R: Rng + ?Sized>(
    rng: &mut R,
    opts: &GenerationOptions,
) -> Result<String, DocumentError> {
    let country = match opts.country_code.as_deref().map(str::trim) {
        Some(code) if code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic()) => {
            code.to_ascii_uppercase()
        }
        Some(code) => {
            return Err(DocumentError::InvalidOption(format!(
                "country code '{code}' must be 3 ASCII letters"
            )));
        }
        None => random_letters(rng, 3),
    };
    let birth = opts.birth_date(rng, (1950, 1999), 1900..=1999)?;

    let mut number = String::with_capacity(15);
    number.push_str(&country);
    number.push_str(&random_digits(rng, 4));
    number.push_str(&birth.compact()[2..]);
    number.push_str(&random_digits(rng, 1));
    let check = legacy_foreign_check_digit(&number)
        .ok_or_else(|| DocumentError::InvalidOption(format!("country code '{country}'")))?;
    number.push(check);
    Ok(number)
}

/// HK (`H`) or Macao (`M`) travel permit: 8 or 10 digits, or, in the legacy
/// format, a letter and 6 or 7 digits.
pub(super) fn travel_permit<R: Rng + ?Sized>(
    rng: &mut R,
    prefix: char,
    opts: &GenerationOptions,
) -> String {
    let mut number = String::from(prefix);
    if opts.is_legacy() {
        number.push_str(&random_letters(rng, 1));
        let len = if rng.gen_bool(0.5) { 6 } else { 7 };
        number.push_str(&random_digits(rng, len));
    } else {
        let len = if rng.gen_bool(0.5) { 8 } else { 10 };
        number.push_str(&random_digits(rng, len));
    }
    number
}

/// Residence permit: region (`81`/`82`/`83`) + 4 digits + `YYYYMMDD` + 3
/// digits + check character.
pub(super) fn residence_permit<R: Rng + ?Sized>(
    rng: &mut R,
    opts: &GenerationOptions,
) -> Result<String, DocumentError> {
    let region = opts.region.unwrap_or_default();
    let birth = opts.birth_date(rng, (1950, 2005), 1900..=Local::now().year())?;

    let mut number = String::with_capacity(18);
    number.push_str(region.residence_permit_prefix());
    number.push_str(&random_digits(rng, 4));
    number.push_str(&birth.compact());
    number.push_str(&random_digits(rng, 3));
    let check = compute_check_digit(&number)
        .ok_or_else(|| DocumentError::InvalidOption("birth date out of range".into()))?;
    number.push(check);
    Ok(number)
}

/// Taiwan permit in the requested shape.
///
/// The 18-digit form starts with `1`–`7` and carries a century outside
/// `18`–`20` at positions 7 and 8, so it never has the shape of a resident
/// identity card number.
pub(super) fn taiwan_permit<R: Rng + ?Sized>(rng: &mut R, opts: &GenerationOptions) -> String {
    match opts.taiwan_format.unwrap_or_default() {
        TaiwanPermitFormat::EightDigit => random_digits(rng, 8),
        TaiwanPermitFormat::TenDigit => random_digits(rng, 10),
        TaiwanPermitFormat::Letter => {
            let len = rng.gen_range(7..=9);
            random_from(rng, TAIWAN_PERMIT_LETTERS, 1) + &random_digits(rng, len)
        }
        TaiwanPermitFormat::EighteenDigit => {
            let mut number = char::from(b'0' + rng.gen_range(1..=7u8)).to_string();
            number.push_str(&random_digits(rng, 5));
            let century = rng.gen_range(0..97u8);
            let century = if century >= 18 { century + 3 } else { century };
            number.push_str(&format!("{century:02}"));
            number.push_str(&random_digits(rng, 10));
            number
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::core::{
        DocumentType, classify, is_foreign_permit_15, is_foreign_permit_18, is_residence_permit,
        is_taiwan_permit,
    };
    use crate::generate::Region;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn foreign_permits_validate() {
        let mut rng = rng();
        for _ in 0..200 {
            let n = foreign_permit(&mut rng, &GenerationOptions::new()).unwrap();
            assert!(n.starts_with('9'));
            assert!(is_foreign_permit_18(&n), "{n}");
        }
    }

    #[test]
    fn foreign_permit_legacy_flag_rejected() {
        let opts = GenerationOptions::new().new_version(false);
        assert!(foreign_permit(&mut rng(), &opts).is_err());
    }

    #[test]
    fn old_foreign_permits_validate() {
        let mut rng = rng();
        for _ in 0..200 {
            let n = foreigner_old_permit(&mut rng, &GenerationOptions::new()).unwrap();
            assert_eq!(n.len(), 15);
            assert!(is_foreign_permit_15(&n), "{n}");
        }
    }

    #[test]
    fn old_foreign_permit_country_code() {
        let opts = GenerationOptions::new().country_code("usa");
        let n = foreigner_old_permit(&mut rng(), &opts).unwrap();
        assert!(n.starts_with("USA"));
        assert!(is_foreign_permit_15(&n), "{n}");

        let bad = GenerationOptions::new().country_code("US1");
        assert!(foreigner_old_permit(&mut rng(), &bad).is_err());
    }

    #[test]
    fn travel_permit_shapes() {
        let mut rng = rng();
        for _ in 0..100 {
            let new = travel_permit(&mut rng, 'H', &GenerationOptions::new());
            assert!(new.len() == 9 || new.len() == 11, "{new}");
            let old = travel_permit(&mut rng, 'M', &GenerationOptions::new().new_version(false));
            assert!(old.len() == 8 || old.len() == 9, "{old}");
            assert!(old.as_bytes()[1].is_ascii_uppercase());
        }
    }

    #[test]
    fn residence_permit_regions() {
        let mut rng = rng();
        for (region, prefix) in [(Region::HongKong, "81"), (Region::Macao, "82"), (Region::Taiwan, "83")] {
            let n = residence_permit(&mut rng, &GenerationOptions::new().region(region)).unwrap();
            assert!(n.starts_with(prefix));
            assert!(is_residence_permit(&n), "{n}");
        }
    }

    #[test]
    fn residence_permit_future_years_rejected() {
        let opts = GenerationOptions::new().birth_years(2000, 3000);
        assert!(residence_permit(&mut rng(), &opts).is_err());
    }

    #[test]
    fn eighteen_digit_taiwan_permit_is_never_a_national_id() {
        let opts = GenerationOptions::new().taiwan_format(TaiwanPermitFormat::EighteenDigit);
        let mut rng = rng();
        for _ in 0..500 {
            let n = taiwan_permit(&mut rng, &opts);
            assert!(is_taiwan_permit(&n));
            assert!(!(18..=20).contains(&n[6..8].parse::<u8>().unwrap()), "{n}");
            assert_eq!(classify(&n), DocumentType::TaiwanPermit, "{n}");
        }
    }

    #[test]
    fn letter_taiwan_permit_avoids_reserved_prefixes() {
        let opts = GenerationOptions::new().taiwan_format(TaiwanPermitFormat::Letter);
        let mut rng = rng();
        for _ in 0..500 {
            let n = taiwan_permit(&mut rng, &opts);
            assert!(!n.starts_with(['D', 'E', 'G', 'H', 'K', 'M']), "{n}");
            assert_eq!(classify(&n), DocumentType::TaiwanPermit, "{n}");
        }
    }
}
