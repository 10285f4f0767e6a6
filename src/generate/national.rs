use rand::Rng;
use rand::seq::IteratorRandom;

use super::options::GenerationOptions;
use super::random::{random_digits, sex_digit};
use crate::core::{DocumentError, compute_check_digit, is_known_province_code, provinces};

/// 18-character resident identity card number, or the 15-digit legacy
/// form when `new_version` is `false`.
///
/// Layout: province (2) + area (4) + `YYYYMMDD` + sequence (2) + sex digit
/// + check character.
pub(super) fn national_id<R: Rng + ?Sized>(
    rng: &mut R,
    opts: &GenerationOptions,
) -> Result<String, DocumentError> {
    if opts.is_legacy() {
        return legacy_national_id(rng, opts);
    }
    let province = province_code(rng, opts)?;
    let birth = opts.birth_date(rng, (1950, 2005), 1800..=2099)?;

    let mut number = String::with_capacity(18);
    number.push_str(province);
    number.push_str(&random_digits(rng, 4));
    number.push_str(&birth.compact());
    number.push_str(&random_digits(rng, 2));
    number.push(sex_digit(rng, opts.gender));

    let check = compute_check_digit(&number).ok_or_else(|| {
        DocumentError::InvalidOption(format!("province code '{province}' is not numeric"))
    })?;
    number.push(check);
    Ok(number)
}

/// 15-digit resident identity card number issued before 1999: 2-digit
/// year, no check character. The sex digit is second to last, as on the
/// 18-character card.
fn legacy_national_id<R: Rng + ?Sized>(
    rng: &mut R,
    opts: &GenerationOptions,
) -> Result<String, DocumentError> {
    let province = province_code(rng, opts)?;
    let birth = opts.birth_date(rng, (1950, 1999), 1900..=1999)?;

    let mut number = String::with_capacity(15);
    number.push_str(province);
    number.push_str(&random_digits(rng, 4));
    number.push_str(&birth.compact()[2..]);
    number.push_str(&random_digits(rng, 1));
    number.push(sex_digit(rng, opts.gender));
    number.push_str(&random_digits(rng, 1));
    Ok(number)
}

/// The requested province, or a random mainland one.
///
/// Codes `7x`/`8x` are rejected: a number starting with `81`–`83` is a
/// residence permit, and `71` is never issued.
fn province_code<'a, R: Rng + ?Sized>(
    rng: &mut R,
    opts: &'a GenerationOptions,
) -> Result<&'a str, DocumentError> {
    match opts.province.as_deref().map(str::trim) {
        Some(code) => {
            if !is_known_province_code(code) {
                return Err(DocumentError::InvalidOption(format!(
                    "unknown province code '{code}'"
                )));
            }
            if provinces::mainland_province_codes().all(|c| c != code) {
                return Err(DocumentError::InvalidOption(format!(
                    "province code '{code}' is not issued on resident identity cards"
                )));
            }
            Ok(code)
        }
        None => provinces::mainland_province_codes()
            .choose(rng)
            .ok_or_else(|| DocumentError::InvalidOption("no province codes available".into())),
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::core::{DocumentType, Sex, classify, is_national_id_15, is_national_id_18, sex_of};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn default_national_id_is_valid() {
        let mut rng = rng();
        for _ in 0..200 {
            let id = national_id(&mut rng, &GenerationOptions::new()).unwrap();
            assert_eq!(id.len(), 18);
            assert!(is_national_id_18(&id), "{id}");
            assert_eq!(classify(&id), DocumentType::NationalId, "{id}");
        }
    }

    #[test]
    fn male_1990() {
        let opts = GenerationOptions::new().gender(Sex::Male).birth_years(1990, 1990);
        let mut rng = rng();
        for _ in 0..50 {
            let id = national_id(&mut rng, &opts).unwrap();
            assert_eq!(&id[6..10], "1990");
            let sex_digit = id.as_bytes()[16] - b'0';
            assert_eq!(sex_digit % 2, 1);
        }
    }

    #[test]
    fn requested_province_is_used() {
        let opts = GenerationOptions::new().province("44");
        let id = national_id(&mut rng(), &opts).unwrap();
        assert!(id.starts_with("44"));
    }

    #[test]
    fn reserved_and_unknown_provinces_rejected() {
        for code in ["81", "71", "99", "1", "abc"] {
            let opts = GenerationOptions::new().province(code);
            assert!(national_id(&mut rng(), &opts).is_err(), "{code}");
        }
    }

    #[test]
    fn legacy_national_id_is_valid() {
        let opts = GenerationOptions::new().new_version(false).gender(Sex::Female);
        let mut rng = rng();
        for _ in 0..200 {
            let id = national_id(&mut rng, &opts).unwrap();
            assert_eq!(id.len(), 15);
            assert!(is_national_id_15(&id), "{id}");
            assert_eq!((id.as_bytes()[13] - b'0') % 2, 0, "{id}");
            assert_eq!(sex_of(&id), Sex::Female, "{id}");
        }
    }

    #[test]
    fn legacy_rejects_post_1999_years() {
        let opts = GenerationOptions::new().new_version(false).birth_years(1990, 2005);
        assert!(national_id(&mut rng(), &opts).is_err());
    }
}
