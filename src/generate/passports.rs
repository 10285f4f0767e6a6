use rand::Rng;

use super::options::{GenerationOptions, PassportKind};
use super::random::{random_digits, random_from, random_letters};

/// Passport issued by the PRC, Hong Kong SAR or Macao SAR.
///
/// Hong Kong SAR numbers always use the `K` prefix: an `H` prefix would be
/// read back as a HK travel permit.
pub(super) fn chinese_passport<R: Rng + ?Sized>(rng: &mut R, opts: &GenerationOptions) -> String {
    match opts.passport_kind.unwrap_or_default() {
        PassportKind::Ordinary => {
            let prefix = if rng.gen_bool(0.5) { "G" } else { "E" };
            format!("{prefix}{}", random_digits(rng, 8))
        }
        PassportKind::Electronic => {
            format!("E{}{}", random_from(rng, b"ABCDEF", 1), random_digits(rng, 7))
        }
        PassportKind::Official => format!("D{}", random_digits(rng, 8)),
        PassportKind::Diplomatic => format!("DE{}", random_digits(rng, 7)),
        PassportKind::HongKongSar => {
            if rng.gen_bool(0.5) {
                format!("K{}", random_digits(rng, 7))
            } else {
                format!("K{}{}", random_letters(rng, 1), random_digits(rng, 6))
            }
        }
        PassportKind::MacaoSar => format!("MA{}", random_digits(rng, 7)),
    }
}

/// 1 to 3 letters followed by 5 to 9 digits.
pub(super) fn generic_passport<R: Rng + ?Sized>(rng: &mut R) -> String {
    let letters = rng.gen_range(1..=3);
    let digits = rng.gen_range(5..=9);
    random_letters(rng, letters) + &random_digits(rng, digits)
}
