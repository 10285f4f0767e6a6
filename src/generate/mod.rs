//! Random, format-valid document numbers for test data.
//!
//! Every generated number validates as the requested type. Apart from the
//! cases below it also classifies back to that type:
//!
//! - [`DocumentType::GenericPassport`] is never auto-detected; check it with
//!   [`validate_as`](crate::core::validate_as).
//! - Macao SAR passports (`MA` + 7 digits) share their shape with the
//!   pre-2013 Macao travel permit and classify as [`DocumentType::MacaoPermit`].
//! - A legacy [`DocumentType::ForeignResidentPermit`] is requested as
//!   [`DocumentType::ForeignerOldPermit`].
//!
//! # Example
//!
//! ```
//! use zhengjian::core::*;
//! use zhengjian::generate::{GenerationOptions, generate};
//!
//! let opts = GenerationOptions::new().gender(Sex::Male).birth_years(1990, 1990);
//! let id = generate(DocumentType::NationalId, &opts).unwrap();
//! assert!(is_national_id(&id));
//! assert_eq!(sex_of(&id), Sex::Male);
//! assert_eq!(birth_date_of(&id).unwrap().year(), 1990);
//! ```

mod national;
mod options;
mod passports;
mod permits;
pub mod random;

use rand::Rng;

use crate::core::{DocumentError, DocumentType};

pub use options::{GenerationOptions, PassportKind, Region, TaiwanPermitFormat};

/// Generate a number of type `doc_type` using the thread-local RNG.
///
/// # Errors
///
/// [`DocumentError::UnsupportedType`] for [`DocumentType::Unknown`], and
/// [`DocumentError::InvalidOption`] when `opts` cannot be satisfied (for
/// example a birth-year range the format cannot encode).
pub fn generate(doc_type: DocumentType, opts: &GenerationOptions) -> Result<String, DocumentError> {
    generate_with(&mut rand::thread_rng(), doc_type, opts)
}

/// Generate a number of type `doc_type` from the given RNG.
///
/// Seeding the RNG makes the output reproducible.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    doc_type: DocumentType,
    opts: &GenerationOptions,
) -> Result<String, DocumentError> {
    let number = match doc_type {
        DocumentType::NationalId => national::national_id(rng, opts)?,
        DocumentType::ForeignResidentPermit => permits::foreign_permit(rng, opts)?,
        DocumentType::ForeignerOldPermit => permits::foreigner_old_permit(rng, opts)?,
        DocumentType::HkTwResidencePermit => permits::residence_permit(rng, opts)?,
        DocumentType::HkPermit => permits::travel_permit(rng, 'H', opts),
        DocumentType::MacaoPermit => permits::travel_permit(rng, 'M', opts),
        DocumentType::TaiwanPermit => permits::taiwan_permit(rng, opts),
        DocumentType::ChineseOverseasPassport => passports::chinese_passport(rng, opts),
        DocumentType::GenericPassport => passports::generic_passport(rng),
        DocumentType::Unknown => return Err(DocumentError::UnsupportedType(doc_type)),
    };
    tracing::debug!(?doc_type, len = number.len(), "generated document number");
    Ok(number)
}

/// Generate `count` numbers of the same type.
///
/// Stops at the first error.
pub fn generate_batch<R: Rng + ?Sized>(
    rng: &mut R,
    doc_type: DocumentType,
    opts: &GenerationOptions,
    count: usize,
) -> Result<Vec<String>, DocumentError> {
    (0..count).map(|_| generate_with(&mut *rng, doc_type, opts)).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::core::{classify, validate, validate_as};

    #[test]
    fn unknown_is_unsupported() {
        let err = generate(DocumentType::Unknown, &GenerationOptions::new()).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedType(DocumentType::Unknown)));
    }

    #[test]
    fn defaults_round_trip() {
        let mut rng = StdRng::seed_from_u64(1);
        for doc_type in DocumentType::ALL {
            let n = generate_with(&mut rng, doc_type, &GenerationOptions::new()).unwrap();
            assert!(validate_as(&n, &[doc_type]), "{doc_type:?}: {n}");
            if doc_type != DocumentType::GenericPassport {
                assert!(validate(&n), "{doc_type:?}: {n}");
                assert_eq!(classify(&n), doc_type, "{n}");
            }
        }
    }

    #[test]
    fn seeded_output_is_reproducible() {
        let opts = GenerationOptions::new();
        let a = generate_with(&mut StdRng::seed_from_u64(3), DocumentType::NationalId, &opts).unwrap();
        let b = generate_with(&mut StdRng::seed_from_u64(3), DocumentType::NationalId, &opts).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn batch_generation() {
        let mut rng = StdRng::seed_from_u64(4);
        let batch = generate_batch(&mut rng, DocumentType::HkPermit, &GenerationOptions::new(), 25)
            .unwrap();
        assert_eq!(batch.len(), 25);
        assert!(batch.iter().all(|n| n.starts_with('H')));
    }

    #[test]
    fn batch_stops_on_error() {
        let mut rng = StdRng::seed_from_u64(4);
        let opts = GenerationOptions::new().birth_years(2010, 2000);
        assert!(generate_batch(&mut rng, DocumentType::NationalId, &opts, 3).is_err());
    }
}
