//! Document types, checksums, validation, classification, and parsing.
//!
//! Everything in this module is pure: no I/O, no shared mutable state.
//! The only clock reads are [`parse`] (for age) and the residence-permit
//! birth-year bound.

mod checksum;
mod classify;
mod error;
mod normalize;
mod parse;
pub mod provinces;
mod types;
mod validators;

pub use checksum::*;
pub use classify::{classification_order, classify};
pub use error::*;
pub use normalize::normalize;
pub use parse::*;
pub use provinces::{PROVINCES, UNKNOWN_PROVINCE, is_known_province_code, province_name};
pub use types::*;
pub use validators::{
    is_chinese_passport, is_foreign_permit, is_foreign_permit_15, is_foreign_permit_18,
    is_generic_passport, is_hk_macao_permit, is_hk_permit, is_macao_permit, is_national_id,
    is_national_id_15, is_national_id_18, is_other_document, is_residence_permit,
    is_taiwan_permit, validate, validate_as,
};
