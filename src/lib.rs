//! # zhengjian
//!
//! Validation, classification, parsing and synthetic generation of
//! identity document numbers used in mainland China: resident identity
//! cards, foreign permanent resident ID cards, residence and travel permits
//! for Hong Kong, Macao and Taiwan residents, and passports.
//!
//! Every operation is a pure function of its input (plus the current date
//! for age and residence-permit checks). Input is normalized first: all
//! whitespace is removed and ASCII letters are upper-cased.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use zhengjian::core::*;
//!
//! assert!(validate("110101199003071233"));
//! assert_eq!(classify("H12345678"), DocumentType::HkPermit);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let parsed = parse_at("440306198512150022", today);
//! assert!(parsed.valid);
//! assert_eq!(parsed.sex, Sex::Female);
//! assert_eq!(parsed.age, 38);
//! assert_eq!(parsed.province, "Guangdong");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document types, checksums, validators, classifier, parser |
//! | `generate` (default) | Random format-valid numbers for test data |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "generate")]
pub mod generate;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
