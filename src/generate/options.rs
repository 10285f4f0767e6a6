use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::random::random_birth_date;
use crate::core::{BirthDate, DocumentError, Sex};

/// Issuing region of a residence permit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    #[default]
    HongKong,
    Macao,
    Taiwan,
}

impl Region {
    /// Leading two digits of a residence permit number.
    pub fn residence_permit_prefix(&self) -> &'static str {
        match self {
            Self::HongKong => "81",
            Self::Macao => "82",
            Self::Taiwan => "83",
        }
    }
}

/// Kind of Chinese passport to generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassportKind {
    /// `G` or `E` + 8 digits.
    #[default]
    Ordinary,
    /// `EA`–`EF` + 7 digits.
    Electronic,
    /// Service passport, `D` + 8 digits.
    Official,
    /// `DE` + 7 digits.
    Diplomatic,
    /// Hong Kong SAR passport, `K` + 7 characters.
    HongKongSar,
    /// Macao SAR passport, `MA` + 7 digits.
    MacaoSar,
}

impl PassportKind {
    pub const ALL: [PassportKind; 6] = [
        Self::Ordinary,
        Self::Electronic,
        Self::Official,
        Self::Diplomatic,
        Self::HongKongSar,
        Self::MacaoSar,
    ];
}

/// Shape of a generated Taiwan permit number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaiwanPermitFormat {
    #[default]
    EightDigit,
    TenDigit,
    /// One letter + 7 to 9 digits.
    Letter,
    EighteenDigit,
}

impl TaiwanPermitFormat {
    pub const ALL: [TaiwanPermitFormat; 4] = [
        Self::EightDigit,
        Self::TenDigit,
        Self::Letter,
        Self::EighteenDigit,
    ];
}

/// Options for [`generate`](super::generate).
///
/// Every field is optional; unset fields fall back to a per-type default
/// or a random choice. Options that do not apply to the requested type
/// are ignored.
///
/// Deserializes from any serde format with missing fields defaulted:
///
/// ```
/// use zhengjian::generate::GenerationOptions;
///
/// let opts: GenerationOptions =
///     serde_json::from_str(r#"{"gender": "female", "start_year": 1980}"#).unwrap();
/// assert_eq!(opts.start_year, Some(1980));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    /// 2-digit province code for resident identity cards. Random mainland
    /// province when unset.
    pub province: Option<String>,
    /// Sex encoded in a resident identity card. Random when unset.
    pub gender: Option<Sex>,
    /// First possible birth year (default 1950).
    pub start_year: Option<i32>,
    /// Last possible birth year (default 2005, or 1999 for 15-character numbers).
    pub end_year: Option<i32>,
    /// Residence permit region (default Hong Kong).
    pub region: Option<Region>,
    /// Chinese passport kind (default ordinary).
    pub passport_kind: Option<PassportKind>,
    /// Taiwan permit shape (default 8 digits).
    pub taiwan_format: Option<TaiwanPermitFormat>,
    /// Current (`true`, default) or legacy number format. Applies to
    /// resident identity cards (legacy = 15 digits) and HK/Macao permits
    /// (legacy = letter + 6–7 digits).
    pub new_version: Option<bool>,
    /// 3-letter country code for legacy foreign permanent resident cards.
    pub country_code: Option<String>,
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn province(mut self, code: impl Into<String>) -> Self {
        self.province = Some(code.into());
        self
    }

    pub fn gender(mut self, sex: Sex) -> Self {
        self.gender = Some(sex);
        self
    }

    /// Restrict birth years to `start..=end`.
    pub fn birth_years(mut self, start: i32, end: i32) -> Self {
        self.start_year = Some(start);
        self.end_year = Some(end);
        self
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn passport_kind(mut self, kind: PassportKind) -> Self {
        self.passport_kind = Some(kind);
        self
    }

    pub fn taiwan_format(mut self, format: TaiwanPermitFormat) -> Self {
        self.taiwan_format = Some(format);
        self
    }

    pub fn new_version(mut self, new_version: bool) -> Self {
        self.new_version = Some(new_version);
        self
    }

    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    pub(crate) fn is_legacy(&self) -> bool {
        self.new_version == Some(false)
    }

    /// Resolve the birth-year range against per-type defaults and the
    /// years the target format can encode.
    pub(crate) fn year_range(
        &self,
        defaults: (i32, i32),
        allowed: RangeInclusive<i32>,
    ) -> Result<(i32, i32), DocumentError> {
        let start = self.start_year.unwrap_or(defaults.0);
        let end = self.end_year.unwrap_or(defaults.1);
        if start > end {
            return Err(DocumentError::InvalidOption(format!(
                "start year {start} is after end year {end}"
            )));
        }
        if !allowed.contains(&start) || !allowed.contains(&end) {
            return Err(DocumentError::InvalidOption(format!(
                "birth years {start}..={end} outside {}..={}",
                allowed.start(),
                allowed.end()
            )));
        }
        Ok((start, end))
    }

    /// Random birth date within [`year_range`](Self::year_range).
    pub(crate) fn birth_date<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        defaults: (i32, i32),
        allowed: RangeInclusive<i32>,
    ) -> Result<BirthDate, DocumentError> {
        let (start, end) = self.year_range(defaults, allowed)?;
        random_birth_date(rng, start, end).ok_or_else(|| {
            DocumentError::InvalidOption(format!("no calendar date in {start}..={end}"))
        })
    }
}
