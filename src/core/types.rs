use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, de};

use super::error::{DocumentError, ParseFailure};

/// The closed set of document families this crate recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Resident identity card, 18-digit or legacy 15-digit.
    NationalId,
    /// Foreign permanent resident ID card (new 18-character form).
    ForeignResidentPermit,
    /// Residence permit for Hong Kong, Macao and Taiwan residents (`81`/`82`/`83`).
    HkTwResidencePermit,
    /// Mainland travel permit for Hong Kong residents (`H` prefix).
    HkPermit,
    /// Mainland travel permit for Macao residents (`M` prefix).
    MacaoPermit,
    /// Passport issued by the PRC or one of its SARs.
    ChineseOverseasPassport,
    /// Mainland travel permit for Taiwan residents.
    TaiwanPermit,
    /// Foreign permanent resident ID card, legacy 15-character form.
    ForeignerOldPermit,
    /// Any other passport.
    GenericPassport,
    /// Nothing matched.
    Unknown,
}

impl DocumentType {
    /// Every concrete document type, `Unknown` excluded.
    pub const ALL: [DocumentType; 9] = [
        Self::NationalId,
        Self::ForeignResidentPermit,
        Self::HkTwResidencePermit,
        Self::HkPermit,
        Self::MacaoPermit,
        Self::ChineseOverseasPassport,
        Self::TaiwanPermit,
        Self::ForeignerOldPermit,
        Self::GenericPassport,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NationalId => "Resident identity card",
            Self::ForeignResidentPermit => "Foreign permanent resident ID card",
            Self::HkTwResidencePermit => "Residence permit for Hong Kong, Macao and Taiwan residents",
            Self::HkPermit => "Mainland travel permit for Hong Kong residents",
            Self::MacaoPermit => "Mainland travel permit for Macao residents",
            Self::ChineseOverseasPassport => "Chinese passport",
            Self::TaiwanPermit => "Mainland travel permit for Taiwan residents",
            Self::ForeignerOldPermit => "Foreign permanent resident ID card (legacy)",
            Self::GenericPassport => "Passport",
            Self::Unknown => "Unknown document type",
        }
    }

    /// Legacy single-character code, where one exists.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::NationalId => Some("1"),
            Self::HkTwResidencePermit => Some("I"),
            Self::ChineseOverseasPassport => Some("L"),
            Self::HkPermit => Some("G"),
            Self::MacaoPermit => Some("M"),
            Self::TaiwanPermit => Some("6"),
            Self::ForeignResidentPermit => Some("8"),
            Self::ForeignerOldPermit | Self::GenericPassport | Self::Unknown => None,
        }
    }

    /// Parse from a legacy single-character code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::NationalId),
            "I" => Some(Self::HkTwResidencePermit),
            "L" => Some(Self::ChineseOverseasPassport),
            "G" => Some(Self::HkPermit),
            "M" => Some(Self::MacaoPermit),
            "6" => Some(Self::TaiwanPermit),
            "8" => Some(Self::ForeignResidentPermit),
            _ => None,
        }
    }

    fn snake_name(&self) -> &'static str {
        match self {
            Self::NationalId => "national_id",
            Self::ForeignResidentPermit => "foreign_resident_permit",
            Self::HkTwResidencePermit => "hk_tw_residence_permit",
            Self::HkPermit => "hk_permit",
            Self::MacaoPermit => "macao_permit",
            Self::ChineseOverseasPassport => "chinese_overseas_passport",
            Self::TaiwanPermit => "taiwan_permit",
            Self::ForeignerOldPermit => "foreigner_old_permit",
            Self::GenericPassport => "generic_passport",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts legacy codes (`"1"`, `"G"`, ...) and snake_case names
/// (`"national_id"`, `"hk_permit"`, ...).
impl FromStr for DocumentType {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(t) = Self::from_code(s) {
            return Ok(t);
        }
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .chain([Self::Unknown])
            .find(|t| t.snake_name() == lower)
            .ok_or_else(|| DocumentError::UnknownTypeAlias(s.to_string()))
    }
}

/// Sex encoded in a national ID number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unknown,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Unknown => "unknown",
        })
    }
}

/// A birth date embedded in a document number.
///
/// Only real calendar dates can be represented: `1990-02-30` is rejected
/// by [`BirthDate::new`] and by deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BirthDate {
    year: i32,
    month: u32,
    day: u32,
}

impl BirthDate {
    /// Returns `None` unless `year-month-day` exists in the proleptic
    /// Gregorian calendar.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::from)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn to_naive_date(self) -> NaiveDate {
        // Fields are only ever set from a valid NaiveDate.
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or_default()
    }

    /// Age in whole years on `today`.
    ///
    /// Only the month is compared, not the day: someone born on the 20th is
    /// counted a year older from the 1st of their birth month.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let mut age = today.year() - self.year;
        if today.month() < self.month {
            age -= 1;
        }
        age.max(0) as u32
    }

    /// `YYYYMMDD`, as embedded in 18-character numbers.
    pub fn compact(&self) -> String {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl<'de> Deserialize<'de> for BirthDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Parts {
            year: i32,
            month: u32,
            day: u32,
        }

        let Parts { year, month, day } = Parts::deserialize(deserializer)?;
        Self::new(year, month, day).ok_or_else(|| {
            de::Error::custom(format!("{year:04}-{month:02}-{day:02} is not a calendar date"))
        })
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Attributes derived from a document number by [`parse`](super::parse).
///
/// When `valid` is `false` every other field holds its default value and
/// `error` says why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIdentity {
    pub valid: bool,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub type_name: String,
    pub sex: Sex,
    pub age: u32,
    pub birth_date: Option<BirthDate>,
    /// Province name; empty for non-national-ID documents.
    pub province: String,
    pub error: Option<ParseFailure>,
}

impl ParsedIdentity {
    pub(crate) fn invalid(error: ParseFailure) -> Self {
        Self {
            valid: false,
            doc_type: DocumentType::Unknown,
            type_name: String::new(),
            sex: Sex::Unknown,
            age: 0,
            birth_date: None,
            province: String::new(),
            error: Some(error),
        }
    }

    pub(crate) fn valid(doc_type: DocumentType) -> Self {
        Self {
            valid: true,
            doc_type,
            type_name: doc_type.name().to_string(),
            sex: Sex::Unknown,
            age: 0,
            birth_date: None,
            province: String::new(),
            error: None,
        }
    }
}
