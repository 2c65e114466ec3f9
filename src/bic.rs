// 🏛️ BIC - Business Identifier Codes (ISO 9362)
//
// Layout: bank code (4 letters) + country code (2 letters) + location code
// (2 alphanumerics) + optional branch code (3 alphanumerics).

use crate::country::Country;
use crate::error::{BicError, BicFormatError, BicFormatViolation, UnsupportedCountryError};
use crate::text::{substring, substring_from};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const BIC8_LENGTH: usize = 8;
const BIC11_LENGTH: usize = 11;

const BANK_CODE_INDEX: usize = 0;
const BANK_CODE_LENGTH: usize = 4;
const COUNTRY_CODE_INDEX: usize = BANK_CODE_INDEX + BANK_CODE_LENGTH;
const COUNTRY_CODE_LENGTH: usize = 2;
const LOCATION_CODE_INDEX: usize = COUNTRY_CODE_INDEX + COUNTRY_CODE_LENGTH;
const LOCATION_CODE_LENGTH: usize = 2;
const BRANCH_CODE_INDEX: usize = LOCATION_CODE_INDEX + LOCATION_CODE_LENGTH;

fn is_upper_alphanumeric(ch: char) -> bool {
    ch.is_ascii_uppercase() || ch.is_ascii_digit()
}

// ============================================================================
// VALIDATION
// ============================================================================

pub fn validate_bic(bic: &str) -> Result<(), BicError> {
    if bic.is_empty() {
        return Err(BicFormatError::new(BicFormatViolation::NotEmpty, bic, "Empty string can't be a valid Bic.").into());
    }

    let length = bic.chars().count();
    if length != BIC8_LENGTH && length != BIC11_LENGTH {
        return Err(BicFormatError::new(
            BicFormatViolation::LengthEightOrEleven,
            bic,
            format!("Bic length must be {} or {}", BIC8_LENGTH, BIC11_LENGTH),
        )
        .into());
    }

    if bic.chars().any(|c| c.is_lowercase()) {
        return Err(BicFormatError::new(
            BicFormatViolation::OnlyUpperCaseLetters,
            bic,
            "Bic must contain only upper case letters.",
        )
        .into());
    }

    let bank = substring(bic, BANK_CODE_INDEX, COUNTRY_CODE_INDEX);
    if !bank.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(BicFormatError::new(
            BicFormatViolation::BankCodeOnlyLetters,
            bank,
            "Bank code must contain only letters.",
        )
        .into());
    }

    let country = substring(bic, COUNTRY_CODE_INDEX, LOCATION_CODE_INDEX);
    if !country.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(BicFormatError::new(
            BicFormatViolation::CountryCodeOnlyUpperCaseLetters,
            country,
            "Bic country code must contain upper case letters",
        )
        .into());
    }

    if Country::by_code(country).is_none() {
        return Err(UnsupportedCountryError::new(country, "Country code is not supported.").into());
    }

    let location = substring(bic, LOCATION_CODE_INDEX, BRANCH_CODE_INDEX);
    if !location.chars().all(is_upper_alphanumeric) {
        return Err(BicFormatError::new(
            BicFormatViolation::LocationCodeOnlyLettersOrDigits,
            location,
            "Location code must contain only letters or digits.",
        )
        .into());
    }

    if length == BIC11_LENGTH {
        let branch = substring_from(bic, BRANCH_CODE_INDEX);
        if !branch.chars().all(is_upper_alphanumeric) {
            return Err(BicFormatError::new(
                BicFormatViolation::BranchCodeOnlyLettersOrDigits,
                branch,
                "Branch code must contain only letters or digits.",
            )
            .into());
        }
    }

    Ok(())
}

/// Same as [`validate_bic`], with a missing value reported as `BIC_NOT_NULL`
pub fn validate_bic_optional(bic: Option<&str>) -> Result<(), BicError> {
    match bic {
        Some(bic) => validate_bic(bic),
        None => Err(BicFormatError::new(BicFormatViolation::NotNull, "", "Null can't be a valid Bic.").into()),
    }
}

pub fn is_valid_bic(bic: &str) -> bool {
    validate_bic(bic).is_ok()
}

// ============================================================================
// BIC VALUE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Bic(String);

impl Bic {
    pub fn parse(value: &str) -> Result<Self, BicError> {
        validate_bic(value)?;
        Ok(Bic(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bank_code(&self) -> &str {
        substring(&self.0, BANK_CODE_INDEX, COUNTRY_CODE_INDEX)
    }

    pub fn country_code(&self) -> &str {
        substring(&self.0, COUNTRY_CODE_INDEX, LOCATION_CODE_INDEX)
    }

    pub fn location_code(&self) -> &str {
        substring(&self.0, LOCATION_CODE_INDEX, BRANCH_CODE_INDEX)
    }

    /// Present only for 11-character codes
    pub fn branch_code(&self) -> Option<&str> {
        let branch = substring_from(&self.0, BRANCH_CODE_INDEX);
        (!branch.is_empty()).then_some(branch)
    }

    pub fn country(&self) -> Option<&'static Country> {
        Country::by_code(self.country_code())
    }
}

impl FromStr for Bic {
    type Err = BicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bic::parse(s)
    }
}

impl TryFrom<String> for Bic {
    type Error = BicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_bic(&value)?;
        Ok(Bic(value))
    }
}

impl From<Bic> for String {
    fn from(bic: Bic) -> Self {
        bic.0
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serializable view of a BIC
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BicDetails {
    pub bic: String,
    pub bank_code: String,
    pub country_code: String,
    pub location_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
}

impl From<&Bic> for BicDetails {
    fn from(bic: &Bic) -> Self {
        BicDetails {
            bic: bic.as_str().to_string(),
            bank_code: bic.bank_code().to_string(),
            country_code: bic.country_code().to_string(),
            location_code: bic.location_code().to_string(),
            branch_code: bic.branch_code().map(str::to_string),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
