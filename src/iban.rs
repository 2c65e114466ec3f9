// 🏦 Iban - Validated IBAN value
//
// Holding an `Iban` means validation already passed, so the getters can
// return plain values. Serializes as its compact string.

use crate::bban::BbanStructure;
use crate::country::Country;
use crate::error::IbanError;
use crate::extract;
use crate::validation::{validate, validate_optional, validate_with_format, IbanFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban(String);

impl Iban {
    /// Parse a compact IBAN (`DE89370400440532013000`)
    pub fn parse(value: &str) -> Result<Self, IbanError> {
        validate(value)?;
        Ok(Iban(value.to_string()))
    }

    /// Parse a value that may be missing; `None` fails with `NOT_NULL`
    pub fn parse_optional(value: Option<&str>) -> Result<Self, IbanError> {
        validate_optional(value)?;
        Ok(Iban(value.unwrap_or_default().to_string()))
    }

    /// Parse the display form (`DE89 3704 0044 0532 0130 00`)
    pub fn parse_formatted(value: &str) -> Result<Self, IbanError> {
        validate_with_format(value, IbanFormat::Default)?;
        Ok(Iban(value.replace(' ', "")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country_code(&self) -> &str {
        extract::country_code(&self.0)
    }

    pub fn check_digit(&self) -> &str {
        extract::check_digit(&self.0)
    }

    pub fn bban(&self) -> &str {
        extract::bban(&self.0)
    }

    pub fn bank_code(&self) -> Option<String> {
        extract::bank_code(&self.0)
    }

    pub fn branch_code(&self) -> Option<String> {
        extract::branch_code(&self.0)
    }

    pub fn account_number(&self) -> Option<String> {
        extract::account_number(&self.0)
    }

    pub fn national_check_digit(&self) -> Option<String> {
        extract::national_check_digit(&self.0)
    }

    pub fn account_type(&self) -> Option<String> {
        extract::account_type(&self.0)
    }

    pub fn owner_account_type(&self) -> Option<String> {
        extract::owner_account_type(&self.0)
    }

    pub fn identification_number(&self) -> Option<String> {
        extract::identification_number(&self.0)
    }

    pub fn to_formatted_string(&self) -> String {
        extract::to_formatted_string(&self.0)
    }

    /// Country record (always present for a parsed IBAN)
    pub fn country(&self) -> Option<&'static Country> {
        Country::by_code(self.country_code())
    }

    pub fn bban_structure(&self) -> Option<&'static BbanStructure> {
        BbanStructure::for_country(self.country_code())
    }

    /// Every field at once, for reports and API responses
    pub fn details(&self) -> IbanDetails {
        IbanDetails {
            iban: self.0.clone(),
            formatted: self.to_formatted_string(),
            country_code: self.country_code().to_string(),
            country_name: self.country().map(|c| c.name.to_string()),
            check_digit: self.check_digit().to_string(),
            bban: self.bban().to_string(),
            bank_code: self.bank_code(),
            branch_code: self.branch_code(),
            account_number: self.account_number(),
            national_check_digit: self.national_check_digit(),
            account_type: self.account_type(),
            owner_account_type: self.owner_account_type(),
            identification_number: self.identification_number(),
        }
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Iban::parse(s)
    }
}

impl TryFrom<String> for Iban {
    type Error = IbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)?;
        Ok(Iban(value))
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.0
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// IBAN DETAILS
// ============================================================================

/// Decomposed IBAN; absent parts are skipped when serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IbanDetails {
    pub iban: String,
    pub formatted: String,
    pub country_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_name: Option<String>,
    pub check_digit: String,
    pub bban: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub national_check_digit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification_number: Option<String>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatViolation;

    #[test]
    fn test_parse_and_getters() {
        let iban: Iban = "DE89370400440532013000".parse().unwrap();

        assert_eq!(iban.country_code(), "DE");
        assert_eq!(iban.check_digit(), "89");
        assert_eq!(iban.bban(), "370400440532013000");
        assert_eq!(iban.bank_code().as_deref(), Some("37040044"));
        assert_eq!(iban.account_number().as_deref(), Some("0532013000"));
        assert_eq!(iban.branch_code(), None);
        assert_eq!(iban.country().map(|c| c.name), Some("Germany"));
        assert_eq!(iban.bban_structure().map(|s| s.bban_length()), Some(18));
        assert_eq!(iban.to_string(), "DE89370400440532013000");
        assert_eq!(iban.to_formatted_string(), "DE89 3704 0044 0532 0130 00");
    }

    #[test]
    fn test_parse_rejects_invalid() {
        let err = Iban::parse("DE89370400440532013001").unwrap_err();
        assert_eq!(err.kind(), "INVALID_CHECK_DIGIT");

        let err = Iban::parse("").unwrap_err();
        assert_eq!(err.format_violation(), Some(FormatViolation::NotEmpty));
    }

    #[test]
    fn test_parse_formatted() {
        let iban = Iban::parse_formatted("GB29 NWBK 6016 1331 9268 19").unwrap();
        assert_eq!(iban.as_str(), "GB29NWBK60161331926819");
        assert_eq!(iban, Iban::parse("GB29NWBK60161331926819").unwrap());

        assert!(Iban::parse_formatted("GB29NWBK 6016 1331 9268 19").is_err());
    }

    #[test]
    fn test_parse_optional() {
        assert!(Iban::parse_optional(Some("NO9386011117947")).is_ok());
        let err = Iban::parse_optional(None).unwrap_err();
        assert_eq!(err.format_violation(), Some(FormatViolation::NotNull));
    }

    #[test]
    fn test_serde_as_string() {
        let iban = Iban::parse("NL91ABNA0417164300").unwrap();
        let json = serde_json::to_string(&iban).unwrap();
        assert_eq!(json, "\"NL91ABNA0417164300\"");

        let back: Iban = serde_json::from_str(&json).unwrap();
        assert_eq!(back, iban);

        let bad: Result<Iban, _> = serde_json::from_str("\"NL91ABNA0417164301\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_details_skip_absent_parts() {
        let details = Iban::parse("DE89370400440532013000").unwrap().details();
        assert_eq!(details.bank_code.as_deref(), Some("37040044"));

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["formatted"], "DE89 3704 0044 0532 0130 00");
        assert_eq!(json["country_name"], "Germany");
        assert!(json.get("branch_code").is_none());
    }
}
