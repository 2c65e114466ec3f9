// ⚠️ Error Taxonomy - Format violations, unsupported countries, bad check digits
//
// Every failure carries the offending value so callers can build their own
// user-facing messages. Nothing here is recovered internally.

use crate::bban::PartType;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// FORMAT VIOLATION
// ============================================================================

/// Which structural rule an IBAN broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormatViolation {
    NotNull,
    NotEmpty,
    CountryCodeTwoLetters,
    CountryCodeOnlyUpperCaseLetters,
    CountryCodeExists,
    CheckDigitTwoDigits,
    CheckDigitOnlyDigits,
    BbanLength,
    BbanOnlyUpperCaseLetters,
    BbanOnlyDigitsOrLetters,
    BbanOnlyDigits,
    InvalidCharacter,
    /// Input claimed display format but was not grouped as `XXXX XXXX ...`
    IbanFormatting,
}

impl FormatViolation {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatViolation::NotNull => "NOT_NULL",
            FormatViolation::NotEmpty => "NOT_EMPTY",
            FormatViolation::CountryCodeTwoLetters => "COUNTRY_CODE_TWO_LETTERS",
            FormatViolation::CountryCodeOnlyUpperCaseLetters => "COUNTRY_CODE_ONLY_UPPER_CASE_LETTERS",
            FormatViolation::CountryCodeExists => "COUNTRY_CODE_EXISTS",
            FormatViolation::CheckDigitTwoDigits => "CHECK_DIGIT_TWO_DIGITS",
            FormatViolation::CheckDigitOnlyDigits => "CHECK_DIGIT_ONLY_DIGITS",
            FormatViolation::BbanLength => "BBAN_LENGTH",
            FormatViolation::BbanOnlyUpperCaseLetters => "BBAN_ONLY_UPPER_CASE_LETTERS",
            FormatViolation::BbanOnlyDigitsOrLetters => "BBAN_ONLY_DIGITS_OR_LETTERS",
            FormatViolation::BbanOnlyDigits => "BBAN_ONLY_DIGITS",
            FormatViolation::InvalidCharacter => "INVALID_CHARACTER",
            FormatViolation::IbanFormatting => "IBAN_FORMATTING",
        }
    }
}

impl std::fmt::Display for FormatViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Actual vs. expected length, reported for `BBAN_LENGTH`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthMismatch {
    pub actual: usize,
    pub expected: usize,
}

// ============================================================================
// IBAN FORMAT ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct IbanFormatError {
    violation: FormatViolation,
    value: String,
    part_type: Option<PartType>,
    invalid_char: Option<char>,
    lengths: Option<LengthMismatch>,
    message: String,
}

impl IbanFormatError {
    pub fn new(
        violation: FormatViolation,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        IbanFormatError {
            violation,
            value: value.into(),
            part_type: None,
            invalid_char: None,
            lengths: None,
            message: message.into(),
        }
    }

    /// Builder: BBAN part the violation was found in
    pub fn with_part_type(mut self, part_type: PartType) -> Self {
        self.part_type = Some(part_type);
        self
    }

    /// Builder: first character that broke the rule
    pub fn with_invalid_char(mut self, ch: char) -> Self {
        self.invalid_char = Some(ch);
        self
    }

    /// Builder: actual and expected lengths
    pub fn with_lengths(mut self, actual: usize, expected: usize) -> Self {
        self.lengths = Some(LengthMismatch { actual, expected });
        self
    }

    pub fn violation(&self) -> FormatViolation {
        self.violation
    }

    /// The offending substring (whole input, country code, check digit or BBAN part)
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn part_type(&self) -> Option<PartType> {
        self.part_type
    }

    pub fn invalid_char(&self) -> Option<char> {
        self.invalid_char
    }

    pub fn lengths(&self) -> Option<LengthMismatch> {
        self.lengths
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// UNSUPPORTED COUNTRY / INVALID CHECK DIGIT
// ============================================================================

/// Country exists but has no registered BBAN structure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UnsupportedCountryError {
    country_code: String,
    message: String,
}

impl UnsupportedCountryError {
    pub fn new(country_code: impl Into<String>, message: impl Into<String>) -> Self {
        UnsupportedCountryError {
            country_code: country_code.into(),
            message: message.into(),
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidCheckDigitError {
    actual: String,
    expected: String,
    message: String,
}

impl InvalidCheckDigitError {
    pub fn new(
        actual: impl Into<String>,
        expected: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        InvalidCheckDigitError {
            actual: actual.into(),
            expected: expected.into(),
            message: message.into(),
        }
    }

    /// Check digit found in the input
    pub fn actual(&self) -> &str {
        &self.actual
    }

    /// Check digit the BBAN and country code actually require
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

// ============================================================================
// IBAN ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IbanError {
    #[error(transparent)]
    Format(#[from] IbanFormatError),

    #[error(transparent)]
    UnsupportedCountry(#[from] UnsupportedCountryError),

    #[error(transparent)]
    InvalidCheckDigit(#[from] InvalidCheckDigitError),
}

impl IbanError {
    /// Stable machine-readable kind (violation name for format errors)
    pub fn kind(&self) -> &'static str {
        match self {
            IbanError::Format(e) => e.violation().as_str(),
            IbanError::UnsupportedCountry(_) => "UNSUPPORTED_COUNTRY",
            IbanError::InvalidCheckDigit(_) => "INVALID_CHECK_DIGIT",
        }
    }

    pub fn format_violation(&self) -> Option<FormatViolation> {
        match self {
            IbanError::Format(e) => Some(e.violation()),
            _ => None,
        }
    }
}

// ============================================================================
// BIC ERRORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BicFormatViolation {
    NotNull,
    NotEmpty,
    LengthEightOrEleven,
    OnlyUpperCaseLetters,
    BankCodeOnlyLetters,
    CountryCodeOnlyUpperCaseLetters,
    LocationCodeOnlyLettersOrDigits,
    BranchCodeOnlyLettersOrDigits,
}

impl BicFormatViolation {
    pub fn as_str(&self) -> &'static str {
        match self {
            BicFormatViolation::NotNull => "BIC_NOT_NULL",
            BicFormatViolation::NotEmpty => "BIC_NOT_EMPTY",
            BicFormatViolation::LengthEightOrEleven => "BIC_LENGTH_8_OR_11",
            BicFormatViolation::OnlyUpperCaseLetters => "BIC_ONLY_UPPER_CASE_LETTERS",
            BicFormatViolation::BankCodeOnlyLetters => "BANK_CODE_ONLY_LETTERS",
            BicFormatViolation::CountryCodeOnlyUpperCaseLetters => "COUNTRY_CODE_ONLY_UPPER_CASE_LETTERS",
            BicFormatViolation::LocationCodeOnlyLettersOrDigits => "LOCATION_CODE_ONLY_LETTERS_OR_DIGITS",
            BicFormatViolation::BranchCodeOnlyLettersOrDigits => "BRANCH_CODE_ONLY_LETTERS_OR_DIGITS",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BicFormatError {
    violation: BicFormatViolation,
    value: String,
    message: String,
}

impl BicFormatError {
    pub fn new(
        violation: BicFormatViolation,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        BicFormatError {
            violation,
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn violation(&self) -> BicFormatViolation {
        self.violation
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BicError {
    #[error(transparent)]
    Format(#[from] BicFormatError),

    #[error(transparent)]
    UnsupportedCountry(#[from] UnsupportedCountryError),
}

impl BicError {
    pub fn kind(&self) -> &'static str {
        match self {
            BicError::Format(e) => e.violation().as_str(),
            BicError::UnsupportedCountry(_) => "UNSUPPORTED_COUNTRY",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_builder() {
        let err = IbanFormatError::new(FormatViolation::BbanOnlyDigits, "3704A044", "[3704A044] must contain only digits.")
            .with_part_type(PartType::BankCode)
            .with_invalid_char('A');

        assert_eq!(err.violation(), FormatViolation::BbanOnlyDigits);
        assert_eq!(err.value(), "3704A044");
        assert_eq!(err.part_type(), Some(PartType::BankCode));
        assert_eq!(err.invalid_char(), Some('A'));
        assert_eq!(err.lengths(), None);
        assert_eq!(err.message(), "[3704A044] must contain only digits.");
        assert_eq!(err.to_string(), err.message());
    }

    #[test]
    fn test_iban_error_kind() {
        let format: IbanError = IbanFormatError::new(FormatViolation::BbanLength, "123", "bad length")
            .with_lengths(3, 18)
            .into();
        assert_eq!(format.kind(), "BBAN_LENGTH");
        assert_eq!(format.format_violation(), Some(FormatViolation::BbanLength));

        let unsupported: IbanError = UnsupportedCountryError::new("US", "Country code is not supported.").into();
        assert_eq!(unsupported.kind(), "UNSUPPORTED_COUNTRY");
        assert_eq!(unsupported.format_violation(), None);

        let check: IbanError = InvalidCheckDigitError::new("00", "89", "bad check digit").into();
        assert_eq!(check.kind(), "INVALID_CHECK_DIGIT");
        assert_eq!(check.to_string(), "bad check digit");
    }

    #[test]
    fn test_violation_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&FormatViolation::CountryCodeOnlyUpperCaseLetters).unwrap();
        assert_eq!(json, "\"COUNTRY_CODE_ONLY_UPPER_CASE_LETTERS\"");
        assert_eq!(FormatViolation::CountryCodeOnlyUpperCaseLetters.to_string(), "COUNTRY_CODE_ONLY_UPPER_CASE_LETTERS");
    }
}
