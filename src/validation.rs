// ✅ Validation Facade - Structural checks first, checksum last
//
// Order is fixed and the first violation wins:
//   1. empty          2. country code      3. check digit presence
//   4. BBAN length    5. BBAN characters   6. mod-97 check digit

use crate::bban::{BbanStructure, CharacterType};
use crate::checksum::validate_check_digit;
use crate::country::Country;
use crate::error::{FormatViolation, IbanError, IbanFormatError, UnsupportedCountryError};
use crate::extract::{bban, check_digit, country_code, to_formatted_string, BBAN_INDEX};
use serde::{Deserialize, Serialize};

/// How the caller's string is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IbanFormat {
    /// `DE89370400440532013000`
    #[default]
    Compact,

    /// `DE89 3704 0044 0532 0130 00`
    Default,
}

// ============================================================================
// PUBLIC OPERATIONS
// ============================================================================

/// Validate a compact IBAN, returning the first violation found
pub fn validate(iban: &str) -> Result<(), IbanError> {
    validate_empty(iban)?;
    let structure = validate_country_code(iban)?;
    validate_check_digit_presence(iban)?;
    validate_bban_length(iban, structure)?;
    validate_bban_entries(iban, structure)?;
    validate_check_digit(iban)?;

    Ok(())
}

/// Same as [`validate`], with a missing value reported as `NOT_NULL`
pub fn validate_optional(iban: Option<&str>) -> Result<(), IbanError> {
    match iban {
        Some(iban) => validate(iban),
        None => Err(IbanFormatError::new(FormatViolation::NotNull, "", "Null can't be a valid Iban.").into()),
    }
}

/// Validate an IBAN written in `format`.
///
/// `Default` input must be exactly the grouped display form of a valid IBAN.
pub fn validate_with_format(iban: &str, format: IbanFormat) -> Result<(), IbanError> {
    match format {
        IbanFormat::Compact => validate(iban),
        IbanFormat::Default => {
            let compact = iban.replace(' ', "");
            validate(&compact)?;

            if iban != to_formatted_string(&compact) {
                return Err(IbanFormatError::new(
                    FormatViolation::IbanFormatting,
                    iban,
                    format!(
                        "Iban must be formatted using 4 characters and space combination. Instead of [{}]",
                        iban
                    ),
                )
                .into());
            }

            Ok(())
        }
    }
}

pub fn is_valid(iban: &str) -> bool {
    validate(iban).is_ok()
}

/// True when a BBAN structure is registered for `country_code`
pub fn is_supported_country(country_code: &str) -> bool {
    BbanStructure::for_country(country_code).is_some()
}

/// Full IBAN length for `country_code` (4 + BBAN length)
pub fn iban_length(country_code: &str) -> Option<usize> {
    bban_length(country_code).map(|len| BBAN_INDEX + len)
}

pub fn bban_length(country_code: &str) -> Option<usize> {
    BbanStructure::for_country(country_code).map(|s| s.bban_length())
}

// ============================================================================
// STEPS
// ============================================================================

fn validate_empty(iban: &str) -> Result<(), IbanFormatError> {
    if iban.is_empty() {
        return Err(IbanFormatError::new(
            FormatViolation::NotEmpty,
            iban,
            "Empty string can't be a valid Iban.",
        ));
    }
    Ok(())
}

fn validate_country_code(iban: &str) -> Result<&'static BbanStructure, IbanError> {
    if iban.chars().count() < 2 {
        return Err(IbanFormatError::new(
            FormatViolation::CountryCodeTwoLetters,
            iban,
            "Iban must contain 2 char country code.",
        )
        .into());
    }

    let code = country_code(iban);
    if !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(IbanFormatError::new(
            FormatViolation::CountryCodeOnlyUpperCaseLetters,
            code,
            "Iban country code must contain upper case letters.",
        )
        .into());
    }

    if Country::by_code(code).is_none() {
        return Err(IbanFormatError::new(
            FormatViolation::CountryCodeExists,
            code,
            "Iban contains non existing country code.",
        )
        .into());
    }

    BbanStructure::for_country(code)
        .ok_or_else(|| UnsupportedCountryError::new(code, "Country code is not supported.").into())
}

fn validate_check_digit_presence(iban: &str) -> Result<(), IbanFormatError> {
    if iban.chars().count() < BBAN_INDEX {
        return Err(IbanFormatError::new(
            FormatViolation::CheckDigitTwoDigits,
            iban,
            "Iban must contain 2 digit check digit.",
        ));
    }

    let digits = check_digit(iban);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(IbanFormatError::new(
            FormatViolation::CheckDigitOnlyDigits,
            digits,
            "Iban's check digit should contain only digits.",
        ));
    }

    Ok(())
}

fn validate_bban_length(iban: &str, structure: &BbanStructure) -> Result<(), IbanFormatError> {
    let bban = bban(iban);
    let expected = structure.bban_length();
    let actual = bban.chars().count();

    if actual != expected {
        return Err(IbanFormatError::new(
            FormatViolation::BbanLength,
            bban,
            format!("[{}] length is {}, expected BBAN length is: {}", bban, actual, expected),
        )
        .with_lengths(actual, expected));
    }

    Ok(())
}

fn validate_bban_entries(iban: &str, structure: &BbanStructure) -> Result<(), IbanFormatError> {
    for (part, value) in structure.split(bban(iban)) {
        let Some(invalid) = part.first_invalid_char(value) else {
            continue;
        };

        let (violation, message) = match part.character_type() {
            CharacterType::Letters => (
                FormatViolation::BbanOnlyUpperCaseLetters,
                format!("[{}] must contain only upper case letters.", value),
            ),
            CharacterType::Alphanumeric => (
                FormatViolation::BbanOnlyDigitsOrLetters,
                format!("[{}] must contain only digits or letters.", value),
            ),
            CharacterType::Digits => (
                FormatViolation::BbanOnlyDigits,
                format!("[{}] must contain only digits.", value),
            ),
        };

        return Err(IbanFormatError::new(violation, value, message)
            .with_part_type(part.part_type())
            .with_invalid_char(invalid));
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bban::PartType;
    use crate::checksum::calculate_check_digit;
    use crate::extract::replace_check_digit;

    const VALID: &[&str] = &[
        "DE89370400440532013000",
        "GB29NWBK60161331926819",
        "AL47212110090000000235698741",
        "AT611904300234573201",
        "BE68539007547034",
        "BR1800360305000010009795493C1",
        "CH9300762011623852957",
        "FR1420041010050500013M02606",
        "HU42117730161111101800000000",
        "IS140159260076545510730339",
        "IT60X0542811101000000123456",
        "LC55HEMM000100010012001200023015",
        "MU17BOMM0101101030300200000MUR",
        "NL91ABNA0417164300",
        "NO9386011117947",
        "PL61109010140000071219812874",
        "RU0204452560040702810412345678901",
        "SC18SSCB11010000000000001497USD",
        "TR330006100519786457841326",
        "XK051212012345678906",
    ];

    fn violation_of(iban: &str) -> FormatViolation {
        match validate(iban) {
            Err(IbanError::Format(e)) => e.violation(),
            other => panic!("expected format violation for {:?}, got {:?}", iban, other),
        }
    }

    #[test]
    fn test_valid_ibans_pass() {
        for iban in VALID {
            assert!(validate(iban).is_ok(), "{} should be valid: {:?}", iban, validate(iban));
            assert!(is_valid(iban));
        }
    }

    #[test]
    fn test_recomputed_check_digit_matches() {
        for iban in VALID {
            let recomputed = calculate_check_digit(&replace_check_digit(iban, "00")).unwrap();
            assert_eq!(recomputed, check_digit(iban), "{}", iban);
        }
    }

    #[test]
    fn test_empty_and_missing() {
        assert_eq!(violation_of(""), FormatViolation::NotEmpty);

        match validate_optional(None) {
            Err(IbanError::Format(e)) => assert_eq!(e.violation(), FormatViolation::NotNull),
            other => panic!("expected NOT_NULL, got {:?}", other),
        }
        assert!(validate_optional(Some("DE89370400440532013000")).is_ok());
    }

    #[test]
    fn test_country_code_checks() {
        assert_eq!(violation_of("D"), FormatViolation::CountryCodeTwoLetters);
        assert_eq!(violation_of("de89370400440532013000"), FormatViolation::CountryCodeOnlyUpperCaseLetters);
        assert_eq!(violation_of("D189370400440532013000"), FormatViolation::CountryCodeOnlyUpperCaseLetters);
        assert_eq!(violation_of("ZZ12345678901234"), FormatViolation::CountryCodeExists);
    }

    #[test]
    fn test_country_code_error_carries_code() {
        match validate("ZZ12345678901234") {
            Err(IbanError::Format(e)) => assert_eq!(e.value(), "ZZ"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_country() {
        assert!(!is_supported_country("US"));
        match validate("US12345678901234") {
            Err(IbanError::UnsupportedCountry(e)) => assert_eq!(e.country_code(), "US"),
            other => panic!("expected unsupported country, got {:?}", other),
        }
    }

    #[test]
    fn test_check_digit_presence() {
        assert_eq!(violation_of("DE"), FormatViolation::CheckDigitTwoDigits);
        assert_eq!(violation_of("DE8"), FormatViolation::CheckDigitTwoDigits);
        assert_eq!(violation_of("DEAB370400440532013000"), FormatViolation::CheckDigitOnlyDigits);
    }

    #[test]
    fn test_bban_length() {
        match validate("DE8937040044053201300") {
            Err(IbanError::Format(e)) => {
                assert_eq!(e.violation(), FormatViolation::BbanLength);
                let lengths = e.lengths().expect("lengths reported");
                assert_eq!(lengths.actual, 17);
                assert_eq!(lengths.expected, 18);
            }
            other => panic!("expected BBAN_LENGTH, got {:?}", other),
        }
    }

    #[test]
    fn test_bban_character_classes() {
        match validate("DE89370400440532A13000") {
            Err(IbanError::Format(e)) => {
                assert_eq!(e.violation(), FormatViolation::BbanOnlyDigits);
                assert_eq!(e.part_type(), Some(PartType::AccountNumber));
                assert_eq!(e.value(), "0532A13000");
                assert_eq!(e.invalid_char(), Some('A'));
            }
            other => panic!("expected BBAN_ONLY_DIGITS, got {:?}", other),
        }

        assert_eq!(violation_of("GB29NW1K60161331926819"), FormatViolation::BbanOnlyUpperCaseLetters);
        assert_eq!(violation_of("GB29nwbk60161331926819"), FormatViolation::BbanOnlyUpperCaseLetters);
        assert_eq!(violation_of("CH93007620116238529-7"), FormatViolation::BbanOnlyDigitsOrLetters);
        assert_eq!(violation_of("CH930076201162385295a"), FormatViolation::BbanOnlyDigitsOrLetters);
    }

    #[test]
    fn test_first_failing_part_wins() {
        // bank code and account number both broken: bank code reported
        match validate("GB29NW1K6016133192681X") {
            Err(IbanError::Format(e)) => assert_eq!(e.part_type(), Some(PartType::BankCode)),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_multibyte_input_is_rejected_not_panicking() {
        assert_eq!(violation_of("DÉ89370400440532013000"), FormatViolation::CountryCodeOnlyUpperCaseLetters);
        assert_eq!(violation_of("DE8９370400440532013000"), FormatViolation::CheckDigitOnlyDigits);
        assert_eq!(violation_of("DE89370400440532013ü00"), FormatViolation::BbanOnlyDigits);
    }

    #[test]
    fn test_invalid_check_digit() {
        match validate("DE89370400440532013001") {
            Err(IbanError::InvalidCheckDigit(e)) => {
                assert_eq!(e.actual(), "89");
                let fixed = replace_check_digit("DE89370400440532013001", e.expected());
                assert!(validate(&fixed).is_ok());
            }
            other => panic!("expected invalid check digit, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_default_format() {
        assert!(validate_with_format("DE89 3704 0044 0532 0130 00", IbanFormat::Default).is_ok());
        assert!(validate_with_format("DE89370400440532013000", IbanFormat::Compact).is_ok());

        match validate_with_format("DE89 37040044 0532 0130 00", IbanFormat::Default) {
            Err(IbanError::Format(e)) => assert_eq!(e.violation(), FormatViolation::IbanFormatting),
            other => panic!("expected IBAN_FORMATTING, got {:?}", other),
        }

        // unspaced input is not the display form
        assert!(validate_with_format("DE89370400440532013000", IbanFormat::Default).is_err());
    }

    #[test]
    fn test_lengths() {
        assert_eq!(iban_length("DE"), Some(22));
        assert_eq!(bban_length("DE"), Some(18));
        assert_eq!(iban_length("NO"), Some(15));
        assert_eq!(iban_length("US"), None);
        assert!(is_supported_country("GB"));
    }
}
