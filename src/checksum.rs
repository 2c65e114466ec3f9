// 🔢 Checksum Engine - ISO 7064 mod-97-10
//
// The IBAN is rearranged as BBAN + country code + check digit, letters become
// 10..35 and the resulting decimal string is reduced mod 97. The running total
// is folded back below 97 whenever it passes MAX, so no big integers are needed.

use crate::error::{FormatViolation, IbanError, IbanFormatError, InvalidCheckDigitError};
use crate::extract::{bban, check_digit, country_code_and_check_digit, replace_check_digit};

const MOD: u64 = 97;
const MAX: u64 = 999_999_999;

/// Check digit used while computing a fresh one
pub const DEFAULT_CHECK_DIGIT: &str = "00";

/// Residue of the rearranged IBAN mod 97, in `0..=96`
pub fn calculate_mod(iban: &str) -> Result<u32, IbanFormatError> {
    let rearranged = format!("{}{}", bban(iban), country_code_and_check_digit(iban));
    let mut total: u64 = 0;

    for (index, ch) in rearranged.chars().enumerate() {
        // to_digit(36) maps 0-9 to 0..9 and a-z / A-Z to 10..35, ASCII only
        let value = ch.to_ascii_uppercase().to_digit(36).ok_or_else(|| {
            IbanFormatError::new(
                FormatViolation::InvalidCharacter,
                ch.to_string(),
                format!("Invalid Character[{}] = '{}'", index, ch),
            )
            .with_invalid_char(ch)
        })? as u64;

        total = if value > 9 { total * 100 + value } else { total * 10 + value };

        if total > MAX {
            total %= MOD;
        }
    }

    Ok((total % MOD) as u32)
}

/// Two-digit check digit for `iban`, ignoring whatever digits it carries now
pub fn calculate_check_digit(iban: &str) -> Result<String, IbanFormatError> {
    let reformatted = replace_check_digit(iban, DEFAULT_CHECK_DIGIT);
    let modulo = calculate_mod(&reformatted)?;

    Ok(format!("{:02}", 98 - modulo))
}

/// Passes when the IBAN's residue is 1
pub fn validate_check_digit(iban: &str) -> Result<(), IbanError> {
    if calculate_mod(iban)? == 1 {
        return Ok(());
    }

    let expected = calculate_check_digit(iban)?;
    let actual = check_digit(iban);

    Err(InvalidCheckDigitError::new(
        actual,
        expected.as_str(),
        format!(
            "[{}] has invalid check digit: {}, expected check digit is: {}",
            iban, actual, expected
        ),
    )
    .into())
}

// ============================================================================
// TESTS
// ============================================================================
