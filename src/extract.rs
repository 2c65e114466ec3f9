// 🔍 Field Extractors - Pull BBAN parts and prefixes out of a raw IBAN
//
// Extraction does not validate. Feed it unchecked input and you get whatever
// characters sit at the layout's offsets (clipped on short input).

use crate::bban::{BbanStructure, PartType};
use crate::text::{substring, substring_from};

const COUNTRY_CODE_INDEX: usize = 0;
const COUNTRY_CODE_LENGTH: usize = 2;
const CHECK_DIGIT_INDEX: usize = COUNTRY_CODE_LENGTH;
const CHECK_DIGIT_LENGTH: usize = 2;
pub(crate) const BBAN_INDEX: usize = CHECK_DIGIT_INDEX + CHECK_DIGIT_LENGTH;

// ============================================================================
// PREFIX ACCESSORS
// ============================================================================

/// First two characters
pub fn country_code(iban: &str) -> &str {
    substring(iban, COUNTRY_CODE_INDEX, COUNTRY_CODE_INDEX + COUNTRY_CODE_LENGTH)
}

/// Characters 3 and 4
pub fn check_digit(iban: &str) -> &str {
    substring(iban, CHECK_DIGIT_INDEX, CHECK_DIGIT_INDEX + CHECK_DIGIT_LENGTH)
}

pub fn country_code_and_check_digit(iban: &str) -> &str {
    substring(iban, COUNTRY_CODE_INDEX, BBAN_INDEX)
}

/// Everything after the 4-character prefix
pub fn bban(iban: &str) -> &str {
    substring_from(iban, BBAN_INDEX)
}

/// Same IBAN with `check_digit` in positions 3-4
pub fn replace_check_digit(iban: &str, check_digit: &str) -> String {
    format!("{}{}{}", country_code(iban), check_digit, bban(iban))
}

/// Display form: groups of four separated by one space.
///
/// Whitespace in the input is dropped first, so formatting an already
/// formatted IBAN returns it unchanged.
pub fn to_formatted_string(iban: &str) -> String {
    let compact: Vec<char> = iban.chars().filter(|c| !c.is_whitespace()).collect();

    compact
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// BBAN PART EXTRACTION
// ============================================================================

/// Concatenation of every BBAN part tagged `part_type`, in layout order.
///
/// `None` when the country has no structure or the structure has no such part.
pub fn extract(iban: &str, part_type: PartType) -> Option<String> {
    let structure = BbanStructure::for_country(country_code(iban))?;

    structure
        .split(bban(iban))
        .filter(|(part, _)| part.part_type() == part_type)
        .fold(None, |acc: Option<String>, (_, value)| {
            let mut joined = acc.unwrap_or_default();
            joined.push_str(value);
            Some(joined)
        })
}

pub fn bank_code(iban: &str) -> Option<String> {
    extract(iban, PartType::BankCode)
}

pub fn branch_code(iban: &str) -> Option<String> {
    extract(iban, PartType::BranchCode)
}

pub fn account_number(iban: &str) -> Option<String> {
    extract(iban, PartType::AccountNumber)
}

pub fn national_check_digit(iban: &str) -> Option<String> {
    extract(iban, PartType::NationalCheckDigit)
}

pub fn account_type(iban: &str) -> Option<String> {
    extract(iban, PartType::AccountType)
}

pub fn owner_account_type(iban: &str) -> Option<String> {
    extract(iban, PartType::OwnerAccountType)
}

pub fn identification_number(iban: &str) -> Option<String> {
    extract(iban, PartType::IdentificationNumber)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const DE: &str = "DE89370400440532013000";

    #[test]
    fn test_prefix_accessors() {
        assert_eq!(country_code(DE), "DE");
        assert_eq!(check_digit(DE), "89");
        assert_eq!(country_code_and_check_digit(DE), "DE89");
        assert_eq!(bban(DE), "370400440532013000");
    }

    #[test]
    fn test_prefix_round_trip() {
        for iban in [DE, "GB29NWBK60161331926819", "BR1800360305000010009795493C1"] {
            let rebuilt = format!("{}{}{}", country_code(iban), check_digit(iban), bban(iban));
            assert_eq!(rebuilt, iban);
        }
    }

    #[test]
    fn test_accessors_on_short_input_do_not_panic() {
        assert_eq!(country_code("D"), "D");
        assert_eq!(check_digit("DE8"), "8");
        assert_eq!(bban("DE"), "");
        assert_eq!(country_code(""), "");
    }

    #[test]
    fn test_replace_check_digit() {
        assert_eq!(replace_check_digit(DE, "00"), "DE00370400440532013000");
    }

    #[test]
    fn test_to_formatted_string() {
        assert_eq!(to_formatted_string(DE), "DE89 3704 0044 0532 0130 00");
        assert_eq!(to_formatted_string("NO9386011117947"), "NO93 8601 1117 947");
        assert_eq!(to_formatted_string(""), "");
    }

    #[test]
    fn test_to_formatted_string_is_idempotent() {
        let once = to_formatted_string(DE);
        assert_eq!(to_formatted_string(&once), once);
        assert_eq!(to_formatted_string("DE89 37040044 0532013000 "), once);
    }

    #[test]
    fn test_german_fields() {
        assert_eq!(bank_code(DE).as_deref(), Some("37040044"));
        assert_eq!(account_number(DE).as_deref(), Some("0532013000"));
        assert_eq!(branch_code(DE), None);
        assert_eq!(national_check_digit(DE), None);
    }

    #[test]
    fn test_split_national_check_digit_concatenates() {
        // HU has a national check digit before and after the account number
        let hu = "HU42117730161111101800000000";
        assert_eq!(bank_code(hu).as_deref(), Some("117"));
        assert_eq!(branch_code(hu).as_deref(), Some("7301"));
        assert_eq!(account_number(hu).as_deref(), Some("111110180000000"));
        assert_eq!(national_check_digit(hu).as_deref(), Some("60"));
    }

    #[test]
    fn test_brazil_account_and_owner_type() {
        let br = "BR1800360305000010009795493C1";
        assert_eq!(bank_code(br).as_deref(), Some("00360305"));
        assert_eq!(branch_code(br).as_deref(), Some("00001"));
        assert_eq!(account_number(br).as_deref(), Some("0009795493"));
        assert_eq!(account_type(br).as_deref(), Some("C"));
        assert_eq!(owner_account_type(br).as_deref(), Some("1"));
    }

    #[test]
    fn test_iceland_identification_number() {
        let is = "IS140159260076545510730339";
        assert_eq!(bank_code(is).as_deref(), Some("0159"));
        assert_eq!(branch_code(is).as_deref(), Some("26"));
        assert_eq!(account_number(is).as_deref(), Some("007654"));
        assert_eq!(identification_number(is).as_deref(), Some("5510730339"));
    }

    #[test]
    fn test_unsupported_country_extracts_nothing() {
        assert_eq!(bank_code("US12345678901234"), None);
        assert_eq!(extract("", PartType::BankCode), None);
    }
}
