// 🧩 Structure Part - One fixed-width field of a BBAN
//
// A part knows its length, which characters it accepts and what it means
// (bank code, account number, ...). Parts are plain `Copy` values so the
// country table can be written as `const` data.

use serde::Serialize;

// ============================================================================
// CHARACTER TYPE
// ============================================================================

/// Character class a BBAN part accepts
///
/// Alphanumeric parts accept upper case letters and digits only (ISO 13616).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterType {
    /// `A-Z`
    Letters,

    /// `0-9`
    Digits,

    /// `A-Z` or `0-9`
    Alphanumeric,
}

impl CharacterType {
    pub fn matches(&self, ch: char) -> bool {
        match self {
            CharacterType::Letters => ch.is_ascii_uppercase(),
            CharacterType::Digits => ch.is_ascii_digit(),
            CharacterType::Alphanumeric => ch.is_ascii_uppercase() || ch.is_ascii_digit(),
        }
    }

    /// Single-letter code used by the IBAN registry (`a`, `n`, `c`)
    pub fn code(&self) -> char {
        match self {
            CharacterType::Letters => 'a',
            CharacterType::Digits => 'n',
            CharacterType::Alphanumeric => 'c',
        }
    }
}

// ============================================================================
// PART TYPE
// ============================================================================

/// Semantic tag of a BBAN part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PartType {
    BankCode,
    BranchCode,
    AccountNumber,
    NationalCheckDigit,
    AccountType,
    OwnerAccountType,
    IdentificationNumber,
}

impl PartType {
    pub const ALL: [PartType; 7] = [
        PartType::BankCode,
        PartType::BranchCode,
        PartType::AccountNumber,
        PartType::NationalCheckDigit,
        PartType::AccountType,
        PartType::OwnerAccountType,
        PartType::IdentificationNumber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::BankCode => "Bank Code",
            PartType::BranchCode => "Branch Code",
            PartType::AccountNumber => "Account Number",
            PartType::NationalCheckDigit => "National Check Digit",
            PartType::AccountType => "Account Type",
            PartType::OwnerAccountType => "Owner Account Type",
            PartType::IdentificationNumber => "Identification Number",
        }
    }
}

// ============================================================================
// STRUCTURE PART
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StructurePart {
    part_type: PartType,
    character_type: CharacterType,
    length: usize,
}

impl StructurePart {
    pub const fn new(part_type: PartType, length: usize, character_type: CharacterType) -> Self {
        StructurePart {
            part_type,
            character_type,
            length,
        }
    }

    pub const fn bank_code(length: usize, character_type: CharacterType) -> Self {
        Self::new(PartType::BankCode, length, character_type)
    }

    pub const fn branch_code(length: usize, character_type: CharacterType) -> Self {
        Self::new(PartType::BranchCode, length, character_type)
    }

    pub const fn account_number(length: usize, character_type: CharacterType) -> Self {
        Self::new(PartType::AccountNumber, length, character_type)
    }

    pub const fn national_check_digit(length: usize, character_type: CharacterType) -> Self {
        Self::new(PartType::NationalCheckDigit, length, character_type)
    }

    pub const fn account_type(length: usize, character_type: CharacterType) -> Self {
        Self::new(PartType::AccountType, length, character_type)
    }

    pub const fn owner_account_type(length: usize, character_type: CharacterType) -> Self {
        Self::new(PartType::OwnerAccountType, length, character_type)
    }

    pub const fn identification_number(length: usize, character_type: CharacterType) -> Self {
        Self::new(PartType::IdentificationNumber, length, character_type)
    }

    pub fn part_type(&self) -> PartType {
        self.part_type
    }

    pub fn character_type(&self) -> CharacterType {
        self.character_type
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// True when `value` has exactly this part's length and only accepted characters
    pub fn validate(&self, value: &str) -> bool {
        value.chars().count() == self.length && self.first_invalid_char(value).is_none()
    }

    /// First character in `value` outside this part's character class
    pub fn first_invalid_char(&self, value: &str) -> Option<char> {
        value.chars().find(|ch| !self.character_type.matches(*ch))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_type_matches() {
        assert!(CharacterType::Letters.matches('A'));
        assert!(!CharacterType::Letters.matches('a'));
        assert!(!CharacterType::Letters.matches('1'));

        assert!(CharacterType::Digits.matches('7'));
        assert!(!CharacterType::Digits.matches('Z'));

        assert!(CharacterType::Alphanumeric.matches('Q'));
        assert!(CharacterType::Alphanumeric.matches('0'));
        assert!(!CharacterType::Alphanumeric.matches('q'));
        assert!(!CharacterType::Alphanumeric.matches('-'));
    }

    #[test]
    fn test_non_ascii_never_matches() {
        for ch in ['Ä', '٣', 'é'] {
            assert!(!CharacterType::Letters.matches(ch));
            assert!(!CharacterType::Digits.matches(ch));
            assert!(!CharacterType::Alphanumeric.matches(ch));
        }
    }

    #[test]
    fn test_part_validate() {
        let bank = StructurePart::bank_code(8, CharacterType::Digits);
        assert!(bank.validate("37040044"));
        assert!(!bank.validate("3704004"), "too short");
        assert!(!bank.validate("3704004X"));

        let letters = StructurePart::bank_code(4, CharacterType::Letters);
        assert!(letters.validate("NWBK"));
        assert!(!letters.validate("nwbk"));
    }

    #[test]
    fn test_first_invalid_char() {
        let part = StructurePart::account_number(10, CharacterType::Digits);
        assert_eq!(part.first_invalid_char("05320A3000"), Some('A'));
        assert_eq!(part.first_invalid_char("0532013000"), None);
    }

    #[test]
    fn test_constructors_tag_parts() {
        assert_eq!(StructurePart::branch_code(5, CharacterType::Digits).part_type(), PartType::BranchCode);
        assert_eq!(StructurePart::national_check_digit(2, CharacterType::Digits).part_type(), PartType::NationalCheckDigit);
        assert_eq!(StructurePart::account_type(1, CharacterType::Letters).part_type(), PartType::AccountType);
        assert_eq!(StructurePart::owner_account_type(1, CharacterType::Alphanumeric).part_type(), PartType::OwnerAccountType);
        assert_eq!(StructurePart::identification_number(10, CharacterType::Digits).part_type(), PartType::IdentificationNumber);
        assert_eq!(CharacterType::Alphanumeric.code(), 'c');
    }

    #[test]
    fn test_part_type_labels() {
        let labels: Vec<&str> = PartType::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0], "Bank Code");
        assert_eq!(labels[6], "Identification Number");
    }
}
