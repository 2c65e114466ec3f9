// 🗺️ Structure Registry - BBAN layouts per country
//
// Layouts follow the SWIFT IBAN registry. Each entry lists parts in the
// order they appear in the BBAN.

use super::part::{CharacterType, StructurePart as P};
use super::BbanStructure;
use once_cell::sync::Lazy;
use std::collections::HashMap;

const A: CharacterType = CharacterType::Letters;
const N: CharacterType = CharacterType::Digits;
const C: CharacterType = CharacterType::Alphanumeric;

/// (country code, BBAN parts) in alphabetical order
pub(crate) const BBAN_TABLE: &[(&str, &[P])] = &[
    ("AD", &[P::bank_code(4, N), P::branch_code(4, N), P::account_number(12, C)]),
    ("AE", &[P::bank_code(3, N), P::account_number(16, N)]),
    ("AL", &[P::bank_code(3, N), P::branch_code(4, N), P::national_check_digit(1, N), P::account_number(16, C)]),
    ("AT", &[P::bank_code(5, N), P::account_number(11, N)]),
    ("AZ", &[P::bank_code(4, A), P::account_number(20, C)]),
    ("BA", &[P::bank_code(3, N), P::branch_code(3, N), P::account_number(8, N), P::national_check_digit(2, N)]),
    ("BE", &[P::bank_code(3, N), P::account_number(7, N), P::national_check_digit(2, N)]),
    ("BG", &[P::bank_code(4, A), P::branch_code(4, N), P::account_type(2, N), P::account_number(8, C)]),
    ("BH", &[P::bank_code(4, A), P::account_number(14, C)]),
    ("BI", &[P::bank_code(5, N), P::branch_code(5, N), P::account_number(11, N), P::national_check_digit(2, N)]),
    ("BR", &[P::bank_code(8, N), P::branch_code(5, N), P::account_number(10, N), P::account_type(1, A), P::owner_account_type(1, C)]),
    ("BY", &[P::bank_code(4, C), P::branch_code(4, N), P::account_number(16, C)]),
    ("CH", &[P::bank_code(5, N), P::account_number(12, C)]),
    ("CR", &[P::bank_code(4, N), P::account_number(14, N)]),
    ("CY", &[P::bank_code(3, N), P::branch_code(5, N), P::account_number(16, C)]),
    ("CZ", &[P::bank_code(4, N), P::account_number(16, N)]),
    ("DE", &[P::bank_code(8, N), P::account_number(10, N)]),
    ("DJ", &[P::bank_code(5, N), P::branch_code(5, N), P::account_number(11, N), P::national_check_digit(2, N)]),
    ("DK", &[P::bank_code(4, N), P::account_number(10, N)]),
    ("DO", &[P::bank_code(4, C), P::account_number(20, N)]),
    ("EE", &[P::bank_code(2, N), P::branch_code(2, N), P::account_number(11, N), P::national_check_digit(1, N)]),
    ("EG", &[P::bank_code(4, N), P::branch_code(4, N), P::account_number(17, N)]),
    ("ES", &[P::bank_code(4, N), P::branch_code(4, N), P::national_check_digit(2, N), P::account_number(10, N)]),
    ("FI", &[P::bank_code(6, N), P::account_number(7, N), P::national_check_digit(1, N)]),
    ("FO", &[P::bank_code(4, N), P::account_number(9, N), P::national_check_digit(1, N)]),
    ("FR", &[P::bank_code(5, N), P::branch_code(5, N), P::account_number(11, C), P::national_check_digit(2, N)]),
    ("GB", &[P::bank_code(4, A), P::branch_code(6, N), P::account_number(8, N)]),
    ("GE", &[P::bank_code(2, A), P::account_number(16, N)]),
    ("GI", &[P::bank_code(4, A), P::account_number(15, C)]),
    ("GL", &[P::bank_code(4, N), P::account_number(10, N)]),
    ("GR", &[P::bank_code(3, N), P::branch_code(4, N), P::account_number(16, C)]),
    ("GT", &[P::bank_code(4, C), P::account_number(20, C)]),
    ("HR", &[P::bank_code(7, N), P::account_number(10, N)]),
    ("HU", &[P::bank_code(3, N), P::branch_code(4, N), P::national_check_digit(1, N), P::account_number(15, N), P::national_check_digit(1, N)]),
    ("IE", &[P::bank_code(4, A), P::branch_code(6, N), P::account_number(8, N)]),
    ("IL", &[P::bank_code(3, N), P::branch_code(3, N), P::account_number(13, N)]),
    ("IQ", &[P::bank_code(4, A), P::branch_code(3, N), P::account_number(12, N)]),
    ("IS", &[P::bank_code(4, N), P::branch_code(2, N), P::account_number(6, N), P::identification_number(10, N)]),
    ("IT", &[P::national_check_digit(1, A), P::bank_code(5, N), P::branch_code(5, N), P::account_number(12, C)]),
    ("JO", &[P::bank_code(4, A), P::branch_code(4, N), P::account_number(18, C)]),
    ("KW", &[P::bank_code(4, A), P::account_number(22, C)]),
    ("KZ", &[P::bank_code(3, N), P::account_number(13, C)]),
    ("LB", &[P::bank_code(4, N), P::account_number(20, C)]),
    ("LC", &[P::bank_code(4, A), P::account_number(24, C)]),
    ("LI", &[P::bank_code(5, N), P::account_number(12, C)]),
    ("LT", &[P::bank_code(5, N), P::account_number(11, N)]),
    ("LU", &[P::bank_code(3, N), P::account_number(13, C)]),
    ("LV", &[P::bank_code(4, A), P::account_number(13, C)]),
    ("LY", &[P::bank_code(3, N), P::branch_code(3, N), P::account_number(15, N)]),
    ("MC", &[P::bank_code(5, N), P::branch_code(5, N), P::account_number(11, C), P::national_check_digit(2, N)]),
    ("MD", &[P::bank_code(2, C), P::account_number(18, C)]),
    ("ME", &[P::bank_code(3, N), P::account_number(13, N), P::national_check_digit(2, N)]),
    ("MK", &[P::bank_code(3, N), P::account_number(10, C), P::national_check_digit(2, N)]),
    ("MR", &[P::bank_code(5, N), P::branch_code(5, N), P::account_number(11, N), P::national_check_digit(2, N)]),
    ("MT", &[P::bank_code(4, A), P::branch_code(5, N), P::account_number(18, C)]),
    ("MU", &[P::bank_code(6, C), P::branch_code(2, N), P::account_number(18, C)]),
    ("NL", &[P::bank_code(4, A), P::account_number(10, N)]),
    ("NO", &[P::bank_code(4, N), P::account_number(6, N), P::national_check_digit(1, N)]),
    ("PK", &[P::bank_code(4, C), P::account_number(16, N)]),
    ("PL", &[P::bank_code(3, N), P::branch_code(4, N), P::national_check_digit(1, N), P::account_number(16, N)]),
    ("PS", &[P::bank_code(4, A), P::account_number(21, C)]),
    ("PT", &[P::bank_code(4, N), P::branch_code(4, N), P::account_number(11, N), P::national_check_digit(2, N)]),
    ("QA", &[P::bank_code(4, A), P::account_number(21, C)]),
    ("RO", &[P::bank_code(4, A), P::account_number(16, C)]),
    ("RS", &[P::bank_code(3, N), P::account_number(13, N), P::national_check_digit(2, N)]),
    ("RU", &[P::bank_code(9, N), P::branch_code(5, N), P::account_number(15, C)]),
    ("SA", &[P::bank_code(2, N), P::account_number(18, C)]),
    ("SC", &[P::bank_code(4, A), P::branch_code(4, N), P::account_number(16, N), P::account_type(3, A)]),
    ("SD", &[P::bank_code(2, N), P::account_number(12, N)]),
    ("SE", &[P::bank_code(3, N), P::account_number(17, N)]),
    ("SI", &[P::bank_code(2, N), P::branch_code(3, N), P::account_number(8, N), P::national_check_digit(2, N)]),
    ("SK", &[P::bank_code(4, N), P::account_number(16, N)]),
    ("SM", &[P::national_check_digit(1, A), P::bank_code(5, N), P::branch_code(5, N), P::account_number(12, C)]),
    ("ST", &[P::bank_code(4, N), P::branch_code(4, N), P::account_number(13, N)]),
    ("SV", &[P::bank_code(4, A), P::account_number(20, N)]),
    ("TL", &[P::bank_code(3, N), P::account_number(14, N), P::national_check_digit(2, N)]),
    ("TN", &[P::bank_code(2, N), P::branch_code(3, N), P::account_number(15, C)]),
    ("TR", &[P::bank_code(5, N), P::account_number(17, C)]),
    ("UA", &[P::bank_code(6, N), P::account_number(19, C)]),
    ("VA", &[P::bank_code(3, N), P::account_number(15, N)]),
    ("VG", &[P::bank_code(4, A), P::account_number(16, N)]),
    ("XK", &[P::bank_code(2, N), P::branch_code(2, N), P::account_number(10, N), P::national_check_digit(2, N)]),
];

pub(crate) static STRUCTURES: Lazy<HashMap<&'static str, BbanStructure>> = Lazy::new(|| {
    BBAN_TABLE
        .iter()
        .map(|(code, parts)| (*code, BbanStructure::new(parts.to_vec())))
        .collect()
});

// ============================================================================
// TESTS
// ============================================================================
