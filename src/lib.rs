// IBAN Structure - Core Library
// Validates IBANs against per-country BBAN layouts and the mod-97 check digit,
// and extracts bank code, branch code, account number and friends.
// Exposes all modules for use in the CLI, API server, and tests.

pub mod error;
pub mod country;
pub mod bban;           // Structure Part + BBAN Structure + registry
pub mod checksum;       // ISO 7064 mod-97-10
pub mod validation;     // Validation facade
pub mod extract;        // Field extractors
pub mod iban;           // Validated Iban value
pub mod bic;            // ISO 9362 BIC validation
pub mod batch;          // CSV batch validation

#[cfg(feature = "server")]
pub mod api;            // REST API (axum)

mod text;

// Re-export commonly used types
pub use error::{
    BicError, BicFormatError, BicFormatViolation,
    FormatViolation, IbanError, IbanFormatError, InvalidCheckDigitError,
    LengthMismatch, UnsupportedCountryError,
};
pub use country::Country;
pub use bban::{BbanStructure, CharacterType, PartType, StructurePart};
pub use checksum::{calculate_check_digit, calculate_mod, validate_check_digit};
pub use validation::{
    bban_length, iban_length, is_supported_country, is_valid,
    validate, validate_optional, validate_with_format, IbanFormat,
};
pub use extract::{
    account_number, account_type, bank_code, bban, branch_code,
    check_digit, country_code, country_code_and_check_digit, extract,
    identification_number, national_check_digit, owner_account_type,
    replace_check_digit, to_formatted_string,
};
pub use iban::{Iban, IbanDetails};
pub use bic::{is_valid_bic, validate_bic, validate_bic_optional, Bic, BicDetails};
pub use batch::{
    check_value, validate_csv, validate_reader, write_report,
    BatchRecord, BatchSummary,
};
