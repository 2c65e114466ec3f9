// 📦 Batch Validation - Check a CSV file of IBANs in one pass
//
// Input needs an `iban` (or `IBAN`) column; other columns are ignored.
// Bad IBANs are data, not errors: each row gets a record. Only I/O and CSV
// syntax problems fail the batch.

use crate::error::IbanError;
use crate::iban::{Iban, IbanDetails};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use std::path::Path;

const IBAN_HEADERS: [&str; 3] = ["iban", "IBAN", "Iban"];

#[derive(Debug, Deserialize)]
struct IbanRow {
    #[serde(alias = "IBAN", alias = "Iban")]
    iban: Option<String>,
}

/// Outcome for one input row
#[derive(Debug, Clone, Serialize)]
pub struct BatchRecord {
    /// 1-based data line (header excluded)
    pub line: usize,
    pub iban: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<IbanDetails>,
}

impl BatchRecord {
    fn ok(line: usize, iban: Iban) -> Self {
        BatchRecord {
            line,
            iban: iban.as_str().to_string(),
            valid: true,
            error_kind: None,
            message: None,
            details: Some(iban.details()),
        }
    }

    fn fail(line: usize, iban: String, error: &IbanError) -> Self {
        BatchRecord {
            line,
            iban,
            valid: false,
            error_kind: Some(error.kind().to_string()),
            message: Some(error.to_string()),
            details: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl BatchSummary {
    pub fn from_records(records: &[BatchRecord]) -> Self {
        let valid = records.iter().filter(|r| r.valid).count();
        BatchSummary {
            total: records.len(),
            valid,
            invalid: records.len() - valid,
        }
    }

    pub fn summary(&self) -> String {
        format!("{} IBANs: {} valid, {} invalid", self.total, self.valid, self.invalid)
    }
}

/// Validate one raw value; spaces inside the value are ignored
pub fn check_value(line: usize, raw: Option<&str>) -> BatchRecord {
    let compact: Option<String> = raw.map(|value| value.split_whitespace().collect());

    match Iban::parse_optional(compact.as_deref()) {
        Ok(iban) => BatchRecord::ok(line, iban),
        Err(e) => BatchRecord::fail(line, compact.unwrap_or_default(), &e),
    }
}

pub fn validate_reader<R: Read>(reader: R) -> Result<Vec<BatchRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().context("Failed to read CSV header")?;
    if !headers.iter().any(|h| IBAN_HEADERS.contains(&h)) {
        bail!("CSV has no iban column (found: {})", headers.iter().collect::<Vec<_>>().join(", "));
    }

    let mut records = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        let row: IbanRow = result.with_context(|| format!("Failed to read CSV row {}", index + 1))?;
        records.push(check_value(index + 1, row.iban.as_deref()));
    }

    Ok(records)
}

pub fn validate_csv(csv_path: &Path) -> Result<Vec<BatchRecord>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file {}", csv_path.display()))?;
    validate_reader(file)
}

/// Flat CSV report: line, iban, valid, error kind, message, formatted, bank code
pub fn write_report<W: Write>(records: &[BatchRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["line", "iban", "valid", "error_kind", "message", "formatted", "bank_code"])
        .context("Failed to write report header")?;

    for record in records {
        let details = record.details.as_ref();
        wtr.write_record([
            record.line.to_string(),
            record.iban.clone(),
            record.valid.to_string(),
            record.error_kind.clone().unwrap_or_default(),
            record.message.clone().unwrap_or_default(),
            details.map(|d| d.formatted.clone()).unwrap_or_default(),
            details.and_then(|d| d.bank_code.clone()).unwrap_or_default(),
        ])
        .context("Failed to write report row")?;
    }

    wtr.flush().context("Failed to flush report")?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
name,iban
alice,DE89370400440532013000
bob,GB29 NWBK 6016 1331 9268 19
carol,DE89370400440532013001
dave,US12345678901234
erin,
";

    #[test]
    fn test_validate_reader() {
        let records = validate_reader(INPUT.as_bytes()).unwrap();
        assert_eq!(records.len(), 5);

        assert!(records[0].valid);
        assert_eq!(records[0].line, 1);
        assert_eq!(
            records[0].details.as_ref().and_then(|d| d.bank_code.as_deref()),
            Some("37040044")
        );

        assert!(records[1].valid, "formatted input is compacted first");
        assert_eq!(records[1].iban, "GB29NWBK60161331926819");

        assert!(!records[2].valid);
        assert_eq!(records[2].error_kind.as_deref(), Some("INVALID_CHECK_DIGIT"));

        assert_eq!(records[3].error_kind.as_deref(), Some("UNSUPPORTED_COUNTRY"));

        assert!(!records[4].valid);
        assert_eq!(records[4].error_kind.as_deref(), Some("NOT_NULL"));
    }

    #[test]
    fn test_summary() {
        let records = validate_reader(INPUT.as_bytes()).unwrap();
        let summary = BatchSummary::from_records(&records);
        assert_eq!(summary, BatchSummary { total: 5, valid: 2, invalid: 3 });
        assert_eq!(summary.summary(), "5 IBANs: 2 valid, 3 invalid");
    }

    #[test]
    fn test_check_value_empty_string() {
        let record = check_value(1, Some("   "));
        assert!(!record.valid);
        assert_eq!(record.error_kind.as_deref(), Some("NOT_EMPTY"));
    }

    #[test]
    fn test_write_report() {
        let records = vec![
            check_value(1, Some("DE89370400440532013000")),
            check_value(2, Some("ZZ12345678901234")),
        ];
        let mut out = Vec::new();
        write_report(&records, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "line,iban,valid,error_kind,message,formatted,bank_code");
        assert_eq!(lines[1], "1,DE89370400440532013000,true,,,DE89 3704 0044 0532 0130 00,37040044");
        assert!(lines[2].starts_with("2,ZZ12345678901234,false,COUNTRY_CODE_EXISTS,"));
    }

    #[test]
    fn test_missing_iban_column_fails() {
        let err = validate_reader("name,account\nalice,DE89370400440532013000\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("CSV has no iban column"));

        let upper = validate_reader("IBAN\nDE89370400440532013000\n".as_bytes()).unwrap();
        assert!(upper[0].valid);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = validate_csv(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to open CSV file"));
    }
}
