use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use iban_structure::{
    calculate_check_digit, extract, iban_length, replace_check_digit, to_formatted_string, validate_csv,
    validate_with_format, write_report, BatchSummary, Bic, BicDetails, Country, Iban, IbanFormat, PartType,
};

#[derive(Parser)]
#[command(name = "iban")]
#[command(about = "IBAN Structure - validate and decompose IBANs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an IBAN
    Validate {
        iban: String,
        /// Input is in display form (groups of four separated by spaces)
        #[arg(long)]
        formatted: bool,
    },

    /// Compute the check digit for an IBAN (existing digits are ignored)
    CheckDigit { iban: String },

    /// Validate and print every BBAN field
    Inspect {
        iban: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the display form of an IBAN
    Format { iban: String },

    /// Validate a BIC / SWIFT code
    Bic { bic: String },

    /// Validate every IBAN in a CSV file with an `iban` column
    Batch {
        csv: PathBuf,
        /// Write the CSV report here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// List known countries
    Countries {
        /// Only countries with an IBAN structure
        #[arg(long)]
        supported: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { iban, formatted } => run_validate(&iban, formatted),
        Commands::CheckDigit { iban } => run_check_digit(&iban),
        Commands::Inspect { iban, json } => run_inspect(&iban, json),
        Commands::Format { iban } => {
            println!("{}", to_formatted_string(&iban));
            Ok(())
        }
        Commands::Bic { bic } => run_bic(&bic),
        Commands::Batch { csv, output } => run_batch(&csv, output),
        Commands::Countries { supported } => run_countries(supported),
    }
}

fn run_validate(iban: &str, formatted: bool) -> Result<()> {
    let format = if formatted { IbanFormat::Default } else { IbanFormat::Compact };
    debug!(iban, ?format, "validating");

    match validate_with_format(iban, format) {
        Ok(()) => {
            println!("✓ {} is valid", iban);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {} [{}]", e, e.kind());
            std::process::exit(1);
        }
    }
}

fn run_check_digit(iban: &str) -> Result<()> {
    let check_digit = calculate_check_digit(iban)?;
    println!("{}", check_digit);
    println!("{}", replace_check_digit(iban, &check_digit));
    Ok(())
}

fn run_inspect(iban: &str, json: bool) -> Result<()> {
    let iban = match Iban::parse(iban) {
        Ok(iban) => iban,
        Err(e) => {
            eprintln!("❌ {} [{}]", e, e.kind());
            std::process::exit(1);
        }
    };

    let details = iban.details();

    if json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    println!("🏦 {}", details.formatted);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Country:              {} ({})", details.country_code, details.country_name.as_deref().unwrap_or("?"));
    println!("  Check digit:          {}", details.check_digit);
    println!("  BBAN:                 {}", details.bban);

    if let Some(structure) = iban.bban_structure() {
        let layout: Vec<String> = structure
            .parts()
            .iter()
            .map(|p| format!("{}{}", p.length(), p.character_type().code()))
            .collect();
        println!("  Layout:               {}", layout.join(" "));
    }

    for part_type in PartType::ALL {
        if let Some(value) = extract(iban.as_str(), part_type) {
            println!("  {:<22}{}", format!("{}:", part_type.as_str()), value);
        }
    }

    Ok(())
}

fn run_bic(bic: &str) -> Result<()> {
    match Bic::parse(bic) {
        Ok(bic) => {
            let details = BicDetails::from(&bic);
            println!("✓ {} is valid", bic);
            println!("{}", serde_json::to_string_pretty(&details)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {} [{}]", e, e.kind());
            std::process::exit(1);
        }
    }
}

fn run_batch(csv: &Path, output: Option<PathBuf>) -> Result<()> {
    info!(path = %csv.display(), "validating batch");

    let records = validate_csv(csv)?;
    let summary = BatchSummary::from_records(&records);

    match output {
        Some(path) => {
            let file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create report {}", path.display()))?;
            write_report(&records, file)?;
            info!(path = %path.display(), "report written");
        }
        None => write_report(&records, std::io::stdout())?,
    }

    info!("{}", summary.summary());

    if summary.invalid > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn run_countries(supported_only: bool) -> Result<()> {
    for country in Country::all() {
        let length = iban_length(country.alpha2);
        if supported_only && length.is_none() {
            continue;
        }

        let length = length.map(|l| l.to_string()).unwrap_or_else(|| "-".to_string());
        println!("{}  {:<3} {:>2}  {}", country.alpha2, country.alpha3, length, country.name);
    }
    Ok(())
}
