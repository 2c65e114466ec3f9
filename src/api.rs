// IBAN Structure - REST API with Axum
// Stateless: every handler is a pure function over the path or body.

use crate::batch::{check_value, BatchRecord, BatchSummary};
use crate::bban::BbanStructure;
use crate::bic::{Bic, BicDetails};
use crate::checksum::calculate_check_digit;
use crate::country::Country;
use crate::extract::replace_check_digit;
use crate::iban::{Iban, IbanDetails};
use anyhow::{Context, Result};
use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

pub const ADDR_ENV: &str = "IBAN_SERVER_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

// ============================================================================
// Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Read `IBAN_SERVER_ADDR`, falling back to `0.0.0.0:3000`
    pub fn from_env() -> Result<Self> {
        Self::from_value(std::env::var(ADDR_ENV).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Result<Self> {
        let raw = value.unwrap_or(DEFAULT_ADDR);
        let addr = raw
            .parse()
            .with_context(|| format!("{} is not a socket address: {}", ADDR_ENV, raw))?;
        Ok(ServerConfig { addr })
    }
}

// ============================================================================
// Responses
// ============================================================================

/// API Response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub kind: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Response {
        (
            StatusCode::OK,
            Json(ApiResponse {
                success: true,
                data: Some(data),
                error: None,
            }),
        )
            .into_response()
    }
}

fn fail(status: StatusCode, kind: &str, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                kind: kind.to_string(),
                message: message.into(),
            }),
        }),
    )
        .into_response()
}

#[derive(Debug, Serialize)]
struct CheckDigitResponse {
    check_digit: String,
    iban: String,
}

#[derive(Debug, Serialize)]
struct CountryResponse {
    #[serde(flatten)]
    country: &'static Country,
    iban_length: usize,
    bban_length: usize,
    structure: &'static BbanStructure,
}

impl CountryResponse {
    fn new(country: &'static Country, structure: &'static BbanStructure) -> Self {
        CountryResponse {
            country,
            iban_length: structure.bban_length() + 4,
            bban_length: structure.bban_length(),
            structure,
        }
    }
}

#[derive(Debug, Serialize)]
struct BatchResponse {
    summary: BatchSummary,
    records: Vec<BatchRecord>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> Response {
    ApiResponse::ok("OK")
}

/// GET /api/ibans/:iban - Validate and decompose (display form accepted)
async fn get_iban(Path(raw): Path<String>) -> Response {
    let compact: String = raw.split_whitespace().collect();

    match Iban::parse(&compact) {
        Ok(iban) => ApiResponse::<IbanDetails>::ok(iban.details()),
        Err(e) => fail(StatusCode::UNPROCESSABLE_ENTITY, e.kind(), e.to_string()),
    }
}

/// GET /api/ibans/:iban/check-digit - Compute the check digit
async fn get_check_digit(Path(raw): Path<String>) -> Response {
    let compact: String = raw.split_whitespace().collect();

    match calculate_check_digit(&compact) {
        Ok(check_digit) => ApiResponse::ok(CheckDigitResponse {
            iban: replace_check_digit(&compact, &check_digit),
            check_digit,
        }),
        Err(e) => fail(StatusCode::UNPROCESSABLE_ENTITY, e.violation().as_str(), e.to_string()),
    }
}

/// POST /api/ibans/batch - Validate a JSON array of IBANs
async fn post_batch(Json(ibans): Json<Vec<Option<String>>>) -> Response {
    let records: Vec<BatchRecord> = ibans
        .iter()
        .enumerate()
        .map(|(index, iban)| check_value(index + 1, iban.as_deref()))
        .collect();

    let summary = BatchSummary::from_records(&records);

    ApiResponse::ok(BatchResponse { summary, records })
}

/// GET /api/countries - Countries with an IBAN structure
async fn get_countries() -> Response {
    let countries: Vec<CountryResponse> = BbanStructure::supported_countries()
        .filter_map(|code| Some(CountryResponse::new(Country::by_code(code)?, BbanStructure::for_country(code)?)))
        .collect();

    ApiResponse::ok(countries)
}

/// GET /api/countries/:code - One country's BBAN layout
async fn get_country(Path(code): Path<String>) -> Response {
    let Some(country) = Country::by_code(&code) else {
        return fail(StatusCode::NOT_FOUND, "COUNTRY_CODE_EXISTS", format!("Unknown country code: {}", code));
    };

    match BbanStructure::for_country(&code) {
        Some(structure) => ApiResponse::ok(CountryResponse::new(country, structure)),
        None => fail(
            StatusCode::NOT_FOUND,
            "UNSUPPORTED_COUNTRY",
            format!("{} does not use IBAN", country.name),
        ),
    }
}

/// GET /api/bics/:bic - Validate a BIC
async fn get_bic(Path(raw): Path<String>) -> Response {
    match Bic::parse(&raw) {
        Ok(bic) => ApiResponse::ok(BicDetails::from(&bic)),
        Err(e) => fail(StatusCode::UNPROCESSABLE_ENTITY, e.kind(), e.to_string()),
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/ibans/batch", post(post_batch))
        .route("/ibans/:iban", get(get_iban))
        .route("/ibans/:iban/check-digit", get(get_check_digit))
        .route("/countries", get(get_countries))
        .route("/countries/:code", get(get_country))
        .route("/bics/:bic", get(get_bic));

    Router::new()
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Tests
// ============================================================================
