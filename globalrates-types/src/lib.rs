//! # Global Exchange Rates Types
//!
//! Wire models and error types for the Global Exchange Rates API.
//! This crate has ZERO IO dependencies - only data structures and the
//! (de)serialization rules the API's JSON requires.

pub mod date;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use date::{DateParseError, RateDate};
pub use error::{ApiError, ErrorResponse};
pub use models::{ConversionResponse, Currency, ExchangeRateResponse, Provider};
