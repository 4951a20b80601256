//! One method per remote operation, plus the option bundles they take.
//!
//! Every operation accepts `Option<…Options>`; passing `None` sends no
//! optional query parameters. List-valued parameters go on the wire as
//! a single comma-joined value.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use globalrates_types::{ConversionResponse, Currency, ExchangeRateResponse, Provider};

use crate::{Client, ClientError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Options for [`Client::get_currencies`].
#[derive(Debug, Clone, Default)]
pub struct GetCurrenciesOptions {
    /// Restrict the result to these currency codes.
    pub codes: Vec<String>,
}

/// Options for [`Client::get_providers`].
#[derive(Debug, Clone, Default)]
pub struct GetProvidersOptions {
    /// Restrict the result to these provider codes.
    pub codes: Vec<String>,
    /// Restrict the result to providers from this country.
    pub country_code: Option<String>,
}

/// Options for [`Client::get_latest`].
#[derive(Debug, Clone, Default)]
pub struct GetLatestOptions {
    /// Provider code to query.
    pub provider: Option<String>,
    /// Currencies to include in the response.
    pub currencies: Vec<String>,
    /// Base currency for the rates.
    pub base_currency: Option<String>,
}

/// Options for [`Client::get_historical`].
#[derive(Debug, Clone, Default)]
pub struct GetHistoricalOptions {
    /// Ask for the latest rates published up to the date rather than
    /// the rates of the date itself.
    pub latest: bool,
    /// Provider code to query.
    pub provider: Option<String>,
    /// Currencies to include in the response.
    pub currencies: Vec<String>,
    /// Base currency for the rates.
    pub base_currency: Option<String>,
}

/// Options for [`Client::convert`].
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Source currency code.
    pub base_currency: Option<String>,
    /// Target currency codes.
    pub to_currencies: Vec<String>,
    /// Provider code to query.
    pub provider: Option<String>,
    /// Date for historical conversions.
    pub date: Option<NaiveDate>,
}

impl Client {
    /// Gets the list of supported currencies.
    pub async fn get_currencies(
        &self,
        options: Option<GetCurrenciesOptions>,
    ) -> Result<Vec<Currency>, ClientError> {
        let mut params = BTreeMap::new();

        if let Some(options) = options {
            if !options.codes.is_empty() {
                params.insert("code", options.codes.join(","));
            }
        }

        self.send_request("/currencies", &params).await
    }

    /// Gets the list of supported providers.
    pub async fn get_providers(
        &self,
        options: Option<GetProvidersOptions>,
    ) -> Result<Vec<Provider>, ClientError> {
        let mut params = BTreeMap::new();

        if let Some(options) = options {
            if !options.codes.is_empty() {
                params.insert("code", options.codes.join(","));
            }
            if let Some(country_code) = options.country_code {
                params.insert("countryCode", country_code);
            }
        }

        self.send_request("/providers", &params).await
    }

    /// Gets the latest exchange rates.
    pub async fn get_latest(
        &self,
        options: Option<GetLatestOptions>,
    ) -> Result<ExchangeRateResponse, ClientError> {
        let mut params = BTreeMap::new();

        if let Some(options) = options {
            if let Some(provider) = options.provider {
                params.insert("provider", provider);
            }
            if !options.currencies.is_empty() {
                params.insert("currencies", options.currencies.join(","));
            }
            if let Some(base) = options.base_currency {
                params.insert("base", base);
            }
        }

        self.send_request("/latest", &params).await
    }

    /// Gets historical exchange rates for a specific date.
    pub async fn get_historical(
        &self,
        date: NaiveDate,
        options: Option<GetHistoricalOptions>,
    ) -> Result<ExchangeRateResponse, ClientError> {
        let mut params = BTreeMap::new();
        params.insert("date", date.format(DATE_FORMAT).to_string());

        if let Some(options) = options {
            if options.latest {
                params.insert("latest", "true".to_string());
            }
            if let Some(provider) = options.provider {
                params.insert("provider", provider);
            }
            if !options.currencies.is_empty() {
                params.insert("currencies", options.currencies.join(","));
            }
            if let Some(base) = options.base_currency {
                params.insert("base", base);
            }
        }

        self.send_request("/historical", &params).await
    }

    /// Converts an amount from one currency to others.
    pub async fn convert(
        &self,
        amount: f64,
        options: Option<ConvertOptions>,
    ) -> Result<ConversionResponse, ClientError> {
        let mut params = BTreeMap::new();
        params.insert("amount", format_amount(amount));

        if let Some(options) = options {
            if let Some(base) = options.base_currency {
                params.insert("base", base);
            }
            if !options.to_currencies.is_empty() {
                params.insert("to", options.to_currencies.join(","));
            }
            if let Some(provider) = options.provider {
                params.insert("provider", provider);
            }
            if let Some(date) = options.date {
                params.insert("date", date.format(DATE_FORMAT).to_string());
            }
        }

        self.send_request("/convert", &params).await
    }
}

/// Renders an amount with at most six decimal places, stripping
/// trailing zeros so `12.340000` goes on the wire as `12.34` and
/// `5.000000` as `5`.
///
/// Rounding rule: Rust's float formatter rounds the stored binary value
/// to the nearest sixth decimal, ties to even. Locale never enters the
/// picture.
fn format_amount(amount: f64) -> String {
    let s = format!("{amount:.6}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_amount_strips_trailing_zeros() {
        assert_eq!(format_amount(12.34), "12.34");
        assert_eq!(format_amount(1.5), "1.5");
        assert_eq!(format_amount(0.1), "0.1");
    }

    #[test]
    fn format_amount_strips_a_bare_decimal_point() {
        assert_eq!(format_amount(5.0), "5");
        assert_eq!(format_amount(2.0), "2");
        assert_eq!(format_amount(100.0), "100");
    }

    #[test]
    fn format_amount_rounds_to_six_places() {
        // 0.1234565 is stored just below the midpoint, so nearest
        // rounding lands on 0.123456.
        assert_eq!(format_amount(0.1234565), "0.123456");
        assert_eq!(format_amount(1234567.891234), "1234567.891234");
        assert_eq!(format_amount(0.000001), "0.000001");
        assert_eq!(format_amount(0.0000004), "0");
    }

    #[test]
    fn format_amount_is_idempotent_on_its_own_output() {
        for input in [12.34, 5.0, 0.125, 1.5] {
            let once = format_amount(input);
            let again = format_amount(once.parse().unwrap());
            assert_eq!(once, again);
        }
    }
}
