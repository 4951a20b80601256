//! Response models for the Global Exchange Rates API.
//!
//! Every struct decodes from one JSON document. Container-level
//! `#[serde(default)]` mirrors the service's contract: fields it omits
//! decode to their zero values rather than failing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::date::RateDate;

/// A currency in the exchange rates system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Currency {
    /// ISO alpha code of the currency.
    pub code: String,
    /// Display name of the currency.
    pub name: String,
    /// Numeric ISO code of the currency.
    pub numeric_code: String,
    /// Whether the currency is obsolete.
    pub obsolete: bool,
}

/// A data provider for exchange rates, typically a central bank or tax
/// authority.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Provider {
    /// Provider code.
    pub code: String,
    /// Provider description.
    pub description: String,
    /// Country name where the provider is based.
    pub country: String,
    /// Country code where the provider is based.
    pub country_code: String,
    /// Reference currency code used by the provider.
    pub reference_currency: String,
    /// Whether the provider supports time series data.
    pub time_series: bool,
    /// Whether the provider publishes monthly data.
    pub monthly: bool,
}

/// Exchange rates for one provider, date, and base currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExchangeRateResponse {
    /// Provider code.
    pub provider: String,
    /// Date the rates apply to.
    pub date: RateDate,
    /// Base currency code.
    pub base: String,
    /// Rate per currency code.
    pub exchange_rates: HashMap<String, f64>,
}

/// Result of converting an amount into one or more target currencies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionResponse {
    /// Provider code.
    pub provider: String,
    /// Date of the rates used for the conversion.
    pub date: RateDate,
    /// Source currency code.
    pub base: String,
    /// Amount that was converted.
    pub amount: f64,
    /// Converted amount per target currency code.
    pub conversions: HashMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn decodes_a_full_exchange_rate_response() {
        let body = r#"{
            "provider": "ECB",
            "date": "2024-03-15",
            "base": "EUR",
            "exchangeRates": {"USD": 1.0892, "GBP": 0.8541}
        }"#;
        let resp: ExchangeRateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.provider, "ECB");
        assert_eq!(
            resp.date.date(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(resp.base, "EUR");
        assert_eq!(resp.exchange_rates["USD"], 1.0892);
    }

    #[test]
    fn missing_date_decodes_to_the_zero_value() {
        let body = r#"{"provider": "ECB", "base": "EUR", "exchangeRates": {}}"#;
        let resp: ExchangeRateResponse = serde_json::from_str(body).unwrap();
        assert!(resp.date.is_none());
    }

    #[test]
    fn decodes_a_currency_list() {
        let body = r#"[
            {"code": "USD", "name": "US Dollar", "numericCode": "840", "obsolete": false},
            {"code": "DEM", "name": "Deutsche Mark", "numericCode": "276", "obsolete": true}
        ]"#;
        let currencies: Vec<Currency> = serde_json::from_str(body).unwrap();
        assert_eq!(currencies.len(), 2);
        assert_eq!(currencies[0].numeric_code, "840");
        assert!(currencies[1].obsolete);
    }

    #[test]
    fn decodes_a_provider_with_capability_flags() {
        let body = r#"{
            "code": "ECB",
            "description": "European Central Bank",
            "country": "European Union",
            "countryCode": "EU",
            "referenceCurrency": "EUR",
            "timeSeries": true,
            "monthly": false
        }"#;
        let provider: Provider = serde_json::from_str(body).unwrap();
        assert_eq!(provider.reference_currency, "EUR");
        assert!(provider.time_series);
        assert!(!provider.monthly);
    }

    #[test]
    fn decodes_a_conversion_response() {
        let body = r#"{
            "provider": "ECB",
            "date": "2024-03-15",
            "base": "USD",
            "amount": 100.0,
            "conversions": {"EUR": 91.81, "GBP": 78.41}
        }"#;
        let resp: ConversionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.amount, 100.0);
        assert_eq!(resp.conversions["GBP"], 78.41);
    }
}
