//! # Global Exchange Rates Client SDK
//!
//! A typed async Rust client for the [Global Exchange Rates
//! API](https://globalexchangerates.org/), which serves official
//! exchange rates published by central banks and tax authorities
//! (providers) worldwide.
//!
//! # Getting started
//!
//! Sign up on the developer portal to obtain an API key, then build a
//! client and call the operation you need:
//!
//! ```no_run
//! # async fn run() -> Result<(), globalrates_client::ClientError> {
//! use globalrates_client::Client;
//!
//! let client = Client::new("your_api_key")?;
//! let rates = client.get_latest(None).await?;
//! println!("{} rates as of {}", rates.base, rates.date);
//! # Ok(())
//! # }
//! ```
//!
//! # Error handling
//!
//! Service rejections carry an [`ApiError`] with the HTTP status code
//! and any diagnostic fields the error body supplied; transport and
//! decode failures stay separate variants of [`ClientError`]:
//!
//! ```no_run
//! # async fn run() -> Result<(), globalrates_client::ClientError> {
//! # let client = globalrates_client::Client::new("your_api_key")?;
//! match client.get_latest(None).await {
//!     Ok(rates) => println!("{:?}", rates.exchange_rates),
//!     Err(err) => match err.as_api_error() {
//!         Some(api) => eprintln!("rejected: {} (code {})", api.status_code, api.error_code),
//!         None => eprintln!("request failed: {err}"),
//!     },
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Advanced usage
//!
//! The builder customizes the transport; later settings override
//! earlier ones:
//!
//! ```no_run
//! # fn run() -> Result<(), globalrates_client::ClientError> {
//! use std::time::Duration;
//!
//! let client = globalrates_client::Client::builder("your_api_key")
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

mod methods;

pub use methods::{
    ConvertOptions, GetCurrenciesOptions, GetHistoricalOptions, GetLatestOptions,
    GetProvidersOptions,
};

// Re-export the wire types so callers need only one crate.
pub use globalrates_types::{
    ApiError, ConversionResponse, Currency, DateParseError, ErrorResponse, ExchangeRateResponse,
    Provider, RateDate,
};

/// Base URL for the Global Exchange Rates API.
pub const BASE_URL: &str = "https://api.globalexchangerates.org/v1";

/// Value of the `X-Source` header attached to every request.
const CLIENT_SOURCE: &str = "RUST";

/// Request timeout used when the caller supplies neither a timeout nor
/// an HTTP client of their own.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The client was constructed with an empty API key.
    #[error("API key cannot be empty")]
    MissingApiKey,

    /// The request produced no decodable response: connection failure,
    /// timeout, or cancellation.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service rejected the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A success response carried a body that does not decode.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the underlying [`ApiError`] when the service itself
    /// rejected the request, and `None` for transport and decode
    /// failures.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Global Exchange Rates API client.
///
/// Holds only immutable configuration, so one instance can be shared
/// freely across tasks; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    api_key: String,
    http: HttpClient,
}

impl Client {
    /// Creates a client with the default transport.
    ///
    /// Fails with [`ClientError::MissingApiKey`] when `api_key` is
    /// empty; an invalid key is otherwise only discovered when the
    /// service rejects a request.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder(api_key).build()
    }

    /// Starts building a client with a customized transport.
    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: None,
        }
    }

    /// Performs one GET round trip against the API and decodes the
    /// response.
    pub(crate) async fn send_request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &BTreeMap<&str, String>,
    ) -> Result<T, ClientError> {
        let mut req = self
            .http
            .get(format!("{}{}", self.base_url, endpoint))
            .header("Subscription-Key", &self.api_key)
            .header("X-Source", CLIENT_SOURCE)
            .header("Accept", "application/json");
        if !params.is_empty() {
            req = req.query(params);
        }

        let resp = req.send().await?;
        let status = resp.status().as_u16();

        // Read the body in full before the status check so failed
        // requests still yield their diagnostic fields.
        let body = resp.text().await?;

        if status >= 400 {
            return Err(ApiError::from_response(status, &body).into());
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Builder for [`Client`]. Setters are last-wins.
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
    http: Option<HttpClient>,
}

impl ClientBuilder {
    /// Overrides the request timeout (default 30 seconds). Ignored when
    /// a custom HTTP client is supplied via [`ClientBuilder::http_client`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the API origin. Mostly useful for pointing the client
    /// at a test server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Supplies a pre-configured [`reqwest::Client`], replacing the
    /// default transport and its timeout entirely.
    pub fn http_client(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Validates the configuration and builds the client.
    pub fn build(self) -> Result<Client, ClientError> {
        if self.api_key.is_empty() {
            return Err(ClientError::MissingApiKey);
        }
        let http = match self.http {
            Some(http) => http,
            None => HttpClient::builder().timeout(self.timeout).build()?,
        };
        Ok(Client {
            base_url: self.base_url,
            api_key: self.api_key,
            http,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = Client::new("test-key").unwrap();
        assert_eq!(client.base_url, BASE_URL);
        assert_eq!(client.api_key, "test-key");
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let err = Client::new("").unwrap_err();
        assert!(matches!(err, ClientError::MissingApiKey));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let builder = Client::builder("test-key").base_url("http://localhost:3000/");
        assert_eq!(builder.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_later_timeout_wins() {
        let builder = Client::builder("test-key")
            .timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(10));
        assert_eq!(builder.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_api_error_predicate() {
        let err = ClientError::Api(ApiError::from_response(404, ""));
        assert_eq!(err.as_api_error().map(|e| e.status_code), Some(404));

        let err = ClientError::Json(serde_json::from_str::<Currency>("{").unwrap_err());
        assert!(err.as_api_error().is_none());
    }
}
