use crate::prelude::*;

pub const CRYPTO_PRICES_BASE_URL: &str = "https://cryptoprices.cc";

/// Client for the plain text price API: `GET {base}/{ticker}` answers with
/// a bare numeric literal as the whole response body, not JSON.
pub struct CryptoPrices {
    client: Client,
    base_url: String,
}

impl Default for CryptoPrices {
    fn default() -> Self {
        Self::with_base_url(CRYPTO_PRICES_BASE_URL)
    }
}

// ========================================
// Public Implementation
// ========================================
impl CryptoPrices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Client against a non default host, e.g. a local stub.
    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        Self {
            client: default_http_client(),
            base_url: base_url.as_ref().trim_end_matches('/').to_owned(),
        }
    }
}

// ========================================
// Private Implementation
// ========================================
impl CryptoPrices {
    fn url(&self, ticker: &Ticker) -> String {
        format!("{}/{}", self.base_url, ticker)
    }
}

/// Parses a price response body, tolerating surrounding whitespace.
pub(crate) fn parse_price_body(body: &str) -> Result<Usd> {
    body.trim()
        .parse::<f64>()
        .map(Usd::from)
        .map_err(|_| Error::PriceNotNumeric {
            body: body.trim().to_owned(),
        })
}

#[async_trait::async_trait]
impl PriceFetcher for CryptoPrices {
    async fn fetch_price(&self, ticker: &Ticker) -> Result<Usd> {
        let response = self
            .client
            .get(self.url(ticker))
            .send()
            .await
            .map_err(Error::price_request_failed)?;

        let status = response.status();
        debug!("Price response status for `{}`: {}", ticker, status);
        if !status.is_success() {
            return Err(Error::PriceBadStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(Error::price_request_failed)?;
        parse_price_body(&body)
    }
}
