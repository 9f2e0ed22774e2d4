use crate::prelude::*;

pub const INFURA_GAS_API_BASE_URL: &str = "https://gas.api.infura.io";

/// Client for the Infura gas REST API, authenticating every request with a
/// Basic credential pair.
pub struct InfuraGasApi {
    credentials: InfuraCredentials,
    client: Client,
    base_url: String,
}

// ========================================
// Public Implementation
// ========================================
impl InfuraGasApi {
    pub fn new(credentials: InfuraCredentials) -> Self {
        Self::with_base_url(credentials, INFURA_GAS_API_BASE_URL)
    }

    /// Client against a non default host, e.g. a local stub.
    pub fn with_base_url(credentials: InfuraCredentials, base_url: impl AsRef<str>) -> Self {
        Self {
            credentials,
            client: default_http_client(),
            base_url: base_url.as_ref().trim_end_matches('/').to_owned(),
        }
    }
}

// ========================================
// Private Implementation
// ========================================
impl InfuraGasApi {
    fn url(&self, chain_id: ChainId) -> String {
        format!("{}/networks/{}/suggestedGasFees", self.base_url, chain_id)
    }
}

#[async_trait::async_trait]
impl GasFeeFetcher for InfuraGasApi {
    async fn fetch_gas_fees(&self, chain_id: ChainId) -> Result<SuggestedGasFees> {
        let response = self
            .client
            .get(self.url(chain_id))
            .basic_auth(
                self.credentials.api_key(),
                Some(self.credentials.api_key_secret()),
            )
            .send()
            .await
            .map_err(Error::gas_fees_request_failed)?;

        let status = response.status();
        debug!("Gas fee response status for chain {}: {}", chain_id, status);
        if !status.is_success() {
            return Err(Error::GasFeesBadStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<SuggestedGasFees>()
            .await
            .map_err(Error::gas_fees_parse_failed)
    }
}
