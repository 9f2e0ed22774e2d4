use crate::prelude::*;

/// Basic auth credential pair for the gas fee endpoint, sent as
/// `Authorization: Basic base64(api_key:api_key_secret)`.
///
/// The secret may be empty, the key may not.
#[derive(Clone, PartialEq, Eq, Builder, Getters, derive_more::Debug)]
#[builder(setter(into))]
#[debug("InfuraCredentials(api_key: <hidden>)")]
pub struct InfuraCredentials {
    #[getset(get = "pub")]
    api_key: String,

    #[getset(get = "pub")]
    api_key_secret: String,
}

// ========================================
// Public Implementation
// ========================================
impl InfuraCredentials {
    pub fn new(api_key: impl Into<String>, api_key_secret: impl Into<String>) -> Self {
        InfuraCredentialsBuilder::default()
            .api_key(api_key)
            .api_key_secret(api_key_secret)
            .build()
            .unwrap()
    }
}

/// Tries to read the Infura credential pair from the environment variables
/// `INFURA_API_KEY` (required) and `INFURA_API_KEY_SECRET` (optional,
/// empty when unset).
///
/// # Throws
/// Throws [`Error::NoInfuraApiKey`] if the key variable is not set.
pub fn read_infura_credentials() -> Result<InfuraCredentials> {
    let api_key = std::env::var("INFURA_API_KEY").map_err(|_| Error::NoInfuraApiKey)?;
    let api_key_secret = std::env::var("INFURA_API_KEY_SECRET").unwrap_or_default();
    Ok(InfuraCredentials::new(api_key, api_key_secret))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_does_not_leak_the_key() {
        let sut = InfuraCredentials::new("very-secret-key", "even-more-secret");
        let debug = format!("{:?}", sut);
        assert!(!debug.contains("very-secret-key"));
        assert!(!debug.contains("even-more-secret"));
    }
}
