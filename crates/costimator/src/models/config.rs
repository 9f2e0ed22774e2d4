use crate::prelude::*;

/// Run configuration for the server: where to listen, and the credentials
/// presented to the gas fee endpoint.
#[derive(Debug, Clone, Builder, Getters)]
#[builder(setter(into))]
pub struct Config {
    #[getset(get = "pub")]
    server: ServerConfig,

    #[getset(get = "pub")]
    infura_credentials: InfuraCredentials,
}

impl Config {
    /// Returns the server address and port as a string
    pub fn address_with_port(&self) -> String {
        self.server.address_with_port()
    }
}
