pub use clap::Parser;
pub use costimator::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "costimate", version)]
#[command(
    about = "Cross-chain gas cost estimator",
    long_about = "Serves the estimated USD cost of a standard transaction across the supported blockchain networks, aggregated from upstream gas fee and price APIs."
)]
pub struct Cli {
    /// The address of the server
    #[arg(short = 'a', long = "address", default_value = "0.0.0.0")]
    pub address: String,

    /// The port our program is running on.
    /// Valid values are 0-65535 (TCP standard range).
    #[arg(short = 'p', long = "port", default_value_t = 3000)]
    pub port: u16,

    /// Infura API key, read from the `INFURA_API_KEY` environment variable
    /// when omitted.
    #[arg(short = 'k', long = "key", default_value = None)]
    pub infura_api_key: Option<String>,

    /// Infura API key secret, ignored unless `--key` is also given; an
    /// omitted secret is treated as empty.
    #[arg(short = 's', long = "secret", default_value = None)]
    pub infura_api_key_secret: Option<String>,
}

impl From<Cli> for ServerConfig {
    fn from(args: Cli) -> Self {
        ServerConfigBuilder::default()
            .address(args.address)
            .port(args.port)
            .build()
            .unwrap()
    }
}

impl TryFrom<Cli> for Config {
    type Error = Error;
    fn try_from(args: Cli) -> Result<Self> {
        let infura_credentials = match args.infura_api_key.clone() {
            Some(api_key) => InfuraCredentials::new(
                api_key,
                args.infura_api_key_secret.clone().unwrap_or_default(),
            ),
            None => read_infura_credentials()?,
        };
        let server_config = ServerConfig::from(args);
        Ok(ConfigBuilder::default()
            .server(server_config)
            .infura_credentials(infura_credentials)
            .build()
            .unwrap())
    }
}
