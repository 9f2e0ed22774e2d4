use derive_more::IsVariant;

use crate::prelude::*;

/// All errors which can occur while fetching upstream data or
/// serving the aggregated gas cost report.
#[derive(Debug, ThisError, IsVariant, PartialEq)]
pub enum Error {
    /// Transport level failure talking to the gas fee endpoint
    #[error("Gas fee request failed: {underlying}")]
    GasFeesRequestFailed { underlying: String },

    /// Gas fee endpoint answered with a non success status
    #[error("Gas fee endpoint returned status: {status}")]
    GasFeesBadStatus { status: u16 },

    /// Gas fee endpoint body did not parse as a fee document
    #[error("Failed to parse gas fee response: {underlying}")]
    GasFeesParseFailed { underlying: String },

    /// Transport level failure talking to the price endpoint
    #[error("Price request failed: {underlying}")]
    PriceRequestFailed { underlying: String },

    /// Price endpoint answered with a non success status
    #[error("Price endpoint returned status: {status}")]
    PriceBadStatus { status: u16 },

    /// Price endpoint body was not a bare numeric literal
    #[error("Price response is not numeric: `{body}`")]
    PriceNotNumeric { body: String },

    /// Unable to start REST server
    #[error("Unable to start server: {underlying}")]
    UnableToStartServer { underlying: String },

    /// Unable to bind to address
    #[error("Unable to bind to address: {0}")]
    UnableToBind(String),

    /// Unable to get address of bound socket
    #[error("Failed to get bound address: {0}")]
    UnableToGetBoundAddress(String),

    /// Failed to signal readiness
    #[error("Failed to signal readiness")]
    FailedToSignalReadiness,

    /// No Infura API key provided
    #[error(
        "No Infura API Key provided, unable to start server. Set the `INFURA_API_KEY` environment variable, e.g. `export INFURA_API_KEY=your_key`, or pass `--key` on the command line."
    )]
    NoInfuraApiKey,
}

// ========================================
// Public Implementation
// ========================================
impl Error {
    pub fn gas_fees_request_failed(e: impl std::fmt::Display) -> Self {
        Self::GasFeesRequestFailed {
            underlying: e.to_string(),
        }
    }

    pub fn gas_fees_parse_failed(e: impl std::fmt::Display) -> Self {
        Self::GasFeesParseFailed {
            underlying: e.to_string(),
        }
    }

    pub fn price_request_failed(e: impl std::fmt::Display) -> Self {
        Self::PriceRequestFailed {
            underlying: e.to_string(),
        }
    }

    pub fn start(e: std::io::Error) -> Self {
        Self::UnableToStartServer {
            underlying: e.to_string(),
        }
    }

    pub fn bind(e: std::io::Error) -> Self {
        Self::UnableToBind(e.to_string())
    }

    pub fn get_bound_address(e: std::io::Error) -> Self {
        Self::UnableToGetBoundAddress(e.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
