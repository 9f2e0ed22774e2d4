use crate::prelude::*;

/// A blockchain network we report transaction costs for.
///
/// Descriptors are defined once at startup and never mutated.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters, CopyGetters,
)]
#[builder(setter(into))]
pub struct Chain {
    /// Network name, used as the key of this chain's entry in the report.
    #[getset(get = "pub")]
    name: String,

    /// Chain id, forwarded to the gas fee endpoint.
    #[getset(get_copy = "pub")]
    chain_id: ChainId,

    /// Native currency symbol, used for the price lookup.
    #[getset(get = "pub")]
    ticker: Ticker,
}

// ========================================
// Public Implementation
// ========================================
impl Chain {
    pub fn new(
        name: impl Into<String>,
        chain_id: impl Into<ChainId>,
        ticker: impl Into<Ticker>,
    ) -> Self {
        ChainBuilder::default()
            .name(name)
            .chain_id(chain_id)
            .ticker(ticker)
            .build()
            .unwrap()
    }

    pub fn avalanche() -> Self {
        Self::new("Avalanche", 43114u64, "AVAX")
    }

    pub fn bnb_chain() -> Self {
        Self::new("BNB Chain", 56u64, "BNB")
    }

    pub fn optimism() -> Self {
        Self::new("Optimism", 10u64, "ETH")
    }

    /// The networks served by default, in report order.
    pub fn supported() -> Vec<Self> {
        vec![Self::avalanche(), Self::bnb_chain(), Self::optimism()]
    }
}
