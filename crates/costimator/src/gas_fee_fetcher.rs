use crate::prelude::*;

/// Source of suggested fee tiers for a network.
///
/// One attempt per invocation: implementations do not retry.
#[async_trait::async_trait]
pub trait GasFeeFetcher {
    async fn fetch_gas_fees(&self, chain_id: ChainId) -> Result<SuggestedGasFees>;
}
