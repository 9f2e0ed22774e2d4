use crate::prelude::*;

/// Source of the current USD price of a chain's native currency.
#[async_trait::async_trait]
pub trait PriceFetcher {
    async fn fetch_price(&self, ticker: &Ticker) -> Result<Usd>;
}
