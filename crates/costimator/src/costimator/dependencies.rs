use crate::prelude::*;

/// Dependencies of the costimator
#[derive(Builder)]
#[builder(setter(into))]
pub struct Dependencies {
    /// Source of suggested fee tiers
    /// (e.g. the Infura gas API)
    gas_fee_fetcher: Arc<dyn GasFeeFetcher + Send + Sync>,

    /// Source of native currency prices
    /// (e.g. cryptoprices.cc)
    price_fetcher: Arc<dyn PriceFetcher + Send + Sync>,
}

impl CostimatorDependencies for Dependencies {
    fn gas_fee_fetcher(&self) -> Arc<dyn GasFeeFetcher + Send + Sync> {
        self.gas_fee_fetcher.clone()
    }
    fn price_fetcher(&self) -> Arc<dyn PriceFetcher + Send + Sync> {
        self.price_fetcher.clone()
    }
}

/// Trait for the costimator dependencies, allows testing
pub trait CostimatorDependencies {
    fn gas_fee_fetcher(&self) -> Arc<dyn GasFeeFetcher + Send + Sync>;
    fn price_fetcher(&self) -> Arc<dyn PriceFetcher + Send + Sync>;
}
