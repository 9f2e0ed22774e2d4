use crate::prelude::*;

/// Aggregates the estimated USD cost of a standard transaction across the
/// configured chains: fetch fee tiers, resolve prices through the cache,
/// combine into a per chain report.
#[derive(derive_more::Debug, derive_more::Deref)]
#[debug("Costimator")]
pub struct Costimator {
    #[deref]
    dependencies: Arc<dyn CostimatorDependencies + Send + Sync>,
    chains: Vec<Chain>,
    rate_limiter: RateLimiter,
    state: AppState,
}

// ========================================
// Public Implementation
// ========================================
impl Costimator {
    /// Creates a new `Costimator` with the given dependencies, chain list
    /// and rate limiter.
    pub fn with(
        dependencies: Arc<dyn CostimatorDependencies + Send + Sync>,
        chains: impl IntoIterator<Item = Chain>,
        rate_limiter: RateLimiter,
    ) -> Self {
        Self {
            dependencies,
            chains: chains.into_iter().collect(),
            rate_limiter,
            state: AppState::default(),
        }
    }

    /// Creates a new `Costimator` over the default supported chains with
    /// the default call spacing.
    pub fn with_dependencies(
        gas_fee_fetcher: Arc<dyn GasFeeFetcher + Send + Sync>,
        price_fetcher: Arc<dyn PriceFetcher + Send + Sync>,
    ) -> Self {
        Self::with(
            Arc::new(
                DependenciesBuilder::default()
                    .gas_fee_fetcher(gas_fee_fetcher)
                    .price_fetcher(price_fetcher)
                    .build()
                    .unwrap(),
            ),
            Chain::supported(),
            RateLimiter::default(),
        )
    }

    /// Creates a new `Costimator` talking to the production upstreams with
    /// the given credentials.
    pub fn new(infura_credentials: InfuraCredentials) -> Self {
        let gas_fee_fetcher = Arc::new(InfuraGasApi::new(infura_credentials));
        let price_fetcher = Arc::new(CryptoPrices::new());
        Self::with_dependencies(gas_fee_fetcher, price_fetcher)
    }

    /// Computes the cost of every configured chain, in configured order.
    ///
    /// Chains are processed strictly sequentially with one rate limiter
    /// pause before each (including the first): the spacing serializes
    /// calls to the shared gas API. A failed chain degrades to its fixed
    /// annotation and never aborts the rest of the report.
    pub async fn compute_all_costs(&self) -> GasCostReport {
        info!("Computing gas costs for {} chains", self.chains.len());
        let mut report = GasCostReport::default();
        for chain in &self.chains {
            self.rate_limiter.pause().await;
            let result = self.cost_of_standard_transaction(chain).await;
            report.insert(chain.name().clone(), result);
        }
        report
    }
}

// ========================================
// Private Implementation
// ========================================
impl Costimator {
    async fn cost_of_standard_transaction(&self, chain: &Chain) -> CostResult {
        let gas_fees = match self
            .gas_fee_fetcher()
            .fetch_gas_fees(chain.chain_id())
            .await
        {
            Ok(gas_fees) => gas_fees,
            Err(e) => {
                warn!("Failed to fetch gas fees for `{}`: {}", chain.name(), e);
                return CostResult::from(UpstreamFailure::SuggestedGasFees);
            }
        };
        let fee_per_gas = gas_fees.medium().suggested_max_fee_per_gas();

        let price = match self
            .state
            .price_cache
            .price_usd(chain.ticker(), self.price_fetcher())
            .await
        {
            Ok(price) => price,
            Err(e) => {
                warn!("Failed to fetch price for `{}`: {}", chain.ticker(), e);
                return CostResult::from(UpstreamFailure::CurrentPriceUsd);
            }
        };

        let cost = cost_usd(fee_per_gas, Gas::standard_transaction_estimate(), price);
        debug!(
            "`{}` medium fee: {} gwei, price: {} USD, cost: {} USD",
            chain.name(),
            fee_per_gas,
            price,
            cost
        );
        CostResult::from(MediumGasCost::from(cost))
    }
}
