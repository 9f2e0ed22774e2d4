use costimator_rest::prelude::*;

/// A tester for the costimate server, allowing us to send API requests and
/// assert the responses.
///
/// The server is spawned with injected upstream doubles and zero call
/// spacing, so the tests are hermetic and do not sleep through real rate
/// limit pauses. The async closure passed to `test` will not be called
/// until the server is ready to receive requests.
struct Tester {
    server_handle: tokio::task::JoinHandle<()>,
    client: Client,
    url: String,
}

struct FeesHardcoded(f64);
#[async_trait::async_trait]
impl GasFeeFetcher for FeesHardcoded {
    async fn fetch_gas_fees(&self, _: ChainId) -> Result<SuggestedGasFees> {
        Ok(SuggestedGasFees::with_medium_fee_per_gas(self.0))
    }
}

struct FailFees;
#[async_trait::async_trait]
impl GasFeeFetcher for FailFees {
    async fn fetch_gas_fees(&self, _: ChainId) -> Result<SuggestedGasFees> {
        Err(Error::GasFeesBadStatus { status: 500 })
    }
}

struct PriceHardcoded(f64);
#[async_trait::async_trait]
impl PriceFetcher for PriceHardcoded {
    async fn fetch_price(&self, _: &Ticker) -> Result<Usd> {
        Ok(Usd::from(self.0))
    }
}

impl Tester {
    async fn test<Fut>(
        gas_fee_fetcher: Arc<dyn GasFeeFetcher + Send + Sync>,
        price_fetcher: Arc<dyn PriceFetcher + Send + Sync>,
        test: impl Fn(Arc<Self>) -> Fut,
    ) where
        Fut: std::future::Future<Output = ()>,
    {
        let tester = Arc::new(Tester::_new(gas_fee_fetcher, price_fetcher).await);
        test(tester.clone()).await;
        Arc::try_unwrap(tester)
            .ok()
            .expect("Should be able to consume Arc and get Tester") // No Debug needed
            ._cleanup();
    }

    async fn _new(
        gas_fee_fetcher: Arc<dyn GasFeeFetcher + Send + Sync>,
        price_fetcher: Arc<dyn PriceFetcher + Send + Sync>,
    ) -> Self {
        // Arrange: Spawn the server
        let costimator = Arc::new(Costimator::with(
            Arc::new(
                DependenciesBuilder::default()
                    .gas_fee_fetcher(gas_fee_fetcher)
                    .price_fetcher(price_fetcher)
                    .build()
                    .unwrap(),
            ),
            Chain::supported(),
            RateLimiter::new(Duration::ZERO),
        ));
        let server_config = ServerConfigBuilder::default()
            .port(0u16)
            .address("0.0.0.0")
            .build()
            .unwrap();
        let (ready_tx, ready_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            serve_signaling_readiness(costimator, &server_config, ready_tx)
                .await
                .expect("Server failed to start");
        });
        // Wait for the server to signal readiness and get the bound address
        let bound_address = ready_rx.await.expect("Failed to receive server address");
        let url = format!("http://127.0.0.1:{}", bound_address.port());

        let client = Client::new();

        Self {
            server_handle,
            client,
            url,
        }
    }

    async fn gas_costs(&self) -> GasCostReport {
        let response = self
            .client
            .get(format!("{}/gas-costs", self.url))
            .send()
            .await
            .expect("Should get a response");

        assert_eq!(response.status().as_u16(), 200);

        response
            .json::<GasCostReport>()
            .await
            .expect("Body should be a gas cost report")
    }

    fn _cleanup(self) {
        // Cleanup: Abort the server task
        self.server_handle.abort();
    }
}

#[tokio::test]
async fn all_chains_reported_with_costs() {
    Tester::test(
        Arc::new(FeesHardcoded(5.0)),
        Arc::new(PriceHardcoded(600.0)),
        |tester| async move {
            let report = tester.gas_costs().await;

            assert_eq!(report.len(), 3);
            let expected = Usd::from(5.0 * 65_000.0 / 1e9 * 600.0);
            for chain in Chain::supported() {
                pretty_assertions::assert_eq!(
                    report.get(chain.name()),
                    Some(&CostResult::from(MediumGasCost::from(expected)))
                );
            }
        },
    )
    .await;
}

#[tokio::test]
async fn degraded_chains_still_answer_200() {
    Tester::test(
        Arc::new(FailFees),
        Arc::new(PriceHardcoded(600.0)),
        |tester| async move {
            let report = tester.gas_costs().await;

            for chain in Chain::supported() {
                pretty_assertions::assert_eq!(
                    report.get(chain.name()),
                    Some(&CostResult::from(UpstreamFailure::SuggestedGasFees))
                );
            }
        },
    )
    .await;
}

#[tokio::test]
async fn response_keys_keep_configured_chain_order() {
    Tester::test(
        Arc::new(FeesHardcoded(5.0)),
        Arc::new(PriceHardcoded(600.0)),
        |tester| async move {
            let report = tester.gas_costs().await;

            pretty_assertions::assert_eq!(
                report.chain_names().collect::<Vec<_>>(),
                vec!["Avalanche", "BNB Chain", "Optimism"]
            );
        },
    )
    .await;
}
