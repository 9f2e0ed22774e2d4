use crate::prelude::*;

// ========================================
// Private
// ========================================

// The endpoint never fails as a whole: a chain whose upstreams failed
// degrades to its fixed annotation inside the report, so the response is
// always a well formed 200.
async fn gas_costs(costimator: Arc<Costimator>) -> Json<GasCostReport> {
    Json(costimator.compute_all_costs().await)
}

fn init_logging() {
    let _ = pretty_env_logger::try_init();
}

fn build_app(costimator: Arc<Costimator>) -> Router {
    Router::new().route("/gas-costs", get(move || gas_costs(costimator)))
}

async fn bind_and_signal(
    address: String,
    ready_tx: oneshot::Sender<SocketAddr>,
) -> Result<(tokio::net::TcpListener, SocketAddr)> {
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(Error::bind)?;
    let bound_addr = listener.local_addr().map_err(Error::get_bound_address)?;
    ready_tx
        .send(bound_addr)
        .map_err(|_| Error::FailedToSignalReadiness)?;
    Ok((listener, bound_addr))
}

// ========================================
// Public
// ========================================

/// Serves `costimator` at the configured address and signals readiness when
/// the endpoint is live.
pub async fn serve_signaling_readiness(
    costimator: Arc<Costimator>,
    server_config: &ServerConfig,
    ready_tx: oneshot::Sender<SocketAddr>,
) -> Result<()> {
    let app = build_app(costimator);
    let (listener, address) = bind_and_signal(server_config.address_with_port(), ready_tx).await?;
    info!("Listening on: {}", address);
    axum::serve(listener, app).await.map_err(Error::start)
}

/// Builds a `Costimator` against the production upstreams and serves it,
/// signaling readiness when the endpoint is live.
pub async fn run_signaling_readiness(
    config: &Config,
    ready_tx: oneshot::Sender<SocketAddr>,
) -> Result<()> {
    init_logging();
    debug!("Starting costimate server... config: {:?}", config.server());
    let costimator = Arc::new(Costimator::new(config.infura_credentials().clone()));
    serve_signaling_readiness(costimator, config.server(), ready_tx).await
}

pub async fn run(config: &Config) {
    let config = config.clone();
    let (ready_tx, ready_rx) = tokio::sync::oneshot::channel();
    let server_handle =
        tokio::spawn(async move { run_signaling_readiness(&config, ready_tx).await });
    // Wait for the server to signal readiness and get the bound address
    ready_rx
        .await
        .map_err(|_| Error::FailedToSignalReadiness)
        .unwrap_display();
    let _ = server_handle
        .into_future()
        .await
        .expect("Should never finish");
}
