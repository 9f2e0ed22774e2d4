mod app_state;
mod costimator;
mod crypto_prices;
mod gas_fee_fetcher;
mod http_client;
mod infura_gas_api;
mod models;
mod price_cache;
mod price_fetcher;
mod rate_limiter;
mod traits;

pub mod prelude {
    // INTERNAL MODULES
    pub use crate::app_state::*;
    pub use crate::costimator::*;
    pub use crate::crypto_prices::*;
    pub use crate::gas_fee_fetcher::*;
    pub use crate::http_client::*;
    pub use crate::infura_gas_api::*;
    pub use crate::models::*;
    pub use crate::price_cache::*;
    pub use crate::price_fetcher::*;
    pub use crate::rate_limiter::*;
    pub use crate::traits::*;

    // STD
    pub use std::{net::SocketAddr, sync::Arc, time::Duration};

    // EXTERNAL CRATES
    pub use derive_builder::Builder;
    pub use getset::{CopyGetters, Getters};
    pub use log::{debug, error, info, warn};
    pub use reqwest::Client;
    pub use serde::{Deserialize, Serialize};
    pub use thiserror::Error as ThisError;
    pub use tokio::time::Instant;
}

pub use prelude::*;
