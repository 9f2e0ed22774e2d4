use crate::prelude::*;

/// Mutable state shared across requests: just the price cache.
///
/// Owned by the aggregator for the lifetime of the serving process, never a
/// global, so tests get isolation from a fresh instance.
#[derive(Debug, Default)]
pub struct AppState {
    pub price_cache: PriceCache,
}
