use crate::prelude::*;

/// How long a fetched price stays fresh.
pub const PRICE_CACHE_TTL: Duration = Duration::from_secs(60);

/// Time bounded memoization of currency prices, keyed by ticker.
///
/// Entries populate lazily on first access and are overwritten in place
/// when refreshed after expiry; nothing sweeps expired entries in the
/// background. Failed fetches are never cached, so every call after a
/// failure re-attempts until one succeeds.
///
/// Two overlapping misses for the same ticker may both hit the upstream,
/// last write wins. A handful of tickers exist, so call count minimization
/// is not worth single-flight deduplication here.
#[derive(Debug)]
pub struct PriceCache {
    entries: dashmap::DashMap<Ticker, PriceCacheEntry>,
    ttl: Duration,
}

#[derive(Debug, Clone, Copy)]
struct PriceCacheEntry {
    price: Usd,
    fetched_at: Instant,
}

impl Default for PriceCache {
    fn default() -> Self {
        Self::new(PRICE_CACHE_TTL)
    }
}

// ========================================
// Public Implementation
// ========================================
impl PriceCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: dashmap::DashMap::new(),
            ttl,
        }
    }

    /// Returns the cached price for `ticker` if still fresh, else fetches a
    /// new one with `fetcher` and stores it with a fresh expiry.
    pub async fn price_usd(
        &self,
        ticker: &Ticker,
        fetcher: Arc<dyn PriceFetcher + Send + Sync>,
    ) -> Result<Usd> {
        if let Some(price) = self.fresh_price(ticker) {
            debug!("Price cache hit for `{}`: {}", ticker, price);
            return Ok(price);
        }
        let price = fetcher.fetch_price(ticker).await?;
        self.entries.insert(
            ticker.clone(),
            PriceCacheEntry {
                price,
                fetched_at: Instant::now(),
            },
        );
        Ok(price)
    }
}

// ========================================
// Private Implementation
// ========================================
impl PriceCache {
    // Copies the price out so no map guard is held across the fetch await.
    fn fresh_price(&self, ticker: &Ticker) -> Option<Usd> {
        self.entries
            .get(ticker)
            .filter(|entry| entry.fetched_at.elapsed() < self.ttl)
            .map(|entry| entry.price)
    }
}
