use crate::prelude::*;

/// Default spacing between successive gas fee calls, keeping us under the
/// upstream's rate limit.
pub const GAS_API_CALL_SPACING: Duration = Duration::from_secs(1);

/// Spaces calls to a shared upstream by pausing a fixed interval.
///
/// The pause is additive: it always sleeps the full interval, it does not
/// subtract time already spent since the previous call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
pub struct RateLimiter {
    #[getset(get_copy = "pub")]
    min_interval: Duration,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(GAS_API_CALL_SPACING)
    }
}

// ========================================
// Public Implementation
// ========================================
impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self { min_interval }
    }

    pub async fn pause(&self) {
        tokio::time::sleep(self.min_interval).await;
    }
}
