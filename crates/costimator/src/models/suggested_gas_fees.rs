use crate::prelude::*;

/// Fee tier document returned by the gas fee endpoint for one network.
///
/// Only the `medium` tier is required; the other fields are carried when
/// the upstream provides them and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize, Getters, CopyGetters)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedGasFees {
    #[serde(default)]
    #[getset(get_copy = "pub")]
    low: Option<FeeTier>,

    /// The mid aggressiveness tier, the one cost estimates are based on.
    #[getset(get = "pub")]
    medium: FeeTier,

    #[serde(default)]
    #[getset(get_copy = "pub")]
    high: Option<FeeTier>,

    #[serde(default)]
    #[getset(get_copy = "pub")]
    estimated_base_fee: Option<Gwei>,
}

/// One suggested fee aggressiveness level (low/medium/high).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, CopyGetters)]
#[serde(rename_all = "camelCase")]
pub struct FeeTier {
    /// Suggested cap on the total per gas fee, in gwei.
    #[getset(get_copy = "pub")]
    suggested_max_fee_per_gas: Gwei,

    #[serde(default)]
    #[getset(get_copy = "pub")]
    suggested_max_priority_fee_per_gas: Option<Gwei>,

    /// Wait time estimates in milliseconds.
    #[serde(default)]
    #[getset(get_copy = "pub")]
    min_wait_time_estimate: Option<u64>,

    #[serde(default)]
    #[getset(get_copy = "pub")]
    max_wait_time_estimate: Option<u64>,
}

// ========================================
// Public Implementation
// ========================================
impl SuggestedGasFees {
    /// Document containing only a medium tier.
    pub fn with_medium_fee_per_gas(fee_per_gas: impl Into<Gwei>) -> Self {
        Self {
            low: None,
            medium: FeeTier::with_max_fee_per_gas(fee_per_gas),
            high: None,
            estimated_base_fee: None,
        }
    }
}

impl FeeTier {
    pub fn with_max_fee_per_gas(fee_per_gas: impl Into<Gwei>) -> Self {
        Self {
            suggested_max_fee_per_gas: fee_per_gas.into(),
            suggested_max_priority_fee_per_gas: None,
            min_wait_time_estimate: None,
            max_wait_time_estimate: None,
        }
    }
}
