use crate::prelude::*;

/// Amount of gas spent executing a transaction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::From,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct Gas(u64);

// ========================================
// Public Implementation
// ========================================
impl Gas {
    /// Assumed gas usage of a "standard" transaction, the amount all cost
    /// estimates are computed with.
    ///
    /// An estimation constant, not a protocol quantity: a bare native
    /// transfer uses 21_000 gas, simple token transfers land well above
    /// that, so this sits in between as a rough middle ground.
    pub fn standard_transaction_estimate() -> Self {
        Self(65_000)
    }
}
