use crate::prelude::*;

/// EIP-155 chain id identifying a network on the gas fee endpoint,
/// e.g. `56` for BNB Chain.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::From,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct ChainId(u64);
