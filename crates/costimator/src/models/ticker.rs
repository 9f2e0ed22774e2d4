use crate::prelude::*;

/// Symbol of a chain's native currency as the price endpoint knows it,
/// e.g. "AVAX" or "BNB".
///
/// Matching is exact: tickers are case sensitive and never normalized.
#[derive(
    Debug,
    Clone,
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
pub struct Ticker(String);

impl From<&str> for Ticker {
    fn from(symbol: &str) -> Self {
        Self(symbol.to_owned())
    }
}
