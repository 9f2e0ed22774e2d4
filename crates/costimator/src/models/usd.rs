use crate::prelude::*;

/// An amount of US dollars, either a currency unit price or a computed
/// transaction cost. Raw `f64`, no rounding applied anywhere.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::From,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct Usd(f64);
