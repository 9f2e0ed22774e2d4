#[allow(clippy::module_inception)]
mod crypto_prices;

pub use crypto_prices::*;
