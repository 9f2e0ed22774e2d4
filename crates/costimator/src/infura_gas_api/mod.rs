#[allow(clippy::module_inception)]
mod infura_gas_api;

pub use infura_gas_api::*;
