mod chain;
mod chain_id;
mod config;
mod cost;
mod cost_result;
mod credentials;
mod error;
mod gas;
mod gas_cost_report;
mod gwei;
mod server_config;
mod suggested_gas_fees;
mod ticker;
mod usd;

pub use chain::*;
pub use chain_id::*;
pub use config::*;
pub use cost::*;
pub use cost_result::*;
pub use credentials::*;
pub use error::*;
pub use gas::*;
pub use gas_cost_report::*;
pub use gwei::*;
pub use server_config::*;
pub use suggested_gas_fees::*;
pub use ticker::*;
pub use usd::*;
