#[allow(clippy::module_inception)]
mod costimator;
mod dependencies;

pub use costimator::*;
pub use dependencies::*;
