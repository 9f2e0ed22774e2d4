mod server;

pub mod prelude {

    // INTERNAL MODULES
    pub use crate::server::*;

    // INTERNAL CRATES
    pub use costimator::prelude::*;

    // EXTERNAL CRATES
    pub use axum::{Json, Router, routing::get};
    pub use tokio::sync::oneshot;
}

pub use prelude::*;
