mod display_error;

pub use display_error::*;
