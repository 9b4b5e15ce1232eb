//! Error handling for the primitive layer
//!
//! All keyforge crates share one error type, defined in `keyforge-api`.

pub use keyforge_api::error::{validate, Error, Result};
