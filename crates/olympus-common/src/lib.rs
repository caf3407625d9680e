//! Common types and errors for Olympus contest services.

pub mod error;
pub mod types;

pub use error::{ContestError, ContestResult};
pub use types::*;
