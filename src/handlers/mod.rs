//! Command handlers
//!
//! Line protocol adapters: `request` parses, `handler` dispatches to the
//! scoreboard, `response` formats.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{Reply, handle};
pub use request::Command;
