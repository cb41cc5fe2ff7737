//! Network layer - HTTP calls to the poll service
//!
//! The Network actor receives poll commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
pub use client::PollClient;
