//! # Pollboard
//!
//! A terminal client for a REST polling service.
//!
//! ## Features
//! - Live poll list, refreshed on a fixed interval
//! - Create polls with any number of options
//! - Vote with a keypress; percentages drawn as bars
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (poll store, draft form, refresh timer)
//! - Network Layer (Tokio runtime)

pub mod constants;
pub mod config;
pub mod error;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::Config;
pub use error::{ApiError, PollError, ValidationError};
pub use models::{NewPoll, Poll, PollList, PollOption, VoteRequest};
pub use messages::{UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{AppState, AppActor, Draft, PollStore};
pub use network::{NetworkActor, PollClient};
