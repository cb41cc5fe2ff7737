//! App layer - central state management and command processing
//!
//! The App actor receives UI events, network responses and refresh ticks,
//! updates state, and emits network commands and render state.

pub mod state;
pub mod store;
pub mod draft;
pub mod actor;
pub mod commands;

pub use state::AppState;
pub use store::PollStore;
pub use draft::Draft;
pub use actor::AppActor;
