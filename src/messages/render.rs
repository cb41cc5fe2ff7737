//! Render state - data structure sent from App layer to UI for rendering

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::app::draft::Draft;
use crate::error::PollError;
use crate::messages::ui_events::{Focus, InputMode};
use crate::models::Poll;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Poll store
    pub polls: Vec<Arc<Poll>>,
    pub error: Option<PollError>,
    pub last_refreshed: Option<DateTime<Local>>,

    // Draft form
    pub draft: Draft,
    pub is_submitting: bool,

    // UI state
    pub focus: Focus,
    pub input_mode: InputMode,
    pub selected_poll: usize,
    pub selected_option: usize,

    // Popups
    pub show_help: bool,
    pub notice: Option<String>,
}
