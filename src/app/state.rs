//! App state - pure data structure with no I/O logic

use crate::app::draft::Draft;
use crate::app::store::PollStore;
use crate::messages::ui_events::{Focus, InputMode};
use crate::messages::RenderState;

/// Main application state - pure data, no I/O
#[derive(Debug, Default)]
pub struct AppState {
    // Server-backed data
    pub store: PollStore,

    // Local new-poll input
    pub draft: Draft,
    /// Request id of the outstanding create, if any
    pub pending_create: Option<u64>,

    // UI state
    pub focus: Focus,
    pub input_mode: InputMode,
    pub selected_poll: usize,
    pub selected_option: usize,
    pub next_request_id: u64,

    // Popups
    pub show_help: bool,
    pub notice: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            next_request_id: 1,
            ..Default::default()
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    pub fn is_submitting(&self) -> bool {
        self.pending_create.is_some()
    }

    /// Text of the focused draft field
    pub fn current_input(&self) -> Option<&str> {
        match self.focus {
            Focus::Question => Some(&self.draft.question),
            Focus::Option(i) => self.draft.options.get(i).map(String::as_str),
            Focus::Polls => None,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            polls: self.store.polls().to_vec(),
            error: self.store.error(),
            last_refreshed: self.store.last_refreshed(),
            draft: self.draft.clone(),
            is_submitting: self.is_submitting(),
            focus: self.focus,
            input_mode: self.input_mode,
            selected_poll: self.selected_poll,
            selected_option: self.selected_option,
            show_help: self.show_help,
            notice: self.notice.clone(),
        }
    }
}
