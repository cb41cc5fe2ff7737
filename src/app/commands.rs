//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::{Focus, InputMode};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::VoteRequest;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_field(&mut self) {
        self.focus = self.focus.next(self.draft.options.len());
        if !self.focus.is_form_field() {
            self.input_mode = InputMode::Normal;
        }
    }

    pub fn prev_field(&mut self) {
        self.focus = self.focus.prev(self.draft.options.len());
        if !self.focus.is_form_field() {
            self.input_mode = InputMode::Normal;
        }
    }

    // ========================
    // Draft editing
    // ========================

    pub fn start_editing(&mut self) {
        if self.focus.is_form_field() && !self.is_submitting() {
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_char(&mut self, c: char) {
        if let Some(mut text) = self.editable_text() {
            text.push(c);
            self.write_focused(text);
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(mut text) = self.editable_text() {
            if text.pop().is_some() {
                self.write_focused(text);
            }
        }
    }

    /// Focused field contents, or None when the form is locked
    fn editable_text(&self) -> Option<String> {
        if self.input_mode != InputMode::Editing || self.is_submitting() {
            return None;
        }
        self.current_input().map(str::to_string)
    }

    fn write_focused(&mut self, text: String) {
        match self.focus {
            Focus::Question => self.draft.set_question(text),
            Focus::Option(i) => {
                self.draft.set_option(i, text);
            }
            Focus::Polls => {}
        }
    }

    pub fn add_option(&mut self) {
        if !self.is_submitting() {
            self.draft.add_option();
        }
    }

    // ========================
    // Poll store actions
    // ========================

    /// Build a refresh request. Refreshes are never deduplicated.
    pub fn refresh(&mut self) -> NetworkCommand {
        NetworkCommand::FetchPolls { id: self.next_id() }
    }

    /// Validate the draft and build the create request.
    ///
    /// An incomplete draft raises the fill-in notice and yields no request.
    pub fn submit_poll(&mut self) -> Option<NetworkCommand> {
        if self.is_submitting() {
            return None;
        }
        self.input_mode = InputMode::Normal;

        match self.draft.to_new_poll() {
            Ok(poll) => {
                let id = self.next_id();
                self.pending_create = Some(id);
                Some(NetworkCommand::CreatePoll { id, poll })
            }
            Err(e) => {
                tracing::debug!("Draft rejected: {}", e);
                self.notice = Some(e.to_string());
                None
            }
        }
    }

    /// Vote for an option of a stored poll. No local count is touched.
    pub fn vote(&mut self, poll_id: &str, option_index: usize) -> NetworkCommand {
        NetworkCommand::CastVote {
            id: self.next_id(),
            vote: VoteRequest {
                poll_id: poll_id.to_string(),
                option_index,
            },
        }
    }

    pub fn vote_selected(&mut self) -> Option<NetworkCommand> {
        let poll_id = {
            let poll = self.store.get(self.selected_poll)?;
            if self.selected_option >= poll.options.len() {
                return None;
            }
            poll.id.clone()
        };
        Some(self.vote(&poll_id, self.selected_option))
    }

    // ========================
    // Poll selection
    // ========================

    pub fn select_next(&mut self) {
        let Some(poll) = self.store.get(self.selected_poll) else {
            return;
        };
        if self.selected_option + 1 < poll.options.len() {
            self.selected_option += 1;
        } else if self.selected_poll + 1 < self.store.polls().len() {
            self.selected_poll += 1;
            self.selected_option = 0;
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected_option > 0 {
            self.selected_option -= 1;
        } else if self.selected_poll > 0 {
            self.selected_poll -= 1;
            self.selected_option = self
                .store
                .get(self.selected_poll)
                .map(|p| p.options.len().saturating_sub(1))
                .unwrap_or(0);
        }
    }

    fn clamp_selection(&mut self) {
        let polls = self.store.polls();
        if polls.is_empty() {
            self.selected_poll = 0;
            self.selected_option = 0;
            return;
        }
        self.selected_poll = self.selected_poll.min(polls.len() - 1);
        let options = polls[self.selected_poll].options.len();
        self.selected_option = self.selected_option.min(options.saturating_sub(1));
    }

    // ========================
    // Network responses
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        match response {
            NetworkResponse::PollsFetched { id, polls } => {
                tracing::debug!(id, count = polls.len(), "Polls refreshed");
                self.store.apply_fetched(polls);
                self.clamp_selection();
            }
            NetworkResponse::PollCreated { id, poll } => {
                tracing::info!(id, poll_id = %poll.id, "Poll created");
                let had_polls = !self.store.polls().is_empty();
                self.store.apply_created(poll);
                if had_polls {
                    self.selected_poll += 1;
                }
                self.finish_create(id);
                self.draft.reset();
                if matches!(self.focus, Focus::Option(_)) {
                    self.focus = Focus::Question;
                }
            }
            NetworkResponse::VoteRecorded { id, poll } => {
                let poll_id = poll.id.clone();
                if !self.store.apply_voted(poll) {
                    tracing::debug!(id, poll_id = %poll_id, "Voted poll no longer listed");
                }
                self.clamp_selection();
            }
            NetworkResponse::Failed { id, kind, message } => {
                tracing::warn!(id, %kind, %message, "Request failed");
                self.store.apply_failed(kind);
                self.finish_create(id);
            }
        }
    }

    fn finish_create(&mut self, id: u64) {
        if self.pending_create == Some(id) {
            self.pending_create = None;
        }
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PollError;
    use crate::models::fixtures::poll;
    use std::sync::Arc;

    fn fill_draft(state: &mut AppState) {
        state.draft.set_question("Best editor?");
        state.draft.set_option(0, "vim");
        state.draft.set_option(1, "emacs");
    }

    fn type_text(state: &mut AppState, text: &str) {
        state.start_editing();
        for c in text.chars() {
            state.enter_char(c);
        }
        state.stop_editing();
    }

    #[test]
    fn test_incomplete_draft_sends_nothing() {
        let mut state = AppState::new();
        state.draft.set_question("Anyone?");
        state.draft.set_option(0, "yes");

        assert!(state.submit_poll().is_none());
        assert!(!state.is_submitting());
        assert_eq!(state.notice.as_deref(), Some("Please fill in all fields"));
        assert_eq!(state.store.error(), None);
    }

    #[test]
    fn test_successful_create_prepends_and_resets() {
        let mut state = AppState::new();
        state.store.apply_fetched(vec![poll("A", &[1])]);
        fill_draft(&mut state);
        state.draft.add_option();
        state.draft.set_option(2, "nano");

        let cmd = state.submit_poll().unwrap();
        let NetworkCommand::CreatePoll { id, poll: body } = cmd else {
            panic!("expected create command");
        };
        assert_eq!(body.options, vec!["vim", "emacs", "nano"]);
        assert!(state.is_submitting());
        assert!(state.submit_poll().is_none());

        state.handle_response(NetworkResponse::PollCreated { id, poll: poll("N", &[0, 0, 0]) });

        let ids: Vec<_> = state.store.polls().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, vec!["N", "A"]);
        assert!(!state.is_submitting());
        assert_eq!(state.draft.question, "");
        assert_eq!(state.draft.options, vec!["", ""]);
    }

    #[test]
    fn test_failed_create_keeps_list_and_draft() {
        let mut state = AppState::new();
        state.store.apply_fetched(vec![poll("A", &[1]), poll("B", &[2])]);
        fill_draft(&mut state);

        let Some(NetworkCommand::CreatePoll { id, .. }) = state.submit_poll() else {
            panic!("expected create command");
        };
        state.handle_response(NetworkResponse::Failed {
            id,
            kind: PollError::Create,
            message: "server returned status 500".into(),
        });

        assert_eq!(state.store.polls().len(), 2);
        assert_eq!(state.store.error(), Some(PollError::Create));
        assert!(!state.is_submitting());
        assert_eq!(state.draft.question, "Best editor?");
    }

    #[test]
    fn test_vote_scenario_keeps_order() {
        let mut state = AppState::new();
        state.store.apply_fetched(vec![poll("A", &[0, 0]), poll("B", &[0, 0])]);
        let a = Arc::clone(&state.store.polls()[0]);

        let cmd = state.vote("B", 1);
        let NetworkCommand::CastVote { id, vote } = cmd else {
            panic!("expected vote command");
        };
        assert_eq!(vote, VoteRequest { poll_id: "B".into(), option_index: 1 });
        // Write-through: nothing changes until the server answers
        assert_eq!(state.store.polls()[1].total_votes, 0);

        state.handle_response(NetworkResponse::VoteRecorded { id, poll: poll("B", &[0, 1]) });
        let polls = state.store.polls();
        assert!(Arc::ptr_eq(&a, &polls[0]));
        assert_eq!(polls[1].id, "B");
        assert_eq!(polls[1].options[1].votes, 1);
    }

    #[test]
    fn test_vote_selected_uses_selection() {
        let mut state = AppState::new();
        state.store.apply_fetched(vec![poll("A", &[0, 0]), poll("B", &[0, 0, 0])]);
        state.focus = Focus::Polls;
        state.select_next();
        state.select_next();
        state.select_next();

        let Some(NetworkCommand::CastVote { vote, .. }) = state.vote_selected() else {
            panic!("expected vote command");
        };
        assert_eq!(vote.poll_id, "B");
        assert_eq!(vote.option_index, 1);

        state.select_prev();
        state.select_prev();
        assert_eq!((state.selected_poll, state.selected_option), (0, 1));
    }

    #[test]
    fn test_vote_selected_without_polls() {
        let mut state = AppState::new();
        assert!(state.vote_selected().is_none());
    }

    #[test]
    fn test_selection_clamped_after_refresh() {
        let mut state = AppState::new();
        state.store.apply_fetched(vec![poll("A", &[0]), poll("B", &[0, 0, 0])]);
        state.selected_poll = 1;
        state.selected_option = 2;
        state.handle_response(NetworkResponse::PollsFetched { id: 9, polls: vec![poll("A", &[0, 0])] });
        assert_eq!((state.selected_poll, state.selected_option), (0, 1));
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut state = AppState::new();
        type_text(&mut state, "Pizza?");
        state.next_field();
        type_text(&mut state, "Yes");
        state.next_field();
        type_text(&mut state, "Nah");
        state.delete_char();

        assert_eq!(state.draft.question, "Pizza?");
        assert_eq!(state.draft.options, vec!["Yes", "Nah"]);

        state.start_editing();
        state.delete_char();
        assert_eq!(state.draft.options[1], "Na");
    }

    #[test]
    fn test_form_locked_while_submitting() {
        let mut state = AppState::new();
        fill_draft(&mut state);
        state.submit_poll().unwrap();

        state.start_editing();
        assert_eq!(state.input_mode, InputMode::Normal);
        state.add_option();
        assert_eq!(state.draft.options.len(), 2);
    }

    #[test]
    fn test_error_replaced_then_cleared() {
        let mut state = AppState::new();
        state.handle_response(NetworkResponse::Failed { id: 1, kind: PollError::Fetch, message: String::new() });
        state.handle_response(NetworkResponse::Failed { id: 2, kind: PollError::Vote, message: String::new() });
        assert_eq!(state.to_render_state().error, Some(PollError::Vote));

        state.handle_response(NetworkResponse::PollsFetched { id: 3, polls: vec![] });
        assert_eq!(state.to_render_state().error, None);
    }
}
