//! App actor - message loop processing UI events, network responses and the
//! refresh timer

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    refresh_interval: Duration,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        refresh_interval: Duration,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            refresh_interval,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop.
    ///
    /// The refresh timer lives inside this future: it fires once right away,
    /// then every `refresh_interval`, and is dropped on every exit path.
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        let mut refresh = time::interval(self.refresh_interval);
        refresh.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        loop {
            tokio::select! {
                event = ui_rx.recv() => {
                    let Some(event) = event else { break };
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    let _ = self.render_tx.send(self.state.to_render_state());
                }
                _ = refresh.tick() => {
                    let _ = self.network_tx.send(self.state.refresh());
                }
            }
        }

        tracing::info!("App actor stopped, refresh timer released");
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Focus navigation
            UiEvent::NextField => self.state.next_field(),
            UiEvent::PrevField => self.state.prev_field(),

            // Draft editing
            UiEvent::StartEditing => self.state.start_editing(),
            UiEvent::StopEditing => self.state.stop_editing(),
            UiEvent::CharInput(c) => self.state.enter_char(c),
            UiEvent::Backspace => self.state.delete_char(),
            UiEvent::AddOption => self.state.add_option(),
            UiEvent::SubmitPoll => {
                if let Some(cmd) = self.state.submit_poll() {
                    let _ = self.network_tx.send(cmd);
                }
            }

            // Poll list
            UiEvent::SelectPrev => self.state.select_prev(),
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::Vote => {
                if let Some(cmd) = self.state.vote_selected() {
                    let _ = self.network_tx.send(cmd);
                }
            }
            UiEvent::Refresh => {
                let _ = self.network_tx.send(self.state.refresh());
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),
            UiEvent::DismissNotice => self.state.dismiss_notice(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}
