//! Network actor - runs poll service requests in the Tokio runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::PollClient;

/// Network actor that executes poll commands concurrently.
///
/// Every command gets its own task, so a slow refresh never blocks the next
/// tick or a vote. Responses are forwarded in completion order.
pub struct NetworkActor {
    client: PollClient,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(client: PollClient, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Shutdown) | None => {
                            tracing::info!(in_flight = self.active_requests.len(), "Network actor shutting down");
                            self.active_requests.abort_all();
                            break;
                        }
                        Some(command) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(?command, url = client.base_url(), "Executing request");
                                if let Some(result) = client.execute(command).await {
                                    if let NetworkResponse::Failed { id, message, .. } = &result {
                                        tracing::debug!(id, %message, "Request returned failure");
                                    } else {
                                        tracing::info!(id = result.id(), "Request completed");
                                    }
                                    let _ = response_tx.send(result);
                                }
                            });
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {
                    // Task completed - responses were sent by the task itself
                }
            }
        }
    }
}
