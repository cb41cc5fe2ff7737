//! Network messages - communication between App and Network layers

use crate::error::PollError;
use crate::models::{NewPoll, Poll, VoteRequest};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// `GET /api/polls`
    FetchPolls { id: u64 },
    /// `POST /api/polls/new`
    CreatePoll { id: u64, poll: NewPoll },
    /// `PUT /api/polls/{poll_id}`
    CastVote { id: u64, vote: VoteRequest },
    /// Shutdown the network actor
    Shutdown,
}

impl NetworkCommand {
    /// Category reported if this command fails
    pub fn failure_kind(&self) -> Option<PollError> {
        match self {
            NetworkCommand::FetchPolls { .. } => Some(PollError::Fetch),
            NetworkCommand::CreatePoll { .. } => Some(PollError::Create),
            NetworkCommand::CastVote { .. } => Some(PollError::Vote),
            NetworkCommand::Shutdown => None,
        }
    }
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Full poll collection
    PollsFetched { id: u64, polls: Vec<Poll> },
    /// Poll created by the server
    PollCreated { id: u64, poll: Poll },
    /// Poll after the server recorded a vote
    VoteRecorded { id: u64, poll: Poll },
    /// Any transport, status or decode failure
    Failed {
        id: u64,
        kind: PollError,
        message: String,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::PollsFetched { id, .. } => *id,
            NetworkResponse::PollCreated { id, .. } => *id,
            NetworkResponse::VoteRecorded { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }
}
