use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// A single answer within a poll
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub text: String,
    #[serde(default)]
    pub votes: u64,
}

/// A poll as returned by the server
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    #[serde(rename = "_id")]
    pub id: String,
    pub question: String,
    pub options: Vec<PollOption>,
    /// Server-maintained total; never recomputed on the client
    #[serde(default)]
    pub total_votes: u64,
    pub created_at: DateTime<Utc>,
}

impl Poll {
    /// Share of the total for the option at `index`, in percent.
    ///
    /// Returns 0.0 when nobody has voted yet or the index is out of range.
    pub fn option_percent(&self, index: usize) -> f64 {
        match self.options.get(index) {
            Some(option) if self.total_votes > 0 => {
                option.votes as f64 / self.total_votes as f64 * 100.0
            }
            _ => 0.0,
        }
    }

    /// Percentage label shown next to an option: one decimal rounded half-up,
    /// or a bare `0%` before the first vote.
    pub fn percent_label(&self, index: usize) -> String {
        if self.total_votes == 0 {
            String::from("0%")
        } else {
            let percent = (self.option_percent(index) * 10.0).round() / 10.0;
            format!("{:.1}%", percent)
        }
    }

    /// Creation date in the local timezone
    pub fn created_date(&self) -> String {
        self.created_at.with_timezone(&Local).format("%x").to_string()
    }
}

/// Body of `GET /api/polls`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PollList {
    #[serde(default)]
    pub polls: Vec<Poll>,
}

/// Body of `POST /api/polls/new`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPoll {
    pub question: String,
    pub options: Vec<String>,
}

/// Body of `PUT /api/polls/{id}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub poll_id: String,
    pub option_index: usize,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_server_poll() {
        let json = r#"{
            "_id": "65f1c0ffee",
            "question": "Tabs or spaces?",
            "options": [{"text": "Tabs", "votes": 1}, {"text": "Spaces", "votes": 3}],
            "totalVotes": 4,
            "createdAt": "2024-03-01T12:00:00.000Z",
            "__v": 0
        }"#;
        let poll: Poll = serde_json::from_str(json).unwrap();
        assert_eq!(poll.id, "65f1c0ffee");
        assert_eq!(poll.options[1].text, "Spaces");
        assert_eq!(poll.total_votes, 4);
    }

    #[test]
    fn test_vote_request_uses_wire_names() {
        let body = serde_json::to_value(VoteRequest {
            poll_id: "abc".into(),
            option_index: 2,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"pollId": "abc", "optionIndex": 2}));
    }

    #[test]
    fn test_percent_without_votes_is_zero() {
        let poll = fixtures::poll("a", &[0, 0, 0]);
        assert_eq!(poll.option_percent(1), 0.0);
        assert_eq!(poll.percent_label(1), "0%");
    }

    #[test]
    fn test_percent_label_one_decimal() {
        let poll = fixtures::poll("a", &[1, 2]);
        assert_eq!(poll.percent_label(0), "33.3%");
        assert_eq!(poll.percent_label(1), "66.7%");
    }

    #[test]
    fn test_percent_label_rounds_ties_up() {
        let poll = fixtures::poll("p", &[1, 15]);
        assert_eq!(poll.total_votes, 16);
        assert_eq!(poll.percent_label(0), "6.3%");
        assert_eq!(poll.percent_label(1), "93.8%");
    }

    #[test]
    fn test_total_votes_taken_from_server() {
        let mut poll = fixtures::poll("a", &[1, 1]);
        poll.total_votes = 4;
        assert_eq!(poll.option_percent(0), 25.0);
    }
}
