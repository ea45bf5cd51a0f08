//! Conversation and reply models for the Freshdesk API.
//!
//! Conversations are the replies and notes attached to a ticket. A reply is
//! the record the API hands back after posting to a ticket's reply endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, sort_newest_first, Record};

/// A conversation entry (reply or note) on a ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique conversation ID.
    pub id: i64,

    /// Plain-text content.
    #[serde(default, deserialize_with = "null_as_default")]
    pub body_text: String,

    /// HTML content.
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,

    /// True when the message came from outside the helpdesk.
    #[serde(default)]
    pub incoming: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub to_emails: Vec<String>,

    /// Private notes are only visible to agents.
    #[serde(default)]
    pub private: bool,

    #[serde(default)]
    pub source: i64,

    #[serde(default)]
    pub support_email: Option<String>,

    pub ticket_id: i64,

    #[serde(default)]
    pub user_id: Option<i64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub from_email: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cc_emails: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub bcc_emails: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<serde_json::Value>,
}

impl Record for Conversation {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Conversation {
    /// Orders a ticket's conversations newest first.
    pub fn sort_newest_first(conversations: &mut [Conversation]) {
        sort_newest_first(conversations, |c| c.created_at);
    }

    /// Returns the direction indicator.
    pub fn direction(&self) -> &str {
        if self.incoming {
            "Incoming"
        } else {
            "Outgoing"
        }
    }
}

/// A reply posted to a ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub body_text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,

    #[serde(default)]
    pub user_id: Option<i64>,

    #[serde(default)]
    pub from_email: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cc_emails: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub bcc_emails: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub to_emails: Vec<String>,

    pub ticket_id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub replied_to: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<serde_json::Value>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Input for replying to a ticket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateReply {
    /// HTML body of the reply. Required by the API.
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc_emails: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc_emails: Vec<String>,
}

impl CreateReply {
    /// Creates a reply with the given HTML body.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    /// Adds a CC recipient.
    pub fn with_cc(mut self, email: impl Into<String>) -> Self {
        self.cc_emails.push(email.into());
        self
    }
}
