//! Ticket models for the Freshdesk API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, CustomFields, Record};

/// A helpdesk ticket as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID.
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,

    /// Ticket type (e.g. "Question", "Incident"). Free-form per helpdesk.
    #[serde(default, rename = "type")]
    pub ticket_type: Option<String>,

    /// HTML description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description_text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cc_emails: Vec<String>,

    #[serde(default)]
    pub company_id: Option<i64>,

    #[serde(default)]
    pub deleted: bool,

    #[serde(default)]
    pub due_by: Option<DateTime<Utc>>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub email_config_id: Option<i64>,

    #[serde(default)]
    pub facebook_id: Option<String>,

    /// First response due time.
    #[serde(default, rename = "fr_due_by")]
    pub first_response_due_by: Option<DateTime<Utc>>,

    #[serde(default, rename = "fr_escalated")]
    pub first_response_escalated: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub fwd_emails: Vec<String>,

    /// Group the ticket is assigned to.
    #[serde(default)]
    pub group_id: Option<i64>,

    #[serde(default)]
    pub is_escalated: bool,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    /// See [`Priority`].
    #[serde(default)]
    pub priority: i64,

    #[serde(default)]
    pub product_id: Option<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub reply_cc_emails: Vec<String>,

    #[serde(default)]
    pub requester_id: Option<i64>,

    /// Agent assigned to the ticket.
    #[serde(default)]
    pub responder_id: Option<i64>,

    /// See [`Source`].
    #[serde(default)]
    pub source: i64,

    #[serde(default)]
    pub spam: bool,

    /// See [`Status`].
    #[serde(default)]
    pub status: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub to_emails: Vec<String>,

    #[serde(default)]
    pub twitter_id: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_fields: CustomFields,
}

impl Record for Ticket {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Ticket {
    /// Returns the subject or a placeholder.
    pub fn display_subject(&self) -> &str {
        if self.subject.is_empty() {
            "(No subject)"
        } else {
            &self.subject
        }
    }

    /// Returns true if the ticket carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Input for creating a ticket. Unset fields are left out of the request body.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTicket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responder_id: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc_emails: Vec<String>,
    #[serde(skip_serializing_if = "CustomFields::is_empty")]
    pub custom_fields: CustomFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_by: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_config_id: Option<i64>,
    #[serde(rename = "fr_due_by", skip_serializing_if = "Option::is_none")]
    pub first_response_due_by: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
}

impl CreateTicket {
    /// Starts a ticket from a requester email, subject and description.
    pub fn new(
        email: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            email: Some(email.into()),
            subject: Some(subject.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Sets the ticket status.
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status.value());
        self
    }

    /// Sets the ticket priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority.value());
        self
    }

    /// Sets the channel the ticket came in through.
    pub fn with_source(mut self, source: Source) -> Self {
        self.source = Some(source.value());
        self
    }

    /// Adds a tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// Channel a ticket was raised through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Email = 1,
    Portal = 2,
    Phone = 3,
    Chat = 7,
    Mobihelp = 8,
    FeedbackWidget = 9,
    OutboundEmail = 10,
}

/// Ticket lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Open = 2,
    Pending = 3,
    Resolved = 4,
    Closed = 5,
}

/// Ticket priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low = 1,
    Medium = 2,
    High = 3,
    Urgent = 4,
}

impl Source {
    /// Numeric wire value.
    pub fn value(self) -> i64 {
        self as i64
    }
}

impl Status {
    /// Numeric wire value.
    pub fn value(self) -> i64 {
        self as i64
    }
}

impl Priority {
    /// Numeric wire value.
    pub fn value(self) -> i64 {
        self as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ticket_deserialize_with_nulls() {
        let json = r#"{
            "id": 12,
            "subject": "Printer on fire",
            "type": null,
            "tags": null,
            "cc_emails": ["a@example.com"],
            "group_id": 5,
            "priority": 4,
            "status": 2,
            "created_at": "2024-03-01T10:00:00Z",
            "custom_fields": {"cf_region": "EU"}
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, 12);
        assert_eq!(ticket.ticket_type, None);
        assert!(ticket.tags.is_empty());
        assert_eq!(ticket.group_id, Some(5));
        assert_eq!(ticket.priority, Priority::Urgent.value());
        assert_eq!(ticket.custom_fields["cf_region"], "EU");
        assert!(ticket.created_at.is_some());
    }

    #[test]
    fn test_create_ticket_omits_unset_fields() {
        let input = CreateTicket::new("jane@example.com", "Help", "It broke")
            .with_status(Status::Open)
            .with_priority(Priority::High)
            .with_tag("vip");
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "email": "jane@example.com",
                "subject": "Help",
                "description": "It broke",
                "status": 2,
                "priority": 3,
                "tags": ["vip"]
            })
        );
    }

    #[test]
    fn test_enum_values() {
        assert_eq!(Source::Chat.value(), 7);
        assert_eq!(Source::OutboundEmail.value(), 10);
        assert_eq!(Status::Closed.value(), 5);
        assert_eq!(Priority::Low.value(), 1);
    }

    #[test]
    fn test_display_subject_placeholder() {
        let ticket = Ticket::default();
        assert_eq!(ticket.display_subject(), "(No subject)");
    }
}
