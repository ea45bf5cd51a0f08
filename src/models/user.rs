//! Contact (end user) models for the Freshdesk API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{deserialize_optional_string_or_int, null_as_default, CustomFields, Record};

/// A contact: someone who raises tickets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Whether the contact has verified their account.
    #[serde(default)]
    pub active: Option<bool>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub job_title: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,

    /// Accepts either a string or a bare number on the wire.
    #[serde(default, deserialize_with = "deserialize_optional_string_or_int")]
    pub mobile: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string_or_int")]
    pub phone: Option<String>,

    #[serde(default)]
    pub time_zone: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub avatar: Option<serde_json::Value>,

    #[serde(default)]
    pub company_id: Option<i64>,

    #[serde(default)]
    pub view_all_tickets: Option<bool>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_fields: CustomFields,

    #[serde(default)]
    pub deleted: bool,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub other_emails: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub twitter_id: Option<String>,

    #[serde(default)]
    pub unique_external_id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub other_companies: Vec<serde_json::Value>,
}

impl Record for User {
    fn id(&self) -> i64 {
        self.id
    }
}

impl User {
    /// Returns the name, falling back to email or id.
    pub fn display_name(&self) -> String {
        if !self.name.is_empty() {
            return self.name.clone();
        }
        self.email
            .clone()
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

/// Input for creating or updating a contact.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_external_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other_emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_all_tickets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "CustomFields::is_empty")]
    pub custom_fields: CustomFields,
}

impl CreateUser {
    /// Starts a contact input from a name and email.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            ..Self::default()
        }
    }
}
