//! Company models for the Freshdesk API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, CustomFields, Record};

/// A customer company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Email domains that map contacts onto this company.
    #[serde(default, deserialize_with = "null_as_default")]
    pub domains: Vec<String>,

    #[serde(default)]
    pub note: Option<String>,

    #[serde(default)]
    pub health_score: Option<String>,

    #[serde(default)]
    pub account_tier: Option<String>,

    #[serde(default)]
    pub renewal_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub industry: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub custom_fields: CustomFields,
}

impl Record for Company {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Input for creating or updating a company. Unset fields are not sent,
/// so an update only touches what is set here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCompany {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_tier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renewal_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "CustomFields::is_empty")]
    pub custom_fields: CustomFields,
}

impl CreateCompany {
    /// Starts a company input with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
