//! Agent group and agent models for the Freshdesk API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{null_as_default, Record};

/// A group of agents that tickets can be assigned to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub escalate_to: Option<i64>,

    #[serde(default)]
    pub unassigned_for: Option<String>,

    #[serde(default)]
    pub business_hour_id: Option<i64>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub agent_ids: Vec<i64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Group {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Contact details embedded in an agent record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentContact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub job_title: Option<String>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub time_zone: Option<String>,
}

/// A helpdesk agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: i64,

    #[serde(default)]
    pub available: bool,

    #[serde(default)]
    pub occasional: bool,

    /// 1 = global, 2 = group, 3 = restricted.
    #[serde(default)]
    pub ticket_scope: Option<i64>,

    #[serde(default)]
    pub signature: Option<String>,

    #[serde(default)]
    pub contact: AgentContact,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Agent {
    fn id(&self) -> i64 {
        self.id
    }
}
