//! Resource paths of the Freshdesk v2 API.
//!
//! The table is a plain value owned by the [`ApiClient`](crate::client::ApiClient)
//! and handed to every manager through it. Tests and proxies can swap the
//! prefix with [`Endpoints::with_prefix`].

/// Default API prefix.
pub const API_V2: &str = "/api/v2";

/// Path table for every resource the client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    prefix: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::with_prefix(API_V2)
    }
}

impl Endpoints {
    /// Builds a table rooted at `prefix` (e.g. `/api/v2`).
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    /// The prefix every path starts with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    // Agents

    /// Lists agents.
    pub fn agents_all(&self) -> String {
        format!("{}/agents", self.prefix)
    }

    /// The agent owning the API key.
    pub fn agents_me(&self) -> String {
        format!("{}/agents/me", self.prefix)
    }

    // Companies

    /// Lists companies.
    pub fn companies_all(&self) -> String {
        format!("{}/companies", self.prefix)
    }

    /// Creates a company.
    pub fn companies_create(&self) -> String {
        self.companies_all()
    }

    /// Updates company `id`.
    pub fn companies_update(&self, id: i64) -> String {
        format!("{}/companies/{}", self.prefix, id)
    }

    // Contacts

    /// Lists contacts.
    pub fn contacts_all(&self) -> String {
        format!("{}/contacts", self.prefix)
    }

    /// Creates a contact.
    pub fn contacts_create(&self) -> String {
        self.contacts_all()
    }

    /// Updates contact `id`.
    pub fn contacts_update(&self, id: i64) -> String {
        format!("{}/contacts/{}", self.prefix, id)
    }

    /// Search path; `query` must already be URL-safe.
    pub fn contacts_search(&self, query: &str) -> String {
        format!("{}/search/contacts?{}", self.prefix, query)
    }

    // Groups

    /// Lists agent groups.
    pub fn groups_all(&self) -> String {
        format!("{}/groups", self.prefix)
    }

    // Tickets

    /// Lists tickets.
    pub fn tickets_all(&self) -> String {
        format!("{}/tickets", self.prefix)
    }

    /// Creates a ticket.
    pub fn tickets_create(&self) -> String {
        self.tickets_all()
    }

    /// Fetches ticket `id`.
    pub fn tickets_view(&self, id: i64) -> String {
        format!("{}/tickets/{}", self.prefix, id)
    }

    /// Search path; `query` must already be URL-safe.
    pub fn tickets_search(&self, query: &str) -> String {
        format!("{}/search/tickets?{}", self.prefix, query)
    }

    /// Replies on ticket `id`.
    pub fn tickets_reply(&self, id: i64) -> String {
        format!("{}/tickets/{}/reply", self.prefix, id)
    }

    /// Conversations of ticket `id`.
    pub fn tickets_conversations(&self, id: i64) -> String {
        format!("{}/tickets/{}/conversations", self.prefix, id)
    }

    /// Tickets updated since an ISO 8601 timestamp.
    pub fn tickets_updated_since(&self, since: &str) -> String {
        format!(
            "{}/tickets?updated_since={}",
            self.prefix,
            urlencoding::encode(since)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let e = Endpoints::default();
        assert_eq!(e.tickets_all(), "/api/v2/tickets");
        assert_eq!(e.tickets_view(42), "/api/v2/tickets/42");
        assert_eq!(e.tickets_reply(42), "/api/v2/tickets/42/reply");
        assert_eq!(e.tickets_conversations(7), "/api/v2/tickets/7/conversations");
        assert_eq!(e.companies_update(9), "/api/v2/companies/9");
        assert_eq!(e.contacts_search("query=x"), "/api/v2/search/contacts?query=x");
        assert_eq!(e.groups_all(), "/api/v2/groups");
        assert_eq!(e.agents_me(), "/api/v2/agents/me");
    }

    #[test]
    fn test_updated_since_is_encoded() {
        let e = Endpoints::default();
        assert_eq!(
            e.tickets_updated_since("2024-01-01T00:00:00Z"),
            "/api/v2/tickets?updated_since=2024-01-01T00%3A00%3A00Z"
        );
    }

    #[test]
    fn test_custom_prefix_trims_slash() {
        let e = Endpoints::with_prefix("/proxy/api/v2/");
        assert_eq!(e.prefix(), "/proxy/api/v2");
        assert_eq!(e.groups_all(), "/proxy/api/v2/groups");
    }
}
