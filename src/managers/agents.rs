//! Agent operations.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::Agent;
use crate::pagination::fetch_all;

/// Agent operations, obtained with [`ApiClient::agents`].
#[derive(Debug, Clone, Copy)]
pub struct AgentManager<'a> {
    client: &'a ApiClient,
}

impl<'a> AgentManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetches every agent, following all pages.
    pub async fn all(&self) -> Result<Vec<Agent>> {
        fetch_all(self.client, &self.client.endpoints().agents_all()).await
    }

    /// Fetches the agent that owns the API key.
    pub async fn me(&self) -> Result<Agent> {
        let (agent, _) = self
            .client
            .get(&self.client.endpoints().agents_me())
            .await?;
        Ok(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::FreshdeskError;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> ApiClient {
        let config = Config::new(base_url, "test_key").unwrap();
        ApiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_me() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/agents/me"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 3,
                "available": true,
                "ticket_scope": 1,
                "contact": {"name": "Ada", "email": "ada@example.com"}
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let agent = client.agents().me().await.unwrap();
        assert_eq!(agent.id, 3);
        assert!(agent.available);
        assert_eq!(agent.contact.name, "Ada");
    }

    #[tokio::test]
    async fn test_all_unauthorized() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/agents"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client.agents().all().await.unwrap_err();
        assert!(matches!(err, FreshdeskError::Authentication));
    }
}
