//! Group operations.

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::Group;
use crate::pagination::fetch_all;

/// Group operations, obtained with [`ApiClient::groups`].
#[derive(Debug, Clone, Copy)]
pub struct GroupManager<'a> {
    client: &'a ApiClient,
}

impl<'a> GroupManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetches every group, following all pages.
    pub async fn all(&self) -> Result<Vec<Group>> {
        fetch_all(self.client, &self.client.endpoints().groups_all()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_all_groups() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/groups"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "Billing", "agent_ids": [4, 5]},
                {"id": 2, "name": "Support", "agent_ids": null}
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = Config::new(&mock_server.uri(), "test_key").unwrap();
        let client = ApiClient::new(&config).unwrap();
        let groups = client.groups().all().await.unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].agent_ids, vec![4, 5]);
        assert!(groups[1].agent_ids.is_empty());
    }
}
