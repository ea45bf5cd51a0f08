//! Contact operations. Freshdesk calls end users "contacts".

use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{CreateUser, User};
use crate::pagination::{fetch_all, search_pages, Results};
use crate::query::Query;

/// Contact operations, obtained with [`ApiClient::users`].
#[derive(Debug, Clone, Copy)]
pub struct UserManager<'a> {
    client: &'a ApiClient,
}

impl<'a> UserManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetches every contact, following all pages.
    pub async fn all(&self) -> Result<Vec<User>> {
        fetch_all(self.client, &self.client.endpoints().contacts_all()).await
    }

    /// Creates a contact. The API must answer 201.
    pub async fn create(&self, input: &CreateUser) -> Result<User> {
        self.client
            .post(
                &self.client.endpoints().contacts_create(),
                input,
                StatusCode::CREATED,
            )
            .await
    }

    /// Updates a contact. The API must answer 200.
    pub async fn update(&self, id: i64, input: &CreateUser) -> Result<User> {
        ApiClient::validate_id(id, "contact_id")?;
        self.client
            .put(
                &self.client.endpoints().contacts_update(id),
                input,
                StatusCode::OK,
            )
            .await
    }

    /// Searches contacts. Paging behaves like
    /// [`TicketManager::search`](crate::managers::TicketManager::search).
    pub async fn search(&self, query: &Query) -> Result<Results<User>> {
        let path = self.client.endpoints().contacts_search(&query.url_safe());
        search_pages(self.client, &path).await
    }
}
