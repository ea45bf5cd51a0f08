//! Company operations.

use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Company, CreateCompany};
use crate::pagination::fetch_all;

/// Company operations, obtained with [`ApiClient::companies`].
#[derive(Debug, Clone, Copy)]
pub struct CompanyManager<'a> {
    client: &'a ApiClient,
}

impl<'a> CompanyManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetches every company, following all pages.
    pub async fn all(&self) -> Result<Vec<Company>> {
        fetch_all(self.client, &self.client.endpoints().companies_all()).await
    }

    /// Creates a company. The API must answer 201.
    pub async fn create(&self, input: &CreateCompany) -> Result<Company> {
        self.client
            .post(
                &self.client.endpoints().companies_create(),
                input,
                StatusCode::CREATED,
            )
            .await
    }

    /// Updates a company. The API must answer 200.
    pub async fn update(&self, id: i64, input: &CreateCompany) -> Result<Company> {
        ApiClient::validate_id(id, "company_id")?;
        self.client
            .put(
                &self.client.endpoints().companies_update(id),
                input,
                StatusCode::OK,
            )
            .await
    }
}
