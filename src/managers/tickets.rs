//! Ticket operations.

use reqwest::StatusCode;

use crate::client::ApiClient;
use crate::error::Result;
use crate::models::{Conversation, CreateReply, CreateTicket, Reply, Ticket};
use crate::pagination::{search_pages, Results};
use crate::query::Query;

/// Ticket operations, obtained with [`ApiClient::tickets`].
#[derive(Debug, Clone, Copy)]
pub struct TicketManager<'a> {
    client: &'a ApiClient,
}

impl<'a> TicketManager<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetches the first page of tickets.
    ///
    /// Walk further pages with [`Results::next`], or drain them with
    /// [`Results::collect_all`].
    pub async fn all(&self) -> Result<Results<Ticket>> {
        self.first_page(&self.client.endpoints().tickets_all()).await
    }

    /// Fetches the first page of tickets updated since `since`
    /// (ISO 8601, e.g. `2024-01-01T00:00:00Z`).
    pub async fn updated_since_all(&self, since: &str) -> Result<Results<Ticket>> {
        self.first_page(&self.client.endpoints().tickets_updated_since(since))
            .await
    }

    async fn first_page(&self, path: &str) -> Result<Results<Ticket>> {
        let (tickets, headers) = self.client.get::<Vec<Ticket>>(path).await?;
        Ok(Results::new(
            self.client.clone(),
            tickets,
            ApiClient::next_link(&headers),
        ))
    }

    /// Creates a ticket. The API must answer 201.
    pub async fn create(&self, input: &CreateTicket) -> Result<Ticket> {
        self.client
            .post(
                &self.client.endpoints().tickets_create(),
                input,
                StatusCode::CREATED,
            )
            .await
    }

    /// Fetches one ticket.
    pub async fn view(&self, id: i64) -> Result<Ticket> {
        ApiClient::validate_id(id, "ticket_id")?;
        let (ticket, _) = self
            .client
            .get(&self.client.endpoints().tickets_view(id))
            .await?;
        Ok(ticket)
    }

    /// Searches tickets, following result pages up to
    /// [`MAX_SEARCH_PAGES`](crate::pagination::MAX_SEARCH_PAGES).
    ///
    /// Results past the page limit, or after a failed follow-up page, are
    /// silently left out. Compare [`Results::total`] with the result count
    /// to detect this.
    pub async fn search(&self, query: &Query) -> Result<Results<Ticket>> {
        let path = self.client.endpoints().tickets_search(&query.url_safe());
        search_pages(self.client, &path).await
    }

    /// Posts a reply on a ticket. The API must answer 201.
    pub async fn reply(&self, ticket_id: i64, input: &CreateReply) -> Result<Reply> {
        ApiClient::validate_id(ticket_id, "ticket_id")?;
        self.client
            .post(
                &self.client.endpoints().tickets_reply(ticket_id),
                input,
                StatusCode::CREATED,
            )
            .await
    }

    /// Lists the conversations on a ticket, in server order.
    pub async fn conversations(&self, ticket_id: i64) -> Result<Vec<Conversation>> {
        ApiClient::validate_id(ticket_id, "ticket_id")?;
        let (conversations, _) = self
            .client
            .get(&self.client.endpoints().tickets_conversations(ticket_id))
            .await?;
        Ok(conversations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::FreshdeskError;
    use crate::models::{Priority, Status};
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> ApiClient {
        let config = Config::new(base_url, "test_key").unwrap();
        ApiClient::new(&config).unwrap()
    }

    fn tickets(ids: std::ops::Range<i64>) -> Vec<serde_json::Value> {
        ids.map(|id| serde_json::json!({"id": id, "subject": format!("Ticket {id}")}))
            .collect()
    }

    fn search_page(ids: std::ops::Range<i64>, total: u64) -> serde_json::Value {
        serde_json::json!({"results": tickets(ids), "total": total})
    }

    #[tokio::test]
    async fn test_all_returns_first_page_with_next_link() {
        let mock_server = MockServer::start().await;
        let base = mock_server.uri();

        Mock::given(method("GET"))
            .and(path("/api/v2/tickets"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tickets(3..5)))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/tickets"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(tickets(1..3))
                    .insert_header(
                        "Link",
                        format!("<{base}/api/v2/tickets?page=2>; rel=\"next\"").as_str(),
                    ),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&base);
        let first = client.tickets().all().await.unwrap();
        assert_eq!(first.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        assert!(first.has_next());

        let second = first.next().await.unwrap();
        assert_eq!(second.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 4]);
        assert!(!second.has_next());

        let err = second.next().await.unwrap_err();
        assert!(matches!(err, FreshdeskError::ExhaustedCursor));
    }

    #[tokio::test]
    async fn test_all_then_collect_all() {
        let mock_server = MockServer::start().await;
        let base = mock_server.uri();

        Mock::given(method("GET"))
            .and(path("/api/v2/tickets"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tickets(3..4)))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/tickets"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(tickets(1..3))
                    .insert_header(
                        "Link",
                        format!("<{base}/api/v2/tickets?page=2>; rel=\"next\"").as_str(),
                    ),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&base);
        let all = client.tickets().all().await.unwrap().collect_all().await.unwrap();
        assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_updated_since_passes_timestamp() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/tickets"))
            .and(query_param("updated_since", "2024-01-01T00:00:00Z"))
            .respond_with(ResponseTemplate::new(200).set_body_json(tickets(1..2)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let page = client
            .tickets()
            .updated_since_all("2024-01-01T00:00:00Z")
            .await
            .unwrap();
        assert_eq!(page.len(), 1);
        assert!(!page.has_next());
    }

    #[tokio::test]
    async fn test_create_expects_201() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/tickets"))
            .and(body_json(serde_json::json!({
                "email": "jane@example.com",
                "subject": "Help",
                "description": "It broke",
                "status": 2,
                "priority": 3
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 77,
                "subject": "Help",
                "status": 2,
                "priority": 3
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let input = CreateTicket::new("jane@example.com", "Help", "It broke")
            .with_status(Status::Open)
            .with_priority(Priority::High);
        let ticket = client.tickets().create(&input).await.unwrap();
        assert_eq!(ticket.id, 77);
        assert_eq!(ticket.subject, "Help");
    }

    #[tokio::test]
    async fn test_create_rejects_other_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 1})))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .tickets()
            .create(&CreateTicket::new("a@example.com", "s", "d"))
            .await
            .unwrap_err();
        assert!(err.is_transport());
        match err {
            FreshdeskError::UnexpectedStatus {
                expected, status, ..
            } => {
                assert_eq!(expected, StatusCode::CREATED);
                assert_eq!(status, StatusCode::OK);
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_view_and_conversations() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/tickets/12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 12,
                "subject": "Printer",
                "tags": ["hardware"]
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/tickets/12/conversations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "ticket_id": 12, "body_text": "first"},
                {"id": 2, "ticket_id": 12, "body_text": "second"}
            ])))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let ticket = client.tickets().view(12).await.unwrap();
        assert!(ticket.has_tag("hardware"));

        let conversations = client.tickets().conversations(12).await.unwrap();
        assert_eq!(
            conversations.iter().map(|c| c.body_text.as_str()).collect::<Vec<_>>(),
            vec!["first", "second"]
        );
    }

    #[tokio::test]
    async fn test_reply_posts_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v2/tickets/12/reply"))
            .and(body_json(serde_json::json!({"body": "<p>On it</p>"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 900,
                "ticket_id": 12,
                "body": "<p>On it</p>"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let reply = client
            .tickets()
            .reply(12, &CreateReply::new("<p>On it</p>"))
            .await
            .unwrap();
        assert_eq!(reply.id, 900);
        assert_eq!(reply.ticket_id, 12);
    }

    #[tokio::test]
    async fn test_view_rejects_bad_id_without_request() {
        let mock_server = MockServer::start().await;
        let client = test_client(&mock_server.uri());
        let err = client.tickets().view(0).await.unwrap_err();
        assert!(matches!(err, FreshdeskError::Validation(_)));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_follows_pages_until_total() {
        let mock_server = MockServer::start().await;
        let query = Query::field("status", 2);

        Mock::given(method("GET"))
            .and(path("/api/v2/search/tickets"))
            .and(query_param("query", "\"status:2\""))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_page(11..21, 25)))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/search/tickets"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_page(21..26, 25)))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/search/tickets"))
            .and(query_param("query", "\"status:2\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_page(1..11, 25)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let results = client.tickets().search(&query).await.unwrap();
        assert_eq!(results.len(), 25);
        assert_eq!(results.total(), Some(25));
        assert!(!results.has_next());
        assert_eq!(
            results.iter().map(|t| t.id).collect::<Vec<_>>(),
            (1..26).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_search_stops_silently_on_failed_page() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/search/tickets"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_page(11..21, 25)))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/search/tickets"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v2/search/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_page(1..11, 25)))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let results = client
            .tickets()
            .search(&Query::field("priority", 4))
            .await
            .unwrap();
        assert_eq!(results.len(), 20);
        assert_eq!(results.total(), Some(25));
        assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_search_caps_at_ten_pages() {
        let mock_server = MockServer::start().await;

        // Every page claims far more results than ten pages can hold.
        Mock::given(method("GET"))
            .and(path("/api/v2/search/tickets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_page(1..11, 300)))
            .expect(10)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let results = client
            .tickets()
            .search(&Query::field("status", 2))
            .await
            .unwrap();
        assert_eq!(results.len(), 100);
        assert_eq!(results.total(), Some(300));
    }

    #[tokio::test]
    async fn test_search_first_page_failure_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v2/search/tickets"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid query"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let err = client
            .tickets()
            .search(&Query::raw("nonsense"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }
}
