//! Page cursors and the page-walking loops shared by the managers.
//!
//! List endpoints page through a `Link` header (RFC 5988):
//!
//! ```text
//! Link: <https://acme.freshdesk.com/api/v2/tickets?page=2>; rel="next"
//! ```
//!
//! Search endpoints instead report a `total` in the body and are paged with
//! an explicit `&page=N` parameter.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::{FreshdeskError, Result};

/// Highest page the search endpoints will be asked for.
///
/// Freshdesk serves at most 10 pages of search results. Past that the
/// results are cut off without an error; see [`search_pages`].
pub const MAX_SEARCH_PAGES: u32 = 10;

/// One page of records plus the link to the page after it.
///
/// `next()` returns a new cursor and leaves this one untouched; callers
/// normally drop the old cursor.
#[derive(Debug, Clone)]
pub struct Results<T> {
    /// Records on the current page, in server order.
    pub results: Vec<T>,
    next: Option<String>,
    total: Option<u64>,
    client: ApiClient,
}

impl<T> Results<T> {
    pub(crate) fn new(client: ApiClient, results: Vec<T>, next: Option<String>) -> Self {
        Self {
            results,
            next,
            total: None,
            client,
        }
    }

    pub(crate) fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Returns true if another page can be fetched.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// The opaque link to the next page, if any.
    pub fn next_link(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// Total hits reported by a search endpoint.
    ///
    /// Compare with `results.len()` to tell whether a search was cut off.
    /// `None` for plain list cursors.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterates over the records on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }

    /// Consumes the cursor, keeping only this page's records.
    pub fn into_inner(self) -> Vec<T> {
        self.results
    }

    pub(crate) fn client(&self) -> &ApiClient {
        &self.client
    }
}

impl<T: DeserializeOwned> Results<T> {
    /// Fetches the page after this one.
    ///
    /// # Errors
    ///
    /// Returns `FreshdeskError::ExhaustedCursor` without touching the network
    /// when there is no next page; transport and decoding errors otherwise.
    pub async fn next(&self) -> Result<Results<T>> {
        let Some(link) = self.next.as_deref() else {
            return Err(FreshdeskError::ExhaustedCursor);
        };

        let (results, headers) = self.client.get::<Vec<T>>(link).await?;
        Ok(Results::new(
            self.client.clone(),
            results,
            ApiClient::next_link(&headers),
        ))
    }

    /// Fetches every remaining page and returns all records, this page first.
    ///
    /// Fails on the first page that cannot be fetched; records gathered so
    /// far are dropped.
    pub async fn collect_all(self) -> Result<Vec<T>> {
        follow_links(&self.client, self.results, self.next).await
    }
}

impl<'a, T> IntoIterator for &'a Results<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Fetches `path` and every page linked from it, concatenated in fetch order.
pub(crate) async fn fetch_all<T>(client: &ApiClient, path: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let (first, headers) = client.get::<Vec<T>>(path).await?;
    follow_links(client, first, ApiClient::next_link(&headers)).await
}

async fn follow_links<T>(
    client: &ApiClient,
    mut output: Vec<T>,
    mut next: Option<String>,
) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    while let Some(link) = next {
        let (page, headers) = client.get::<Vec<T>>(&link).await?;
        output.extend(page);
        next = ApiClient::next_link(&headers);
    }
    Ok(output)
}

/// Body of a search response.
#[derive(Debug, Deserialize)]
struct SearchPage<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
    #[serde(default)]
    total: u64,
}

/// Runs a search and keeps requesting pages while fewer than `total`
/// results have arrived.
///
/// Two stop conditions return what was gathered so far *without* an error:
///
/// - page [`MAX_SEARCH_PAGES`] has been fetched;
/// - a page after the first fails.
///
/// Both are logged at `warn`. Callers that need to detect truncation should
/// compare [`Results::total`] with the number of results. A failure on the
/// first page is returned as an error.
pub(crate) async fn search_pages<T>(client: &ApiClient, path: &str) -> Result<Results<T>>
where
    T: DeserializeOwned,
{
    let (first, _) = client.get::<SearchPage<T>>(path).await?;
    let mut results = first.results;
    let mut total = first.total;
    let mut page = 1;

    while (results.len() as u64) < total {
        if page >= MAX_SEARCH_PAGES {
            tracing::warn!(
                path = %path,
                fetched = results.len(),
                total,
                "Search results truncated at page limit"
            );
            break;
        }
        page += 1;

        match client
            .get::<SearchPage<T>>(&format!("{}&page={}", path, page))
            .await
        {
            Ok((next, _)) => {
                results.extend(next.results);
                total = next.total;
            }
            Err(e) => {
                tracing::warn!(
                    path = %path,
                    page,
                    fetched = results.len(),
                    total,
                    error = %e,
                    "Search pagination stopped early"
                );
                break;
            }
        }
    }

    Ok(Results::new(client.clone(), results, None).with_total(total))
}

/// Parses a `Link` header value and returns the URL for `target_rel`.
pub(crate) fn parse_link_header(header: &str, target_rel: &str) -> Option<String> {
    // <url>; rel="next", <url>; rel="prev"
    for part in header.split(',') {
        let mut url = None;
        let mut rel = None;

        for segment in part.trim().split(';') {
            let segment = segment.trim();
            if let Some(inner) = segment.strip_prefix('<').and_then(|s| s.strip_suffix('>')) {
                url = Some(inner);
            } else if let Some(value) = segment.strip_prefix("rel=") {
                rel = Some(value.trim_matches('"').trim_matches('\''));
            }
        }

        if let (Some(u), Some(r)) = (url, rel) {
            if r.split_whitespace().any(|r| r == target_rel) {
                return Some(u.to_string());
            }
        }
    }

    None
}
