//! HTTP client for the GIF bookmark server's JSON API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::SearchQuery,
    types::{Category, GifResponse, SearchResponse},
    Error,
};

/// Per-request timeout. The browser client had none and could sit on
/// "Loading..." forever when the server went away.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the bookmark server.
///
/// All endpoints are GET. User-supplied values only ever enter the URL as
/// percent-encoded path segments or encoded query pairs. Each request
/// builds a fresh `reqwest::Client` with the timeout applied.
pub struct Client {
    base_api_url: String,
    /// Value for the `X-Auth-Token` cookie the server authenticates with.
    auth_token: Option<String>,
}

impl Client {
    /// Creates a new client for the server at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            auth_token: None,
        }
    }

    /// Attaches the session token sent as the `X-Auth-Token` cookie.
    pub fn with_auth_token(mut self, token: &str) -> Self {
        self.auth_token = Some(token.to_string());
        self
    }

    fn get_url(&self, segments: &[&str], query: Option<&SearchQuery>) -> Result<Url, Error> {
        let mut url = Url::parse(&self.base_api_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", self.base_api_url, e);
            Error::RequestFailed
        })?;
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                tracing::error!("Base URL cannot have segments appended: {}", self.base_api_url);
                Error::RequestFailed
            })?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn fetch(&self, segments: &[&str], query: Option<&SearchQuery>) -> Result<String, Error> {
        let url = self.get_url(segments, query)?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let mut request = client
            .get(url)
            .header("accept", "application/json, text/plain, */*");
        if let Some(token) = &self.auth_token {
            request = request.header("cookie", format!("X-Auth-Token={}", token));
        }
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }

    async fn get_json<T>(&self, segments: &[&str], query: Option<&SearchQuery>) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let body = self.fetch(segments, query).await?;
        serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })
    }

    /// Fires a mutation endpoint whose success response carries no body.
    async fn get_ok(&self, segments: &[&str]) -> Result<(), Error> {
        self.fetch(segments, None).await.map(|_| ())
    }

    /// Searches the provider through the server, with the caller's bookmark
    /// flags and categories merged into each result.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, Error> {
        self.get_json(&["do_search", query.query.as_str()], Some(query))
            .await
    }

    /// Fetches a single gif by id, with the caller's bookmark state.
    pub async fn get_gif(&self, gif_id: &str) -> Result<GifResponse, Error> {
        self.get_json(&["get_gif_by_id", gif_id], None).await
    }

    /// Bookmarks a gif.
    pub async fn save_gif(&self, gif_id: &str) -> Result<(), Error> {
        self.get_ok(&["save_gif_by_id", gif_id]).await
    }

    /// Removes a bookmark and its category associations.
    pub async fn remove_gif(&self, gif_id: &str) -> Result<(), Error> {
        self.get_ok(&["remove_gif_by_id", gif_id]).await
    }

    /// Marks a bookmarked gif as a favorite, bookmarking it if needed.
    pub async fn favorite_gif(&self, gif_id: &str) -> Result<(), Error> {
        self.get_ok(&["favorite_gif_by_id", gif_id]).await
    }

    /// Clears the favorite flag; the bookmark itself is kept.
    pub async fn unfavorite_gif(&self, gif_id: &str) -> Result<(), Error> {
        self.get_ok(&["unfavorite_gif_by_id", gif_id]).await
    }

    /// Fetches the caller's full category catalog.
    pub async fn get_categories(&self) -> Result<Vec<Category>, Error> {
        self.get_json(&["get_categories"], None).await
    }

    /// Creates a named category and returns it with its server-assigned id.
    pub async fn add_category(&self, name: &str) -> Result<Category, Error> {
        self.get_json(&["add_category", name], None).await
    }

    /// Deletes a category from the catalog.
    pub async fn remove_category(&self, category_id: &str) -> Result<(), Error> {
        self.get_ok(&["remove_category", category_id]).await
    }

    /// Associates a category with a bookmarked gif.
    pub async fn tag_gif(&self, gif_id: &str, category_id: &str) -> Result<(), Error> {
        self.get_ok(&["add_categories", gif_id, category_id]).await
    }

    /// Removes a category association from a bookmarked gif.
    pub async fn untag_gif(&self, gif_id: &str, category_id: &str) -> Result<(), Error> {
        self.get_ok(&["remove_categories", gif_id, category_id]).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_encoded_segments() {
        let client = Client::new("http://localhost:5000");
        let url = client.get_url(&["do_search", "tom & jerry/cat"], None).unwrap();
        assert_eq!(url.path(), "/do_search/tom%20&%20jerry%2Fcat");
    }

    #[test]
    fn url_keeps_base_path() {
        let client = Client::new("http://localhost:5000/gifshelf");
        let url = client.get_url(&["get_categories"], None).unwrap();
        assert_eq!(url.path(), "/gifshelf/get_categories");
    }

    #[test]
    fn url_appends_query_parameters() {
        let client = Client::new("http://localhost:5000");
        let query = SearchQuery::new("kittens").with_limit(10).with_offset(20);
        let url = client
            .get_url(&["do_search", "kittens"], Some(&query))
            .unwrap();
        assert_eq!(url.query(), Some("limit=10&offset=20"));
    }

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncate_cuts_long_bodies() {
        let long = "x".repeat(5000);
        let cut = truncate_body(&long);
        assert!(cut.ends_with("...[truncated]"));
        assert!(cut.len() < 2100);
    }
}
