//! Search query builder: pagination parameters serialized onto the request URL.

use url::Url;

/// Default page size the server assumes when none is sent.
pub const DEFAULT_LIMIT: i64 = 25;

/// Builder for `/do_search` requests.
///
/// The query text travels as a percent-encoded path segment; `limit` and
/// `offset` travel as encoded query parameters. `offset` is kept a multiple
/// of `limit` by [`SearchQuery::with_page`] for page-aligned navigation.
#[derive(Clone)]
pub struct SearchQuery {
    pub query: String,
    pub limit: i64,
    pub offset: i64,
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }

    /// Sets the number of results per page.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the absolute result offset.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the offset from a zero-based page index and the current limit.
    pub fn with_page(mut self, page: i64) -> Self {
        self.offset = page * self.limit;
        self
    }

    /// Appends `limit` and `offset` to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("limit", &self.limit.to_string())
            .append_pair("offset", &self.offset.to_string());
        url
    }
}
