use serde::{Deserialize, Serialize};

use super::GifResult;

/// Response envelope for `/do_search`.
///
/// On success `error` is the empty string; on failure the server sends the
/// message there with `data` empty and `pagination` as `{}`. Use
/// [`SearchResponse::app_error`] rather than inspecting the field directly.
#[derive(Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: i64,

    #[serde(default)]
    pub data: Vec<GifResult>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl SearchResponse {
    /// The application-level error carried on an otherwise valid response,
    /// if any. Filters the empty string the server sends on success.
    pub fn app_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// Upstream paging block. `offset` is a multiple of `count` for
/// page-aligned navigation; all fields default to 0 because the server
/// sends an empty object alongside an error.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct Pagination {
    #[serde(default)]
    pub count: i64,

    #[serde(default)]
    pub offset: i64,

    #[serde(default)]
    pub total_count: i64,
}
