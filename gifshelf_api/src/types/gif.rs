use serde::{Deserialize, Serialize};

use super::Category;

/// One search result, trimmed by the server to the fields the panel consumes.
///
/// `saved`/`favorited` are injected server-side from the requesting user's
/// bookmarks; `categories` carries the tags already assigned to a saved item.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GifResult {
    pub id: String,

    #[serde(default)]
    pub url: Option<String>,

    pub title: String,

    pub images: GifImages,

    #[serde(default)]
    pub saved: bool,

    #[serde(default)]
    pub favorited: bool,

    #[serde(default)]
    pub categories: Vec<Category>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GifImages {
    pub preview_gif: PreviewImage,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PreviewImage {
    pub url: String,
}

/// Response envelope for `/get_gif_by_id`.
#[derive(Serialize, Deserialize, Debug)]
pub struct GifResponse {
    pub data: GifDetail,

    #[serde(default)]
    pub error: Option<String>,
}

/// A single gif looked up by id. Same shape as [`GifResult`] except the
/// detail endpoint spells the flag `favorite` on the wire.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GifDetail {
    pub id: String,

    #[serde(default)]
    pub url: Option<String>,

    pub title: String,

    pub images: GifImages,

    #[serde(default)]
    pub saved: bool,

    #[serde(default, rename = "favorite")]
    pub favorited: bool,

    #[serde(default)]
    pub categories: Vec<Category>,
}
