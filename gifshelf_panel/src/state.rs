//! Explicit view-model for the search page.
//!
//! The model is authoritative; the hidden inputs (`saved_<id>`,
//! `favorited_<id>`) in the projected markup are write-only and never
//! read back.

use gifshelf_api::types::{Category, GifResult, Pagination};

/// One rendered search result and its bookmark state.
#[derive(Clone, Debug)]
pub struct ItemState {
    pub id: String,
    pub title: String,
    pub preview_url: String,
    pub saved: bool,
    pub favorited: bool,
    /// Category catalog loaded for this item's selector; empty until the
    /// item's category panel is populated.
    pub catalog: Vec<Category>,
    /// Categories currently assigned to this item.
    pub tags: Vec<Category>,
}

impl ItemState {
    pub(crate) fn from_result(result: GifResult) -> Self {
        Self {
            id: result.id,
            title: result.title,
            preview_url: result.images.preview_gif.url,
            saved: result.saved,
            favorited: result.favorited,
            catalog: Vec::new(),
            tags: result.categories,
        }
    }

    /// Current label of the bookmark toggle control.
    pub fn bookmark_label(&self) -> &'static str {
        if self.saved {
            "Remove"
        } else {
            "Save"
        }
    }

    /// Current label of the favorite toggle control.
    pub fn favorite_label(&self) -> &'static str {
        if self.favorited {
            "Unfavorite"
        } else {
            "Favorite"
        }
    }
}

/// State of the search page as a whole. Replaced wholesale by each
/// rendered search; mutated in place by toggle and tag handlers.
#[derive(Default)]
pub(crate) struct PanelState {
    pub query: String,
    pub limit: i64,
    pub pagination: Option<Pagination>,
    pub items: Vec<ItemState>,
}

impl PanelState {
    pub fn item(&self, id: &str) -> Option<&ItemState> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: &str) -> Option<&mut ItemState> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gifshelf_api::types::{GifImages, PreviewImage};

    fn result(saved: bool, favorited: bool) -> GifResult {
        GifResult {
            id: "abc123".to_string(),
            url: None,
            title: "Excited Cat".to_string(),
            images: GifImages {
                preview_gif: PreviewImage {
                    url: "https://media.giphy.example/abc123/preview.gif".to_string(),
                },
            },
            saved,
            favorited,
            categories: vec![Category {
                id: "1".to_string(),
                name: "cats".to_string(),
            }],
        }
    }

    #[test]
    fn item_state_carries_flags_and_tags() {
        let item = ItemState::from_result(result(true, false));
        assert!(item.saved);
        assert!(!item.favorited);
        assert_eq!(item.tags.len(), 1);
        assert!(item.catalog.is_empty());
    }

    #[test]
    fn labels_follow_flags() {
        let mut item = ItemState::from_result(result(false, false));
        assert_eq!(item.bookmark_label(), "Save");
        assert_eq!(item.favorite_label(), "Favorite");
        item.saved = true;
        item.favorited = true;
        assert_eq!(item.bookmark_label(), "Remove");
        assert_eq!(item.favorite_label(), "Unfavorite");
    }

    #[test]
    fn lookup_by_id() {
        let mut state = PanelState {
            items: vec![ItemState::from_result(result(false, false))],
            ..Default::default()
        };
        assert!(state.item("abc123").is_some());
        assert!(state.item("nope").is_none());
        state.item_mut("abc123").unwrap().saved = true;
        assert!(state.item("abc123").unwrap().saved);
    }
}
