//! Search page controller: search execution with stale-response rejection,
//! bookmark/favorite toggles, and per-item category tagging.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use gifshelf_api::{Client, SearchQuery};

use crate::error::PanelError;
use crate::inflight::InFlight;
use crate::render;
use crate::state::{ItemState, PanelState};

/// The two page regions a search paints: the count/pagination header and
/// the result grid body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub header: String,
    pub body: String,
}

impl PageView {
    fn both(text: &str) -> Self {
        Self {
            header: text.to_string(),
            body: text.to_string(),
        }
    }

    /// What to paint into both regions while a search is in flight.
    pub fn loading() -> Self {
        Self::both(render::LOADING)
    }
}

/// Result of a search round-trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Paint these fragments into the two regions.
    Rendered(PageView),
    /// A newer search started while this one was in flight; leave the
    /// page alone.
    Stale,
}

/// Result of a per-item mutation (toggle or tag operation).
#[derive(Clone, Debug)]
pub enum MutationOutcome {
    Updated(ItemView),
    /// A mutation for this item is already in flight; this one was
    /// dropped, not queued.
    Busy,
}

/// Projection of one item's controls after a mutation.
#[derive(Clone, Debug)]
pub struct ItemView {
    pub item_id: String,
    pub bookmark_label: &'static str,
    pub favorite_label: &'static str,
    /// Replacement markup for the item's category container, when the
    /// mutation repopulates it.
    pub categories: Option<String>,
}

/// Controller for the search page.
///
/// Shared by reference between concurrent event handlers; the view-model
/// sits behind a mutex that is never held across a network await.
pub struct SearchPanel {
    client: Client,
    default_limit: i64,
    /// Monotonic search token. A response is rendered only if no newer
    /// search started while it was in flight.
    epoch: AtomicU64,
    state: Mutex<PanelState>,
    mutations: InFlight,
}

impl SearchPanel {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            default_limit: gifshelf_api::DEFAULT_LIMIT,
            epoch: AtomicU64::new(0),
            state: Mutex::new(PanelState::default()),
            mutations: InFlight::default(),
        }
    }

    /// Overrides the page size used for searches.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }

    /// Entry point wired to both the Enter key in the search field and
    /// the submit control: runs a page-0 search for the trimmed input.
    pub async fn submit(&self, raw_query: &str) -> SearchOutcome {
        self.execute_search(raw_query.trim(), 0).await
    }

    /// Requests the zero-based `page` of the current query. Limit and
    /// query come from controller state, never read back from markup.
    pub async fn select_page(&self, page: i64) -> SearchOutcome {
        let (query, limit) = {
            let state = self.lock_state();
            (state.query.clone(), state.limit)
        };
        self.execute_search(&query, page * limit).await
    }

    /// Runs a search and projects the outcome. Callers paint
    /// [`PageView::loading`] into both regions before awaiting this.
    pub async fn execute_search(&self, query: &str, offset: i64) -> SearchOutcome {
        let token = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;
        let limit = self.default_limit;
        {
            let mut state = self.lock_state();
            state.query = query.to_string();
            state.limit = limit;
        }

        let request = SearchQuery::new(query)
            .with_limit(limit)
            .with_offset(offset);
        let result = self.client.search(&request).await;

        if self.epoch.load(Ordering::SeqCst) != token {
            tracing::debug!("Discarding superseded search for {:?}", query);
            return SearchOutcome::Stale;
        }

        let mut state = self.lock_state();
        let view = match result {
            Err(gifshelf_api::Error::HttpStatus { status, .. }) => {
                tracing::warn!("Search for {:?} rejected with status {}", query, status);
                state.items.clear();
                state.pagination = None;
                PageView::both(render::BAD_REQUEST)
            }
            Err(e) => {
                tracing::warn!("Search for {:?} failed: {}", query, e);
                state.items.clear();
                state.pagination = None;
                PageView::both(render::NETWORK_ERROR)
            }
            Ok(resp) => {
                let app_error = resp.app_error().map(str::to_string);
                if let Some(message) = app_error {
                    state.items.clear();
                    state.pagination = None;
                    PageView {
                        header: "Results: 0".to_string(),
                        body: render::html_escape(&message),
                    }
                } else {
                    state.items = resp.data.into_iter().map(ItemState::from_result).collect();
                    state.pagination = resp.pagination;
                    let header = match &state.pagination {
                        Some(paging) if paging.count > 0 => render::results_header(paging),
                        _ => "Results: 0".to_string(),
                    };
                    PageView {
                        header,
                        body: render::results_grid(&state.items),
                    }
                }
            }
        };
        SearchOutcome::Rendered(view)
    }

    /// Toggles the saved flag. Unsaving also clears the favorite flag; a
    /// fresh save loads the item's category panel. On any API error the
    /// view-model is left untouched.
    pub async fn toggle_saved(&self, item_id: &str) -> Result<MutationOutcome, PanelError> {
        let _guard = match self.mutations.begin(item_id) {
            Some(guard) => guard,
            None => {
                tracing::debug!("Dropping bookmark toggle for busy item {}", item_id);
                return Ok(MutationOutcome::Busy);
            }
        };

        let saved = self.item_flag(item_id, |item| item.saved)?;
        if saved {
            self.client.remove_gif(item_id).await?;
        } else {
            self.client.save_gif(item_id).await?;
        }

        {
            let mut state = self.lock_state();
            let item = state
                .item_mut(item_id)
                .ok_or_else(|| PanelError::UnknownItem(item_id.to_string()))?;
            item.saved = !saved;
            if !item.saved {
                // A removed bookmark cannot stay a favorite.
                item.favorited = false;
            }
        }

        let categories = if saved {
            None
        } else {
            Some(self.reload_item_catalog(item_id).await)
        };
        self.item_view(item_id, categories)
    }

    /// Toggles the favorite flag. Favoriting bookmarks the item as a side
    /// effect and loads its category panel; unfavoriting leaves the
    /// bookmark in place.
    pub async fn toggle_favorited(&self, item_id: &str) -> Result<MutationOutcome, PanelError> {
        let _guard = match self.mutations.begin(item_id) {
            Some(guard) => guard,
            None => {
                tracing::debug!("Dropping favorite toggle for busy item {}", item_id);
                return Ok(MutationOutcome::Busy);
            }
        };

        let favorited = self.item_flag(item_id, |item| item.favorited)?;
        if favorited {
            self.client.unfavorite_gif(item_id).await?;
        } else {
            self.client.favorite_gif(item_id).await?;
        }

        {
            let mut state = self.lock_state();
            let item = state
                .item_mut(item_id)
                .ok_or_else(|| PanelError::UnknownItem(item_id.to_string()))?;
            item.favorited = !favorited;
            if item.favorited {
                item.saved = true;
            }
        }

        let categories = if favorited {
            None
        } else {
            Some(self.reload_item_catalog(item_id).await)
        };
        self.item_view(item_id, categories)
    }

    /// Populates and projects the category panel for a rendered item.
    pub async fn load_categories(&self, item_id: &str) -> Result<String, PanelError> {
        let catalog = self.client.get_categories().await?;
        let mut state = self.lock_state();
        let item = state
            .item_mut(item_id)
            .ok_or_else(|| PanelError::UnknownItem(item_id.to_string()))?;
        item.catalog = catalog;
        Ok(render::category_panel(item))
    }

    /// Assigns a catalog category to an item. The category name comes from
    /// the item's loaded catalog, never from the selector markup.
    pub async fn add_item_category(
        &self,
        item_id: &str,
        category_id: &str,
    ) -> Result<MutationOutcome, PanelError> {
        let _guard = match self.mutations.begin(item_id) {
            Some(guard) => guard,
            None => {
                tracing::debug!("Dropping tag add for busy item {}", item_id);
                return Ok(MutationOutcome::Busy);
            }
        };

        let category = {
            let state = self.lock_state();
            let item = state
                .item(item_id)
                .ok_or_else(|| PanelError::UnknownItem(item_id.to_string()))?;
            item.catalog
                .iter()
                .find(|category| category.id == category_id)
                .cloned()
                .ok_or_else(|| PanelError::UnknownCategory(category_id.to_string()))?
        };

        self.client.tag_gif(item_id, category_id).await?;

        {
            let mut state = self.lock_state();
            let item = state
                .item_mut(item_id)
                .ok_or_else(|| PanelError::UnknownItem(item_id.to_string()))?;
            item.tags.push(category);
        }
        let panel = self.project_category_panel(item_id)?;
        self.item_view(item_id, Some(panel))
    }

    /// Removes a category assignment from an item and detaches its row.
    pub async fn remove_item_category(
        &self,
        item_id: &str,
        category_id: &str,
    ) -> Result<MutationOutcome, PanelError> {
        let _guard = match self.mutations.begin(item_id) {
            Some(guard) => guard,
            None => {
                tracing::debug!("Dropping tag removal for busy item {}", item_id);
                return Ok(MutationOutcome::Busy);
            }
        };

        self.client.untag_gif(item_id, category_id).await?;

        {
            let mut state = self.lock_state();
            let item = state
                .item_mut(item_id)
                .ok_or_else(|| PanelError::UnknownItem(item_id.to_string()))?;
            item.tags.retain(|tag| tag.id != category_id);
        }
        let panel = self.project_category_panel(item_id)?;
        self.item_view(item_id, Some(panel))
    }

    /// Fetches the catalog and projects the item's category panel. On
    /// fetch failure the container is cleared and the error only logged;
    /// the toggle that triggered the load has already succeeded.
    async fn reload_item_catalog(&self, item_id: &str) -> String {
        match self.client.get_categories().await {
            Ok(catalog) => {
                let mut state = self.lock_state();
                match state.item_mut(item_id) {
                    Some(item) => {
                        item.catalog = catalog;
                        render::category_panel(item)
                    }
                    None => String::new(),
                }
            }
            Err(e) => {
                tracing::warn!("Category load for {} failed: {}", item_id, e);
                String::new()
            }
        }
    }

    fn project_category_panel(&self, item_id: &str) -> Result<String, PanelError> {
        let state = self.lock_state();
        let item = state
            .item(item_id)
            .ok_or_else(|| PanelError::UnknownItem(item_id.to_string()))?;
        Ok(render::category_panel(item))
    }

    fn item_flag<F>(&self, item_id: &str, flag: F) -> Result<bool, PanelError>
    where
        F: Fn(&ItemState) -> bool,
    {
        let state = self.lock_state();
        state
            .item(item_id)
            .map(flag)
            .ok_or_else(|| PanelError::UnknownItem(item_id.to_string()))
    }

    fn item_view(
        &self,
        item_id: &str,
        categories: Option<String>,
    ) -> Result<MutationOutcome, PanelError> {
        let state = self.lock_state();
        let item = state
            .item(item_id)
            .ok_or_else(|| PanelError::UnknownItem(item_id.to_string()))?;
        Ok(MutationOutcome::Updated(ItemView {
            item_id: item.id.clone(),
            bookmark_label: item.bookmark_label(),
            favorite_label: item.favorite_label(),
            categories,
        }))
    }

    fn lock_state(&self) -> MutexGuard<'_, PanelState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
