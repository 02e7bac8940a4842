//! Panel layer for the gifshelf bookmark server: an explicit view-model
//! over search results with HTML-fragment projection, serialized per-item
//! mutations, and stale-search rejection.
//!
//! The page shell owns two regions (`result_count`, `result_data`) and the
//! event hooks; everything painted into them comes from here.

pub mod catalog;
pub mod error;
mod inflight;
pub mod paging;
pub mod render;
pub mod search;
pub mod state;

pub use gifshelf_api;
pub use gifshelf_api::types;
pub use gifshelf_api::{Client, SearchQuery};

pub use catalog::CatalogPanel;
pub use error::PanelError;
pub use search::{ItemView, MutationOutcome, PageView, SearchOutcome, SearchPanel};
pub use state::ItemState;
