//! Error types for the panel layer.

/// Errors produced by the panel controllers, wrapping upstream API errors
/// and adding view-model lookup and input validation failures.
///
/// A mutation that fails leaves the view-model untouched; the user retries
/// by re-triggering the control.
#[derive(thiserror::Error, Debug)]
pub enum PanelError {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] gifshelf_api::Error),
    /// The id does not match any currently rendered item, e.g. because a
    /// newer search replaced the grid while the request was in flight.
    #[error("No rendered item with id {0}")]
    UnknownItem(String),
    /// The category id is not in the catalog loaded for the item.
    #[error("Category {0} is not in the loaded catalog")]
    UnknownCategory(String),
    /// A catalog category with the same name already exists.
    #[error("Category named {0} already exists")]
    DuplicateCategory(String),
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
