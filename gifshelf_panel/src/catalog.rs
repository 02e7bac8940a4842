//! Category catalog management for the categories page.
//!
//! Deliberately distinct from the per-item tagging in [`crate::search`]:
//! this one administers the catalog itself.

use std::sync::{Mutex, MutexGuard};

use gifshelf_api::types::Category;
use gifshelf_api::Client;

use crate::error::PanelError;
use crate::render;

/// Controller for the category catalog page.
pub struct CatalogPanel {
    client: Client,
    rows: Mutex<Vec<Category>>,
}

impl CatalogPanel {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Fetches the catalog and projects the table body.
    pub async fn load(&self) -> Result<String, PanelError> {
        let catalog = self.client.get_categories().await?;
        let mut rows = self.lock_rows();
        *rows = catalog;
        Ok(render::catalog_table(&rows))
    }

    /// Entry point wired to both the Enter key in the name field and the
    /// Add control: creates a category from the trimmed input.
    pub async fn submit(&self, raw_name: &str) -> Result<String, PanelError> {
        self.create(raw_name.trim()).await
    }

    /// Creates a named category and projects the updated table. Duplicate
    /// names are rejected against the loaded rows before any request goes
    /// out; the server does not surface that case distinctly.
    pub async fn create(&self, name: &str) -> Result<String, PanelError> {
        if name.is_empty() {
            return Err(PanelError::InvalidInput(
                "category name is empty".to_string(),
            ));
        }
        {
            let rows = self.lock_rows();
            if rows.iter().any(|row| row.name.eq_ignore_ascii_case(name)) {
                return Err(PanelError::DuplicateCategory(name.to_string()));
            }
        }

        let created = self.client.add_category(name).await?;
        let mut rows = self.lock_rows();
        rows.push(created);
        Ok(render::catalog_table(&rows))
    }

    /// Deletes a category and projects the table with the row detached.
    pub async fn delete(&self, category_id: &str) -> Result<String, PanelError> {
        self.client.remove_category(category_id).await?;
        let mut rows = self.lock_rows();
        rows.retain(|row| row.id != category_id);
        Ok(render::catalog_table(&rows))
    }

    fn lock_rows(&self) -> MutexGuard<'_, Vec<Category>> {
        self.rows.lock().unwrap_or_else(|e| e.into_inner())
    }
}
