//! Table and JSON rendering for CLI output.

use anyhow::Result;
use gifshelf_api::types::{Category, GifDetail, SearchResponse};
use gifshelf_panel::paging;
use tabled::{Table, Tabled};

#[derive(Clone, Copy)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct GifRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Saved")]
    saved: bool,
    #[tabled(rename = "Favorited")]
    favorited: bool,
    #[tabled(rename = "Preview")]
    preview: String,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

pub fn print_search(resp: &SearchResponse, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(resp)?),
        OutputFormat::Table => {
            let rows: Vec<GifRow> = resp
                .data
                .iter()
                .map(|gif| GifRow {
                    id: gif.id.clone(),
                    title: gif.title.clone(),
                    saved: gif.saved,
                    favorited: gif.favorited,
                    preview: gif.images.preview_gif.url.clone(),
                })
                .collect();
            println!("{}", Table::new(rows));
            if let Some(paging) = &resp.pagination {
                println!("{}", paging::summary(paging));
            }
        }
    }
    Ok(())
}

pub fn print_gif(gif: &GifDetail, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(gif)?),
        OutputFormat::Table => {
            println!("{}  {}", gif.id, gif.title);
            println!("Saved: {}  Favorited: {}", gif.saved, gif.favorited);
            println!("Preview: {}", gif.images.preview_gif.url);
            for tag in &gif.categories {
                println!("  - {}", tag.name);
            }
        }
    }
    Ok(())
}

pub fn print_categories(categories: &[Category], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(categories)?),
        OutputFormat::Table => {
            let rows: Vec<CategoryRow> = categories
                .iter()
                .map(|category| CategoryRow {
                    id: category.id.clone(),
                    name: category.name.clone(),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
    }
    Ok(())
}
