mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gifshelf_api::{Client, SearchQuery};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "gifshelf")]
#[command(about = "Search and manage gifshelf bookmarks from the terminal")]
struct Cli {
    /// Server base URL; falls back to GIFSHELF_URL
    #[arg(long, global = true)]
    url: Option<String>,

    /// Session token sent as the X-Auth-Token cookie; falls back to GIFSHELF_TOKEN
    #[arg(long, global = true)]
    token: Option<String>,

    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search gifs through the server
    Search {
        query: String,
        /// Results per page
        #[arg(long, default_value_t = 25)]
        limit: i64,
        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: i64,
    },
    /// Look up a single gif with its bookmark state
    Show { gif_id: String },
    /// Bookmark a gif
    Save { gif_id: String },
    /// Remove a bookmark
    Remove { gif_id: String },
    /// Mark a bookmarked gif as a favorite
    Favorite { gif_id: String },
    /// Clear the favorite flag
    Unfavorite { gif_id: String },
    /// List the category catalog
    Categories,
    /// Create a category
    AddCategory { name: String },
    /// Delete a category
    RemoveCategory { category_id: String },
    /// Assign a category to a bookmarked gif
    Tag {
        gif_id: String,
        category_id: String,
    },
    /// Remove a category from a bookmarked gif
    Untag {
        gif_id: String,
        category_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gifshelf=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let base_url = cli
        .url
        .or_else(|| std::env::var("GIFSHELF_URL").ok())
        .unwrap_or_else(|| "http://localhost:5000".to_string());
    let mut client = Client::new(&base_url);
    if let Some(token) = cli.token.or_else(|| std::env::var("GIFSHELF_TOKEN").ok()) {
        client = client.with_auth_token(&token);
    }

    match cli.command {
        Commands::Search { query, limit, page } => {
            let request = SearchQuery::new(&query).with_limit(limit).with_page(page);
            let resp = client.search(&request).await?;
            if let Some(message) = resp.app_error() {
                anyhow::bail!("search failed: {}", message);
            }
            output::print_search(&resp, format)?;
        }
        Commands::Show { gif_id } => {
            let resp = client.get_gif(&gif_id).await?;
            output::print_gif(&resp.data, format)?;
        }
        Commands::Save { gif_id } => {
            client.save_gif(&gif_id).await?;
            println!("Saved {}", gif_id);
        }
        Commands::Remove { gif_id } => {
            client.remove_gif(&gif_id).await?;
            println!("Removed {}", gif_id);
        }
        Commands::Favorite { gif_id } => {
            client.favorite_gif(&gif_id).await?;
            println!("Favorited {}", gif_id);
        }
        Commands::Unfavorite { gif_id } => {
            client.unfavorite_gif(&gif_id).await?;
            println!("Unfavorited {}", gif_id);
        }
        Commands::Categories => {
            let categories = client.get_categories().await?;
            output::print_categories(&categories, format)?;
        }
        Commands::AddCategory { name } => {
            let category = client.add_category(&name).await?;
            println!("Created {} ({})", category.name, category.id);
        }
        Commands::RemoveCategory { category_id } => {
            client.remove_category(&category_id).await?;
            println!("Deleted {}", category_id);
        }
        Commands::Tag {
            gif_id,
            category_id,
        } => {
            client.tag_gif(&gif_id, &category_id).await?;
            println!("Tagged {} with {}", gif_id, category_id);
        }
        Commands::Untag {
            gif_id,
            category_id,
        } => {
            client.untag_gif(&gif_id, &category_id).await?;
            println!("Untagged {} from {}", gif_id, category_id);
        }
    }

    Ok(())
}
