use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use shelf_types::{BookId, BookPatch, ListCriteria, SearchField};

#[derive(Parser)]
#[command(
    name = "shelf",
    about = "Shelf: a single-user library catalog backed by a CSV file",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// CSV file holding the catalog
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the interactive menu (the default)
    Menu,
    /// Add a new book
    Add(AddArgs),
    /// Search books by title, author or genre
    Search(SearchArgs),
    /// Update fields of an existing book
    Update(UpdateArgs),
    /// Remove a book
    Remove(RemoveArgs),
    /// List all books, optionally by recency or genre
    List(ListArgs),
    /// Show the distinct authors
    Authors,
    /// Show the distinct genres
    Genres,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub author: String,
    #[arg(long)]
    pub genre: String,
    #[arg(long, allow_negative_numbers = true)]
    pub year: i32,
}

#[derive(Args)]
pub struct SearchArgs {
    pub query: String,
    #[arg(long, default_value = "title")]
    pub by: SearchField,
}

#[derive(Args)]
pub struct UpdateArgs {
    pub id: BookId,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub genre: Option<String>,
    #[arg(long, allow_negative_numbers = true)]
    pub year: Option<i32>,
}

impl UpdateArgs {
    pub fn patch(&self) -> BookPatch {
        BookPatch {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            year: self.year,
        }
    }
}

#[derive(Args)]
pub struct RemoveArgs {
    pub id: BookId,
}

#[derive(Args)]
pub struct ListArgs {
    #[arg(long)]
    pub by: Option<ListCriteria>,
}
