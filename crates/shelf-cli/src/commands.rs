use std::io::{self, Write};

use anyhow::{bail, Context};
use colored::Colorize;
use shelf_store::{Catalog, LoadStatus, RecordFile};
use tracing::debug;

use crate::cli::*;
use crate::config::ShelfConfig;
use crate::menu::Menu;
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = ShelfConfig::resolve(cli.config.as_deref(), cli.catalog)?;
    if !config.color {
        colored::control::set_override(false);
    }
    debug!(
        config = ?cli.config,
        catalog = %config.catalog_path.display(),
        color = config.color,
        "configuration resolved"
    );

    let mut catalog = Catalog::open(&config.catalog_path).with_context(|| {
        format!("failed to load catalog from {}", config.catalog_path.display())
    })?;
    if catalog.load_status() == LoadStatus::Missing {
        eprintln!(
            "{} CSV file '{}' not found. Starting with an empty library.",
            "note:".yellow().bold(),
            catalog.location()
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&mut catalog, cli.command.unwrap_or(Command::Menu), cli.format, &mut out)
}

/// Run one command against an open catalog.
pub fn execute<F: RecordFile, W: Write>(
    catalog: &mut Catalog<F>,
    command: Command,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Menu => {
            let stdin = io::stdin();
            Menu::new(catalog, stdin.lock(), out).run()?;
            Ok(())
        }
        Command::Add(args) => cmd_add(catalog, args, format, out),
        Command::Search(args) => cmd_search(catalog, args, format, out),
        Command::Update(args) => cmd_update(catalog, args, format, out),
        Command::Remove(args) => cmd_remove(catalog, args, format, out),
        Command::List(args) => cmd_list(catalog, args, format, out),
        Command::Authors => {
            let authors = catalog.unique_authors();
            match format {
                OutputFormat::Text => render::names(out, "Unique authors:", &authors)?,
                OutputFormat::Json => render::json(out, &authors)?,
            }
            Ok(())
        }
        Command::Genres => {
            let genres = catalog.unique_genres();
            match format {
                OutputFormat::Text => render::names(out, "Unique genres:", &genres)?,
                OutputFormat::Json => render::json(out, &genres)?,
            }
            Ok(())
        }
    }
}

fn cmd_add<F: RecordFile, W: Write>(
    catalog: &mut Catalog<F>,
    args: AddArgs,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let book = catalog
        .add(args.title, args.author, args.genre, args.year)
        .context("failed to save catalog")?;
    match format {
        OutputFormat::Text => render::success(out, "Book added:", &book)?,
        OutputFormat::Json => render::json(out, &book)?,
    }
    Ok(())
}

fn cmd_search<F: RecordFile, W: Write>(
    catalog: &Catalog<F>,
    args: SearchArgs,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let results = catalog.search(&args.query, args.by);
    match format {
        OutputFormat::Text => render::books(out, "Search results:", &results, "No books found.")?,
        OutputFormat::Json => render::json(out, &results)?,
    }
    Ok(())
}

fn cmd_update<F: RecordFile, W: Write>(
    catalog: &mut Catalog<F>,
    args: UpdateArgs,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(book) = catalog
        .update(args.id, &args.patch())
        .context("failed to save catalog")?
    else {
        bail!("book id {} not found", args.id);
    };
    match format {
        OutputFormat::Text => render::success(out, "Book updated:", &book)?,
        OutputFormat::Json => render::json(out, &book)?,
    }
    Ok(())
}

fn cmd_remove<F: RecordFile, W: Write>(
    catalog: &mut Catalog<F>,
    args: RemoveArgs,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let Some(book) = catalog.remove(args.id).context("failed to save catalog")? else {
        bail!("book id {} not found", args.id);
    };
    match format {
        OutputFormat::Text => render::success(out, "Book removed:", &book)?,
        OutputFormat::Json => render::json(out, &book)?,
    }
    Ok(())
}

fn cmd_list<F: RecordFile, W: Write>(
    catalog: &Catalog<F>,
    args: ListArgs,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let listing = catalog.list(args.by);
    match format {
        OutputFormat::Text => render::listing(out, "Books in the library:", &listing)?,
        OutputFormat::Json => render::json(out, &listing)?,
    }
    Ok(())
}
