//! Command-line surface: argument parsing and the one-shot commands.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use crate::catalog::{validate, CatalogApi, CatalogStore, Game, GameDraft, GameId};

#[derive(Debug, Parser)]
#[command(
    name = "gamedeck",
    version,
    about = "Browse and manage a remote game catalog"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalog service URL, overriding api.base_url
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive terminal UI (default)
    Tui,
    /// List games
    List {
        /// Only games whose name contains this text (case-insensitive)
        #[arg(long, value_name = "QUERY")]
        search: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show one game
    Show {
        id: GameId,
        #[arg(long)]
        json: bool,
    },
    /// Add a game
    Add(AddArgs),
    /// Change fields of an existing game
    Update(UpdateArgs),
    /// Delete a game
    Delete { id: GameId },
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub genre: String,
    #[arg(long)]
    pub price: String,
    #[arg(long, value_name = "DATE")]
    pub release_date: String,
    #[arg(long, value_name = "URL")]
    pub image_uri: String,
    /// Print the created record as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    pub id: GameId,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub genre: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    #[arg(long, value_name = "DATE")]
    pub release_date: Option<String>,
    #[arg(long, value_name = "URL")]
    pub image_uri: Option<String>,
}

impl AddArgs {
    fn into_draft(self) -> GameDraft {
        GameDraft {
            name: self.name,
            genre: self.genre,
            price: self.price,
            release_date: self.release_date,
            image_uri: self.image_uri,
        }
    }
}

impl UpdateArgs {
    /// Replace the fields that were given on the command line.
    fn overlay(self, mut draft: GameDraft) -> GameDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(genre) = self.genre {
            draft.genre = genre;
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
        if let Some(release_date) = self.release_date {
            draft.release_date = release_date;
        }
        if let Some(image_uri) = self.image_uri {
            draft.image_uri = image_uri;
        }
        draft
    }
}

/// Run a non-interactive command, writing results to `out`.
pub async fn run_command<C: CatalogApi, W: Write>(
    command: Command,
    store: &CatalogStore<C>,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Tui => bail!("the interactive UI cannot run as a one-shot command"),
        Command::List { search, json } => {
            let mut games = store.client().fetch_all().await?;
            if let Some(query) = search.as_deref() {
                games.retain(|game| game.name_matches(query));
            }
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&games)?)?;
            } else {
                write_table(out, &games)?;
            }
        }
        Command::Show { id, json } => {
            let game = store.fetch(id).await?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&game)?)?;
            } else {
                write_details(out, &game)?;
            }
        }
        Command::Add(args) => {
            let json = args.json;
            let draft = args.into_draft();
            ensure_valid(&draft)?;
            let created = store.add(draft).await?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&created)?)?;
            } else {
                writeln!(out, "Added game {}: {}", created.id, created.name)?;
            }
        }
        Command::Update(args) => {
            let id = args.id;
            let current = store
                .fetch(id)
                .await
                .with_context(|| format!("Cannot load game {} for update", id))?;
            let draft = args.overlay(current.draft());
            ensure_valid(&draft)?;
            store.modify(id, draft).await?;
            writeln!(out, "Updated game {}", id)?;
        }
        Command::Delete { id } => {
            store.remove(id).await?;
            writeln!(out, "Deleted game {}", id)?;
        }
    }
    Ok(())
}

fn ensure_valid(draft: &GameDraft) -> anyhow::Result<()> {
    let errors = validate(draft);
    if errors.is_empty() {
        return Ok(());
    }
    let details: Vec<String> = errors
        .iter()
        .map(|(field, message)| format!("  {}: {}", field.as_str(), message))
        .collect();
    bail!("Invalid game:\n{}", details.join("\n"))
}

fn write_table<W: Write>(out: &mut W, games: &[Game]) -> std::io::Result<()> {
    if games.is_empty() {
        return writeln!(out, "No games found.");
    }
    writeln!(
        out,
        "{:>5}  {:<30}  {:<20}  {:>8}  RELEASED",
        "ID", "NAME", "GENRE", "PRICE"
    )?;
    for game in games {
        writeln!(
            out,
            "{:>5}  {:<30}  {:<20}  {:>8}  {}",
            game.id,
            game.name,
            game.genre,
            format!("${}", game.price),
            game.release_date
        )?;
    }
    Ok(())
}

fn write_details<W: Write>(out: &mut W, game: &Game) -> std::io::Result<()> {
    writeln!(out, "Id:           {}", game.id)?;
    writeln!(out, "Name:         {}", game.name)?;
    writeln!(out, "Genre:        {}", game.genre)?;
    writeln!(out, "Price:        ${}", game.price)?;
    writeln!(out, "Release Date: {}", game.release_date)?;
    writeln!(out, "Image URL:    {}", game.image_uri)?;
    Ok(())
}
