use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use storylib::library::{ChapterStore, ContentDir, JsonLibrary, LibraryStore, Upsert};
use storylib::model::{ChapterMap, StoryRecord};
use storylib::parser::{self, Extraction};
use storylib::settings::Settings;
use storylib::utils::{story_slug, truncate};
use storylib::{fetch, publish};

/// More chapters than this and the page is reported as a collection.
const COLLECTION_CHAPTERS: usize = 5;

#[derive(Parser)]
#[command(name = "storylib", about = "Public-domain story library builder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a story page into the library
    Parse {
        /// Story page URL (the library key)
        #[arg(long)]
        url: String,
        /// Read the page from this file instead of fetching the URL
        #[arg(long)]
        html: Option<PathBuf>,
        /// Overwrite an existing entry without asking
        #[arg(short, long)]
        yes: bool,
        /// Commit but do not push
        #[arg(long)]
        no_push: bool,
        /// Print the record and chapters instead of saving them
        #[arg(long)]
        dry_run: bool,
    },
    /// Library overview table
    List {
        /// Filter by category (substring, case-insensitive)
        #[arg(short, long)]
        category: Option<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// Show library statistics
    Stats,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    let store = JsonLibrary::new(&settings.library_path);

    match cli.command {
        Commands::Parse {
            url,
            html,
            yes,
            no_push,
            dry_run,
        } => {
            let mut lib = store.load()?;
            if let Some(existing) = lib.get(&url).filter(|_| !dry_run) {
                println!("Already in library: {}", existing.title);
                if !yes && !confirm("This story already exists. Do you want to overwrite it? (y/n): ")? {
                    println!("Cancelled. Please enter a new URL.");
                    return Ok(());
                }
                println!("Overwriting existing story...");
            }

            let page = match &html {
                Some(path) => fetch::read_local(path)?,
                None => fetch::fetch_html(&url, &settings).await?,
            };

            println!("Parsing story...");
            let Extraction { record, chapters } = parser::process_page(&page, &url)?;
            print_report(&record, &chapters);

            if dry_run {
                println!("{}", serde_json::to_string_pretty(&record)?);
                println!("{}", serde_json::to_string_pretty(&chapters)?);
                return Ok(());
            }

            let slug = story_slug(&record.title, &record.link);
            let content = ContentDir::new(&settings.content_dir);
            let chapter_path = content.write_chapter_file(&slug, &chapters)?;
            info!("Wrote {} chapters to {}", chapters.len(), chapter_path.display());

            let title = record.title.clone();
            match lib.upsert(record) {
                Upsert::Inserted => info!("Added '{}'", title),
                Upsert::Replaced => info!("Replaced '{}'", title),
            }
            store.save(&lib)?;

            if settings.commit {
                publish::commit_and_push(
                    &settings.repo_dir,
                    &[store.path(), content.path()],
                    &title,
                    settings.push && !no_push,
                )?;
                println!("Story saved and committed.");
            } else {
                println!("Story saved.");
            }
        }
        Commands::List { category, limit } => {
            let lib = store.load()?;
            let needle = category.map(|c| c.to_lowercase());
            let rows: Vec<_> = lib
                .records()
                .iter()
                .filter(|r| {
                    needle
                        .as_ref()
                        .map_or(true, |n| r.category.label().to_lowercase().contains(n))
                })
                .take(limit)
                .collect();
            if rows.is_empty() {
                println!("No stories found.");
                return Ok(());
            }

            println!(
                "{:>3} | {:<32} | {:<20} | {:<29} | {:>7} | {:<5}",
                "#", "Title", "Author", "Category", "Read", "Age"
            );
            println!("{}", "-".repeat(114));
            for (i, r) in rows.iter().enumerate() {
                println!(
                    "{:>3} | {:<32} | {:<20} | {:<29} | {:>7} | {:<5}",
                    i + 1,
                    truncate(&r.title, 32),
                    truncate(&r.author, 20),
                    r.category.label(),
                    r.reading_time,
                    r.age_category
                );
            }
            println!("\n{} of {} stories", rows.len(), lib.len());
        }
        Commands::Stats => {
            let lib = store.load()?;
            println!("Library:   {}", store.path().display());
            println!("Stories:   {}", lib.len());
            println!("\nBy category:");
            for (category, n) in lib.count_by_category() {
                println!("  {:<30} {}", category.label(), n);
            }
            println!("\nBy age band:");
            for (band, n) in lib.count_by_age() {
                println!("  {:<30} {}", band, n);
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

fn print_report(record: &StoryRecord, chapters: &ChapterMap) {
    let kind = if chapters.len() > COLLECTION_CHAPTERS {
        "collection"
    } else {
        "story"
    };
    let names: Vec<&str> = record.characters.iter().map(|c| c.name.as_str()).collect();
    println!("Parsed:        {}", record.title);
    println!("Author:        {}", record.author);
    println!("Type:          {} ({} chapters)", kind, chapters.len());
    println!("Reading time:  {}", record.reading_time);
    println!("Category:      {}", record.category);
    println!("Characters:    {}", names.join(", "));
    println!("Age category:  {}", record.age_category);
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
