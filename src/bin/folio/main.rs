use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spdlog::{info, warn, Level, LevelFilter};

use folio::content::Collection;
use folio::logger::configure_logger;
use folio::paginator::PageRequest;
use folio::site::Site;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "folio.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path
    #[arg(short, long)]
    config_path: Option<String>,

    /// Log progress to the console when no [log] section is configured
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Featured and most recent blog posts
    Index,
    /// One page of blog posts
    Posts {
        #[arg(short, long)]
        page: Option<String>,
    },
    /// One page of notes
    Notes {
        #[arg(short, long)]
        page: Option<String>,
    },
    /// One page of snippets
    Snippets {
        #[arg(short, long)]
        page: Option<String>,
    },
    /// Unique tags of blog posts and notes
    Tags,
    /// One page of a collection's entries carrying a tag
    Tag {
        /// Tag slug, e.g. `web-dev`
        tag: String,
        #[arg(long, default_value_t = ListedCollection::Blog, value_enum)]
        collection: ListedCollection,
        #[arg(short, long)]
        page: Option<String>,
    },
    /// Published projects
    Projects,
    /// Items of the syndication feed
    Feed,
    /// Routes of the social preview images
    SocialImages {
        #[arg(long, default_value_t = ListedCollection::Blog, value_enum)]
        collection: ListedCollection,
    },
    /// Contents of robots.txt
    Robots,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ListedCollection {
    Blog,
    Note,
    Snippet,
}

impl From<ListedCollection> for Collection {
    fn from(value: ListedCollection) -> Self {
        match value {
            ListedCollection::Blog => Collection::Blog,
            ListedCollection::Note => Collection::Note,
            ListedCollection::Snippet => Collection::Snippet,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Listings start at the first page when none is given.
fn requested(page: Option<String>) -> PageRequest {
    PageRequest::from(page.as_deref().unwrap_or("1"))
}

fn run(site: &Site, command: Command) -> Result<()> {
    let filter = site.filter();

    match command {
        Command::Index => print_json(&site.index(&filter)),
        Command::Posts { page } => print_json(&site.listing(Collection::Blog, requested(page), &filter)),
        Command::Notes { page } => print_json(&site.listing(Collection::Note, requested(page), &filter)),
        Command::Snippets { page } => print_json(&site.listing(Collection::Snippet, requested(page), &filter)),
        Command::Tags => print_json(&site.tags(&filter)),
        Command::Tag { tag, collection, page } => {
            let listing = site.tag_page(collection.into(), &tag, requested(page), &filter);
            if listing.is_not_found() {
                warn!("No page of tag {} matches the request", tag);
            }
            print_json(&listing)
        }
        Command::Projects => print_json(&site.projects()),
        Command::Feed => print_json(&site.feed(&filter)),
        Command::SocialImages { collection } => {
            let routes: Vec<String> = site.social_images(collection.into()).iter().map(|p| p.route()).collect();
            print_json(&routes)
        }
        Command::Robots => {
            println!("{}", site.robots());
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config_path = args.config_path.map(PathBuf::from);

    let config = match open_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Please run folio --help");
            return Ok(());
        }
    };

    match config.log {
        Some(ref log) => {
            if let Err(err) = configure_logger(log) {
                warn!("Error creating logger sinks. Using console instead. Desc={}", err);
            }
        }
        None => {
            let level = if args.verbose { Level::Info } else { Level::Warn };
            spdlog::default_logger().set_level_filter(LevelFilter::MoreSevereEqual(level));
        }
    }

    info!("Starting folio =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
    let site = Site::load(config).context("Error loading site content")?;
    run(&site, args.command)
}
