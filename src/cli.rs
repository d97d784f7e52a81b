use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::application::use_cases::SearchMode;
use crate::config::CliOverrides;
use crate::library::domain::ReadingList;

/// Browse, search, read and publish books on a Shelfwise reading platform
#[derive(Parser, Debug)]
#[command(name = "shelfwise")]
#[command(version)]
#[command(about = "Browse, search, read and publish books on a Shelfwise reading platform", long_about = None)]
pub struct Args {
    /// Output format: text or json
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Base URL of the reading platform API
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// File holding the access token between runs
    #[arg(long, global = true, value_name = "PATH")]
    pub token_file: Option<PathBuf>,

    /// How search queries the catalog and the archive: combined or independent
    #[arg(long, global = true, value_name = "MODE")]
    pub search_mode: Option<SearchMode>,

    /// Path to a config file (defaults to ./shelfwise.config.yml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and keep the access token for later commands
    Login {
        #[arg(short, long)]
        username: String,
        /// Password (prefer the SHELFWISE_PASSWORD environment variable)
        #[arg(short, long, env = "SHELFWISE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account and log in with it
    Register {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "SHELFWISE_PASSWORD", hide_env_values = true)]
        password: String,
        /// Also register as an author, allowing you to publish books
        #[arg(long)]
        author: bool,
    },
    /// Forget the stored access token
    Logout,
    /// Show who is logged in
    Whoami,
    /// List featured books
    Featured,
    /// Search the library and the external archive
    Search {
        /// Free-text query
        query: String,
    },
    /// Show a book and its chapters
    Book { id: String },
    /// Fetch the text of a book imported from the archive
    Download { id: String },
    /// Show an archive item by its md5 content hash
    External { md5: String },
    /// Import an archive item into the library
    Import { md5: String },
    /// Read one chapter of a book
    Read {
        id: String,
        /// Chapter number, starting at 1
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        chapter: u32,
    },
    /// Show your reading lists
    Lists,
    /// Add a book to one of your reading lists
    AddToList {
        id: String,
        /// favorites, in_progress or finished
        list: ReadingList,
    },
    /// Search authors by name
    Authors { name: String },
    /// Show an author and their books
    Author { id: String },
    /// Show your author profile and books (authors only)
    MyBooks,
    /// Publish a book from a YAML manifest (authors only)
    Publish {
        /// Manifest with title, image, biography and chapters
        manifest: PathBuf,
    },
    /// Update a book's title, cover or description (authors only)
    UpdateBook {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        biography: Option<String>,
    },
    /// Delete one of your books (authors only)
    DeleteBook { id: String },
    /// Update your author profile (authors only)
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        biography: Option<String>,
        #[arg(long)]
        picture: Option<String>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_url: self.api_url.clone(),
            token_file: self.token_file.clone(),
            search_mode: self.search_mode,
        }
    }
}
