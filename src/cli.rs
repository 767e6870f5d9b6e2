//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Version string with git hash for dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("QSTORIES_BUILD_DATE"),
    ")"
);

/// Version string for official builds.
#[cfg(feature = "release")]
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("QSTORIES_BUILD_DATE"),
    ")"
);

/// Watch and post Qomrade stories from the terminal.
#[derive(Debug, Parser)]
#[command(name = "qstories", version = VERSION, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the story viewer
    Play(PlayArgs),
    /// List story groups with their unviewed counts
    List(FeedArgs),
    /// Publish a text story
    Post(PostArgs),
    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Where to read the feed from.
#[derive(Debug, Args)]
pub struct FeedArgs {
    /// Story feed JSON file; fetched from the API when omitted
    pub file: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub feed: FeedArgs,

    /// Open this user's group (username or 0-based position)
    #[arg(short, long)]
    pub user: Option<String>,

    /// Do not report viewed stories to the API
    #[arg(long)]
    pub offline: bool,
}

#[derive(Debug, Args)]
pub struct PostArgs {
    /// Story text
    #[arg(short, long)]
    pub caption: String,

    /// Background color as #RRGGBB
    #[arg(short, long)]
    pub background: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file if none exists
    Init,
}
