//! CLI type definitions: command enums and argument structs.

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gamedeck")]
#[command(about = "Browse and filter a game card gallery", long_about = None)]
pub(crate) struct Cli {
    /// Root URL of the gallery site (overrides settings.toml)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Search box and badge filter, as a page visitor would set them.
#[derive(Args, Clone, Default)]
pub(crate) struct SelectionArgs {
    /// Case-insensitive title search
    #[arg(short, long)]
    pub search: Option<String>,

    /// Value of the page's `filter` parameter (e.g. `ALL` or `nes,Handhelds`)
    #[arg(short, long)]
    pub filter: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the games that pass the search and filter
    List {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Print the games as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the filter bar and which controls are enabled
    Filters {
        /// Value of the page's `filter` parameter
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Print the card markup for each row of the virtual list
    Rows {
        /// Viewport width in pixels (defaults to settings, then 1280)
        #[arg(short, long)]
        width: Option<u32>,

        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Print the normalized `filter` parameter after disabling badges
    Url {
        /// Starting value of the `filter` parameter
        #[arg(short, long)]
        filter: Option<String>,

        /// Badge ids or section names to switch off
        #[arg(short, long, value_delimiter = ',')]
        disable: Vec<String>,
    },

    /// Build a featured-page snippet for a card
    Featured {
        /// Look the card up by game title
        #[arg(short, long)]
        title: Option<String>,

        /// Card link (skips the lookup when given with --img)
        #[arg(long)]
        href: Option<String>,

        /// Card image source
        #[arg(long)]
        img: Option<String>,
    },

    /// Show or edit settings.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings and their sources
    Show,

    /// Print the settings file path
    Path,

    /// Write values to the settings file
    Set {
        /// Root URL of the gallery site
        #[arg(long = "site")]
        site: Option<String>,

        /// Default viewport width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Origin stripped from featured snippets
        #[arg(long)]
        dev_origin: Option<String>,
    },
}
