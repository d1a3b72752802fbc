//! gamedeck CLI
//!
//! Command-line interface for loading a game gallery site and inspecting its
//! cards, filters and URL state.

mod cli_types;
mod commands;
mod error;
mod spinner;

use std::io::Write;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::Session;
use error::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands work without a reachable (or even valid) site.
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(cli.base_url.as_deref()),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Set {
                site,
                width,
                dev_origin,
            } => commands::config::run_config_set(site, width, dev_origin),
        },
        command => {
            let session = Session::new(cli.base_url.as_deref(), cli.quiet)?;
            run_gallery_command(&session, command)
        }
    }
}

fn run_gallery_command(session: &Session, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::List { selection, json } => commands::list::run_list(session, &selection, json),
        Commands::Filters { filter } => commands::filters::run_filters(session, filter.as_deref()),
        Commands::Rows { width, selection } => commands::rows::run_rows(session, width, &selection),
        Commands::Url { filter, disable } => commands::url::run_url(session, filter.as_deref(), &disable),
        Commands::Featured { title, href, img } => {
            commands::featured::run_featured(session, title, href, img)
        }
        Commands::Config { .. } => Ok(()),
    }
}

/// Route `log` output to the terminal.
///
/// Normal runs print bare messages (the CLI's output goes through
/// `log::info!`); `--verbose` adds timestamps, levels and debug messages.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Warn)
        // Prefix match: covers the binary and gamedeck_lib
        .filter_module("gamedeck", level)
        .target(env_logger::Target::Stdout)
        .parse_default_env();

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }
    builder.init();
}
