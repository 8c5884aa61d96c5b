//! # CLI Layer
//!
//! This module is **one possible UI client** for bookshelf, not the
//! application itself. It is the only place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Handles argument parsing
//! - Loops on invalid input
//!
//! ## Structure
//!
//! - `setup`: command-line flags
//! - `logging`: tracing subscriber on stderr
//! - `console`: prompts and colored output over any `BufRead`/`Write` pair
//! - `shell`: the numbered menu and one handler per operation
//! - `render`: listing and report layout

mod console;
mod logging;
mod render;
mod setup;
mod shell;

use bookshelf::api::LibraryApi;
use bookshelf::commands::export::ExportOptions;
use bookshelf::config::LibraryConfig;
use bookshelf::error::Result;
use bookshelf::store::fs::CsvStore;
use chrono::Datelike;
use clap::Parser;
use console::Console;
use directories::ProjectDirs;
use setup::Cli;
use shell::Shell;
use std::path::PathBuf;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(cli.config.as_deref()).with_store_file(cli.store);
    tracing::debug!("Using store {}", config.store_file.display());

    let current_year = chrono::Local::now().year();
    let api = LibraryApi::new(CsvStore::new(&config.store_file), current_year)
        .with_export_options(ExportOptions {
            json_indent: config.json_indent,
        });

    let stdin = std::io::stdin();
    let console = Console::new(stdin.lock(), std::io::stdout());
    Shell::new(api, console).run()
}

fn config_dir(explicit: Option<&std::path::Path>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir.to_path_buf());
    }
    ProjectDirs::from("com", "bookshelf", "bookshelf").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Config from the given or default directory. A missing or unreadable file
/// falls back to defaults.
fn load_config(explicit: Option<&std::path::Path>) -> LibraryConfig {
    let Some(dir) = config_dir(explicit) else {
        tracing::debug!("No config directory available, using defaults");
        return LibraryConfig::default();
    };
    LibraryConfig::load(&dir).unwrap_or_else(|e| {
        tracing::warn!("Ignoring config in {}: {}", dir.display(), e);
        LibraryConfig::default()
    })
}
