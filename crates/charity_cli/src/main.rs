//! Charity console
//!
//! Interactive create/read/update/delete over the charity fund collections.
//! With no arguments it connects to `mongodb://localhost:27017/`, selects
//! the `charity` database and opens the collection menu.

mod line_editor;

use charity_core::{seed_demo, Config, Menu, CLOSING, DEFAULT_DATABASE, DEFAULT_URI};
use charity_store::{DocumentStore, InMemoryStore, MongoStore};
use clap::Parser;
use line_editor::LineEditorConsole;
use tracing_subscriber::EnvFilter;

/// Interactive console for the charity fund collections.
#[derive(Parser, Debug)]
#[command(name = "charity")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Document store connection string
    #[arg(long, env = "CHARITY_MONGODB_URI", default_value = DEFAULT_URI)]
    uri: String,

    /// Database to select on the store
    #[arg(long, env = "CHARITY_DATABASE", default_value = DEFAULT_DATABASE)]
    database: String,

    /// Use a seeded in-memory store instead of a server
    #[arg(long)]
    in_memory: bool,

    /// Enable verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config::new()
            .with_uri(self.uri.clone())
            .with_database(self.database.clone())
    }
}

fn open_store(
    cli: &Cli,
    config: &Config,
) -> Result<Box<dyn DocumentStore>, Box<dyn std::error::Error>> {
    if cli.in_memory {
        let store = InMemoryStore::new();
        seed_demo(&store, &config.catalog)?;
        return Ok(Box::new(store));
    }
    Ok(Box::new(MongoStore::connect(&config.uri, &config.database)?))
}

/// Ends the process with the closing message on Ctrl-C outside a prompt.
///
/// While the line editor is reading, Ctrl-C arrives as a key and is
/// handled by the menu instead.
fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        println!("\n{CLOSING}");
        std::process::exit(0);
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with prompts.
    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    install_interrupt_handler()?;

    let config = cli.config();
    let store = open_store(&cli, &config)?;
    let mut console = LineEditorConsole::new()?;

    Menu::new(store.as_ref(), &mut console, &config.catalog).run()?;

    tracing::debug!("console closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_fixed_defaults() {
        let cli = Cli::try_parse_from(["charity"]).unwrap();
        let config = cli.config();
        assert!(!cli.in_memory);
        assert!(!cli.verbose);
        assert_eq!(config.uri, DEFAULT_URI);
        assert_eq!(config.database, DEFAULT_DATABASE);
    }

    #[test]
    fn overrides_are_applied() {
        let cli = Cli::try_parse_from([
            "charity",
            "--uri",
            "mongodb://db:27017/",
            "--database",
            "fund",
            "--in-memory",
            "-v",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.uri, "mongodb://db:27017/");
        assert_eq!(config.database, "fund");
        assert!(cli.in_memory);
        assert!(cli.verbose);
    }

    #[test]
    fn interrupt_handler_installs_once() {
        install_interrupt_handler().unwrap();
        assert!(matches!(
            install_interrupt_handler(),
            Err(ctrlc::Error::MultipleHandlers)
        ));
    }

    #[test]
    fn in_memory_store_is_seeded() {
        let cli = Cli::try_parse_from(["charity", "--in-memory"]).unwrap();
        let config = cli.config();
        let store = open_store(&cli, &config).unwrap();
        assert!(store.sample_one("Donors").unwrap().is_some());
        assert!(store.sample_one("Volunteers2").unwrap().is_some());
    }
}
