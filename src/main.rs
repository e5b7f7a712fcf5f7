mod categorizer;
mod cli;
mod config;
mod db;
mod error;
mod fmt;
mod importer;
mod ingest;
mod models;
mod paths;
mod store;

use clap::Parser;

use cli::{Cli, Commands, ContactsCommands, RulesCommands};
use paths::Paths;

fn main() {
    let cli = Cli::parse();
    let paths = Paths::new(&cli.dir);

    let result = match cli.command {
        Commands::Init => cli::init::run(&paths),
        Commands::Bootstrap => cli::ingest::bootstrap(&paths),
        Commands::Refresh => cli::ingest::refresh(&paths),
        Commands::Add { file } => cli::ingest::add(&paths, &file),
        Commands::Remove { file } => cli::ingest::remove(&paths, &file),
        Commands::Deactivate { file } => cli::ingest::deactivate(&paths, &file),
        Commands::List { category, account } => {
            cli::transactions::list(&paths, category.as_deref(), account.as_deref())
        }
        Commands::Recategorize { id, category } => {
            cli::transactions::recategorize(&paths, id, &category)
        }
        Commands::Categorize { place } => cli::categorize::run(&paths, &place),
        Commands::Rules { command } => match command {
            RulesCommands::List => cli::rules::list(&paths),
            RulesCommands::AddKeyword { category, keyword } => {
                cli::rules::add_keyword(&paths, &category, &keyword)
            }
            RulesCommands::SetRange {
                category,
                lower,
                upper,
            } => cli::rules::set_range(&paths, &category, lower, upper),
        },
        Commands::Contacts { command } => match command {
            ContactsCommands::List => cli::contacts::list(&paths),
            ContactsCommands::Add { name, keyword } => cli::contacts::add(&paths, &name, &keyword),
        },
        Commands::Status => cli::status::run(&paths),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
