pub mod categorize;
pub mod contacts;
pub mod ingest;
pub mod init;
pub mod rules;
pub mod status;
pub mod transactions;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tally", about = "Personal expense tracking: import bank CSV exports, categorize, and query.")]
pub struct Cli {
    /// Base directory holding expenses.db, configs/ and data/
    #[arg(long, global = true, default_value = ".")]
    pub dir: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database, CSV folder and starter config files.
    Init,
    /// Import every CSV in the data folder (filename order).
    Bootstrap,
    /// Destructive: clear ALL rows (manual category edits are lost) and
    /// re-import every CSV from the data folder.
    Refresh,
    /// Import one CSV file.
    Add {
        /// CSV filename in the data folder, or a path to one
        file: String,
    },
    /// Hard-delete all rows imported from a file. Irreversible.
    Remove {
        /// Source filename, e.g. march.csv
        file: String,
    },
    /// Hide all rows from a file without deleting them.
    Deactivate {
        /// Source filename, e.g. march.csv
        file: String,
    },
    /// List active transactions.
    List {
        /// Filter by category label
        #[arg(long)]
        category: Option<String>,
        /// Filter by account name
        #[arg(long)]
        account: Option<String>,
    },
    /// Change the category of one active transaction.
    Recategorize {
        /// Transaction ID (shown in `tally list`)
        id: i64,
        /// New category label
        category: String,
    },
    /// Dry-run a merchant string through the current rules.
    Categorize {
        /// Merchant/description text to classify
        place: String,
    },
    /// Inspect and edit categorization rules.
    Rules {
        #[command(subcommand)]
        command: RulesCommands,
    },
    /// Manage reimbursement contacts.
    Contacts {
        #[command(subcommand)]
        command: ContactsCommands,
    },
    /// Show database summary statistics.
    Status,
}

#[derive(Subcommand)]
pub enum RulesCommands {
    /// List categories with their keywords and target ranges.
    List,
    /// Append a keyword to a category (use 'income' for the income list).
    AddKeyword {
        /// Category name
        category: String,
        /// Keyword (stored lowercased)
        keyword: String,
    },
    /// Set a category's target range as fractions of income, e.g. 0.05 0.10
    SetRange {
        /// Category name
        category: String,
        /// Lower fraction
        lower: f64,
        /// Upper fraction
        upper: f64,
    },
}

#[derive(Subcommand)]
pub enum ContactsCommands {
    /// List contacts.
    List,
    /// Add a contact with the text to look for in transfers.
    Add {
        /// Contact name
        name: String,
        /// Keyword matched against incoming transfers
        keyword: String,
    },
}
