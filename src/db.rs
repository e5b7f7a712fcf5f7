use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

/// The UNIQUE clause is the correctness authority for deduplication; the
/// pre-insert existence check in the store is only a fast path.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS transactions (
    id INTEGER PRIMARY KEY,
    date TEXT NOT NULL,
    place TEXT NOT NULL,
    expense REAL NOT NULL DEFAULT 0,
    income REAL NOT NULL DEFAULT 0,
    credit_card TEXT NOT NULL DEFAULT '',
    account TEXT NOT NULL,
    category TEXT NOT NULL,
    source_file TEXT NOT NULL,
    active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT DEFAULT (datetime('now')),
    UNIQUE(date, place, expense, income, credit_card, account)
);

CREATE INDEX IF NOT EXISTS idx_transactions_source_file
    ON transactions(source_file);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
