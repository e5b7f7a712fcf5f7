use rusqlite::Connection;

use crate::error::Result;
use crate::paths::Paths;
use crate::{db, fmt};

fn count(conn: &Connection, sql: &str) -> Result<i64> {
    Ok(conn.query_row(sql, [], |r| r.get(0))?)
}

pub fn run(paths: &Paths) -> Result<()> {
    let conn = db::get_connection(&paths.db())?;
    db::init_db(&conn)?;

    let total = count(&conn, "SELECT count(*) FROM transactions")?;
    let active = count(&conn, "SELECT count(*) FROM transactions WHERE active = 1")?;
    let files = count(&conn, "SELECT count(DISTINCT source_file) FROM transactions")?;
    let (expense, income): (f64, f64) = conn.query_row(
        "SELECT coalesce(sum(expense), 0), coalesce(sum(income), 0) \
         FROM transactions WHERE active = 1",
        [],
        |r| Ok((r.get(0)?, r.get(1)?)),
    )?;

    println!("Database: {}", paths.db().display());
    println!("{total} transactions ({active} active) from {files} files");
    println!(
        "Active totals: {} spent, {} received",
        fmt::money(expense),
        fmt::money(income)
    );
    Ok(())
}
