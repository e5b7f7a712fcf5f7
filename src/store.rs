use rusqlite::Connection;

use crate::error::Result;
use crate::models::{Category, CategorizedRow, Transaction};

#[derive(Debug, Default, Clone, Copy)]
pub struct IngestReport {
    pub inserted: usize,
    pub skipped: usize,
    pub ignored: usize,
    pub failed: usize,
}

fn row_exists(conn: &Connection, row: &CategorizedRow) -> Result<bool> {
    let mut stmt = conn.prepare_cached(
        "SELECT 1 FROM transactions \
         WHERE date = ?1 AND place = ?2 AND expense = ?3 AND income = ?4 \
           AND credit_card = ?5 AND account = ?6",
    )?;
    let exists = stmt.exists(rusqlite::params![
        row.date,
        row.place,
        row.expense,
        row.income,
        row.credit_card,
        row.account
    ])?;
    Ok(exists)
}

fn insert_row(conn: &Connection, row: &CategorizedRow) -> Result<bool> {
    // Existing rows are skipped whether active or not: re-adding never
    // reactivates and never duplicates.
    if row_exists(conn, row)? {
        return Ok(false);
    }
    conn.execute(
        "INSERT INTO transactions \
         (date, place, expense, income, credit_card, account, category, source_file, active) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1)",
        rusqlite::params![
            row.date,
            row.place,
            row.expense,
            row.income,
            row.credit_card,
            row.account,
            row.category.as_str(),
            row.source_file
        ],
    )?;
    Ok(true)
}

/// Insert a batch of categorized rows. A failing row (including a
/// uniqueness-constraint violation that slipped past the existence check)
/// is reported and counted, never fatal to the rest of the batch.
pub fn insert_rows(conn: &Connection, rows: &[CategorizedRow]) -> IngestReport {
    let mut report = IngestReport::default();
    for row in rows {
        match insert_row(conn, row) {
            Ok(true) => report.inserted += 1,
            Ok(false) => report.skipped += 1,
            Err(e) => {
                eprintln!("Error inserting row from {}: {e}", row.source_file);
                report.failed += 1;
            }
        }
    }
    report
}

/// Hard-delete every row from a source file and reclaim storage.
/// Irreversible; `deactivate_file` is the reversible variant.
pub fn remove_file(conn: &Connection, source_file: &str) -> Result<usize> {
    let deleted = conn.execute(
        "DELETE FROM transactions WHERE source_file = ?1",
        [source_file],
    )?;
    conn.execute_batch("VACUUM")?;
    Ok(deleted)
}

/// Soft-delete: rows keep their history but disappear from `read_active`.
pub fn deactivate_file(conn: &Connection, source_file: &str) -> Result<usize> {
    let updated = conn.execute(
        "UPDATE transactions SET active = 0 WHERE source_file = ?1",
        [source_file],
    )?;
    Ok(updated)
}

/// The only read path exposed to downstream consumers.
pub fn read_active(conn: &Connection) -> Result<Vec<Transaction>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, place, expense, income, credit_card, account, category, source_file, active \
         FROM transactions WHERE active = 1 ORDER BY id",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Transaction {
                id: row.get(0)?,
                date: row.get(1)?,
                place: row.get(2)?,
                expense: row.get(3)?,
                income: row.get(4)?,
                credit_card: row.get(5)?,
                account: row.get(6)?,
                category: Category::from_label(&row.get::<_, String>(7)?),
                source_file: row.get(8)?,
                active: row.get::<_, i64>(9)? != 0,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Update one active row's category. Returns false (a reported no-op at
/// the call site) when no active row has that id.
pub fn patch_category(conn: &Connection, id: i64, category: &Category) -> Result<bool> {
    let updated = conn.execute(
        "UPDATE transactions SET category = ?1 WHERE id = ?2 AND active = 1",
        rusqlite::params![category.as_str(), id],
    )?;
    Ok(updated > 0)
}

/// Delete every row. Only `refresh` calls this.
pub fn clear_all(conn: &Connection) -> Result<()> {
    conn.execute("DELETE FROM transactions", [])?;
    conn.execute_batch("VACUUM")?;
    Ok(())
}
