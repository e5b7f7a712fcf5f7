use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::models::Category;
use crate::paths::Paths;
use crate::{db, fmt, store};

pub fn list(paths: &Paths, category: Option<&str>, account: Option<&str>) -> Result<()> {
    let conn = db::get_connection(&paths.db())?;
    db::init_db(&conn)?;
    let txns = store::read_active(&conn)?;

    let mut table = Table::new();
    table.set_header(vec![
        "ID", "Date", "Place", "Expense", "Income", "Card", "Account", "Category",
    ]);
    let mut shown = 0usize;
    for t in &txns {
        if category.is_some_and(|c| t.category.as_str() != c) {
            continue;
        }
        if account.is_some_and(|a| t.account != a) {
            continue;
        }
        table.add_row(vec![
            Cell::new(t.id),
            Cell::new(&t.date),
            Cell::new(&t.place),
            Cell::new(fmt::money(t.expense)),
            Cell::new(fmt::money(t.income)),
            Cell::new(&t.credit_card),
            Cell::new(&t.account),
            Cell::new(t.category.as_str()),
        ]);
        shown += 1;
    }
    println!("{table}");
    println!("{shown} active transactions");
    Ok(())
}

pub fn recategorize(paths: &Paths, id: i64, category: &str) -> Result<()> {
    let conn = db::get_connection(&paths.db())?;
    db::init_db(&conn)?;
    let category = Category::from_label(category);
    if store::patch_category(&conn, id, &category)? {
        println!("Updated transaction {id} to category '{category}'");
    } else {
        println!("No active transaction with ID {id}");
    }
    Ok(())
}
