use comfy_table::{Cell, Table};

use crate::config::{add_contact, load_contacts, save_contacts};
use crate::error::Result;
use crate::paths::Paths;

pub fn list(paths: &Paths) -> Result<()> {
    let contacts = load_contacts(&paths.contacts())?;
    let mut table = Table::new();
    table.set_header(vec!["Name", "Keyword"]);
    for c in &contacts {
        table.add_row(vec![Cell::new(&c.name), Cell::new(&c.keyword)]);
    }
    println!("Contacts\n{table}");
    Ok(())
}

pub fn add(paths: &Paths, name: &str, keyword: &str) -> Result<()> {
    let mut contacts = load_contacts(&paths.contacts())?;
    if add_contact(&mut contacts, name, keyword) {
        save_contacts(&paths.contacts(), &contacts)?;
        println!("Added contact: {name}");
    } else {
        println!("Contact already exists: {name}");
    }
    Ok(())
}
