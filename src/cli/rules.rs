use comfy_table::{Cell, Table};

use crate::config::{load_config, save_config};
use crate::error::Result;
use crate::fmt;
use crate::paths::Paths;

pub fn list(paths: &Paths) -> Result<()> {
    let config = load_config(&paths.config())?;

    let mut table = Table::new();
    table.set_header(vec!["Category", "Keywords", "Target"]);
    table.add_row(vec![
        Cell::new("income"),
        Cell::new(config.income.keywords.join(", ")),
        Cell::new(""),
    ]);
    for (name, rule) in &config.spending_categories {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(rule.keywords.join(", ")),
            Cell::new(format!(
                "{} - {}",
                fmt::percent(rule.target_range[0]),
                fmt::percent(rule.target_range[1])
            )),
        ]);
    }
    println!("Rules\n{table}");
    if !config.ignore.is_empty() {
        println!("Ignored: {}", config.ignore.join(", "));
    }
    Ok(())
}

pub fn add_keyword(paths: &Paths, category: &str, keyword: &str) -> Result<()> {
    let mut config = load_config(&paths.config())?;
    if config.add_keyword(category, keyword) {
        save_config(&paths.config(), &config)?;
        println!("Added keyword '{}' to {category}", keyword.trim().to_lowercase());
    } else {
        println!("Keyword already present in {category}");
    }
    Ok(())
}

pub fn set_range(paths: &Paths, category: &str, lower: f64, upper: f64) -> Result<()> {
    let mut config = load_config(&paths.config())?;
    config.set_target_range(category, lower, upper);
    save_config(&paths.config(), &config)?;
    println!(
        "Set {category} target range to {} - {}",
        fmt::percent(lower),
        fmt::percent(upper)
    );
    Ok(())
}
