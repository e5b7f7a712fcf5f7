use colored::Colorize;

use crate::config::{self, CategoryRule, IncomeRules, RuleConfig};
use crate::error::Result;
use crate::db;
use crate::paths::Paths;

fn starter_config() -> RuleConfig {
    RuleConfig {
        ignore: vec!["payment - thank you".to_string()],
        income: IncomeRules {
            keywords: vec!["payroll".to_string(), "direct deposit".to_string()],
        },
        spending_categories: vec![
            (
                "groceries".to_string(),
                CategoryRule {
                    keywords: vec!["whole foods".to_string()],
                    target_range: [0.10, 0.15],
                },
            ),
            (
                "dining".to_string(),
                CategoryRule {
                    keywords: vec!["restaurant".to_string()],
                    target_range: [0.05, 0.10],
                },
            ),
        ],
    }
}

pub fn run(paths: &Paths) -> Result<()> {
    std::fs::create_dir_all(paths.data_dir())?;

    let conn = db::get_connection(&paths.db())?;
    db::init_db(&conn)?;
    drop(conn);

    if !paths.config().exists() {
        config::save_config(&paths.config(), &starter_config())?;
        println!("Wrote starter rule config: {}", paths.config().display());
    }
    if !paths.contacts().exists() {
        config::save_contacts(&paths.contacts(), &[])?;
        println!("Wrote empty contacts file: {}", paths.contacts().display());
    }

    println!(
        "{} Drop bank CSV exports into {} and run `tally bootstrap`.",
        "Ready.".green(),
        paths.data_dir().display()
    );
    Ok(())
}
