use colored::Colorize;

use crate::config::load_config;
use crate::error::Result;
use crate::paths::Paths;
use crate::store::IngestReport;
use crate::{db, ingest, store};

fn print_report(report: &IngestReport) {
    println!(
        "{} added, {} duplicates skipped, {} ignored, {} failed",
        report.inserted, report.skipped, report.ignored, report.failed
    );
}

pub fn bootstrap(paths: &Paths) -> Result<()> {
    let config = load_config(&paths.config())?;
    let conn = db::get_connection(&paths.db())?;
    let report = ingest::bootstrap(&conn, &paths.data_dir(), &config)?;
    print!("Total: ");
    print_report(&report);
    Ok(())
}

pub fn refresh(paths: &Paths) -> Result<()> {
    let config = load_config(&paths.config())?;
    let conn = db::get_connection(&paths.db())?;
    println!(
        "{} clearing all rows, including manual category edits",
        "Refresh is destructive:".yellow()
    );
    let report = ingest::refresh(&conn, &paths.data_dir(), &config)?;
    print!("Total: ");
    print_report(&report);
    Ok(())
}

pub fn add(paths: &Paths, file: &str) -> Result<()> {
    let config = load_config(&paths.config())?;
    let conn = db::get_connection(&paths.db())?;
    db::init_db(&conn)?;
    let report = ingest::add_file(&conn, &paths.resolve_csv(file), &config)?;
    print_report(&report);
    Ok(())
}

pub fn remove(paths: &Paths, file: &str) -> Result<()> {
    let conn = db::get_connection(&paths.db())?;
    db::init_db(&conn)?;
    let deleted = store::remove_file(&conn, file)?;
    println!("Removed {deleted} rows from {file}");
    Ok(())
}

pub fn deactivate(paths: &Paths, file: &str) -> Result<()> {
    let conn = db::get_connection(&paths.db())?;
    db::init_db(&conn)?;
    let hidden = store::deactivate_file(&conn, file)?;
    println!("Deactivated {hidden} rows from {file}");
    Ok(())
}
