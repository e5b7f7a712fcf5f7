use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::categorizer::categorize;
use crate::config::RuleConfig;
use crate::error::Result;
use crate::models::{Category, CategorizedRow};
use crate::store::{self, IngestReport};
use crate::{db, importer};

/// Parse one CSV, categorize every row, drop ignored rows, and insert the
/// rest. The config is read-only here; ingestion never writes it back.
pub fn add_file(conn: &Connection, path: &Path, config: &RuleConfig) -> Result<IngestReport> {
    let source_file = importer::source_name(path);
    let account = importer::account_name(path);
    let parsed = importer::parse_file(path)?;

    let mut ignored = 0usize;
    let rows: Vec<CategorizedRow> = parsed
        .into_iter()
        .filter_map(|r| {
            let category = categorize(&r.place, config);
            if category == Category::Ignored {
                ignored += 1;
                return None;
            }
            Some(CategorizedRow {
                date: r.date,
                place: r.place,
                expense: r.expense,
                income: r.income,
                credit_card: r.credit_card,
                account: account.clone(),
                category,
                source_file: source_file.clone(),
            })
        })
        .collect();

    let mut report = store::insert_rows(conn, &rows);
    report.ignored = ignored;
    Ok(report)
}

fn csv_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(folder)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| {
            p.extension()
                .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    // Filename order keeps import progress deterministic.
    files.sort_by_key(|p| importer::source_name(p));
    Ok(files)
}

/// Ensure the schema exists, then add every CSV in the folder in filename
/// order. A file that fails to parse is reported and skipped; the rest of
/// the folder still imports.
pub fn bootstrap(conn: &Connection, folder: &Path, config: &RuleConfig) -> Result<IngestReport> {
    db::init_db(conn)?;
    let mut total = IngestReport::default();
    for path in csv_files(folder)? {
        let name = importer::source_name(&path);
        match add_file(conn, &path, config) {
            Ok(report) => {
                println!(
                    "{name}: {} added, {} duplicates skipped, {} ignored, {} failed",
                    report.inserted, report.skipped, report.ignored, report.failed
                );
                total.inserted += report.inserted;
                total.skipped += report.skipped;
                total.ignored += report.ignored;
                total.failed += report.failed;
            }
            Err(e) => {
                eprintln!("Skipping {name}: {e}");
                total.failed += 1;
            }
        }
    }
    Ok(total)
}

/// Wipe every row and rebuild from the CSV folder. Destructive: manual
/// category patches do not survive.
pub fn refresh(conn: &Connection, folder: &Path, config: &RuleConfig) -> Result<IngestReport> {
    db::init_db(conn)?;
    store::clear_all(conn)?;
    bootstrap(conn, folder, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::get_connection;
    use crate::store::{patch_category, read_active};

    fn test_env() -> (tempfile::TempDir, Connection, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let conn = get_connection(&dir.path().join("test.db")).unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir(&data).unwrap();
        (dir, conn, data)
    }

    fn sample_config() -> RuleConfig {
        serde_yaml::from_str(
            "\
ignore:
  - thank you
income:
  keywords: [payroll]
spending_categories:
  groceries:
    keywords: [whole foods]
    target_range: [0.10, 0.15]
  dining:
    keywords: [whole]
    target_range: [0.05, 0.10]
",
        )
        .unwrap()
    }

    fn write_csv(data: &Path, name: &str, content: &str) -> PathBuf {
        let path = data.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    const MARCH: &str = "\
2025-03-01,WHOLE FOODS MARKET,54.10,,1234
2025-03-02,PAYROLL ACME CORP,,2100.00,
2025-03-03,PAYMENT - THANK YOU,,300.00,
2025-03-04,MYSTERY VENDOR,12.00,,1234
";

    #[test]
    fn test_add_file_categorizes_and_drops_ignored() {
        let (_dir, conn, data) = test_env();
        db::init_db(&conn).unwrap();
        let path = write_csv(&data, "march.csv", MARCH);
        let report = add_file(&conn, &path, &sample_config()).unwrap();
        assert_eq!(report.inserted, 3);
        assert_eq!(report.ignored, 1);

        let txns = read_active(&conn).unwrap();
        assert_eq!(txns.len(), 3);
        assert_eq!(txns[0].category, Category::Named("groceries".into()));
        assert_eq!(txns[1].category, Category::Income);
        assert_eq!(txns[2].category, Category::Uncategorized);
        assert!(txns.iter().all(|t| t.source_file == "march.csv"));
        assert!(txns.iter().all(|t| t.account == "march"));
    }

    #[test]
    fn test_add_file_twice_is_idempotent() {
        let (_dir, conn, data) = test_env();
        db::init_db(&conn).unwrap();
        let path = write_csv(&data, "march.csv", MARCH);
        let config = sample_config();
        add_file(&conn, &path, &config).unwrap();
        let report = add_file(&conn, &path, &config).unwrap();
        assert_eq!(report.inserted, 0);
        assert_eq!(report.skipped, 3);
        assert_eq!(read_active(&conn).unwrap().len(), 3);
    }

    #[test]
    fn test_ignore_beats_income_keyword() {
        let (_dir, conn, data) = test_env();
        db::init_db(&conn).unwrap();
        // "PAYROLL - THANK YOU" matches both an ignore and an income
        // keyword; the ignore list wins and the row never lands.
        let path = write_csv(&data, "m.csv", "2025-03-01,PAYROLL - THANK YOU,,500.00,\n");
        let report = add_file(&conn, &path, &sample_config()).unwrap();
        assert_eq!(report.ignored, 1);
        assert_eq!(report.inserted, 0);
        assert!(read_active(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_bootstrap_imports_folder_sorted() {
        let (_dir, conn, data) = test_env();
        write_csv(&data, "b_visa.csv", "2025-03-05,WHOLE FOODS,20.00,,9911\n");
        write_csv(&data, "a_checking.csv", "2025-03-01,PAYROLL,,100.00,\n");
        write_csv(&data, "notes.txt", "not a csv");
        let report = bootstrap(&conn, &data, &sample_config()).unwrap();
        assert_eq!(report.inserted, 2);

        let txns = read_active(&conn).unwrap();
        // a_checking.csv sorts before b_visa.csv, so its rows insert first.
        assert_eq!(txns[0].account, "a_checking");
        assert_eq!(txns[1].account, "b_visa");
    }

    #[test]
    fn test_bootstrap_survives_bad_file() {
        let (_dir, conn, data) = test_env();
        write_csv(&data, "good.csv", "2025-03-01,WHOLE FOODS,20.00,,\n");
        // A directory with a .csv name makes parse_file fail outright.
        std::fs::create_dir(data.join("bad.csv")).unwrap();
        let report = bootstrap(&conn, &data, &sample_config()).unwrap();
        assert_eq!(report.inserted, 1);
        assert_eq!(report.failed, 1);
    }

    #[test]
    fn test_remove_then_bootstrap_reimports() {
        let (_dir, conn, data) = test_env();
        write_csv(&data, "march.csv", MARCH);
        let config = sample_config();
        bootstrap(&conn, &data, &config).unwrap();
        store::remove_file(&conn, "march.csv").unwrap();
        assert!(read_active(&conn).unwrap().is_empty());

        // remove fully forgets, so the rows come back as fresh inserts.
        let report = bootstrap(&conn, &data, &config).unwrap();
        assert_eq!(report.inserted, 3);
        assert_eq!(read_active(&conn).unwrap().len(), 3);
    }

    #[test]
    fn test_deactivate_then_bootstrap_stays_hidden() {
        let (_dir, conn, data) = test_env();
        write_csv(&data, "march.csv", MARCH);
        let config = sample_config();
        bootstrap(&conn, &data, &config).unwrap();
        store::deactivate_file(&conn, "march.csv").unwrap();

        let report = bootstrap(&conn, &data, &config).unwrap();
        assert_eq!(report.inserted, 0);
        assert_eq!(report.skipped, 3);
        assert!(read_active(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_refresh_discards_manual_edits() {
        let (_dir, conn, data) = test_env();
        write_csv(&data, "march.csv", MARCH);
        let config = sample_config();
        bootstrap(&conn, &data, &config).unwrap();

        let id = read_active(&conn).unwrap()[0].id;
        patch_category(&conn, id, &Category::Named("trip-ny-2025".into())).unwrap();

        refresh(&conn, &data, &config).unwrap();
        let txns = read_active(&conn).unwrap();
        assert_eq!(txns.len(), 3);
        // The manual edit is gone: every category is rule-derived again.
        assert!(txns
            .iter()
            .all(|t| t.category != Category::Named("trip-ny-2025".into())));
        assert_eq!(txns[0].category, Category::Named("groceries".into()));
    }
}
