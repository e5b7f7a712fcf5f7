use std::path::Path;

use crate::error::{Result, TallyError};
use crate::models::ParsedRow;

/// Coerce an amount field to f64. Strips quotes, commas and currency
/// symbols; parenthesized values are negative. Non-numeric text becomes 0.0.
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.replace(',', "").replace('"', "").replace('$', "");
    let s = s.trim();
    if let Some(inner) = s.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return -inner.trim().parse::<f64>().unwrap_or(0.0);
    }
    s.parse().unwrap_or(0.0)
}

/// Normalize a date field to YYYY-MM-DD when it is ISO or M/D/YYYY.
/// Anything else is kept verbatim (trimmed) so the natural key stays
/// deterministic for locale formats we do not recognize.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();
    if chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
        return raw.to_string();
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(raw, "%m/%d/%Y") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// The account name is the source filename minus its extension. Renaming a
/// file therefore yields a fresh set of rows under the natural key.
pub fn account_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string()
}

pub fn source_name(path: &Path) -> String {
    path.file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string()
}

/// Parse one headerless bank export: five positional columns in fixed
/// order (date, place, expense, income, credit_card). Rows with neither an
/// expense nor an income value are dropped.
pub fn parse_file(path: &Path) -> Result<Vec<ParsedRow>> {
    if !path.is_file() {
        return Err(TallyError::Other(format!(
            "File not found: {}",
            path.display()
        )));
    }
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let field = |i: usize| record.get(i).unwrap_or("").trim().to_string();

        let date = field(0);
        let place = field(1);
        if date.is_empty() && place.is_empty() {
            continue;
        }

        let expense_raw = field(2);
        let income_raw = field(3);
        if expense_raw.is_empty() && income_raw.is_empty() {
            continue;
        }

        rows.push(ParsedRow {
            date: normalize_date(&date),
            place,
            expense: parse_amount(&expense_raw),
            income: parse_amount(&income_raw),
            credit_card: field(4),
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1,234.56"), 1234.56);
        assert_eq!(parse_amount("\"500.00\""), 500.0);
        assert_eq!(parse_amount("$42.10"), 42.10);
        assert_eq!(parse_amount("(50.00)"), -50.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("not_a_number"), 0.0);
    }

    #[test]
    fn test_normalize_date() {
        assert_eq!(normalize_date("2025-03-14"), "2025-03-14");
        assert_eq!(normalize_date("03/14/2025"), "2025-03-14");
        assert_eq!(normalize_date(" 14 Mar 2025 "), "14 Mar 2025");
    }

    #[test]
    fn test_account_and_source_names() {
        let path = Path::new("data/visa_march.csv");
        assert_eq!(account_name(path), "visa_march");
        assert_eq!(source_name(path), "visa_march.csv");
    }

    #[test]
    fn test_parse_file_basic() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "checking.csv",
            "\
2025-03-01,WHOLE FOODS MARKET,54.10,,1234
2025-03-02,PAYROLL ACME CORP,,2100.00,
",
        );
        let rows = parse_file(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].place, "WHOLE FOODS MARKET");
        assert_eq!(rows[0].expense, 54.10);
        assert_eq!(rows[0].income, 0.0);
        assert_eq!(rows[0].credit_card, "1234");
        assert_eq!(rows[1].income, 2100.00);
        assert_eq!(rows[1].credit_card, "");
    }

    #[test]
    fn test_parse_file_drops_rows_without_amounts() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "checking.csv",
            "\
2025-03-01,MEMO ONLY LINE,,,
,,,,
2025-03-02,REAL CHARGE,10.00,,
",
        );
        let rows = parse_file(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].place, "REAL CHARGE");
    }

    #[test]
    fn test_parse_file_coerces_bad_numbers_to_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "checking.csv",
            "2025-03-01,ODD ROW,n/a,5.00,\n",
        );
        let rows = parse_file(&path).unwrap();
        assert_eq!(rows[0].expense, 0.0);
        assert_eq!(rows[0].income, 5.0);
    }

    #[test]
    fn test_parse_file_normalizes_us_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "cc.csv", "03/14/2025,COFFEE,4.50,,9911\n");
        let rows = parse_file(&path).unwrap();
        assert_eq!(rows[0].date, "2025-03-14");
    }

    #[test]
    fn test_parse_file_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_file(&dir.path().join("absent.csv")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }
}
