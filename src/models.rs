use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of category labels. The sentinel spellings ("income",
/// "ignore", "uncategorized") are fixed at the DB/display boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Income,
    Ignored,
    Uncategorized,
    Named(String),
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Income => "income",
            Self::Ignored => "ignore",
            Self::Uncategorized => "uncategorized",
            Self::Named(name) => name,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "income" => Self::Income,
            "ignore" => Self::Ignored,
            "uncategorized" => Self::Uncategorized,
            other => Self::Named(other.to_string()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted transaction row, as read back from the store.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: i64,
    pub date: String,
    pub place: String,
    pub expense: f64,
    pub income: f64,
    pub credit_card: String,
    pub account: String,
    pub category: Category,
    pub source_file: String,
    pub active: bool,
}

/// Intermediate representation from the CSV parser before categorization.
#[derive(Debug, Clone)]
pub struct ParsedRow {
    pub date: String,
    pub place: String,
    pub expense: f64,
    pub income: f64,
    pub credit_card: String,
}

/// A parsed row stamped with its category and origin, ready for insert.
#[derive(Debug, Clone)]
pub struct CategorizedRow {
    pub date: String,
    pub place: String,
    pub expense: f64,
    pub income: f64,
    pub credit_card: String,
    pub account: String,
    pub category: Category,
    pub source_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub keyword: String,
}
