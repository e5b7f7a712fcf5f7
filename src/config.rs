use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};
use crate::models::Contact;

/// One spending category's keyword list and target spending band.
/// `target_range` holds fractions of qualifying income (multiply by 100
/// for percentage display).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRule {
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default = "default_target_range")]
    pub target_range: [f64; 2],
}

fn default_target_range() -> [f64; 2] {
    [0.0, 0.0]
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeRules {
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// The rule document. Categorization precedence is document order, so
/// `spending_categories` is kept as an ordered list of (name, rule) pairs
/// rather than a hash map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub ignore: Vec<String>,
    #[serde(default)]
    pub income: IncomeRules,
    #[serde(default, with = "ordered_categories")]
    pub spending_categories: Vec<(String, CategoryRule)>,
}

impl RuleConfig {
    pub fn category(&self, name: &str) -> Option<&CategoryRule> {
        self.spending_categories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rule)| rule)
    }

    fn category_mut(&mut self, name: &str) -> &mut CategoryRule {
        if let Some(pos) = self.spending_categories.iter().position(|(n, _)| n == name) {
            return &mut self.spending_categories[pos].1;
        }
        self.spending_categories.push((
            name.to_string(),
            CategoryRule {
                keywords: Vec::new(),
                target_range: default_target_range(),
            },
        ));
        &mut self.spending_categories.last_mut().unwrap().1
    }

    /// Append a keyword to a category's list (or the income list for
    /// "income"). Keywords are stored trimmed and lowercased. Returns false
    /// when the keyword was already present.
    pub fn add_keyword(&mut self, category: &str, keyword: &str) -> bool {
        let keyword = keyword.trim().to_lowercase();
        let list = if category == "income" {
            &mut self.income.keywords
        } else {
            &mut self.category_mut(category).keywords
        };
        if keyword.is_empty() || list.contains(&keyword) {
            return false;
        }
        list.push(keyword);
        true
    }

    pub fn set_target_range(&mut self, category: &str, lower: f64, upper: f64) {
        self.category_mut(category).target_range = [lower, upper];
    }
}

/// YAML mappings deserialize in document order via `serde_yaml::Mapping`;
/// this preserves that order into a Vec of pairs and writes it back out
/// as a plain mapping.
mod ordered_categories {
    use serde::de::Error as DeError;
    use serde::ser::Error as SerError;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::CategoryRule;

    pub fn serialize<S: Serializer>(
        categories: &[(String, CategoryRule)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut mapping = serde_yaml::Mapping::new();
        for (name, rule) in categories {
            let value = serde_yaml::to_value(rule).map_err(S::Error::custom)?;
            mapping.insert(serde_yaml::Value::String(name.clone()), value);
        }
        serde::Serialize::serialize(&mapping, serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, CategoryRule)>, D::Error> {
        let mapping = serde_yaml::Mapping::deserialize(deserializer)?;
        let mut categories = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let name = key
                .as_str()
                .ok_or_else(|| D::Error::custom("category names must be strings"))?
                .to_string();
            let rule: CategoryRule =
                serde_yaml::from_value(value).map_err(D::Error::custom)?;
            categories.push((name, rule));
        }
        Ok(categories)
    }
}

pub fn load_config(path: &Path) -> Result<RuleConfig> {
    if !path.exists() {
        return Err(TallyError::Config(format!(
            "rule config not found at {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&content)
        .map_err(|e| TallyError::Config(format!("malformed rule config: {e}")))
}

pub fn save_config(path: &Path, config: &RuleConfig) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let yaml = serde_yaml::to_string(config)
        .map_err(|e| TallyError::Config(e.to_string()))?;
    std::fs::write(path, yaml)?;
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ContactsFile {
    #[serde(default)]
    contacts: Vec<Contact>,
}

pub fn load_contacts(path: &Path) -> Result<Vec<Contact>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path)?;
    let file: ContactsFile = serde_yaml::from_str(&content)
        .map_err(|e| TallyError::Config(format!("malformed contacts file: {e}")))?;
    Ok(file.contacts)
}

pub fn save_contacts(path: &Path, contacts: &[Contact]) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = ContactsFile {
        contacts: contacts.to_vec(),
    };
    let yaml = serde_yaml::to_string(&file)
        .map_err(|e| TallyError::Config(e.to_string()))?;
    std::fs::write(path, yaml)?;
    Ok(())
}

/// Append a contact unless one with the same name exists. Returns false on
/// duplicate.
pub fn add_contact(contacts: &mut Vec<Contact>, name: &str, keyword: &str) -> bool {
    if contacts.iter().any(|c| c.name == name) {
        return false;
    }
    contacts.push(Contact {
        name: name.to_string(),
        keyword: keyword.to_string(),
    });
    true
}
