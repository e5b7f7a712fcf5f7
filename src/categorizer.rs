use crate::config::RuleConfig;
use crate::models::Category;

fn contains_any(place_lower: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|k| !k.is_empty() && place_lower.contains(&k.to_lowercase()))
}

/// Assign a category to a merchant string. First match wins, checked in a
/// fixed order: ignore list, income keywords, then spending categories in
/// document order with each keyword list scanned in document order.
pub fn categorize(place: &str, config: &RuleConfig) -> Category {
    let place_lower = place.to_lowercase();

    if contains_any(&place_lower, &config.ignore) {
        return Category::Ignored;
    }

    if contains_any(&place_lower, &config.income.keywords) {
        return Category::Income;
    }

    for (name, rule) in &config.spending_categories {
        if contains_any(&place_lower, &rule.keywords) {
            return Category::Named(name.clone());
        }
    }

    Category::Uncategorized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(yaml: &str) -> RuleConfig {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn sample_config() -> RuleConfig {
        config_from(
            "\
ignore:
  - thank you
income:
  keywords:
    - payroll
spending_categories:
  groceries:
    keywords: [whole foods]
    target_range: [0.10, 0.15]
  dining:
    keywords: [whole]
    target_range: [0.05, 0.10]
",
        )
    }

    #[test]
    fn test_ignore_checked_first() {
        let config = config_from(
            "\
ignore: [payment]
income:
  keywords: [payment]
spending_categories: {}
",
        );
        assert_eq!(categorize("PAYMENT RECEIVED", &config), Category::Ignored);
    }

    #[test]
    fn test_income_beats_spending() {
        let config = config_from(
            "\
income:
  keywords: [deposit]
spending_categories:
  fees:
    keywords: [deposit]
    target_range: [0, 0]
",
        );
        assert_eq!(categorize("MOBILE DEPOSIT", &config), Category::Income);
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        let config = sample_config();
        assert_eq!(
            categorize("WHOLE FOODS MARKET", &config),
            Category::Named("groceries".into())
        );
        assert_eq!(
            categorize("WHOLEsome bakery", &config),
            Category::Named("dining".into())
        );
    }

    #[test]
    fn test_case_insensitive_substring() {
        let config = sample_config();
        assert_eq!(
            categorize("wHoLe FoOdS #123, SEATTLE WA", &config),
            Category::Named("groceries".into())
        );
    }

    #[test]
    fn test_no_match_is_uncategorized() {
        let config = sample_config();
        assert_eq!(categorize("MYSTERY VENDOR", &config), Category::Uncategorized);
    }

    #[test]
    fn test_empty_config_is_uncategorized() {
        let config = RuleConfig::default();
        assert_eq!(categorize("ANYTHING", &config), Category::Uncategorized);
    }
}
