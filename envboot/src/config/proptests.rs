//! Property-based tests for the environment configuration pipeline.

use super::entry::ConfigEntrySource;
use super::layered::Config;
use super::merger::ConfigEntryAggregator;
use super::value::ConfigValue;
use crate::list_parser::tokenize;
use crate::quoting::{add_quotes, add_quotes_if_needed};
use proptest::prelude::*;

// Items a user would plausibly put in a list variable
fn item_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9.:/@_-]{1,24}"
}

fn items_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(item_strategy(), 0..8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Quoting twice is the same as quoting once
    #[test]
    fn quoting_is_idempotent(s in any::<String>()) {
        let once = add_quotes_if_needed(&s);
        prop_assert_eq!(add_quotes_if_needed(&once), once);
    }

    // Quoted text parses back to the original string
    #[test]
    fn quoted_value_parses_back(s in any::<String>()) {
        let config = Config::parse_str(&format!("k={}", add_quotes(&s))).unwrap();
        prop_assert_eq!(config.get_string("k").unwrap(), s);
    }

    // Tokenizing is deterministic, valid or not
    #[test]
    fn tokenizer_is_deterministic(s in any::<String>()) {
        prop_assert_eq!(tokenize(&s), tokenize(&s));
    }

    // Bare comma lists split into their trimmed items
    #[test]
    fn comma_list_tokenizes_to_items(items in items_strategy(), spaced in any::<bool>()) {
        let separator = if spaced { " , " } else { "," };
        let tokens = tokenize(&items.join(separator)).unwrap();
        prop_assert_eq!(tokens, items);
    }

    // Bracketed, quoted lists give the same items as bare ones
    #[test]
    fn bracketed_list_matches_bare_list(items in items_strategy()) {
        let quoted: Vec<String> = items.iter().map(|i| format!("\"{i}\"")).collect();
        let bracketed = format!("[{}]", quoted.join(", "));
        prop_assert_eq!(tokenize(&bracketed).unwrap(), items);
    }

    // Any leading comma is rejected
    #[test]
    fn leading_comma_rejected(items in prop::collection::vec(item_strategy(), 1..5)) {
        let value = format!(",{}", items.join(","));
        prop_assert!(tokenize(&value).is_err());
    }

    // Indexed entries come out in index order whatever order they arrive in
    #[test]
    fn indexed_entries_sorted(indices in prop::collection::hash_set(0usize..1000, 2..10)) {
        let indices: Vec<usize> = indices.into_iter().collect();
        let entries: Vec<ConfigEntrySource> = indices
            .iter()
            .map(|i| {
                ConfigEntrySource::from_variable(&format!("AKKA__LIST__{i}"), format!("v{i}")).unwrap()
            })
            .collect();

        let config = ConfigEntryAggregator::to_config(entries).unwrap();
        let mut expected = indices.clone();
        expected.sort_unstable();
        let expected: Vec<String> = expected.iter().map(|i| format!("v{i}")).collect();

        prop_assert_eq!(config.get_string_list("akka.list").unwrap(), expected);
    }

    // The environment layer always wins over the base layer
    #[test]
    fn higher_layer_wins(high in "[a-z0-9]{1,10}", low in "[a-z0-9]{1,10}") {
        let high_config = Config::from_value(ConfigValue::from(serde_json::json!({"a": {"b": high.clone()}})));
        let low_config = Config::from_value(ConfigValue::from(serde_json::json!({"a": {"b": low, "c": "x"}})));

        let chain = high_config.with_fallback(&low_config);
        prop_assert_eq!(chain.get_string("a.b").unwrap(), high);
        prop_assert_eq!(chain.get_string("a.c").unwrap(), "x");
    }
}
