//! Property-based tests for configuration merging and validation.

use super::defaults::default_config;
use super::merger::ConfigMerger;
use super::schema::{Configuration, RawConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// Strategy for generating linter settings objects
fn linter_strategy() -> impl Strategy<Value = Value> {
    (any::<bool>(), prop::option::of(0u32..200)).prop_map(|(enabled, line_length)| {
        let mut settings = Map::new();
        settings.insert("enabled".to_string(), Value::Bool(enabled));
        if let Some(len) = line_length {
            settings.insert("lineLength".to_string(), json!(len));
        }
        Value::Object(settings)
    })
}

// Strategy for generating linter tables
fn linters_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(
        prop::sample::select(vec!["black", "flake8", "pylint", "ruff", "eslint", "custom"]),
        linter_strategy(),
        0..4,
    )
    .prop_map(|linters| {
        linters
            .into_iter()
            .map(|(name, settings)| (name.to_string(), settings))
            .collect()
    })
}

// Strategy for generating partial user documents
fn user_strategy() -> impl Strategy<Value = RawConfig> {
    (
        prop::option::of(prop::collection::vec("[a-z]{1,8}/\\*\\*", 0..5)),
        prop::option::of(any::<bool>()),
        prop::collection::btree_map(
            prop::sample::select(vec!["python", "bash", "typescript", "rust", "go"]),
            linters_strategy(),
            0..3,
        ),
    )
        .prop_map(|(ignore, cache, languages)| {
            let mut doc = RawConfig::new();
            if let Some(ignore) = ignore {
                doc.insert("ignore", json!(ignore));
            }
            if let Some(cache) = cache {
                doc.insert("cache", Value::Bool(cache));
            }
            if !languages.is_empty() {
                let languages: Map<String, Value> = languages
                    .into_iter()
                    .map(|(name, linters)| {
                        (name.to_string(), json!({ "enabled": true, "linters": linters }))
                    })
                    .collect();
                doc.insert("languages", Value::Object(languages));
            }
            doc
        })
}

fn defaults() -> RawConfig {
    RawConfig::from(&default_config())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // merge(D, U).ignore == D.ignore ++ U.ignore
    #[test]
    fn ignore_is_concatenation(user in user_strategy()) {
        let merged = Configuration::from_raw(&ConfigMerger::merge(&defaults(), &user));

        let mut expected = default_config().ignore;
        if let Some(Value::Array(extra)) = user.get("ignore") {
            expected.extend(extra.iter().filter_map(|v| v.as_str().map(str::to_string)));
        }
        prop_assert_eq!(merged.ignore, expected);
    }

    // Default linters survive unless overridden; user linters always win
    #[test]
    fn linters_merge_key_by_key(user in user_strategy()) {
        let merged = ConfigMerger::merge(&defaults(), &user);
        let default_doc = defaults();
        let merged_languages = merged.get("languages").unwrap();

        if let Some(Value::Object(user_languages)) = user.get("languages") {
            for (name, user_language) in user_languages {
                let merged_linters = merged_languages[name]["linters"].as_object().unwrap();
                let user_linters = user_language["linters"].as_object().unwrap();

                for (linter, settings) in user_linters {
                    prop_assert_eq!(&merged_linters[linter], settings);
                }

                match default_doc.get("languages").unwrap().get(name) {
                    Some(default_language) => {
                        for (linter, settings) in default_language["linters"].as_object().unwrap() {
                            if !user_linters.contains_key(linter) {
                                prop_assert_eq!(&merged_linters[linter], settings);
                            }
                        }
                    }
                    // user-only languages are taken verbatim
                    None => {
                        prop_assert_eq!(&merged_languages[name], user_language);
                    }
                }
            }
        }
    }

    // Every default language survives the merge
    #[test]
    fn default_languages_survive(user in user_strategy()) {
        let merged = Configuration::from_raw(&ConfigMerger::merge(&defaults(), &user));
        for name in default_config().languages.keys() {
            prop_assert!(merged.languages.contains_key(name));
        }
    }

    // Scalars follow shallow override
    #[test]
    fn cache_override(user in user_strategy()) {
        let merged = Configuration::from_raw(&ConfigMerger::merge(&defaults(), &user));
        let expected = user.get("cache").and_then(Value::as_bool).unwrap_or(true);
        prop_assert_eq!(merged.cache, expected);
    }

    // Well-formed documents only warn about unknown languages
    #[test]
    fn well_formed_documents_only_warn_on_unknown_languages(user in user_strategy()) {
        let merged = ConfigMerger::merge(&defaults(), &user);
        let warnings = ConfigValidator::validate(&merged);

        let unknown = ["rust", "go"]
            .iter()
            .filter(|name| {
                user.get("languages")
                    .and_then(|languages| languages.get(**name))
                    .is_some()
            })
            .count();
        prop_assert_eq!(warnings.len(), unknown);
    }

    // Validation never panics on arbitrary shapes and reports cache type errors
    #[test]
    fn validator_total_over_scalars(cache in prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
        Just(Value::Null),
    ]) {
        let mut doc = RawConfig::new();
        doc.insert("cache", cache.clone());
        let warnings = ConfigValidator::validate(&doc);
        prop_assert_eq!(warnings.len(), usize::from(!cache.is_boolean()));
    }
}
