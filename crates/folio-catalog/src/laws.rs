//! Property tests over generated registries.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::entry::{Category, ContentEntry};
use crate::error::CatalogError;
use crate::landing::landing_path;
use crate::registry::Registry;
use crate::rewrite::{DEFAULT_CONTENT_EXTENSION, rewrite_rules, source_key};
use crate::sidebar::sidebar_groups;

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Note), Just(Category::Article)]
}

fn arb_entry() -> impl Strategy<Value = ContentEntry> {
    (
        "[a-e]{1,3}",
        arb_category(),
        any::<bool>(),
        proptest::option::of("[a-z]{1,4}"),
    )
        .prop_map(|(text, category, landing, slug)| ContentEntry {
            display_text: text,
            category,
            landing,
            canonical_slug: slug,
        })
}

fn arb_registry() -> impl Strategy<Value = Registry> {
    proptest::collection::vec(arb_entry(), 0..24)
        .prop_map(|entries| Registry::new(entries).expect("generated entries are valid"))
}

proptest! {
    #[test]
    fn test_every_entry_in_exactly_one_matching_group(registry in arb_registry()) {
        let groups = sidebar_groups(&registry);

        let total: usize = groups.values().map(Vec::len).sum();
        prop_assert_eq!(total, registry.len());
        for category in Category::ALL {
            let group = &groups[&category.root_path()];
            prop_assert_eq!(group.len(), registry.in_category(category).count());
            let prefix = category.root_path();
            prop_assert!(group.iter().all(|item| item.link.starts_with(&prefix)));
        }
    }

    #[test]
    fn test_group_order_equals_registry_order(registry in arb_registry()) {
        let groups = sidebar_groups(&registry);

        for category in Category::ALL {
            let expected: Vec<(String, String)> = registry
                .in_category(category)
                .map(|e| (e.display_text.clone(), e.link()))
                .collect();
            let actual: Vec<(String, String)> = groups[&category.root_path()]
                .iter()
                .map(|item| (item.label.clone(), item.link.clone()))
                .collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_landing_resolution_is_deterministic(registry in arb_registry()) {
        for category in Category::ALL {
            let first = landing_path(&registry, category);
            let second = landing_path(&registry, category);
            prop_assert!(first.starts_with(&category.root_path()));
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn test_rewrite_keys_unique_or_rejected(registry in arb_registry()) {
        let slugged: Vec<&ContentEntry> = registry
            .entries()
            .iter()
            .filter(|e| e.canonical_slug.is_some())
            .collect();
        let distinct: HashSet<String> = slugged
            .iter()
            .map(|e| source_key(e, DEFAULT_CONTENT_EXTENSION))
            .collect();

        match rewrite_rules(&registry, DEFAULT_CONTENT_EXTENSION) {
            Ok(rules) => {
                // One rule per slugged entry: nothing was overwritten
                prop_assert_eq!(rules.len(), slugged.len());
                prop_assert_eq!(distinct.len(), slugged.len());
            }
            Err(CatalogError::RewriteCollision { key, .. }) => {
                prop_assert!(distinct.len() < slugged.len());
                prop_assert!(distinct.contains(&key));
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn test_entry_without_slug_has_no_rule(registry in arb_registry()) {
        let Ok(rules) = rewrite_rules(&registry, DEFAULT_CONTENT_EXTENSION) else {
            return Ok(());
        };
        let slugged_keys: HashSet<String> = registry
            .entries()
            .iter()
            .filter(|e| e.canonical_slug.is_some())
            .map(|e| source_key(e, DEFAULT_CONTENT_EXTENSION))
            .collect();

        for entry in registry.entries().iter().filter(|e| e.canonical_slug.is_none()) {
            prop_assert_eq!(
                entry.link(),
                format!("/{}/{}", entry.category, entry.display_text)
            );
            let key = source_key(entry, DEFAULT_CONTENT_EXTENSION);
            // A slugged entry with the same title may own the key
            prop_assert_eq!(rules.contains_key(&key), slugged_keys.contains(&key));
        }
    }
}
