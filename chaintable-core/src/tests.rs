//! Integration tests for chaintable-core

use std::collections::HashMap;

/// Operations applied to both the table and a std model
#[derive(Clone, Debug)]
enum Op {
    Set(String, u32),
    Remove(String),
}

fn apply_ops(limit: usize, ops: &[Op]) -> (crate::HashTable<u32>, HashMap<String, u32>) {
    let mut table = crate::HashTable::new(limit).unwrap();
    let mut model = HashMap::new();

    for op in ops {
        match op {
            Op::Set(key, value) => {
                table.set(key.clone(), *value);
                model.insert(key.clone(), *value);
            }
            Op::Remove(key) => {
                table.remove(key);
                model.remove(key);
            }
        }
    }

    (table, model)
}

#[cfg(test)]
mod integration_tests {
    use super::{apply_ops, Op};
    use crate::{HashTable, HasherKind, TableConfig};
    use proptest::prelude::*;

    #[test]
    fn test_phone_book_workflow() {
        let mut ht = HashTable::default();

        ht.set("Jonny", "555-444-78787");
        ht.set("Antonio", "555-344-78789");
        ht.set("Deepak", "533-364-79700");
        ht.set("Sara", "523-564-79900");
        ht.set("Simon", "123-766-89000");

        assert_eq!(ht.len(), 5);
        assert!(ht.has("Simon"));

        ht.remove("Simon");
        assert!(!ht.has("Simon"));
        assert_eq!(ht.get("Deepak"), Some(&"533-364-79700"));

        let occupied = ht.bucket_report().iter().filter(|r| !r.is_empty()).count();
        assert!(occupied >= 1 && occupied <= 4);
    }

    #[test]
    fn test_anagram_keys_collide_but_resolve() {
        let mut ht = HashTable::new(14).unwrap();
        ht.set("cat", "x");
        ht.set("act", "y");

        assert_eq!(ht.hash("cat"), ht.hash("act"));
        assert_eq!(ht.get("cat"), Some(&"x"));
        assert_eq!(ht.get("act"), Some(&"y"));
    }

    #[test]
    fn test_values_contains_exactly_inserted() {
        let mut ht = HashTable::new(14).unwrap();
        ht.set("a", 1);
        ht.set("b", 2);
        ht.set("c", 3);

        let mut values: Vec<_> = ht.values().copied().collect();
        values.sort();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_remove_then_get_other_key() {
        let mut ht = HashTable::new(14).unwrap();
        ht.set("solo", 1);
        ht.remove("solo");

        for key in ["solo", "other", "", "olso"] {
            assert_eq!(ht.get(key), None);
        }
    }

    #[test]
    fn test_config_driven_table() {
        let config: TableConfig =
            serde_json::from_str(r#"{"limit": 3, "hasher": {"kind": "char_code_sum"}}"#).unwrap();
        let mut ht = HashTable::from_config(&config).unwrap();

        for (i, key) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            ht.set(*key, i);
        }

        assert_eq!(ht.limit(), 3);
        assert_eq!(ht.hasher().kind(), HasherKind::CharCodeSum);
        assert_eq!(ht.bucket_lengths().iter().sum::<usize>(), 5);
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let key = "[a-e]{0,3}";
        prop_oneof![
            (key, any::<u32>()).prop_map(|(k, v)| Op::Set(k, v)),
            key.prop_map(Op::Remove),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            .. ProptestConfig::default()
        })]

        #[test]
        fn proptest_set_then_get(key in ".{0,12}", value in any::<i64>(), limit in 1usize..64) {
            let mut ht = HashTable::new(limit).unwrap();
            ht.set(key.clone(), value);
            prop_assert_eq!(ht.get(&key), Some(&value));
            prop_assert!(ht.has(&key));
        }

        #[test]
        fn proptest_overwrite_keeps_one_entry(key in "[a-z]{1,8}", v1 in any::<u8>(), v2 in any::<u8>()) {
            let mut ht = HashTable::new(14).unwrap();
            ht.set(key.clone(), v1);
            ht.set(key.clone(), v2);
            prop_assert_eq!(ht.len(), 1);
            prop_assert_eq!(ht.get(&key), Some(&v2));
            prop_assert_eq!(ht.iter().filter(|(k, _)| *k == key).count(), 1);
        }

        #[test]
        fn proptest_remove_and_clear(keys in proptest::collection::vec("[a-z]{1,6}", 1..40)) {
            let mut ht = HashTable::new(14).unwrap();
            for key in &keys {
                ht.set(key.clone(), ());
            }

            let victim = &keys[0];
            ht.remove(victim);
            prop_assert!(!ht.has(victim));
            prop_assert_eq!(ht.get(victim), None);

            ht.clear();
            for key in &keys {
                prop_assert!(!ht.has(key));
            }
            prop_assert!(ht.is_empty());
        }

        #[test]
        fn proptest_matches_std_hashmap(limit in 1usize..20, ops in proptest::collection::vec(op_strategy(), 0..200)) {
            let (table, model) = apply_ops(limit, &ops);

            prop_assert_eq!(table.len(), model.len());
            for (key, value) in &model {
                prop_assert_eq!(table.get(key), Some(value));
                prop_assert_eq!(table.hash(key), table.bucket_index(key));
            }

            // Every key sits in exactly the bucket its hash points at
            for (index, report) in table.bucket_report().iter().enumerate() {
                if let Some(entries) = report.entries {
                    prop_assert!(!entries.is_empty());
                    for entry in entries {
                        prop_assert_eq!(table.hash(&entry.key), index);
                    }
                }
            }
        }
    }
}
