//! Property-based tests for the configuration tree.
//!
//! Test coverage:
//! - set then get returns the written value for any valid path
//! - unset removes exactly the written key
//! - has agrees with get for non-null values
//! - dotted and segment path forms address the same node
//! - merging preserves keys the source does not mention

use proptest::prelude::*;
use serde_json::{Map, Value};

use treeconf_config::{KeyPath, SourceTree, merge_into};

/// Path segments without the separator.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn path_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..5)
}

/// Non-null leaf values.
fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,16}".prop_map(Value::from),
    ]
}

fn key_path(segments: &[String]) -> KeyPath {
    KeyPath::from_segments(segments.iter().cloned()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_set_then_get(segments in path_strategy(), value in leaf_strategy()) {
        let mut tree = SourceTree::new();
        let path = key_path(&segments);

        let written = tree.write(&path, value.clone()).unwrap();

        prop_assert_eq!(written, value.clone());
        prop_assert_eq!(tree.resolve(&path), Some(&value));
        prop_assert!(tree.contains(&path));
    }

    #[test]
    fn prop_unset_removes_written_key(segments in path_strategy(), value in leaf_strategy()) {
        let mut tree = SourceTree::new();
        let path = key_path(&segments);

        tree.write(&path, value).unwrap();
        prop_assert!(tree.remove(&path));
        prop_assert!(!tree.contains(&path));
        prop_assert!(!tree.remove(&path));
    }

    #[test]
    fn prop_dotted_and_segment_forms_agree(segments in path_strategy(), value in leaf_strategy()) {
        let mut tree = SourceTree::new();
        let dotted = KeyPath::parse(&segments.join(".")).unwrap();

        tree.write(&key_path(&segments), value.clone()).unwrap();

        prop_assert_eq!(&dotted, &key_path(&segments));
        prop_assert_eq!(tree.resolve(&dotted), Some(&value));
    }

    #[test]
    fn prop_merge_preserves_unmentioned_keys(
        kept in segment_strategy(),
        merged in segment_strategy(),
        a in leaf_strategy(),
        b in leaf_strategy(),
    ) {
        prop_assume!(kept != merged);

        let mut kept_section = Map::new();
        kept_section.insert(kept.clone(), a.clone());
        let mut merged_section = Map::new();
        merged_section.insert(merged.clone(), b.clone());

        let mut target = Map::new();
        target.insert("root".to_string(), Value::Object(kept_section));
        let mut source = Map::new();
        source.insert("root".to_string(), Value::Object(merged_section));
        merge_into(&mut target, source);

        prop_assert_eq!(&target["root"][&kept], &a);
        prop_assert_eq!(&target["root"][&merged], &b);
    }

    #[test]
    fn prop_merge_overrides_leaves(key in segment_strategy(), a in leaf_strategy(), b in leaf_strategy()) {
        let mut base = Map::new();
        base.insert(key.clone(), a);
        let mut tree = SourceTree::from(base);

        let mut overlay = Map::new();
        overlay.insert(key.clone(), b.clone());
        tree.merge(overlay);

        prop_assert_eq!(tree.resolve(&KeyPath::parse(&key).unwrap()), Some(&b));
        prop_assert_eq!(tree.len(), 1);
    }
}
