//! Immutable deep update.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::Record;

/// Returns a copy of `record` with `value` stored at `path`.
///
/// The original is left untouched. Only the records along `path` are rebuilt
/// (shallow copies with one key replaced); every sibling subtree is shared
/// with the original by reference. An empty path returns `value` itself.
///
/// An ancestor that is missing or scalar is replaced by a record holding only
/// the path's next key, so the update is total over any path.
pub fn set_path<K>(record: &Record<K>, path: &[K], value: Record<K>) -> Record<K>
where
    K: Ord + Clone,
{
    // Root-to-leaf: collect the ancestor chain.
    let mut ancestors: Vec<Option<&BTreeMap<K, Record<K>>>> = Vec::with_capacity(path.len());
    let mut current = Some(record);
    for key in path {
        let fields = current.and_then(Record::fields);
        ancestors.push(fields);
        current = fields.and_then(|fields| fields.get(key));
    }

    // Leaf-to-root: patch one key per level.
    let mut rebuilt = value;
    for (key, parent) in path.iter().zip(ancestors).rev() {
        let mut copy = parent.cloned().unwrap_or_default();
        copy.insert(key.clone(), rebuilt);
        rebuilt = Record::Fields(Arc::new(copy));
    }

    rebuilt
}

#[cfg(test)]
mod tests {
    use super::*;

    type Node = Record<&'static str>;

    fn child<'a>(record: &'a Node, key: &'static str) -> &'a Arc<BTreeMap<&'static str, Node>> {
        match record.get(&key) {
            Some(Record::Fields(fields)) => fields,
            other => panic!("expected fields under {key}, got {other:?}"),
        }
    }

    fn sample() -> Node {
        Record::from_fields([
            ("total", Record::scalar(0.0)),
            (
                "a",
                Record::from_fields([
                    ("b", Record::scalar(1.0)),
                    ("c", Record::from_fields([("d", Record::scalar(2.0))])),
                ]),
            ),
            ("e", Record::from_fields([("f", Record::scalar(3.0))])),
        ])
    }

    #[test]
    fn sets_value_at_nested_path() {
        let original = sample();
        let updated = set_path(&original, &["a", "b"], Record::scalar(9.0));

        assert_eq!(updated.scalar_at(&["a", "b"]), Some(9.0));
        assert_eq!(updated.scalar_at(&["a", "c", "d"]), Some(2.0));
        assert_eq!(updated.scalar_at(&["e", "f"]), Some(3.0));
        assert_eq!(updated.scalar_at(&["total"]), Some(0.0));
    }

    #[test]
    fn leaves_original_untouched() {
        let original = sample();
        let snapshot = original.clone();

        let _ = set_path(&original, &["a", "b"], Record::scalar(9.0));

        assert_eq!(original, snapshot);
        assert_eq!(original.scalar_at(&["a", "b"]), Some(1.0));
    }

    #[test]
    fn shares_sibling_subtrees_by_reference() {
        let original = sample();
        let updated = set_path(&original, &["a", "b"], Record::scalar(9.0));

        // Siblings of the path at every level are the same allocation.
        assert!(Arc::ptr_eq(child(&original, "e"), child(&updated, "e")));
        assert!(Arc::ptr_eq(
            child(child_record(&original, "a"), "c"),
            child(child_record(&updated, "a"), "c"),
        ));

        // Ancestors on the path are fresh copies.
        assert!(!Arc::ptr_eq(child(&original, "a"), child(&updated, "a")));
    }

    fn child_record<'a>(record: &'a Node, key: &'static str) -> &'a Node {
        record.get(&key).expect("child present")
    }

    #[test]
    fn empty_path_returns_value() {
        let original = sample();
        let value = Record::from_fields([("x", Record::scalar(5.0))]);

        assert_eq!(set_path(&original, &[], value.clone()), value);
    }

    #[test]
    fn missing_or_scalar_ancestors_become_records() {
        let original = sample();

        let through_missing = set_path(&original, &["new", "leaf"], Record::scalar(4.0));
        assert_eq!(through_missing.scalar_at(&["new", "leaf"]), Some(4.0));

        let through_scalar = set_path(&original, &["total", "leaf"], Record::scalar(4.0));
        assert_eq!(through_scalar.scalar_at(&["total", "leaf"]), Some(4.0));
        assert_eq!(through_scalar.scalar_at(&["a", "b"]), Some(1.0));
    }
}
