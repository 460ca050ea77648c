//! Structural diff of two JSON values.
//!
//! The core entry point is [`diff`], which walks both values in lockstep and
//! returns one [`RawChangeNode`] per difference, in document order:
//!
//! - object keys of the left side first (recursing into shared keys, reporting
//!   missing ones as deleted), then keys that only exist on the right side;
//! - arrays element by element for the shared prefix, then one
//!   [`Change::ArrayChanged`] node per surplus element on either side;
//! - any other mismatch (different scalars or different JSON types) as a
//!   single modification at the current path.

use crate::diff::model::{Change, PathSegment, RawChangeNode};
use serde_json::Value;

/// Compare two JSON values and list their differences.
///
/// Identical inputs produce an empty list.
pub fn diff(lhs: &Value, rhs: &Value) -> Vec<RawChangeNode> {
    let mut changes = Vec::new();
    let mut path = Vec::new();
    walk(lhs, rhs, &mut path, &mut changes);
    changes
}

fn walk(lhs: &Value, rhs: &Value, path: &mut Vec<PathSegment>, out: &mut Vec<RawChangeNode>) {
    match (lhs, rhs) {
        (Value::Object(left), Value::Object(right)) => {
            for (key, left_value) in left {
                path.push(PathSegment::Key(key.clone()));
                match right.get(key) {
                    Some(right_value) => walk(left_value, right_value, path, out),
                    None => out.push(RawChangeNode::new(
                        path.clone(),
                        Change::Deleted {
                            lhs: left_value.clone(),
                        },
                    )),
                }
                path.pop();
            }
            for (key, right_value) in right {
                if !left.contains_key(key) {
                    let mut added_path = path.clone();
                    added_path.push(PathSegment::Key(key.clone()));
                    out.push(RawChangeNode::new(
                        added_path,
                        Change::Added {
                            rhs: right_value.clone(),
                        },
                    ));
                }
            }
        }
        (Value::Array(left), Value::Array(right)) => {
            for (index, left_value) in left.iter().enumerate() {
                match right.get(index) {
                    Some(right_value) => {
                        path.push(PathSegment::Index(index));
                        walk(left_value, right_value, path, out);
                        path.pop();
                    }
                    None => out.push(array_change(
                        path,
                        index,
                        Change::Deleted {
                            lhs: left_value.clone(),
                        },
                    )),
                }
            }
            for (index, right_value) in right.iter().enumerate().skip(left.len()) {
                out.push(array_change(
                    path,
                    index,
                    Change::Added {
                        rhs: right_value.clone(),
                    },
                ));
            }
        }
        _ if lhs != rhs => out.push(RawChangeNode::new(
            path.clone(),
            Change::Modified {
                lhs: lhs.clone(),
                rhs: rhs.clone(),
            },
        )),
        _ => {}
    }
}

fn array_change(path: &[PathSegment], index: usize, item: Change) -> RawChangeNode {
    RawChangeNode::new(
        path.to_vec(),
        Change::ArrayChanged {
            index,
            item: Box::new(RawChangeNode::new(Vec::new(), item)),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::model::ChangeKind;
    use serde_json::json;

    fn seg(key: &str) -> PathSegment {
        PathSegment::from(key)
    }

    #[test]
    fn test_identical_values_have_no_changes() {
        let doc = json!({"apis": [{"request": {"url": "/a"}}], "n": 1});
        assert!(diff(&doc, &doc.clone()).is_empty());
    }

    #[test]
    fn test_scalar_modification_reports_both_sides() {
        let changes = diff(&json!({"a": 1}), &json!({"a": 2}));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind(), ChangeKind::Modified);
        assert_eq!(changes[0].path, vec![seg("a")]);
        assert_eq!(changes[0].lhs(), Some(&json!(1)));
        assert_eq!(changes[0].rhs(), Some(&json!(2)));
    }

    #[test]
    fn test_deleted_keys_precede_added_keys() {
        let changes = diff(&json!({"gone": 1, "kept": 0}), &json!({"kept": 0, "new": 2}));
        let kinds: Vec<_> = changes.iter().map(|c| c.kind()).collect();
        assert_eq!(kinds, vec![ChangeKind::Deleted, ChangeKind::Added]);
        assert_eq!(changes[0].path, vec![seg("gone")]);
        assert_eq!(changes[1].path, vec![seg("new")]);
    }

    #[test]
    fn test_type_change_is_a_modification() {
        let changes = diff(&json!({"a": {"b": 1}}), &json!({"a": [1]}));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].kind(), ChangeKind::Modified);

        let changes = diff(&json!({"a": null}), &json!({"a": {}}));
        assert_eq!(changes[0].kind(), ChangeKind::Modified);
    }

    #[test]
    fn test_shared_array_elements_recurse_with_index() {
        let changes = diff(&json!({"xs": [1, 2]}), &json!({"xs": [1, 3]}));
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].path, vec![seg("xs"), PathSegment::Index(1)]);
    }

    #[test]
    fn test_array_growth_emits_array_change_per_element() {
        let changes = diff(&json!({"xs": [1]}), &json!({"xs": [1, 2, 3]}));
        assert_eq!(changes.len(), 2);
        for (change, expected_index) in changes.iter().zip([1usize, 2]) {
            assert_eq!(change.kind(), ChangeKind::ArrayChanged);
            assert_eq!(change.path, vec![seg("xs")]);
            assert_eq!(change.index(), Some(expected_index));
            let item = change.item().unwrap();
            assert_eq!(item.kind(), ChangeKind::Added);
            assert!(item.path.is_empty());
        }
    }

    #[test]
    fn test_array_shrink_emits_deleted_items() {
        let changes = diff(&json!([1, 2]), &json!([1]));
        assert_eq!(changes.len(), 1);
        assert!(changes[0].path.is_empty());
        assert_eq!(changes[0].index(), Some(1));
        assert_eq!(changes[0].item().unwrap().lhs(), Some(&json!(2)));
    }
}
