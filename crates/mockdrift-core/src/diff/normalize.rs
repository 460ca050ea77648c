//! Raw change nodes → endpoint-attributed entries.

use crate::diff::model::{
    DiffAction, NormalizedDiffEntry, PathSegment, RawChangeNode, WHOLE_ENDPOINT_PATH,
};
use crate::diff::path::canonicalize;

/// A normalized entry together with the endpoint it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedEntry {
    /// Index into the `apis` arrays
    pub endpoint: usize,
    pub entry: NormalizedDiffEntry,
    /// Path below `apis[endpoint]`, including the element index of an array change
    pub segments: Vec<PathSegment>,
}

/// Attribute a raw change node to an endpoint.
///
/// Returns `None` for changes outside `apis[i]` (other top-level fields),
/// which have no endpoint to review them under.
pub fn normalize(node: &RawChangeNode) -> Option<LocatedEntry> {
    match node.path.as_slice() {
        // Whole endpoint present on one side only
        [PathSegment::Key(root)] if root == WHOLE_ENDPOINT_PATH => {
            let index = node.index()?;
            let item = node.item()?;
            Some(LocatedEntry {
                endpoint: index,
                entry: NormalizedDiffEntry {
                    action: item.kind().into(),
                    path: WHOLE_ENDPOINT_PATH.to_string(),
                    mock_value: item.lhs().cloned(),
                    real_value: item.rhs().cloned(),
                },
                segments: Vec::new(),
            })
        }
        [PathSegment::Key(root), PathSegment::Index(endpoint), rest @ ..]
            if root == WHOLE_ENDPOINT_PATH =>
        {
            let mut segments = rest.to_vec();
            // Array changes carry their values on the nested item
            let source = match (node.index(), node.item()) {
                (Some(index), Some(item)) => {
                    segments.push(PathSegment::Index(index));
                    item
                }
                _ => node,
            };
            Some(LocatedEntry {
                endpoint: *endpoint,
                entry: NormalizedDiffEntry {
                    action: DiffAction::from(node.kind()),
                    path: canonicalize(&segments),
                    mock_value: source.lhs().cloned(),
                    real_value: source.rhs().cloned(),
                },
                segments,
            })
        }
        _ => None,
    }
}
