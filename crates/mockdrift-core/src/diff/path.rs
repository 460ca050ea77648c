//! Display paths for change nodes.

use crate::diff::model::PathSegment;

/// Render path segments as a dotted path with bracketed indices.
///
/// `["apis", 0, "request", "headers", 2]` renders as
/// `apis[0].request.headers[2]`. An index attaches to the preceding key, and a
/// leading index renders bare (`[3].name`).
pub fn canonicalize(segments: &[PathSegment]) -> String {
    let mut rendered = segments
        .iter()
        .fold(String::new(), |mut acc, segment| {
            match segment {
                PathSegment::Key(key) => {
                    acc.push_str(key);
                    acc.push('.');
                }
                PathSegment::Index(index) => {
                    acc.pop();
                    acc.push_str(&format!("[{}].", index));
                }
            }
            acc
        });
    rendered.pop();
    rendered
}

/// Append a nested display path to a base path.
///
/// Bracketed nested paths attach directly (`body[1]`), others after a dot.
pub fn join(base: &str, nested: &str) -> String {
    if nested.is_empty() {
        base.to_string()
    } else if base.is_empty() {
        nested.to_string()
    } else if nested.starts_with('[') {
        format!("{}{}", base, nested)
    } else {
        format!("{}.{}", base, nested)
    }
}
