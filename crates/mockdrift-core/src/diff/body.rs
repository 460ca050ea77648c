//! Payload body expansion.
//!
//! Bodies are stored as JSON text inside the fixture, so a changed body shows
//! up as one opaque string change. For the detailed review the two bodies are
//! parsed and diffed again, and the nested result is flattened into rows.

use crate::diff::model::{
    Change, DiffAction, DisplayRow, EndpointDiffRecord, NormalizedDiffEntry, RawChangeNode,
};
use crate::diff::path::{canonicalize, join};
use crate::diff::structural::diff;
use serde_json::Value;

/// Cell text for a side that has no value
pub const PLACEHOLDER: &str = "N/A";

/// A nested body change, with array changes owning their element changes.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyChange {
    Leaf {
        action: DiffAction,
        path: String,
        mock: Option<Value>,
        real: Option<Value>,
    },
    Array {
        path: String,
        items: Vec<BodyChange>,
    },
}

impl BodyChange {
    fn from_node(node: &RawChangeNode) -> Self {
        let path = canonicalize(&node.path);
        match &node.change {
            Change::ArrayChanged { index, item } => {
                let element_path = join(&path, &format!("[{}]", index));
                let items = match BodyChange::from_node(item) {
                    BodyChange::Leaf {
                        action,
                        path: nested,
                        mock,
                        real,
                    } => vec![BodyChange::Leaf {
                        action,
                        path: join(&element_path, &nested),
                        mock,
                        real,
                    }],
                    BodyChange::Array { items, .. } => items,
                };
                BodyChange::Array { path, items }
            }
            _ => BodyChange::Leaf {
                action: node.kind().into(),
                path,
                mock: node.lhs().cloned(),
                real: node.rhs().cloned(),
            },
        }
    }

    fn flatten_into(self, base: &str, rows: &mut Vec<DisplayRow>) {
        match self {
            BodyChange::Leaf {
                action,
                path,
                mock,
                real,
            } => rows.push(DisplayRow {
                action,
                path: join(base, &path),
                mock: render_cell(mock.as_ref()),
                real: render_cell(real.as_ref()),
            }),
            BodyChange::Array { items, .. } => {
                for item in items {
                    item.flatten_into(base, rows);
                }
            }
        }
    }
}

/// Expand one body entry into display rows.
///
/// Added and Deleted bodies produce a single placeholder row. Array element
/// changes and one-sided values pass through as one row. Anything else is
/// diffed structurally; a body that is not valid JSON on either side
/// falls back to one row showing both raw values.
pub fn expand_entry(entry: &NormalizedDiffEntry) -> Vec<DisplayRow> {
    if matches!(entry.action, DiffAction::Added | DiffAction::Deleted) {
        return vec![DisplayRow {
            action: entry.action,
            path: entry.path.clone(),
            mock: PLACEHOLDER.to_string(),
            real: PLACEHOLDER.to_string(),
        }];
    }

    // Element changes inside a structured body array are already leaves
    if entry.action == DiffAction::ArrayChanged
        || entry.mock_value.is_none()
        || entry.real_value.is_none()
    {
        return vec![entry_row(entry, entry.action)];
    }

    let (Some(mock), Some(real)) = (
        parse_body(entry.mock_value.as_ref()),
        parse_body(entry.real_value.as_ref()),
    ) else {
        tracing::warn!(path = %entry.path, "body is not JSON, showing raw values");
        return vec![entry_row(entry, DiffAction::Modified)];
    };

    let mut rows = Vec::new();
    for node in diff(&mock, &real) {
        BodyChange::from_node(&node).flatten_into(&entry.path, &mut rows);
    }
    rows
}

/// Rows for the detailed review of one endpoint.
///
/// Body entries are expanded, every other entry becomes one row.
pub fn detail_rows(record: &EndpointDiffRecord) -> Vec<DisplayRow> {
    record
        .diffs
        .iter()
        .flat_map(|entry| {
            if entry.touches_body() {
                expand_entry(entry)
            } else {
                vec![entry_row(entry, entry.action)]
            }
        })
        .collect()
}

fn entry_row(entry: &NormalizedDiffEntry, action: DiffAction) -> DisplayRow {
    DisplayRow {
        action,
        path: entry.path.clone(),
        mock: render_cell(entry.mock_value.as_ref()),
        real: render_cell(entry.real_value.as_ref()),
    }
}

/// String bodies hold JSON text; structured bodies are used as they are.
fn parse_body(value: Option<&Value>) -> Option<Value> {
    match value? {
        Value::String(text) => serde_json::from_str(text).ok(),
        other => Some(other.clone()),
    }
}

/// Compact JSON for a cell
pub fn render_cell(value: Option<&Value>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), Value::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::filter::ExceptionFilter;
    use crate::diff::group::compare;
    use crate::diff::model::ApiIdentity;
    use crate::model::Dataset;
    use serde_json::json;

    fn body_entry(action: DiffAction, mock: Option<Value>, real: Option<Value>) -> NormalizedDiffEntry {
        NormalizedDiffEntry {
            action,
            path: "response.body".to_string(),
            mock_value: mock,
            real_value: real,
        }
    }

    #[test]
    fn test_modified_body_is_diffed_field_by_field() {
        let entry = body_entry(
            DiffAction::Modified,
            Some(json!(r#"{"a":1}"#)),
            Some(json!(r#"{"a":2,"b":3}"#)),
        );
        let rows = expand_entry(&entry);

        assert_eq!(
            rows,
            vec![
                DisplayRow {
                    action: DiffAction::Modified,
                    path: "response.body.a".to_string(),
                    mock: "1".to_string(),
                    real: "2".to_string(),
                },
                DisplayRow {
                    action: DiffAction::Added,
                    path: "response.body.b".to_string(),
                    mock: "N/A".to_string(),
                    real: "3".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_added_body_is_a_single_placeholder_row() {
        let entry = body_entry(DiffAction::Added, None, Some(json!(r#"{"a":1}"#)));
        let rows = expand_entry(&entry);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].action, DiffAction::Added);
        assert_eq!(rows[0].mock, PLACEHOLDER);
        assert_eq!(rows[0].real, PLACEHOLDER);
    }

    #[test]
    fn test_array_items_are_flattened_under_their_index() {
        let entry = body_entry(
            DiffAction::Modified,
            Some(json!(r#"{"items":[1]}"#)),
            Some(json!(r#"{"items":[1,2,3]}"#)),
        );
        let rows = expand_entry(&entry);

        let paths: Vec<_> = rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["response.body.items[1]", "response.body.items[2]"]);
        assert!(rows.iter().all(|r| r.action == DiffAction::Added));
        assert_eq!(rows[1].real, "3");
    }

    #[test]
    fn test_structured_body_array_growth_keeps_array_action() {
        // Scenario: body stored as a JSON array rather than text, real side has one more element
        // When: detail rows are built for the endpoint
        // Then: one ArrayChanged row for the new element, no fallback relabelling
        let mock = Dataset::from_apis(vec![json!({"response": {"body": [1]}})]);
        let real = Dataset::from_apis(vec![json!({"response": {"body": [1, 2]}})]);
        let records = compare(&mock, &real, &ExceptionFilter::default());

        let rows = detail_rows(&records[0]);

        assert_eq!(
            rows,
            vec![DisplayRow {
                action: DiffAction::ArrayChanged,
                path: "response.body[1]".to_string(),
                mock: "N/A".to_string(),
                real: "2".to_string(),
            }]
        );
    }

    #[test]
    fn test_non_json_body_falls_back_to_raw_row() {
        let entry = body_entry(
            DiffAction::Modified,
            Some(json!("<html>old</html>")),
            Some(json!("<html>new</html>")),
        );
        let rows = expand_entry(&entry);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].path, "response.body");
        assert_eq!(rows[0].mock, r#""<html>old</html>""#);
    }

    #[test]
    fn test_detail_rows_mix_plain_and_body_entries() {
        let mut record = EndpointDiffRecord::new(0, ApiIdentity::default());
        record.diffs.push(NormalizedDiffEntry {
            action: DiffAction::Modified,
            path: "response.status".to_string(),
            mock_value: Some(json!(200)),
            real_value: Some(json!(500)),
        });
        record.diffs.push(body_entry(
            DiffAction::Modified,
            Some(json!(r#"{"ok":true}"#)),
            Some(json!(r#"{"ok":false}"#)),
        ));

        let rows = detail_rows(&record);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].path, "response.status");
        assert_eq!(rows[1].path, "response.body.ok");
        assert_eq!(rows[1].real, "false");
    }
}
