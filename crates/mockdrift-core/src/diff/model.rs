//! Fixture diff types.
//!
//! Raw change nodes come out of the structural engine; normalized entries and
//! endpoint records are what the reconciliation loop works with.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One step of a path into a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Object key
    Key(String),
    /// Array index
    Index(usize),
}

impl PathSegment {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(key) => Some(key),
            PathSegment::Index(_) => None,
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Kind of a raw change node, as emitted by the structural engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Modified,
    Added,
    Deleted,
    ArrayChanged,
}

/// Payload of a raw change node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Change {
    Modified { lhs: Value, rhs: Value },
    Added { rhs: Value },
    Deleted { lhs: Value },
    /// An array grew or shrank. `path` of the owning node addresses the
    /// array itself; `item` describes the element at `index` and has an
    /// empty path.
    ArrayChanged {
        index: usize,
        item: Box<RawChangeNode>,
    },
}

/// A single difference between two JSON documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawChangeNode {
    pub path: Vec<PathSegment>,
    pub change: Change,
}

impl RawChangeNode {
    pub fn new(path: Vec<PathSegment>, change: Change) -> Self {
        Self { path, change }
    }

    pub fn kind(&self) -> ChangeKind {
        match self.change {
            Change::Modified { .. } => ChangeKind::Modified,
            Change::Added { .. } => ChangeKind::Added,
            Change::Deleted { .. } => ChangeKind::Deleted,
            Change::ArrayChanged { .. } => ChangeKind::ArrayChanged,
        }
    }

    /// Left-hand (mock) value, if this node carries one directly
    pub fn lhs(&self) -> Option<&Value> {
        match &self.change {
            Change::Modified { lhs, .. } | Change::Deleted { lhs } => Some(lhs),
            _ => None,
        }
    }

    /// Right-hand (real) value, if this node carries one directly
    pub fn rhs(&self) -> Option<&Value> {
        match &self.change {
            Change::Modified { rhs, .. } | Change::Added { rhs } => Some(rhs),
            _ => None,
        }
    }

    /// Element index for array changes
    pub fn index(&self) -> Option<usize> {
        match &self.change {
            Change::ArrayChanged { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// Nested element change for array changes
    pub fn item(&self) -> Option<&RawChangeNode> {
        match &self.change {
            Change::ArrayChanged { item, .. } => Some(item),
            _ => None,
        }
    }
}

/// Operator-facing action of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiffAction {
    Modified,
    Added,
    Deleted,
    ArrayChanged,
}

impl DiffAction {
    /// Label shown in review tables
    pub fn label(&self) -> &'static str {
        match self {
            DiffAction::Modified => "Property was modified",
            DiffAction::Added => "Property was newly added",
            DiffAction::Deleted => "Property was deleted",
            DiffAction::ArrayChanged => "Changes within an array",
        }
    }
}

impl From<ChangeKind> for DiffAction {
    fn from(kind: ChangeKind) -> Self {
        match kind {
            ChangeKind::Modified => DiffAction::Modified,
            ChangeKind::Added => DiffAction::Added,
            ChangeKind::Deleted => DiffAction::Deleted,
            ChangeKind::ArrayChanged => DiffAction::ArrayChanged,
        }
    }
}

impl fmt::Display for DiffAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display path used for a change that adds or removes a whole endpoint
pub const WHOLE_ENDPOINT_PATH: &str = "apis";

/// A change attributed to one endpoint, with a canonical display path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDiffEntry {
    pub action: DiffAction,
    pub path: String,
    pub mock_value: Option<Value>,
    pub real_value: Option<Value>,
}

impl NormalizedDiffEntry {
    /// True when the path points into a request or response body
    pub fn touches_body(&self) -> bool {
        self.path.contains(".body")
    }

    /// True when the entry adds or removes the endpoint itself
    pub fn is_whole_endpoint(&self) -> bool {
        self.path == WHOLE_ENDPOINT_PATH
    }
}

/// Identity of an endpoint as shown to the operator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiIdentity {
    pub url: String,
    pub method: String,
}

impl ApiIdentity {
    /// Read `request.url` and `request.method` from an API record
    ///
    /// Missing fields become empty strings; non-string values are rendered as JSON.
    pub fn of(api: &Value) -> Self {
        let field = |name: &str| match api.get("request").and_then(|r| r.get(name)) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Self {
            url: field("url"),
            method: field("method"),
        }
    }
}

/// All changes for one position of the `apis` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointDiffRecord {
    /// Position in both `mock.apis` and `real.apis`
    pub index: usize,
    pub api: ApiIdentity,
    pub diffs: Vec<NormalizedDiffEntry>,
    pub request_paths: Vec<String>,
    pub response_paths: Vec<String>,
}

impl EndpointDiffRecord {
    pub fn new(index: usize, api: ApiIdentity) -> Self {
        Self {
            index,
            api,
            diffs: Vec::new(),
            request_paths: Vec::new(),
            response_paths: Vec::new(),
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.diffs.is_empty()
    }

    /// `Added`/`Deleted` when this record represents a whole endpoint
    /// appearing or disappearing
    pub fn whole_endpoint_change(&self) -> Option<DiffAction> {
        self.diffs
            .first()
            .filter(|entry| entry.is_whole_endpoint())
            .map(|entry| entry.action)
    }
}

/// One row of the detailed review table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub action: DiffAction,
    pub path: String,
    pub mock: String,
    pub real: String,
}
