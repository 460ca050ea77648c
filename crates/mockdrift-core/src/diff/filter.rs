//! Volatile-field exclusion.

use crate::diff::model::RawChangeNode;

/// Field names whose changes are never offered for review.
///
/// Session identifiers, timestamps, caching headers, browser hint headers and
/// the product tab header change on every capture.
pub const DEFAULT_IGNORED_FIELDS: &[&str] = &[
    "testRunId",
    "userAgent",
    "user-agent",
    "cookie",
    "set-cookie",
    "session",
    "date",
    "timestamp",
    "etag",
    "content-security-policy",
    "content-length",
    "sec-ch-ua",
    "sec-ch-ua-mobile",
    "sec-ch-ua-platform",
    "fansight-tab",
];

/// Drops change nodes that touch an ignorable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionFilter {
    fields: Vec<String>,
}

impl Default for ExceptionFilter {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_FIELDS.iter().copied())
    }
}

impl ExceptionFilter {
    /// Build a filter from an explicit list of field names
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::empty().with_fields(fields)
    }

    /// A filter that ignores nothing
    pub fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add field names, keeping first-seen order and skipping duplicates
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for field in fields {
            let field = field.into();
            if !self.fields.contains(&field) {
                self.fields.push(field);
            }
        }
        self
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// True if any key segment of the node's path is an ignorable field
    pub fn is_ignored(&self, node: &RawChangeNode) -> bool {
        node.path
            .iter()
            .filter_map(|segment| segment.as_key())
            .any(|key| self.fields.iter().any(|field| field == key))
    }

    /// Keep only the nodes that are not ignorable
    pub fn retain(&self, nodes: Vec<RawChangeNode>) -> Vec<RawChangeNode> {
        nodes.into_iter().filter(|n| !self.is_ignored(n)).collect()
    }
}
