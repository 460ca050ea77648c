use crate::errors::{DriftError, Result};
use serde_json::{Map, Value};

/// Key of the endpoint list in a fixture document
pub const APIS_KEY: &str = "apis";

/// A fixture document: an `apis` array of request/response records plus any
/// other top-level fields, kept in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    root: Map<String, Value>,
}

impl Dataset {
    /// Validate a parsed document.
    ///
    /// `origin` names the source file in error messages.
    ///
    /// # Errors
    ///
    /// - `MalformedDocument` if the root is not an object or `apis` is not an array
    /// - `MissingField` if `apis` is absent
    pub fn from_value(value: Value, origin: &str) -> Result<Self> {
        let Value::Object(root) = value else {
            return Err(DriftError::MalformedDocument {
                path: origin.to_string(),
                reason: "fixture root must be a JSON object".to_string(),
            });
        };
        match root.get(APIS_KEY) {
            Some(Value::Array(_)) => Ok(Self { root }),
            Some(_) => Err(DriftError::MalformedDocument {
                path: origin.to_string(),
                reason: format!("`{}` must be an array", APIS_KEY),
            }),
            None => Err(DriftError::MissingField {
                path: origin.to_string(),
                field: APIS_KEY.to_string(),
            }),
        }
    }

    /// Parse and validate fixture text.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` with the parser message when the text is not JSON,
    /// plus everything [`Dataset::from_value`] reports.
    pub fn parse(text: &str, origin: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text).map_err(|e| DriftError::MalformedDocument {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;
        Self::from_value(value, origin)
    }

    /// A document holding only the given endpoints
    pub fn from_apis(apis: Vec<Value>) -> Self {
        let mut root = Map::new();
        root.insert(APIS_KEY.to_string(), Value::Array(apis));
        Self { root }
    }

    pub fn apis(&self) -> &[Value] {
        self.root
            .get(APIS_KEY)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Endpoint at `index`, if present
    pub fn api(&self, index: usize) -> Option<&Value> {
        self.apis().get(index)
    }

    /// Replace the endpoint list, keeping the key's position in the document
    pub fn set_apis(&mut self, apis: Vec<Value>) {
        self.root.insert(APIS_KEY.to_string(), Value::Array(apis));
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.root.clone())
    }
}
