use thiserror::Error;

/// Result type alias using DriftError
pub type Result<T> = std::result::Result<T, DriftError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Configuration
    InvalidConfig,
    NotFound,

    // Fixture documents
    /// Fixture text is not valid JSON
    MalformedDocument,
    /// A fixture document lacks a required field (e.g. `apis`)
    MissingField,

    // Operator interaction
    /// The operator input stream closed before a valid answer was read
    PromptClosed,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::MalformedDocument => "ERR_MALFORMED_DOCUMENT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::PromptClosed => "ERR_PROMPT_CLOSED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and the
/// offending fixture path for operator-facing messages.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the file or directory path the error refers to
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for mockdrift operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DriftError {
    // ===== Configuration Errors =====
    /// A source directory is missing or cannot be listed
    #[error("One of the provided paths is invalid, please check its existence. path: {path}")]
    DirectoryUnreadable { path: String, reason: String },

    /// Configuration file or environment could not be loaded
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ===== Document Errors =====
    /// Fixture text is not valid JSON
    #[error("{reason} in {path}")]
    MalformedDocument { path: String, reason: String },

    /// Fixture document has no `apis` array
    #[error("Missing field `{field}` in {path}")]
    MissingField { path: String, field: String },

    // ===== IO Errors =====
    /// Reading a fixture file failed
    #[error("Failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    /// Writing a fixture file failed
    #[error("Failed to write {path}: {reason}")]
    WriteFailed { path: String, reason: String },

    // ===== Operator Errors =====
    /// The operator input stream ended
    #[error("Operator input closed before an answer was given")]
    PromptClosed,

    /// Reading operator input failed
    #[error("Failed to read operator input: {reason}")]
    PromptFailed { reason: String },

    // ===== Serialization Errors =====
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<DriftError> for ExError {
    fn from(err: DriftError) -> Self {
        let message = err.to_string();
        match err {
            DriftError::DirectoryUnreadable { path, .. } => ExError::new(ExErrorKind::NotFound)
                .with_op("list_fixtures")
                .with_path(path)
                .with_message(message),
            DriftError::InvalidConfig { .. } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_message(message),
            DriftError::MalformedDocument { path, .. } => {
                ExError::new(ExErrorKind::MalformedDocument)
                    .with_op("load_dataset")
                    .with_path(path)
                    .with_message(message)
            }
            DriftError::MissingField { path, .. } => ExError::new(ExErrorKind::MissingField)
                .with_op("load_dataset")
                .with_path(path)
                .with_message(message),
            DriftError::ReadFailed { path, .. } => ExError::new(ExErrorKind::Io)
                .with_op("read_fixture")
                .with_path(path)
                .with_message(message),
            DriftError::WriteFailed { path, .. } => ExError::new(ExErrorKind::Persistence)
                .with_op("write_fixture")
                .with_path(path)
                .with_message(message),
            DriftError::PromptClosed | DriftError::PromptFailed { .. } => {
                ExError::new(ExErrorKind::PromptClosed)
                    .with_op("prompt")
                    .with_message(message)
            }
            DriftError::Serialization { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("serialize")
                .with_message(message),
        }
    }
}

impl From<serde_json::Error> for DriftError {
    fn from(err: serde_json::Error) -> Self {
        DriftError::Serialization {
            message: err.to_string(),
        }
    }
}
