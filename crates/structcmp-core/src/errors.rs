use thiserror::Error;

/// Result type alias using StructCmpError
pub type Result<T> = std::result::Result<T, StructCmpError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Structural mismatches are never errors; they are returned as
/// [`Difference`](crate::Difference) values. The kinds below cover contract
/// violations and the I/O around the comparator (the CLI reading documents).
/// Each kind maps to a stable error code for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Contract violations
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification used by logging (`err.kind`, `err.code`) plus
/// optional operation and path context for debugging.
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

    /// Add the file or graph path the error relates to
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

/// Error taxonomy for structcmp operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructCmpError {
    /// A required argument was absent or malformed
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// A document could not be read
    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// A document is not valid JSON
    #[error("Invalid JSON in {path}: {message}")]
    Json { path: String, message: String },
}

impl From<StructCmpError> for ExError {
    fn from(err: StructCmpError) -> Self {
        let message = err.to_string();
        match err {
            StructCmpError::InvalidArgument { .. } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(message)
            }
            StructCmpError::Io { path, .. } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(message),
            StructCmpError::Json { path, .. } => ExError::new(ExErrorKind::Serialization)
                .with_path(path)
                .with_message(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ExErrorKind::InvalidInput,
            ExErrorKind::Io,
            ExErrorKind::Serialization,
        ];
        let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_ex_error_display() {
        let err = ExError::new(ExErrorKind::Io)
            .with_op("read_document")
            .with_message("file missing")
            .with_path("a.json");
        assert_eq!(
            err.to_string(),
            "[ERR_IO] in operation 'read_document': file missing (path: a.json)"
        );
    }
}
