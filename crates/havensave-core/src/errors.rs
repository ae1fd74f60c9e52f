use thiserror::Error;

/// Result type alias using HavenError
pub type Result<T> = std::result::Result<T, HavenError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// raised by the analysis and backup facilities. Each kind maps to a stable
/// error code that can be used for programmatic handling, tests and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Analysis inputs
    /// A required input tree was not supplied
    ParseUnavailable,
    /// A document could not be parsed into an attributed tree
    InvalidDocument,
    /// A reference catalog definition is malformed
    InvalidCatalog,

    // Filesystem preconditions
    /// The directory to back up does not exist
    SourceMissing,
    /// The archive to restore does not exist
    ArchiveMissing,
    NotFound,

    // Mid-operation I/O
    /// Writing or finalizing a backup archive failed
    ArchiveWrite,
    /// Reading or extracting a backup archive failed
    Extract,
    /// Removing a single archive during pruning failed
    Delete,

    // Configuration
    InvalidConfig,
    InvalidInput,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::ParseUnavailable => "ERR_PARSE_UNAVAILABLE",
            ExErrorKind::InvalidDocument => "ERR_INVALID_DOCUMENT",
            ExErrorKind::InvalidCatalog => "ERR_INVALID_CATALOG",
            ExErrorKind::SourceMissing => "ERR_SOURCE_MISSING",
            ExErrorKind::ArchiveMissing => "ERR_ARCHIVE_MISSING",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ArchiveWrite => "ERR_ARCHIVE_WRITE",
            ExErrorKind::Extract => "ERR_EXTRACT",
            ExErrorKind::Delete => "ERR_DELETE",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether the failure happened part-way through an I/O operation
    /// (as opposed to a precondition that failed before anything was touched)
    pub fn is_mid_operation(&self) -> bool {
        matches!(
            self,
            ExErrorKind::ArchiveWrite | ExErrorKind::Extract | ExErrorKind::Delete | ExErrorKind::Io
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus the operation
/// and filesystem path involved, so callers can report failures without
/// parsing message strings.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add filesystem path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for analysis and configuration operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HavenError {
    // ===== Analysis Errors =====
    /// A comparison input was not supplied
    #[error("Input tree unavailable: {side}")]
    ParseUnavailable { side: String },

    /// The document is not well-formed
    #[error("Failed to parse document {source_id}: {message}")]
    DocumentParse { source_id: String, message: String },

    /// A catalog definition could not be used
    #[error("Invalid reference catalog: {reason}")]
    InvalidCatalog { reason: String },

    // ===== Filesystem Errors =====
    /// Directory to archive does not exist
    #[error("Source directory does not exist: {path}")]
    SourceMissing { path: String },

    /// Archive to restore does not exist
    #[error("Archive does not exist: {path}")]
    ArchiveMissing { path: String },

    /// Archive creation failed mid-write
    #[error("Failed to write archive {path}: {message}")]
    ArchiveWrite { path: String, message: String },

    /// Archive could not be read or extracted
    #[error("Failed to extract archive {path}: {message}")]
    Extract { path: String, message: String },

    /// A single archive could not be removed
    #[error("Failed to delete {path}: {message}")]
    Delete { path: String, message: String },

    // ===== Configuration Errors =====
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ===== Generic Errors =====
    #[error("I/O error during {op}: {message}")]
    Io { op: String, message: String },

    /// Serialization error (JSON/TOML encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl HavenError {
    /// Build an `Io` variant from a std I/O error
    pub fn io(op: &str, err: std::io::Error) -> Self {
        HavenError::Io {
            op: op.to_string(),
            message: err.to_string(),
        }
    }
}

/// Conversion from HavenError to ExError
///
/// Lets domain errors flow through the canonical facility (and the
/// `log_op_error!` macro) without losing their classification.
impl From<HavenError> for ExError {
    fn from(err: HavenError) -> Self {
        match err {
            HavenError::ParseUnavailable { side } => ExError::new(ExErrorKind::ParseUnavailable)
                .with_op("compare")
                .with_message(format!("{} tree is absent", side)),

            HavenError::DocumentParse { source_id, message } => {
                ExError::new(ExErrorKind::InvalidDocument)
                    .with_op("parse_document")
                    .with_path(source_id)
                    .with_message(message)
            }

            HavenError::InvalidCatalog { reason } => {
                ExError::new(ExErrorKind::InvalidCatalog).with_message(reason)
            }

            HavenError::SourceMissing { path } => ExError::new(ExErrorKind::SourceMissing)
                .with_op("create_backup")
                .with_path(path)
                .with_message("Source directory does not exist"),

            HavenError::ArchiveMissing { path } => ExError::new(ExErrorKind::ArchiveMissing)
                .with_op("restore")
                .with_path(path)
                .with_message("Archive does not exist"),

            HavenError::ArchiveWrite { path, message } => ExError::new(ExErrorKind::ArchiveWrite)
                .with_op("create_backup")
                .with_path(path)
                .with_message(message),

            HavenError::Extract { path, message } => ExError::new(ExErrorKind::Extract)
                .with_op("restore")
                .with_path(path)
                .with_message(message),

            HavenError::Delete { path, message } => ExError::new(ExErrorKind::Delete)
                .with_op("prune")
                .with_path(path)
                .with_message(message),

            HavenError::InvalidConfig { reason } => ExError::new(ExErrorKind::InvalidConfig)
                .with_message(format!("Invalid configuration: {}", reason)),

            HavenError::Io { op, message } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_message(message),

            HavenError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            HavenError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to HavenError
impl From<serde_json::Error> for HavenError {
    fn from(err: serde_json::Error) -> Self {
        HavenError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HavenError {
    fn from(err: toml::de::Error) -> Self {
        HavenError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for HavenError {
    fn from(err: toml::ser::Error) -> Self {
        HavenError::Serialization {
            message: err.to_string(),
        }
    }
}
