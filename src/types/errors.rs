use std::fmt;

// === ApiError ===

/// Errors surfaced by the client layer, remote or local.
#[derive(Debug)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    Http { status: u16, message: String },
    /// The request never completed (DNS, connect, timeout).
    Network(String),
    /// A request or response body could not be (de)serialized.
    Serialization(String),
    /// The local storage blob could not be read or written.
    Io(String),
    /// No record with the given id exists.
    NotFound(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Http { status, message } => {
                write!(f, "backend returned {}: {}", status, message)
            }
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Serialization(msg) => write!(f, "serialization error: {}", msg),
            ApiError::Io(msg) => write!(f, "storage I/O error: {}", msg),
            ApiError::NotFound(id) => write!(f, "record not found: {}", id),
        }
    }
}

impl std::error::Error for ApiError {}

// === ValidationError ===

/// Form-level validation failures, raised before any client call.
#[derive(Debug)]
pub enum ValidationError {
    /// A required field is empty after trimming.
    EmptyField(&'static str),
    /// The URL could not be parsed even after scheme normalization.
    InvalidUrl(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyField(field) => write!(f, "'{}' must not be empty", field),
            ValidationError::InvalidUrl(input) => write!(f, "invalid URL: {}", input),
        }
    }
}

impl std::error::Error for ValidationError {}

// === StoreError ===

/// Errors from store mutations: either the draft was rejected or the
/// client call failed.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    Api(ApiError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(e) => write!(f, "{}", e),
            StoreError::Api(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StoreError {}

// === ImportError ===

/// Structural validation failures of an import file.
///
/// Validation stops at the first violation; entry-level variants carry
/// the offending array index.
#[derive(Debug)]
pub enum ImportError {
    /// The file is not JSON at all.
    Parse(String),
    /// The top level or a required collection field has the wrong shape.
    Format(String),
    /// A group entry is missing a non-empty string field.
    Group { index: usize, field: &'static str },
    /// A bookmark entry is missing a non-empty string field.
    Bookmark { index: usize, field: &'static str },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Parse(msg) => write!(f, "import file is not valid JSON: {}", msg),
            ImportError::Format(msg) => write!(f, "invalid import format: {}", msg),
            ImportError::Group { index, field } => {
                write!(f, "group at index {} has a missing or empty '{}'", index, field)
            }
            ImportError::Bookmark { index, field } => {
                write!(f, "bookmark at index {} has a missing or empty '{}'", index, field)
            }
        }
    }
}

impl std::error::Error for ImportError {}

// === ApplyError ===

/// Failures of the import apply step that abort the whole operation.
///
/// Per-record delete/create failures are logged and skipped instead;
/// they never surface here.
#[derive(Debug)]
pub enum ApplyError {
    /// Apply was called without staged, confirmed data.
    NothingStaged,
    /// The post-apply refetch of a collection failed.
    Resync(ApiError),
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::NothingStaged => write!(f, "no staged import to apply"),
            ApplyError::Resync(e) => {
                write!(f, "failed to reload collections after import: {}", e)
            }
        }
    }
}

impl std::error::Error for ApplyError {}

// === ExportError ===

/// Failures while producing an export file.
#[derive(Debug)]
pub enum ExportError {
    /// The payload could not be serialized; no file is written.
    Serialization(String),
    /// The export file could not be created or written.
    Io(String),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Serialization(msg) => write!(f, "export serialization error: {}", msg),
            ExportError::Io(msg) => write!(f, "export I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ExportError {}
