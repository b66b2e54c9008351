use chanwatch_core_types::RequestId;
use thiserror::Error;

use crate::model::StoreKind;

/// Result type alias using the canonical ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that transports and tests can
/// match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Empty keyword, empty trigger, or a command with no arguments
    InvalidArgument,
    NotFound,
    Io,
    Serialization,
    /// A keyword file could not be replaced; the cause is attached as source
    Persistence,
    Configuration,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Configuration => "ERR_CONFIGURATION",
        }
    }

    /// Whether the failure came from durable storage rather than the caller
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            ExErrorKind::Io | ExErrorKind::Serialization | ExErrorKind::Persistence
        )
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    store: Option<StoreKind>,
    keyword: Option<String>,
    path: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            store: None,
            keyword: None,
            path: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add store context
    pub fn with_store(mut self, store: StoreKind) -> Self {
        self.store = Some(store);
        self
    }

    /// Add keyword context
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
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

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn store(&self) -> Option<StoreKind> {
        self.store
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

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
        if let Some(store) = self.store {
            write!(f, " (store: {})", store)?;
        }
        if let Some(keyword) = &self.keyword {
            write!(f, " (keyword: {})", keyword)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
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

/// Domain failures raised by the keyword model and the monitor
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChanwatchError {
    /// Keyword is empty or whitespace-only
    #[error("Keyword cannot be empty")]
    EmptyKeyword,

    /// A trigger value is the empty string (it would match every post)
    #[error("Empty trigger for keyword {keyword}: it would match every post")]
    EmptyTrigger { keyword: String },

    /// An add command arrived without any arguments
    #[error("No keyword given for the {store} store")]
    MissingKeyword { store: StoreKind },

    /// Store selector that is neither `primary` nor `secondary`
    #[error("Unknown store: {name}")]
    UnknownStore { name: String },

    /// Replacing a store's keyword file failed
    #[error("Failed to write {store} store to {path}: {message}")]
    StoreWrite {
        store: StoreKind,
        path: String,
        message: String,
    },

    /// A keyword file could not be decoded or encoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Configuration could not be read or parsed
    #[error("Invalid configuration in {path}: {message}")]
    Config { path: String, message: String },
}

impl From<ChanwatchError> for ExError {
    fn from(err: ChanwatchError) -> Self {
        match err {
            ChanwatchError::EmptyKeyword => ExError::new(ExErrorKind::InvalidArgument)
                .with_op("add_keyword")
                .with_message("Keyword cannot be empty"),

            ChanwatchError::EmptyTrigger { keyword } => {
                ExError::new(ExErrorKind::InvalidArgument)
                    .with_op("add_keyword")
                    .with_keyword(keyword)
                    .with_message("Trigger values cannot be empty strings")
            }

            ChanwatchError::MissingKeyword { store } => {
                ExError::new(ExErrorKind::InvalidArgument)
                    .with_op("add_keyword")
                    .with_store(store)
                    .with_message("No keyword given")
            }

            ChanwatchError::UnknownStore { name } => ExError::new(ExErrorKind::InvalidArgument)
                .with_op("select_store")
                .with_message(format!("Unknown store '{}'", name)),

            ChanwatchError::StoreWrite {
                store,
                path,
                message,
            } => ExError::new(ExErrorKind::Persistence)
                .with_op("store_save")
                .with_store(store)
                .with_path(path)
                .with_message(message),

            ChanwatchError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }

            ChanwatchError::Config { path, message } => {
                ExError::new(ExErrorKind::Configuration)
                    .with_op("load_config")
                    .with_path(path)
                    .with_message(message)
            }
        }
    }
}
