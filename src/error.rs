use crate::error_code::ProviderErrorKind;
use crate::transport::TransportError;
use crate::types::message::MessageError;
use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path that caused the error (e.g., "config.temperature", "response.data[2].index")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected range, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "chat", "embeddings", "batching")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A non-success response from the provider, classified into a [`ProviderErrorKind`].
///
/// Carries the HTTP status and the raw response body so nothing the provider
/// said is lost.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error code {status}: {} - {detail}", .kind.summary())]
pub struct ProviderError {
    status: u16,
    detail: String,
    kind: ProviderErrorKind,
}

impl ProviderError {
    /// Classify `(status, detail)` and build the error.
    pub fn new(status: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let kind = ProviderErrorKind::classify(status, &detail);
        Self {
            status,
            detail,
            kind,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn kind(&self) -> ProviderErrorKind {
        self.kind
    }

    pub fn is_retryable(&self) -> bool {
        self.kind.retryable()
    }
}

/// Unified error type for the crate.
///
/// Local validation failures, classified provider responses and transport
/// problems stay in separate variants so callers can tell them apart.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Message conversion error: {0}")]
    Message(#[from] MessageError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Empty result: {message}{}", format_context(.context))]
    EmptyResult {
        message: String,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new empty-result error with structured context
    pub fn empty_result_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::EmptyResult {
            message: msg.into(),
            context,
        }
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::EmptyResult { context, .. }
            | Error::Configuration { context, .. }
            | Error::Validation { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The provider classification, when this error came from a failed response.
    pub fn provider_kind(&self) -> Option<ProviderErrorKind> {
        match self {
            Error::Provider(e) => Some(e.kind()),
            _ => None,
        }
    }
}
