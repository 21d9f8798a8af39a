use std::error::Error as StdError;
use std::fmt;

/// Classification of the failures surfaced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidChannelKey,
    InvalidToken,
    InvalidResponse,
    InvalidArgument,
}

impl ErrorKind {
    /// Numeric status associated with the kind, if any.
    ///
    /// Argument errors have no fixed status and map to a generic bad request.
    pub fn status(self) -> Option<u16> {
        match self {
            Self::InvalidChannelKey | Self::InvalidToken => Some(403),
            Self::InvalidResponse => Some(500),
            Self::InvalidArgument => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidChannelKey => "InvalidChannelKey",
            Self::InvalidToken => "InvalidToken",
            Self::InvalidResponse => "InvalidResponse",
            Self::InvalidArgument => "InvalidArgument",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`crate::GatewayClient`].
///
/// Credential and argument errors are raised before any request leaves the
/// process. Response errors carry the human-readable message decoded from the
/// gateway `respCode`.
pub enum GatewayError {
    /// Channel key missing or empty.
    #[error("{0}")]
    InvalidChannelKey(String),

    /// Session token missing or empty.
    #[error("{0}")]
    InvalidToken(String),

    /// The gateway answered with a known failure `respCode`.
    #[error("{message}")]
    InvalidResponse { code: String, message: String },

    /// A required field is missing or a supplied field has the wrong type.
    #[error("{0}")]
    InvalidArgument(String),

    /// An error of the given kind was constructed without a message.
    #[error("Unknown {kind} error")]
    EmptyMessage { kind: ErrorKind },

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Request body could not be encoded.
    #[error("encode error: {0}")]
    Encode(#[source] Box<dyn StdError + Send + Sync>),

    /// Response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl GatewayError {
    /// Build an error of `kind` carrying `message`.
    ///
    /// An empty message yields [`GatewayError::EmptyMessage`] instead.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            return Self::EmptyMessage { kind };
        }
        match kind {
            ErrorKind::InvalidChannelKey => Self::InvalidChannelKey(message),
            ErrorKind::InvalidToken => Self::InvalidToken(message),
            ErrorKind::InvalidArgument => Self::InvalidArgument(message),
            ErrorKind::InvalidResponse => Self::InvalidResponse {
                code: String::new(),
                message,
            },
        }
    }

    /// Build an [`GatewayError::InvalidResponse`] for a gateway `respCode`.
    pub fn invalid_response(code: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            return Self::EmptyMessage {
                kind: ErrorKind::InvalidResponse,
            };
        }
        Self::InvalidResponse {
            code: code.into(),
            message,
        }
    }

    /// Kind of a taxonomy error; `None` for transport, codec and config failures.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::InvalidChannelKey(_) => Some(ErrorKind::InvalidChannelKey),
            Self::InvalidToken(_) => Some(ErrorKind::InvalidToken),
            Self::InvalidResponse { .. } => Some(ErrorKind::InvalidResponse),
            Self::InvalidArgument(_) => Some(ErrorKind::InvalidArgument),
            Self::EmptyMessage { kind } => Some(*kind),
            Self::Transport(_) | Self::Encode(_) | Self::Parse(_) | Self::InvalidBaseUrl(_) => {
                None
            }
        }
    }

    /// Numeric status: 403 for credential errors, 500 for response errors.
    pub fn status(&self) -> Option<u16> {
        self.kind().and_then(ErrorKind::status)
    }

    /// Whether the caller supplied bad input.
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
