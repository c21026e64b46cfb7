//! Error types for the Keycloak client.

use std::fmt;
use thiserror::Error;

/// Result type alias for Keycloak operations.
pub type KeycloakResult<T> = Result<T, KeycloakError>;

/// Error kinds for categorizing Keycloak client errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeycloakErrorKind {
    /// Invalid client configuration.
    InvalidConfiguration,
    /// Invalid or missing request parameter.
    InvalidParameter,
    /// Failed to encode query parameters, form data or a request body.
    Encode,
    /// Failed to decode a response body or a flexible JSON field.
    Decode,
    /// Network level failure.
    Transport,
    /// Request timeout.
    Timeout,
    /// Non-2xx response from the server.
    Api,
}

impl fmt::Display for KeycloakErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration => write!(f, "invalid_configuration"),
            Self::InvalidParameter => write!(f, "invalid_parameter"),
            Self::Encode => write!(f, "encode_error"),
            Self::Decode => write!(f, "decode_error"),
            Self::Transport => write!(f, "transport_error"),
            Self::Timeout => write!(f, "timeout"),
            Self::Api => write!(f, "api_error"),
        }
    }
}

/// OAuth2 error codes recognized in error text.
///
/// Classification is a best-effort substring match over unstructured
/// messages produced by the server and the transport. A change in the
/// upstream wording silently yields [`ApiErrorType::Unknown`]; callers that
/// need more should inspect [`KeycloakError::message`] themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorType {
    /// No known error code found.
    Unknown,
    /// `invalid_grant`: bad credentials, expired or revoked refresh token.
    InvalidGrant,
    /// `invalid_client`: client authentication failed.
    InvalidClient,
    /// `unauthorized_client`: the client may not use this grant.
    UnauthorizedClient,
    /// `invalid_scope`: requested scope is invalid or unknown.
    InvalidScope,
}

/// Substrings checked in order; the first match wins.
const API_ERROR_PATTERNS: &[(&str, ApiErrorType)] = &[
    ("invalid_grant", ApiErrorType::InvalidGrant),
    ("invalid_client", ApiErrorType::InvalidClient),
    ("unauthorized_client", ApiErrorType::UnauthorizedClient),
    ("invalid_scope", ApiErrorType::InvalidScope),
];

impl ApiErrorType {
    /// Classifies a message by the OAuth2 error code it mentions.
    pub fn from_message(message: &str) -> Self {
        API_ERROR_PATTERNS
            .iter()
            .find(|(pattern, _)| message.contains(pattern))
            .map(|(_, kind)| *kind)
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::InvalidGrant => write!(f, "oauth: invalid grant"),
            Self::InvalidClient => write!(f, "oauth: invalid client"),
            Self::UnauthorizedClient => write!(f, "oauth: unauthorized client"),
            Self::InvalidScope => write!(f, "oauth: invalid scope"),
        }
    }
}

/// Classifies any error by the OAuth2 error code in its display text.
///
/// `None` yields [`ApiErrorType::Unknown`].
pub fn parse_api_error_type(error: Option<&(dyn std::error::Error + '_)>) -> ApiErrorType {
    match error {
        Some(e) => ApiErrorType::from_message(&e.to_string()),
        None => ApiErrorType::Unknown,
    }
}

/// Keycloak client error with detailed information.
#[derive(Error, Debug)]
pub struct KeycloakError {
    /// Error kind.
    kind: KeycloakErrorKind,
    /// Error message.
    message: String,
    /// HTTP status code.
    status_code: Option<u16>,
    /// Classified OAuth2 error (API errors only).
    api_error_type: Option<ApiErrorType>,
    /// Underlying cause.
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for KeycloakError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {})", code)?;
        }
        Ok(())
    }
}

impl KeycloakError {
    /// Creates a new error.
    pub fn new(kind: KeycloakErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code: None,
            api_error_type: None,
            cause: None,
        }
    }

    /// Creates an API error from a non-2xx response, classifying its message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let api_error_type = ApiErrorType::from_message(&message);
        Self {
            kind: KeycloakErrorKind::Api,
            message,
            status_code: Some(status),
            api_error_type: Some(api_error_type),
            cause: None,
        }
    }

    /// Sets the HTTP status code.
    pub fn with_status(mut self, code: u16) -> Self {
        self.status_code = Some(code);
        self
    }

    /// Sets the underlying cause.
    pub fn with_cause(mut self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Gets the error kind.
    pub fn kind(&self) -> KeycloakErrorKind {
        self.kind
    }

    /// Gets the raw error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Gets the HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Gets the classified OAuth2 error type.
    ///
    /// Always [`ApiErrorType::Unknown`] for errors that did not come from
    /// a server response.
    pub fn api_error_type(&self) -> ApiErrorType {
        self.api_error_type.unwrap_or(ApiErrorType::Unknown)
    }

    /// Returns true for API errors.
    pub fn is_api_error(&self) -> bool {
        self.kind == KeycloakErrorKind::Api
    }

    /// Returns true for transport failures, timeouts included.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self.kind,
            KeycloakErrorKind::Transport | KeycloakErrorKind::Timeout
        )
    }

    /// Returns true if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(404)
    }

    /// Returns true if the server answered 409.
    pub fn is_conflict(&self) -> bool {
        self.status_code == Some(409)
    }

    // Convenience constructors

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(KeycloakErrorKind::InvalidConfiguration, message)
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::new(KeycloakErrorKind::InvalidParameter, message)
    }

    /// Creates an encode error.
    pub fn encode(message: impl Into<String>) -> Self {
        Self::new(KeycloakErrorKind::Encode, message)
    }

    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(KeycloakErrorKind::Decode, message)
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(KeycloakErrorKind::Transport, message)
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(KeycloakErrorKind::Timeout, message)
    }
}

impl From<serde_json::Error> for KeycloakError {
    fn from(e: serde_json::Error) -> Self {
        Self::decode(format!("invalid JSON: {}", e)).with_cause(e)
    }
}
