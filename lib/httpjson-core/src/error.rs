//! Error types for httpjson.
//!
//! - [`Error`] is the domain error value rendered into the `errors` array of a response.
//! - [`BindError`] and [`RenderError`] are transport-level failures of the binder and renderer.

use derive_more::{Display, Error as DeriveError, From};
use http::StatusCode;
use serde::Serialize;

const NOT_IMPLEMENTED: &str = "return value not necessary, just implementing a marker interface";

// ============================================================================
// Domain Error
// ============================================================================

/// One domain failure surfaced to a client.
///
/// Serializes as `{"id": ..., "message": ..., "fields": [...]}`, where `message` and
/// `fields` are omitted when empty. The status code is transport metadata and is never
/// serialized.
///
/// `Error` implements [`std::error::Error`] so it can be boxed or propagated with `?`,
/// but formatting it with [`Display`](std::fmt::Display) panics: an `Error` has to reach
/// the client through the renderer, never as a generic error string.
///
/// # Example
///
/// ```
/// use httpjson_core::{Error, StatusCode};
///
/// let error = Error::new("email.invalid")
///     .with_status(StatusCode::UNPROCESSABLE_ENTITY)
///     .with_message("email address is malformed")
///     .with_field("email");
///
/// assert_eq!(error.status_code(), Some(StatusCode::UNPROCESSABLE_ENTITY));
/// assert_eq!(error.id(), "email.invalid");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Error {
    #[serde(skip)]
    status_code: Option<StatusCode>,
    id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<String>,
}

impl Error {
    /// Creates an error with the given identifier and no status code.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            status_code: None,
            id: id.into(),
            message: String::new(),
            fields: Vec::new(),
        }
    }

    /// Sets the status code.
    #[must_use]
    pub fn with_status(mut self, status_code: StatusCode) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Sets the human-readable message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Appends one field name.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Appends several field names, in order. Duplicates are kept.
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Status code, `None` when the error carries no preference.
    #[must_use]
    pub const fn status_code(&self) -> Option<StatusCode> {
        self.status_code
    }

    /// Machine-readable identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable message, empty when absent.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Field names this error pertains to.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Returns `true` if the status code is a server error (5xx and above).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code
            .is_some_and(|status| status >= StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        panic!("{NOT_IMPLEMENTED}")
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Transport Errors
// ============================================================================

/// Failure to bind a request body into a model.
#[derive(Debug, Display, DeriveError)]
pub enum BindError {
    /// The request does not declare a JSON content type.
    #[display("json content-type required")]
    UnsupportedMediaType,

    /// The body is not a valid JSON document for the target model.
    #[display("json decode failure: [{message}]")]
    Decode {
        /// JSON path to the failing value (e.g. `user.address.city`), `.` for the root.
        path: String,
        /// Decoder message.
        message: String,
    },
}

impl BindError {
    /// Create a decode error with path context.
    #[must_use]
    pub fn decode(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Status code written for this failure.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Decode { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

/// Failure to serialize a response body.
#[derive(Debug, Display, DeriveError, From)]
pub enum RenderError {
    /// The payload has no JSON representation.
    #[display("JSON serialization error: {_0}")]
    Json(serde_json::Error),
}
