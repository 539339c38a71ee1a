//! JSON response rendering.
//!
//! A [`ResponseRenderer`] accumulates a payload, headers, domain [`Error`]s and an
//! explicit status code, then writes exactly one JSON response. Use [`render`] with a
//! list of [`RenderOption`]s rather than driving the renderer by hand.
//!
//! # Status code resolution
//!
//! 1. The first error (in sequence order) carrying a status code gives the error code.
//! 2. A server error code (5xx) always wins, even over an explicit status code.
//! 3. Otherwise an explicit status code wins.
//! 4. Otherwise the error code, if any.
//! 5. Otherwise `200 OK`.
//!
//! Server errors are inserted at the front of the error sequence, everything else at the
//! back, so a server error is always the one found first.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use httpjson_core::{Error, StatusCode, options, render};
//!
//! let mut response = http::Response::new(Bytes::new());
//! render(
//!     &mut response,
//!     [
//!         options::indent("", ""),
//!         options::status_code(StatusCode::CREATED),
//!         options::errors([Error::new("db.down").with_status(StatusCode::SERVICE_UNAVAILABLE)]),
//!     ],
//! );
//!
//! assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
//! assert_eq!(response.body().as_ref(), b"{\"errors\":[{\"id\":\"db.down\"}]}\n");
//! ```

use std::collections::VecDeque;

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use http::{HeaderMap, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{DEFAULT_INDENT, RenderConfig};
use crate::writer::{ResponseWriter, write_plain_text};
use crate::{ContentType, Error, RenderError, RenderOption, to_json};

const ENCODE_FAILURE: &str = "json encode error";

/// Render a JSON response with the default configuration.
///
/// Defaults are an empty prefix and a two-space indentation unit; options are applied
/// in order before the response is written.
pub fn render<W, I>(writer: &mut W, options: I)
where
    W: ResponseWriter + ?Sized,
    I: IntoIterator<Item = RenderOption>,
{
    ResponseRenderer::new().with_options(options).render(writer);
}

/// Render a JSON response using `config` as defaults.
pub fn render_with<W, I>(config: &RenderConfig, writer: &mut W, options: I)
where
    W: ResponseWriter + ?Sized,
    I: IntoIterator<Item = RenderOption>,
{
    ResponseRenderer::from_config(config)
        .with_options(options)
        .render(writer);
}

/// Accumulator for exactly one outgoing JSON response.
#[derive(Debug)]
pub struct ResponseRenderer {
    prefix: String,
    indent: String,
    status_code: Option<StatusCode>,
    headers: Option<HeaderMap>,
    errors: VecDeque<Error>,
    data: Option<Result<Value, serde_json::Error>>,
}

impl Default for ResponseRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct Envelope<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a VecDeque<Error>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
}

impl ResponseRenderer {
    /// Creates an empty renderer with an empty prefix and a two-space indentation unit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: String::new(),
            indent: DEFAULT_INDENT.to_string(),
            status_code: None,
            headers: None,
            errors: VecDeque::new(),
            data: None,
        }
    }

    /// Creates an empty renderer with the indentation from `config`.
    #[must_use]
    pub fn from_config(config: &RenderConfig) -> Self {
        let mut renderer = Self::new();
        renderer.set_indent(config.prefix.clone(), config.indent.clone());
        renderer
    }

    /// Applies each option in order.
    #[must_use]
    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = RenderOption>,
    {
        for option in options {
            option.apply(&mut self);
        }
        self
    }

    /// Sets the pretty-printing prefix and indentation unit.
    pub fn set_indent(&mut self, prefix: impl Into<String>, indent: impl Into<String>) {
        self.prefix = prefix.into();
        self.indent = indent.into();
    }

    /// Sets the explicit status code.
    pub fn set_status_code(&mut self, status_code: StatusCode) {
        self.status_code = Some(status_code);
    }

    /// Sets the payload, replacing any previous one.
    ///
    /// A JSON `null` payload is treated as absent.
    pub fn set_data(&mut self, data: Result<Value, serde_json::Error>) {
        self.data = Some(data);
    }

    /// Appends a header value. `Content-Type` is owned by the renderer and ignored here.
    pub fn add_header(&mut self, name: HeaderName, value: HeaderValue) {
        if name == CONTENT_TYPE {
            debug!("ignoring caller supplied Content-Type header");
            return;
        }
        self.headers
            .get_or_insert_with(HeaderMap::new)
            .append(name, value);
    }

    /// Adds a domain error: server errors go to the front of the sequence, all others
    /// to the back.
    pub fn include_error(&mut self, error: Error) {
        if error.is_server_error() {
            self.errors.push_front(error);
        } else {
            self.errors.push_back(error);
        }
    }

    /// Adds several domain errors, in order.
    pub fn include_errors<I>(&mut self, errors: I)
    where
        I: IntoIterator<Item = Error>,
    {
        for error in errors {
            self.include_error(error);
        }
    }

    /// Accumulated errors, in resolution order.
    pub fn errors(&self) -> impl ExactSizeIterator<Item = &Error> {
        self.errors.iter()
    }

    /// Accumulated headers, `None` until a header was added.
    #[must_use]
    pub const fn headers(&self) -> Option<&HeaderMap> {
        self.headers.as_ref()
    }

    /// Explicit status code, if set.
    #[must_use]
    pub const fn explicit_status_code(&self) -> Option<StatusCode> {
        self.status_code
    }

    /// Status code of the first error carrying one.
    #[must_use]
    pub fn error_status_code(&self) -> Option<StatusCode> {
        self.errors.iter().find_map(Error::status_code)
    }

    /// Resolves the status code written with the response.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let error_code = self.error_status_code();
        if let Some(code) = error_code.filter(|code| *code >= StatusCode::INTERNAL_SERVER_ERROR) {
            return code;
        }
        // An explicit status code also wins over non-server error codes.
        if let Some(code) = self.status_code {
            return code;
        }
        error_code.unwrap_or(StatusCode::OK)
    }

    fn encode_body(&mut self) -> Result<Bytes, RenderError> {
        let data = self.data.take().transpose()?;
        let envelope = Envelope {
            errors: (!self.errors.is_empty()).then_some(&self.errors),
            data: data.as_ref().filter(|value| !value.is_null()),
        };
        to_json(&envelope, &self.prefix, &self.indent)
    }

    /// Serializes the response and writes it.
    ///
    /// On success the accumulated headers are appended to the writer's headers,
    /// `Content-Type` is forced to `application/json; charset=utf-8`, then the resolved
    /// status and the body are written. If the payload has no JSON representation,
    /// nothing of the JSON body is written: the response becomes a plain-text
    /// `500 Internal Server Error`.
    pub fn render<W: ResponseWriter + ?Sized>(mut self, writer: &mut W) {
        let body = match self.encode_body() {
            Ok(body) => body,
            Err(err) => {
                warn!(error = %err, "failed to encode JSON response");
                write_plain_text(writer, StatusCode::INTERNAL_SERVER_ERROR, ENCODE_FAILURE);
                return;
            }
        };

        let status = self.status_code();
        let headers = writer.headers_mut();
        if let Some(extra) = self.headers.take() {
            for (name, value) in &extra {
                headers.append(name.clone(), value.clone());
            }
        }
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(ContentType::Json.as_header_str()),
        );

        debug!(status = status.as_u16(), errors = self.errors.len(), "rendering JSON response");
        writer.write_status(status);
        writer.write_body(body);
    }
}
