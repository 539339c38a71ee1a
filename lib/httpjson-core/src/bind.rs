//! JSON request binding.
//!
//! [`bind`] validates that a request declares a JSON content type, then decodes its body
//! into a model. Failures are answered with a plain-text response, since they happen
//! before any JSON rendering context exists.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use httpjson_core::bind;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct CreateUser {
//!     name: String,
//! }
//!
//! let request = http::Request::builder()
//!     .method("POST")
//!     .header("Content-Type", "application/json")
//!     .body(Bytes::from_static(br#"{"name":"Alice"}"#))
//!     .expect("valid request");
//! let mut response = http::Response::new(Bytes::new());
//!
//! let mut model = CreateUser::default();
//! assert!(bind(&mut response, &request, &mut model));
//! assert_eq!(model.name, "Alice");
//! ```

use http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::writer::{ResponseWriter, write_plain_text};
use crate::{BindError, from_json};

/// Returns `true` if the request declares a JSON content type.
///
/// Any `Content-Type` containing `json` qualifies (`application/json`,
/// `application/problem+json`, ...). The header is matched as raw bytes, so non-ASCII
/// parameters do not disqualify it. A missing header does not qualify.
#[must_use]
pub fn has_json_content_type<B>(request: &http::Request<B>) -> bool {
    request
        .headers()
        .get(CONTENT_TYPE)
        .is_some_and(|value| value.as_bytes().windows(4).any(|window| window == b"json"))
}

/// Decode the body of a JSON request.
///
/// # Errors
///
/// - [`BindError::UnsupportedMediaType`] if the request has no JSON content type;
/// - [`BindError::Decode`] if the body is not a valid JSON document for `T`.
pub fn try_bind<T, B>(request: &http::Request<B>) -> Result<T, BindError>
where
    T: DeserializeOwned,
    B: AsRef<[u8]>,
{
    if !has_json_content_type(request) {
        return Err(BindError::UnsupportedMediaType);
    }
    from_json(request.body().as_ref())
}

/// Bind the body of a JSON request into `model`.
///
/// Returns `true` and replaces `model` on success. On failure `model` is left untouched,
/// a plain-text response is written to `writer` and `false` is returned:
///
/// - `415 Unsupported Media Type (json content-type required)` without a JSON content type;
/// - `400 Bad Request (json decode failure: [...])` when the body does not decode.
pub fn bind<W, B, T>(writer: &mut W, request: &http::Request<B>, model: &mut T) -> bool
where
    W: ResponseWriter + ?Sized,
    B: AsRef<[u8]>,
    T: DeserializeOwned,
{
    match try_bind(request) {
        Ok(value) => {
            *model = value;
            true
        }
        Err(err) => {
            let status = err.status();
            debug!(status = status.as_u16(), error = %err, "failed to bind JSON request");
            let reason = status.canonical_reason().unwrap_or_default();
            write_plain_text(writer, status, &format!("{reason} ({err})"));
            false
        }
    }
}
