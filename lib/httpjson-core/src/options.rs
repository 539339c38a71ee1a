//! Render options.
//!
//! Each function returns a [`RenderOption`]: a deferred mutation of a
//! [`ResponseRenderer`]. Options are applied in the order given to
//! [`render`](crate::render). Single-valued settings (indentation, status code, payload)
//! are last-wins; errors and headers accumulate.
//!
//! Custom options are written with [`RenderOption::new`]:
//!
//! ```
//! use httpjson_core::{RenderOption, StatusCode};
//!
//! fn accepted() -> RenderOption {
//!     RenderOption::new(|renderer| renderer.set_status_code(StatusCode::ACCEPTED))
//! }
//! ```

use http::header::{HeaderName, HeaderValue};
use http::StatusCode;
use serde::Serialize;
use tracing::warn;

use crate::body::ensure_finite;
use crate::{Error, ResponseRenderer};

/// A deferred mutation of a [`ResponseRenderer`].
#[must_use = "options do nothing unless passed to `render`"]
pub struct RenderOption(Box<dyn FnOnce(&mut ResponseRenderer) + Send>);

impl RenderOption {
    /// Wraps a closure as an option.
    pub fn new<F>(option: F) -> Self
    where
        F: FnOnce(&mut ResponseRenderer) + Send + 'static,
    {
        Self(Box::new(option))
    }

    /// Applies this option to `renderer`.
    pub fn apply(self, renderer: &mut ResponseRenderer) {
        (self.0)(renderer);
    }
}

impl std::fmt::Debug for RenderOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderOption").finish_non_exhaustive()
    }
}

/// Sets the pretty-printing prefix and indentation unit.
///
/// Both empty means compact output.
pub fn indent(prefix: impl Into<String>, unit: impl Into<String>) -> RenderOption {
    let prefix = prefix.into();
    let unit = unit.into();
    RenderOption::new(move |renderer| renderer.set_indent(prefix, unit))
}

/// Sets the explicit status code.
///
/// A server error carried by one of the rendered errors still takes precedence.
pub fn status_code(code: StatusCode) -> RenderOption {
    RenderOption::new(move |renderer| renderer.set_status_code(code))
}

/// Appends `values` under the header `key`.
///
/// `Content-Type` (in any case) is silently dropped: the renderer always sets it.
/// Names or values that are not valid HTTP header tokens are dropped with a warning.
pub fn header<K, I, V>(key: K, values: I) -> RenderOption
where
    K: AsRef<str>,
    I: IntoIterator<Item = V>,
    V: AsRef<str>,
{
    let key = key.as_ref();
    let Ok(name) = HeaderName::from_bytes(key.as_bytes()) else {
        warn!(header = key, "dropping header with invalid name");
        return RenderOption::new(|_| {});
    };

    let values: Vec<HeaderValue> = values
        .into_iter()
        .filter_map(|value| {
            let value = value.as_ref();
            HeaderValue::from_str(value)
                .inspect_err(|_| warn!(header = %name, value, "dropping invalid header value"))
                .ok()
        })
        .collect();

    RenderOption::new(move |renderer| {
        for value in values {
            renderer.add_header(name.clone(), value);
        }
    })
}

/// Sets the response payload.
///
/// The payload is converted to JSON right away; if it has no JSON representation (a
/// failing `Serialize` impl, a NaN or infinite float) the rendered response is a
/// plain-text `500 Internal Server Error`, unless a later `data` option replaces it.
pub fn data<T: Serialize>(payload: T) -> RenderOption {
    let value = ensure_finite(&payload).and_then(|()| serde_json::to_value(payload));
    RenderOption::new(move |renderer| renderer.set_data(value))
}

/// Adds domain errors, in order.
pub fn errors<I>(errors: I) -> RenderOption
where
    I: IntoIterator<Item = Error>,
{
    let errors: Vec<Error> = errors.into_iter().collect();
    RenderOption::new(move |renderer| renderer.include_errors(errors))
}

/// Maps each failure to a domain error with `mapper`, in order, then adds them.
///
/// # Example
///
/// ```
/// use httpjson_core::{Error, StatusCode, options};
///
/// #[derive(Debug)]
/// enum StoreError {
///     NotFound(u64),
///     Unavailable,
/// }
///
/// fn to_error(err: StoreError) -> Error {
///     match err {
///         StoreError::NotFound(id) => Error::new("item.not_found")
///             .with_status(StatusCode::NOT_FOUND)
///             .with_message(format!("no item {id}")),
///         StoreError::Unavailable => {
///             Error::new("store.unavailable").with_status(StatusCode::SERVICE_UNAVAILABLE)
///         }
///     }
/// }
///
/// let option = options::mapped_errors(to_error, [StoreError::NotFound(7), StoreError::Unavailable]);
/// ```
pub fn mapped_errors<E, F, I>(mapper: F, failures: I) -> RenderOption
where
    F: FnMut(E) -> Error,
    I: IntoIterator<Item = E>,
{
    errors(failures.into_iter().map(mapper))
}

#[cfg(test)]
mod tests {
    use http::header::CONTENT_TYPE;

    use super::*;

    fn apply(options: Vec<RenderOption>) -> ResponseRenderer {
        ResponseRenderer::new().with_options(options)
    }

    fn map_error(text: &str) -> Error {
        let parsed = text.parse::<u16>().ok().and_then(|code| StatusCode::from_u16(code).ok());
        let error = Error::new(format!("i:{text}"))
            .with_message(format!("m:{text}"))
            .with_fields([format!("f:{text}"), format!("f:{text}")]);
        match parsed {
            Some(status) => error.with_status(status),
            None => error,
        }
    }

    #[test]
    fn status_code_last_wins() {
        let renderer = apply(vec![
            status_code(StatusCode::CREATED),
            status_code(StatusCode::IM_A_TEAPOT),
        ]);

        assert_eq!(renderer.explicit_status_code(), Some(StatusCode::IM_A_TEAPOT));
        assert_eq!(renderer.status_code(), StatusCode::IM_A_TEAPOT);
    }

    #[test]
    fn header_accumulates_values() {
        let renderer = apply(vec![
            header("key", ["value1", "value2"]),
            header("KEY", ["value3"]),
        ]);

        let headers = renderer.headers().expect("headers populated");
        let values: Vec<_> = headers.get_all("key").iter().collect();
        assert_eq!(values, ["value1", "value2", "value3"]);
    }

    #[test]
    fn header_content_type_is_dropped() {
        for key in ["Content-Type", "content-type", "CONTENT-TYPE"] {
            let renderer = apply(vec![header(key, ["nope"])]);
            assert!(renderer.headers().is_none(), "key {key}");
        }
    }

    #[test]
    fn header_invalid_parts_are_dropped() {
        let renderer = apply(vec![
            header("bad header", ["value"]),
            header("x-good", ["ok", "bad\nvalue"]),
        ]);

        let headers = renderer.headers().expect("headers populated");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["x-good"], "ok");
        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn errors_are_cumulative() {
        let renderer = apply(vec![
            errors([Error::new("a")]),
            status_code(StatusCode::ACCEPTED),
            errors([Error::new("b"), Error::new("c")]),
        ]);

        let ids: Vec<_> = renderer.errors().map(Error::id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn server_error_option_goes_first() {
        let renderer = apply(vec![
            errors([Error::new("client").with_status(StatusCode::BAD_REQUEST)]),
            errors([Error::new("server").with_status(StatusCode::INTERNAL_SERVER_ERROR)]),
        ]);

        let ids: Vec<_> = renderer.errors().map(Error::id).collect();
        assert_eq!(ids, ["server", "client"]);
    }

    #[test]
    fn mapped_errors_in_order() {
        let renderer = apply(vec![mapped_errors(map_error, ["401", "403"])]);

        let ids: Vec<_> = renderer.errors().map(Error::id).collect();
        assert_eq!(ids, ["i:401", "i:403"]);
        assert_eq!(renderer.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn explicit_status_overrides_mapped_errors() {
        let renderer = apply(vec![
            status_code(StatusCode::IM_A_TEAPOT),
            mapped_errors(map_error, ["401", "403"]),
        ]);

        assert_eq!(renderer.status_code(), StatusCode::IM_A_TEAPOT);
    }

    #[test]
    fn mapped_error_serialization() {
        let mut response = http::Response::new(bytes::Bytes::new());
        crate::render(
            &mut response,
            [indent("", ""), mapped_errors(map_error, ["1", "2"])],
        );

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.body().as_ref(),
            concat!(
                r#"{"errors":[{"id":"i:1","message":"m:1","fields":["f:1","f:1"]},"#,
                r#"{"id":"i:2","message":"m:2","fields":["f:2","f:2"]}]}"#,
                "\n"
            )
            .as_bytes()
        );
    }

    #[test]
    fn custom_option() {
        let renderer = apply(vec![RenderOption::new(|renderer| {
            renderer.include_error(Error::new("custom"));
        })]);

        assert_eq!(renderer.errors().len(), 1);
    }

    #[test]
    fn option_debug() {
        assert_eq!(format!("{:?}", status_code(StatusCode::OK)), "RenderOption { .. }");
    }
}
