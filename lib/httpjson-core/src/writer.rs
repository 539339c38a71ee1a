//! Response writing.
//!
//! [`ResponseWriter`] is the outbound half of an HTTP exchange: headers, a status line,
//! and a body. The host server supplies it; [`http::Response<Bytes>`] implements it so a
//! handler can render straight into a response value.

use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderValue, X_CONTENT_TYPE_OPTIONS};
use http::{HeaderMap, StatusCode};

use crate::ContentType;

/// Outbound side of an HTTP exchange.
///
/// Headers are mutable until [`write_status`](Self::write_status) is called; the body is
/// written once, after the status.
pub trait ResponseWriter {
    /// Mutable access to the response headers.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    /// Write the status line.
    fn write_status(&mut self, status: StatusCode);

    /// Write the response body.
    fn write_body(&mut self, body: Bytes);
}

impl ResponseWriter for http::Response<Bytes> {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        http::Response::headers_mut(self)
    }

    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, body: Bytes) {
        *self.body_mut() = body;
    }
}

impl<W: ResponseWriter + ?Sized> ResponseWriter for &mut W {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        (**self).headers_mut()
    }

    fn write_status(&mut self, status: StatusCode) {
        (**self).write_status(status);
    }

    fn write_body(&mut self, body: Bytes) {
        (**self).write_body(body);
    }
}

/// Write a plain-text failure response.
///
/// Sets `Content-Type: text/plain; charset=utf-8` and `X-Content-Type-Options: nosniff`,
/// drops any `Content-Length`, then writes `status` and `message` followed by a newline.
/// Other headers already present on the writer are kept.
pub fn write_plain_text<W: ResponseWriter + ?Sized>(
    writer: &mut W,
    status: StatusCode,
    message: &str,
) {
    let headers = writer.headers_mut();
    headers.remove(CONTENT_LENGTH);
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static(ContentType::PlainText.as_header_str()),
    );
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));

    writer.write_status(status);

    let mut body = String::with_capacity(message.len() + 1);
    body.push_str(message);
    body.push('\n');
    writer.write_body(Bytes::from(body));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_implements_writer() {
        let mut response = http::Response::new(Bytes::new());

        response
            .headers_mut()
            .insert("x-request-id", HeaderValue::from_static("abc"));
        response.write_status(StatusCode::CREATED);
        response.write_body(Bytes::from_static(b"done"));

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()["x-request-id"], "abc");
        assert_eq!(response.body().as_ref(), b"done");
    }

    #[test]
    fn plain_text_response() {
        let mut response = http::Response::new(Bytes::new());
        response
            .headers_mut()
            .insert(CONTENT_LENGTH, HeaderValue::from_static("42"));
        response
            .headers_mut()
            .insert("x-trace", HeaderValue::from_static("kept"));

        write_plain_text(&mut response, StatusCode::BAD_REQUEST, "Bad Request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[CONTENT_TYPE], "text/plain; charset=utf-8");
        assert_eq!(response.headers()[X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert!(response.headers().get(CONTENT_LENGTH).is_none());
        assert_eq!(response.headers()["x-trace"], "kept");
        assert_eq!(response.body().as_ref(), b"Bad Request\n");
    }

    #[test]
    fn writer_through_mutable_reference() {
        fn write_accepted<W: ResponseWriter>(mut writer: W) {
            writer.write_status(StatusCode::ACCEPTED);
            writer.write_body(Bytes::from_static(b"ok"));
        }

        let mut response = http::Response::new(Bytes::new());
        write_accepted(&mut response);

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(response.body().as_ref(), b"ok");
    }
}
