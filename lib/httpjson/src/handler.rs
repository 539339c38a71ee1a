//! Tower service adapter for synchronous JSON handlers.
//!
//! [`JsonHandler`] buffers the request body, then hands the buffered request and an
//! empty response to a closure that typically calls [`bind`](crate::bind) and
//! [`render`](crate::render).

use std::convert::Infallible;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use http::{Request, Response, StatusCode};
use http_body::Body;
use http_body_util::BodyExt;
use tower::Service;
use tracing::debug;

use crate::write_plain_text;

const BODY_READ_FAILURE: &str = "Bad Request (request body read failure)";

/// Future type for the [`JsonHandler`] service.
pub type HandlerFuture =
    Pin<Box<dyn Future<Output = Result<Response<Bytes>, Infallible>> + Send + 'static>>;

/// Service running a synchronous handler on a fully buffered request.
///
/// A request body that fails to read is answered with a plain-text
/// `400 Bad Request` without calling the handler.
///
/// # Example
///
/// ```ignore
/// use httpjson::prelude::*;
///
/// let service = handler_fn(|request, response| {
///     let mut name = String::new();
///     if !bind(response, request, &mut name) {
///         return;
///     }
///     render(response, [options::data(format!("hello {name}"))]);
/// });
/// ```
pub struct JsonHandler<F> {
    handler: Arc<F>,
}

/// Create a [`JsonHandler`] from a closure.
pub fn handler_fn<F>(handler: F) -> JsonHandler<F>
where
    F: Fn(&Request<Bytes>, &mut Response<Bytes>) + Send + Sync + 'static,
{
    JsonHandler {
        handler: Arc::new(handler),
    }
}

impl<F> Clone for JsonHandler<F> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<F> fmt::Debug for JsonHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonHandler").finish_non_exhaustive()
    }
}

impl<F, B> Service<Request<B>> for JsonHandler<F>
where
    F: Fn(&Request<Bytes>, &mut Response<Bytes>) + Send + Sync + 'static,
    B: Body + Send + 'static,
    B::Data: Send,
    B::Error: fmt::Display + Send,
{
    type Response = Response<Bytes>;
    type Error = Infallible;
    type Future = HandlerFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<B>) -> Self::Future {
        let handler = Arc::clone(&self.handler);
        Box::pin(async move {
            let (parts, body) = request.into_parts();
            let mut response = Response::new(Bytes::new());

            match body.collect().await {
                Ok(collected) => {
                    let request = Request::from_parts(parts, collected.to_bytes());
                    (*handler)(&request, &mut response);
                }
                Err(err) => {
                    debug!(error = %err, "failed to read request body");
                    write_plain_text(&mut response, StatusCode::BAD_REQUEST, BODY_READ_FAILURE);
                }
            }

            Ok(response)
        })
    }
}
