//! Render JSON HTTP responses and bind JSON requests.
//!
//! A handler binds its input with [`bind()`], then describes its response as a list of
//! [`options`] passed to [`render`]. The status code is derived from the attached domain
//! [`Error`]s and the explicit status code:
//! server errors (5xx) > explicit status code > other error codes > `200 OK`.
//!
//! # Example
//!
//! ```ignore
//! use httpjson::prelude::*;
//!
//! #[derive(Debug, Default, Deserialize)]
//! struct CreateUser {
//!     name: String,
//! }
//!
//! let service = handler_fn(|request, response| {
//!     let mut input = CreateUser::default();
//!     if !bind(response, request, &mut input) {
//!         return;
//!     }
//!
//!     if input.name.is_empty() {
//!         let error = Error::new("name.required")
//!             .with_status(StatusCode::UNPROCESSABLE_ENTITY)
//!             .with_field("name");
//!         render(response, [options::errors([error])]);
//!         return;
//!     }
//!
//!     render(
//!         response,
//!         [
//!             options::status_code(StatusCode::CREATED),
//!             options::header("Location", ["/users/42"]),
//!             options::data(serde_json::json!({"id": 42, "name": input.name})),
//!         ],
//!     );
//! });
//! ```

mod handler;
pub mod prelude;

pub use handler::{HandlerFuture, JsonHandler, handler_fn};

// Re-export tower for service composition
pub use tower;

// Re-export core types
pub use httpjson_core::{
    BindError, ContentType, DEFAULT_INDENT, Error, IndentFormatter, RenderConfig,
    RenderConfigBuilder, RenderError, RenderOption, ResponseRenderer, ResponseWriter, bind,
    from_json, has_json_content_type, options, path, render, render_with, to_json, try_bind,
    write_plain_text,
};

// Re-export http types for status codes and headers
pub use httpjson_core::{StatusCode, header};
