//! Core types for rendering JSON HTTP responses and binding JSON requests.
//!
//! This crate provides the foundational pieces used by httpjson:
//! - [`render`] and [`ResponseRenderer`] - Turn a payload and domain errors into one JSON response
//! - [`options`] and [`RenderOption`] - Composable render configuration
//! - [`Error`] - Domain error value rendered in the `errors` array
//! - [`bind()`] and [`try_bind`] - Decode JSON request bodies with content-type validation
//! - [`ResponseWriter`] - Outbound side of an HTTP exchange
//! - [`RenderConfig`] - Renderer defaults
//! - [`path`] - Path segment helpers
//! - [`StatusCode`] - HTTP status codes (re-exported from `http` crate)
//! - [`header`] - HTTP header names (re-exported from `http` crate)
//!
//! # Response body
//!
//! ```text
//! {"errors": [{"id": "...", "message": "...", "fields": ["..."]}], "data": ...}
//! ```
//!
//! Both members are optional; the body is `{}` when neither is present and always ends
//! with a newline.

mod bind;
mod body;
mod config;
mod error;
pub mod options;
pub mod path;
pub mod prelude;
mod renderer;
mod writer;

pub use bind::{bind, has_json_content_type, try_bind};
pub use body::{ContentType, IndentFormatter, from_json, to_json};
pub use config::{DEFAULT_INDENT, RenderConfig, RenderConfigBuilder};
pub use error::{BindError, Error, RenderError};
pub use options::RenderOption;
pub use renderer::{ResponseRenderer, render, render_with};
pub use writer::{ResponseWriter, write_plain_text};

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
