//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use httpjson::prelude::*;
//! ```

pub use crate::{
    BindError, Error, JsonHandler, RenderConfig, RenderOption, ResponseWriter, StatusCode, bind,
    handler_fn, header, options, render, render_with, try_bind,
};
pub use serde::{Deserialize, Serialize};
