//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use httpjson_core::prelude::*;
//! ```

pub use crate::{
    BindError, Error, RenderConfig, RenderOption, ResponseRenderer, ResponseWriter, StatusCode,
    bind, options, render, render_with, try_bind,
};
