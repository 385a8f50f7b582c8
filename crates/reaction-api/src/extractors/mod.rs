//! Axum extractors for request handling
//!
//! Custom extractors for path parameters and JSON bodies.

mod json;
mod path;

pub use json::JsonBody;
pub use path::PostIdPath;
