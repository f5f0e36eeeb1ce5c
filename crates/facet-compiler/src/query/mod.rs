//! Elasticsearch query compilation.
//!
//! Translates a normalized option set into Elasticsearch Query DSL.

pub mod builder;
pub mod dimension;
pub mod handlers;

pub use builder::SearchCompiler;
pub use dimension::Dimension;
